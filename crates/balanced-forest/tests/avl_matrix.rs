use balanced_forest::avl::AvlTree;
use balanced_forest::{InsertOutcome, RemoveOutcome};

fn assert_heights_bounded(tree: &AvlTree<i32>) {
    // An AVL tree with n nodes is at most ~1.44·log2(n + 2) tall.
    let n = tree.len() as f64;
    let bound = (1.4405 * (n + 2.0).log2()).floor() as usize;
    assert!(tree.height() <= bound.max(1), "height {} for {} nodes", tree.height(), tree.len());
}

#[test]
fn avl_rotation_cases_matrix() {
    // left-left, right-right, left-right, right-left
    let cases: [([i32; 3], i32); 4] = [([3, 2, 1], 2), ([1, 2, 3], 2), ([3, 1, 2], 2), ([1, 3, 2], 2)];
    for (keys, root) in cases {
        let mut tree = AvlTree::new();
        for k in keys {
            assert_eq!(tree.insert(k), InsertOutcome::Inserted);
            tree.assert_valid().unwrap();
        }
        let r = tree.root_index().unwrap();
        assert_eq!(*tree.key(r), root, "keys {keys:?}");
        assert_eq!(tree.node(r).h, 2);
        assert_eq!(tree.height(), 2);
    }
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        let _ = tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert_heights_bounded(&tree);

    for i in (0..300).step_by(3) {
        assert_eq!(tree.delete(&i), RemoveOutcome::Removed);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 200);
    assert_heights_bounded(&tree);

    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }
    for i in 0..300 {
        let _ = tree.delete(&i);
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.root_index(), None);
}

#[test]
fn avl_delete_with_level_child_matrix() {
    // Deleting 1 leaves node 2 right-heavy with a level right child (4 with
    // children 3 and 5): a single left rotation must fix it.
    let mut tree = AvlTree::new();
    for k in [2, 1, 4, 3, 5] {
        let _ = tree.insert(k);
    }
    let r = tree.root_index().unwrap();
    assert_eq!(*tree.key(r), 2);
    let right = tree.node(r).r.unwrap();
    let (rl, rr) = (tree.node(right).l.unwrap(), tree.node(right).r.unwrap());
    assert_eq!(tree.node(rl).h, tree.node(rr).h);

    assert!(tree.delete(&1).is_removed());
    tree.assert_valid().unwrap();
    let r = tree.root_index().unwrap();
    assert_eq!(*tree.key(r), 4);
    assert_eq!(tree.node(r).h, 3);
    assert_eq!(tree.keys(), vec![2, 3, 4, 5]);
}

#[test]
fn avl_two_child_delete_uses_successor_matrix() {
    let mut tree = AvlTree::new();
    for k in [50, 30, 70, 20, 40, 60, 80] {
        let _ = tree.insert(k);
    }
    let root = tree.root_index().unwrap();
    assert!(tree.delete(&50).is_removed());
    tree.assert_valid().unwrap();
    // The root slot keeps its handle and now holds the successor.
    assert_eq!(tree.root_index(), Some(root));
    assert_eq!(*tree.key(root), 60);
    assert!(tree.search(&50).is_none());
}

#[test]
fn avl_duplicate_and_absent_matrix() {
    let mut tree = AvlTree::new();
    for k in [5, 3, 8] {
        let _ = tree.insert(k);
    }
    let before = tree.shape();
    assert_eq!(tree.insert(3), InsertOutcome::Duplicate);
    assert_eq!(tree.shape(), before);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.delete(&4), RemoveOutcome::NotFound);
    assert_eq!(tree.shape(), before);
    assert_eq!(AvlTree::<i32>::new().delete(&1), RemoveOutcome::NotFound);
}

#[test]
fn avl_string_keys_matrix() {
    let mut tree = AvlTree::new();
    for k in ["pear", "apple", "fig", "kiwi", "banana"] {
        let _ = tree.insert(k.to_string());
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.keys(), vec!["apple", "banana", "fig", "kiwi", "pear"]);
    let i = tree.search(&"fig".to_string()).unwrap();
    assert_eq!(tree.key(i), "fig");
}

#[test]
fn avl_display_matrix() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.to_string(), "AvlTree ∅");
    for k in [2, 1, 3] {
        let _ = tree.insert(k);
    }
    assert_eq!(tree.to_string(), "AvlTree\n2 [h=2]\n├─ 1 [h=1]\n└─ 3 [h=1]");
}
