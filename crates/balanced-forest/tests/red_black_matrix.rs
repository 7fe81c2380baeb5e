use balanced_forest::red_black::RbTree;
use balanced_forest::{Color, InsertOutcome, RemoveOutcome};

fn assert_no_red_red(tree: &RbTree<i32>) {
    fn walk(tree: &RbTree<i32>, node: Option<u32>, parent_red: bool) {
        let Some(i) = node else {
            return;
        };
        let red = tree.color(i) == Color::Red;
        assert!(!(red && parent_red), "red node {} under red parent", tree.key(i));
        walk(tree, tree.node(i).l, red);
        walk(tree, tree.node(i).r, red);
    }
    walk(tree, tree.root_index(), false);
}

#[test]
fn rb_ascending_scenario_matrix() {
    let mut tree = RbTree::new();
    for k in [10, 20, 30] {
        assert_eq!(tree.insert(k), InsertOutcome::Inserted);
        tree.assert_valid().unwrap();
        assert_no_red_red(&tree);
        assert_eq!(tree.color(tree.root_index().unwrap()), Color::Black);
    }
    let root = tree.root_index().unwrap();
    assert_eq!(*tree.key(root), 20);
    let (l, r) = (tree.node(root).l.unwrap(), tree.node(root).r.unwrap());
    assert_eq!(tree.color(l), Color::Red);
    assert_eq!(tree.color(r), Color::Red);
    assert_eq!(tree.black_height(), 2);
}

#[test]
fn rb_red_uncle_recolor_matrix() {
    let mut tree = RbTree::new();
    for k in [20, 10, 30, 5] {
        let _ = tree.insert(k);
        tree.assert_valid().unwrap();
    }
    // 5 under red 10 with red uncle 30: recolor only, no rotation.
    let root = tree.root_index().unwrap();
    assert_eq!(*tree.key(root), 20);
    let (l, r) = (tree.node(root).l.unwrap(), tree.node(root).r.unwrap());
    assert_eq!(tree.color(l), Color::Black);
    assert_eq!(tree.color(r), Color::Black);
    assert_eq!(tree.black_height(), 3);
}

#[test]
fn rb_inner_child_double_rotation_matrix() {
    for keys in [[30, 10, 20], [10, 30, 20]] {
        let mut tree = RbTree::new();
        for k in keys {
            let _ = tree.insert(k);
            tree.assert_valid().unwrap();
        }
        let root = tree.root_index().unwrap();
        assert_eq!(*tree.key(root), 20, "keys {keys:?}");
        assert_eq!(tree.node(root).p, None);
    }
}

#[test]
fn rb_ladder_insert_delete_matrix() {
    let mut tree = RbTree::new();
    for i in 0..300 {
        let _ = tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.height() <= 2 * 9);

    for i in (0..300).step_by(2) {
        assert_eq!(tree.delete(&i), RemoveOutcome::Removed);
        tree.assert_valid().unwrap();
        assert_no_red_red(&tree);
    }
    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 2 == 1);
    }
    for i in (0..300).rev() {
        let _ = tree.delete(&i);
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.black_height(), 1);
}

#[test]
fn rb_scattered_delete_matrix() {
    let mut tree = RbTree::new();
    let keys: Vec<i32> = (0..128).map(|i| (i * 53) % 128).collect();
    for &k in &keys {
        let _ = tree.insert(k);
    }
    tree.assert_valid().unwrap();
    for &k in keys.iter().rev().step_by(3) {
        assert!(tree.delete(&k).is_removed());
        tree.assert_valid().unwrap();
    }
    // Freed slots are reused by later inserts.
    for k in 200..220 {
        let _ = tree.insert(k);
        tree.assert_valid().unwrap();
    }
    let mut expected: Vec<i32> = keys
        .iter()
        .rev()
        .enumerate()
        .filter(|(i, _)| i % 3 != 0)
        .map(|(_, &k)| k)
        .chain(200..220)
        .collect();
    expected.sort();
    assert_eq!(tree.keys(), expected);
}

#[test]
fn rb_duplicate_and_absent_matrix() {
    let mut tree = RbTree::new();
    for k in [5, 3, 8, 1, 4, 7, 9] {
        let _ = tree.insert(k);
    }
    let before = tree.shape();
    assert_eq!(tree.insert(4), InsertOutcome::Duplicate);
    assert_eq!(tree.delete(&6), RemoveOutcome::NotFound);
    assert_eq!(tree.shape(), before);
    assert_eq!(tree.len(), 7);
}

#[test]
fn rb_shape_carries_colors_matrix() {
    let mut tree = RbTree::new();
    for k in [10, 20, 30] {
        let _ = tree.insert(k);
    }
    let shape = tree.shape().unwrap();
    assert_eq!(shape.key, 20);
    assert_eq!(shape.color, Some(Color::Black));
    assert_eq!(shape.left.as_ref().and_then(|n| n.color), Some(Color::Red));
    assert_eq!(shape.right.as_ref().and_then(|n| n.color), Some(Color::Red));
    assert_eq!(shape.height(), 2);
}

#[test]
fn rb_display_matrix() {
    let mut tree = RbTree::new();
    for k in [10, 20, 30] {
        let _ = tree.insert(k);
    }
    assert_eq!(tree.to_string(), "RbTree\n20 black\n├─ 10 red\n└─ 30 red");
}
