use balanced_forest::fuzzer::{KeyFuzzer, DEFAULT_KEY_RANGE};
use balanced_forest::{
    replay, AvlTree, BTree, IndexedHeap, Op, OrderedContainer, RbTree, Shape, SplayTree,
};
use proptest::prelude::*;
use serde_json::json;

const ROUND_TRIP: [i32; 7] = [5, 3, 8, 1, 4, 7, 9];

type Dyn = Box<dyn OrderedContainer<i32>>;

fn trees() -> Vec<(&'static str, Dyn)> {
    vec![
        ("btree3", Box::new(BTree::new(3).unwrap()) as Dyn),
        ("btree4", Box::new(BTree::new(4).unwrap()) as Dyn),
        ("btree7", Box::new(BTree::new(7).unwrap()) as Dyn),
        ("avl", Box::new(AvlTree::new()) as Dyn),
        ("rb", Box::new(RbTree::new()) as Dyn),
        ("splay", Box::new(SplayTree::new()) as Dyn),
    ]
}

#[test]
fn round_trip_empties_every_tree_matrix() {
    let orders: [[i32; 7]; 3] = [ROUND_TRIP, [1, 3, 4, 5, 7, 8, 9], [9, 1, 8, 3, 7, 4, 5]];
    for order in orders {
        for (name, mut tree) in trees() {
            for k in ROUND_TRIP {
                assert!(tree.insert(k).is_inserted(), "{name}");
            }
            assert_eq!(tree.keys(), vec![1, 3, 4, 5, 7, 8, 9], "{name}");
            for k in order {
                assert!(tree.delete(&k).is_removed(), "{name} {k}");
            }
            assert!(tree.is_empty(), "{name}");
            assert!(tree.shape().is_empty(), "{name}");
        }
    }
}

#[test]
fn duplicate_insert_is_noop_matrix() {
    for (name, mut tree) in trees() {
        for k in ROUND_TRIP {
            let _ = tree.insert(k);
        }
        let keys = tree.keys();
        let shape = tree.shape();
        for k in ROUND_TRIP {
            assert!(!tree.insert(k).is_inserted(), "{name} {k}");
        }
        assert_eq!(tree.keys(), keys, "{name}");
        if name != "splay" {
            assert_eq!(tree.shape(), shape, "{name}");
        }
        assert_eq!(tree.len(), 7, "{name}");
    }
}

#[test]
fn heap_is_a_container_too_matrix() {
    let mut heap = IndexedHeap::<i32>::new();
    assert_eq!(heap.insert_all([5, 3, 8, 1, 3]), 5);
    let heap: &mut dyn OrderedContainer<i32> = &mut heap;
    assert!(heap.contains(&3));
    assert!(heap.delete(&3).is_removed());
    assert!(heap.contains(&3));
    assert_eq!(heap.len(), 4);
    assert!(matches!(heap.shape(), Shape::Heap(ref keys) if keys[0] == 1));
}

#[test]
fn replay_rebuilds_prefix_matrix() {
    let ops = vec![
        Op::Insert(10),
        Op::Insert(20),
        Op::Insert(5),
        Op::Delete(10),
        Op::Insert(6),
        Op::Delete(99),
    ];
    for step in 0..=ops.len() {
        let prefix = ops[..step].to_vec();
        let avl = replay(AvlTree::new(), prefix.clone());
        let rb = replay(RbTree::new(), prefix.clone());
        let bt = replay(BTree::new(3).unwrap(), prefix);
        avl.assert_valid().unwrap();
        rb.assert_valid().unwrap();
        bt.assert_valid().unwrap();
        assert_eq!(avl.keys(), rb.keys());
        assert_eq!(avl.keys(), bt.keys());
    }
    let full = replay(SplayTree::new(), ops);
    assert_eq!(full.keys(), vec![5, 6, 20]);
}

#[test]
fn shape_json_matrix() {
    let mut rb = RbTree::<i32>::new();
    let _ = rb.insert_all([2, 1, 3]);
    assert_eq!(
        serde_json::to_value(OrderedContainer::shape(&rb)).unwrap(),
        json!({
            "kind": "binary",
            "root": {
                "key": 2,
                "color": "BLACK",
                "left": {"key": 1, "color": "RED", "left": null, "right": null},
                "right": {"key": 3, "color": "RED", "left": null, "right": null}
            }
        })
    );

    let mut avl = AvlTree::new();
    let _ = avl.insert(1);
    assert_eq!(
        serde_json::to_value(OrderedContainer::shape(&avl)).unwrap(),
        json!({"kind": "binary", "root": {"key": 1, "left": null, "right": null}})
    );

    let mut bt = BTree::<i32>::new(3).unwrap();
    let _ = bt.insert_all([1, 2, 3, 4]);
    assert_eq!(
        serde_json::to_value(OrderedContainer::shape(&bt)).unwrap(),
        json!({
            "kind": "multiway",
            "root": {
                "keys": [2],
                "leaf": false,
                "children": [
                    {"keys": [1], "leaf": true, "children": []},
                    {"keys": [3, 4], "leaf": true, "children": []}
                ]
            }
        })
    );

    let mut heap = IndexedHeap::<i32>::new();
    let _ = heap.insert_all([5, 3, 8, 1]);
    assert_eq!(
        serde_json::to_value(OrderedContainer::shape(&heap)).unwrap(),
        json!({"kind": "heap", "root": [1, 3, 8, 5]})
    );

    let empty = SplayTree::<i32>::new();
    assert_eq!(
        serde_json::to_value(OrderedContainer::shape(&empty)).unwrap(),
        json!({"kind": "binary", "root": null})
    );
}

#[test]
fn snapshot_is_detached_matrix() {
    let mut tree = AvlTree::<i32>::new();
    let _ = tree.insert_all([1, 2, 3]);
    let snapshot = tree.shape();
    let _ = tree.delete(&2);
    let _ = tree.insert(10);
    assert_eq!(snapshot.as_ref().map(|n| n.key), Some(2));
    assert_eq!(snapshot.map(|n| n.height()), Some(2));
}

#[test]
fn fuzzer_fills_every_container_matrix() {
    let mut fuzzer = KeyFuzzer::new(Some([42; 32]));
    let (min, max) = (*DEFAULT_KEY_RANGE.start(), *DEFAULT_KEY_RANGE.end());
    let mut avl = AvlTree::new();
    let mut splay = SplayTree::new();
    let mut bt = BTree::new(5).unwrap();
    for _ in 0..200 {
        let k = fuzzer.absent_key(&mut avl, min, max).unwrap();
        assert!(DEFAULT_KEY_RANGE.contains(&k));
        assert!(avl.insert(k).is_inserted());
        assert!(splay.insert(k).is_inserted());
        assert!(bt.insert(k).is_inserted());
    }
    avl.assert_valid().unwrap();
    splay.assert_valid().unwrap();
    bt.assert_valid().unwrap();
    assert_eq!(avl.keys(), splay.keys());
    assert_eq!(avl.keys(), bt.keys());
}

#[derive(Clone, Debug)]
enum Action {
    Insert(i16),
    Delete(i16),
}

fn actions() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![
            3 => (-64i16..64).prop_map(Action::Insert),
            2 => (-64i16..64).prop_map(Action::Delete),
        ],
        0..200,
    )
}

proptest! {
    #[test]
    fn trees_agree_with_std_set(actions in actions(), m in 3usize..8) {
        let mut model = std::collections::BTreeSet::new();
        let mut bt = BTree::new(m).unwrap();
        let mut avl = AvlTree::new();
        let mut rb = RbTree::new();
        let mut splay = SplayTree::new();

        for action in actions {
            match action {
                Action::Insert(k) => {
                    let fresh = model.insert(k);
                    prop_assert_eq!(bt.insert(k).is_inserted(), fresh);
                    prop_assert_eq!(avl.insert(k).is_inserted(), fresh);
                    prop_assert_eq!(rb.insert(k).is_inserted(), fresh);
                    prop_assert_eq!(splay.insert(k).is_inserted(), fresh);
                }
                Action::Delete(k) => {
                    let present = model.remove(&k);
                    prop_assert_eq!(bt.delete(&k).is_removed(), present);
                    prop_assert_eq!(avl.delete(&k).is_removed(), present);
                    prop_assert_eq!(rb.delete(&k).is_removed(), present);
                    prop_assert_eq!(splay.delete(&k).is_removed(), present);
                }
            }
            prop_assert_eq!(bt.assert_valid(), Ok(()));
            prop_assert_eq!(avl.assert_valid(), Ok(()));
            prop_assert_eq!(rb.assert_valid(), Ok(()));
            prop_assert_eq!(splay.assert_valid(), Ok(()));
        }

        let expected: Vec<i16> = model.into_iter().collect();
        prop_assert_eq!(bt.keys(), expected.clone());
        prop_assert_eq!(avl.keys(), expected.clone());
        prop_assert_eq!(rb.keys(), expected.clone());
        prop_assert_eq!(splay.keys(), expected);
    }

    #[test]
    fn heap_pops_sorted(actions in actions()) {
        let mut model: Vec<i16> = Vec::new();
        let mut heap = IndexedHeap::new();
        for action in actions {
            match action {
                Action::Insert(k) => {
                    model.push(k);
                    let _ = heap.insert(k);
                }
                Action::Delete(k) => {
                    let present = model.iter().position(|&x| x == k);
                    if let Some(i) = present {
                        model.swap_remove(i);
                    }
                    prop_assert_eq!(heap.delete(&k).is_removed(), present.is_some());
                }
            }
            prop_assert_eq!(heap.assert_valid(), Ok(()));
        }
        model.sort();
        let mut drained = Vec::new();
        while let Some(k) = heap.pop() {
            drained.push(k);
        }
        prop_assert_eq!(drained, model);
    }

    #[test]
    fn splay_search_lands_on_path(keys in prop::collection::vec(0u8..100, 1..60), target in 0u8..100) {
        let mut tree = SplayTree::new();
        for k in keys {
            let _ = tree.insert(k);
        }
        let path = tree.search_path(&target);
        match tree.search(&target) {
            Some(i) => prop_assert_eq!(tree.key(i), &target),
            None => {
                let root = tree.root_index().unwrap();
                prop_assert!(path.contains(&root));
            }
        }
        prop_assert_eq!(tree.assert_valid(), Ok(()));
    }
}
