//! Traversal helpers shared by the binary trees.
//!
//! None of these follow parent links, so they work for every arena layout:
//! the in-order walk keeps an explicit stack instead.

use crate::types::Node;

#[inline]
pub(crate) fn get_l<K, N: Node<K>>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<K, N: Node<K>>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_l<K, N: Node<K>>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<K, N: Node<K>>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node.
pub fn first<K, N: Node<K>>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Finds a node by key without restructuring.
pub fn find<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: Node<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i as usize].key());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Number of nodes under `root`.
pub fn size<K, N: Node<K>>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    for_each_in_order(arena, root, |_| count += 1);
    count
}

/// Height of the subtree; an absent subtree has height 0, a leaf 1.
pub fn height<K, N: Node<K>>(arena: &[N], root: Option<u32>) -> usize {
    match root {
        None => 0,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// Visits handles in ascending key order.
pub fn for_each_in_order<K, N, F>(arena: &[N], root: Option<u32>, mut f: F)
where
    N: Node<K>,
    F: FnMut(u32),
{
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(i) = curr {
            stack.push(i);
            curr = get_l(arena, i);
        }
        let Some(i) = stack.pop() else {
            return;
        };
        f(i);
        curr = get_r(arena, i);
    }
}

/// Keys in ascending order.
pub fn keys_in_order<K: Clone, N: Node<K>>(arena: &[N], root: Option<u32>) -> Vec<K> {
    let mut keys = Vec::new();
    for_each_in_order(arena, root, |i| keys.push(arena[i as usize].key().clone()));
    keys
}

/// Checks that the in-order walk is strictly ascending.
pub fn assert_strict_order<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: Node<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut prev: Option<u32> = None;
    let mut violation = false;
    for_each_in_order(arena, root, |i| {
        if let Some(p) = prev {
            if comparator(arena[p as usize].key(), arena[i as usize].key()) >= 0 {
                violation = true;
            }
        }
        prev = Some(i);
    });
    if violation {
        Err("Node order violated".to_string())
    } else {
        Ok(())
    }
}
