use log::trace;

use crate::arena::NodeArena;
use crate::types::{InsertOutcome, RemoveOutcome};
use crate::util::{assert_strict_order, first, get_l, get_r, set_l, set_r};

use super::types::AvlNodeLike;

#[inline]
fn h<K, N: AvlNodeLike<K>>(arena: &[N], i: Option<u32>) -> i32 {
    i.map_or(0, |i| arena[i as usize].h() as i32)
}

fn update_height<K, N: AvlNodeLike<K>>(arena: &mut [N], n: u32) {
    let lh = h(arena, get_l(arena, n));
    let rh = h(arena, get_r(arena, n));
    arena[n as usize].set_h(1 + lh.max(rh) as u32);
}

/// `height(left) - height(right)`; zero for an absent node.
pub fn balance<K, N: AvlNodeLike<K>>(arena: &[N], n: Option<u32>) -> i32 {
    match n {
        None => 0,
        Some(i) => h(arena, get_l(arena, i)) - h(arena, get_r(arena, i)),
    }
}

/// ```text
///     y          x
///    / \        / \
///   x   c  →   a   y
///  / \            / \
/// a   b          b   c
/// ```
fn rotate_right<K, N: AvlNodeLike<K>>(arena: &mut [N], y: u32) -> u32 {
    let Some(x) = get_l(arena, y) else {
        return y;
    };
    let b = get_r(arena, x);
    set_r(arena, x, Some(y));
    set_l(arena, y, b);
    update_height(arena, y);
    update_height(arena, x);
    x
}

fn rotate_left<K, N: AvlNodeLike<K>>(arena: &mut [N], x: u32) -> u32 {
    let Some(y) = get_r(arena, x) else {
        return x;
    };
    let b = get_l(arena, y);
    set_l(arena, y, Some(x));
    set_r(arena, x, b);
    update_height(arena, x);
    update_height(arena, y);
    y
}

fn rotate_left_right<K, N: AvlNodeLike<K>>(arena: &mut [N], n: u32) -> u32 {
    if let Some(l) = get_l(arena, n) {
        let l = rotate_left(arena, l);
        set_l(arena, n, Some(l));
    }
    rotate_right(arena, n)
}

fn rotate_right_left<K, N: AvlNodeLike<K>>(arena: &mut [N], n: u32) -> u32 {
    if let Some(r) = get_r(arena, n) {
        let r = rotate_right(arena, r);
        set_r(arena, n, Some(r));
    }
    rotate_left(arena, n)
}

/// After an insert the heavy child always leans one way, so the strict
/// sign of its balance picks the case.
fn insert_fixup<K, N: AvlNodeLike<K>>(arena: &mut [N], n: u32) -> u32 {
    let bf = balance(arena, Some(n));
    if bf > 1 {
        if balance(arena, get_l(arena, n)) > 0 {
            trace!("avl: left-left at {n}");
            return rotate_right(arena, n);
        }
        trace!("avl: left-right at {n}");
        return rotate_left_right(arena, n);
    }
    if bf < -1 {
        if balance(arena, get_r(arena, n)) < 0 {
            trace!("avl: right-right at {n}");
            return rotate_left(arena, n);
        }
        trace!("avl: right-left at {n}");
        return rotate_right_left(arena, n);
    }
    n
}

/// After a delete the heavy child may be level; a level child takes the
/// single rotation.
fn remove_fixup<K, N: AvlNodeLike<K>>(arena: &mut [N], n: u32) -> u32 {
    let bf = balance(arena, Some(n));
    if bf > 1 {
        if balance(arena, get_l(arena, n)) >= 0 {
            trace!("avl: left-left at {n}");
            return rotate_right(arena, n);
        }
        trace!("avl: left-right at {n}");
        return rotate_left_right(arena, n);
    }
    if bf < -1 {
        if balance(arena, get_r(arena, n)) <= 0 {
            trace!("avl: right-right at {n}");
            return rotate_left(arena, n);
        }
        trace!("avl: right-left at {n}");
        return rotate_right_left(arena, n);
    }
    n
}

/// Inserts `key` under `node` and returns the new subtree root.
pub fn insert<K, N, C>(
    arena: &mut NodeArena<N>,
    node: Option<u32>,
    key: K,
    comparator: &C,
) -> (u32, InsertOutcome)
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(n) = node else {
        return (arena.alloc(N::leaf(key)), InsertOutcome::Inserted);
    };

    let cmp = comparator(&key, arena[n as usize].key());
    if cmp == 0 {
        return (n, InsertOutcome::Duplicate);
    }
    if cmp < 0 {
        let l = get_l(arena, n);
        let (child, outcome) = insert(arena, l, key, comparator);
        set_l(arena, n, Some(child));
        if outcome == InsertOutcome::Duplicate {
            return (n, outcome);
        }
    } else {
        let r = get_r(arena, n);
        let (child, outcome) = insert(arena, r, key, comparator);
        set_r(arena, n, Some(child));
        if outcome == InsertOutcome::Duplicate {
            return (n, outcome);
        }
    }

    update_height(arena, n);
    (insert_fixup(arena, n), InsertOutcome::Inserted)
}

/// Removes `key` from under `node` and returns the new subtree root.
///
/// A node with two children takes its in-order successor's key; the
/// successor node is then removed from the right subtree.
pub fn remove<K, N, C>(
    arena: &mut NodeArena<N>,
    node: Option<u32>,
    key: &K,
    comparator: &C,
) -> (Option<u32>, RemoveOutcome)
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(n) = node else {
        return (None, RemoveOutcome::NotFound);
    };

    let cmp = comparator(key, arena[n as usize].key());
    if cmp < 0 {
        let l = get_l(arena, n);
        let (child, outcome) = remove(arena, l, key, comparator);
        if outcome == RemoveOutcome::NotFound {
            return (Some(n), outcome);
        }
        set_l(arena, n, child);
    } else if cmp > 0 {
        let r = get_r(arena, n);
        let (child, outcome) = remove(arena, r, key, comparator);
        if outcome == RemoveOutcome::NotFound {
            return (Some(n), outcome);
        }
        set_r(arena, n, child);
    } else {
        match (get_l(arena, n), get_r(arena, n)) {
            (Some(_), Some(r)) => {
                if let Some(s) = first(arena, Some(r)) {
                    let (a, b) = arena.pair_mut(n, s);
                    std::mem::swap(a.key_mut(), b.key_mut());
                }
                // The removed key now sits at the leftmost slot of `r`.
                let (child, _) = remove(arena, Some(r), key, comparator);
                set_r(arena, n, child);
            }
            (l, r) => {
                arena.release(n);
                return (l.or(r), RemoveOutcome::Removed);
            }
        }
    }

    update_height(arena, n);
    (Some(remove_fixup(arena, n)), RemoveOutcome::Removed)
}

pub fn assert_avl_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    fn validate<K, N: AvlNodeLike<K>>(arena: &[N], node: Option<u32>) -> Result<i32, String> {
        let Some(i) = node else {
            return Ok(0);
        };
        let lh = validate(arena, get_l(arena, i))?;
        let rh = validate(arena, get_r(arena, i))?;
        let expected = 1 + lh.max(rh);
        let cached = arena[i as usize].h() as i32;
        if cached != expected {
            return Err(format!(
                "Height mismatch at {i}: expected {expected}, got {cached}"
            ));
        }
        if (lh - rh).abs() > 1 {
            return Err(format!("AVL balance violated at {i}: {}", lh - rh));
        }
        Ok(expected)
    }

    validate(arena, root)?;
    assert_strict_order(arena, root, comparator)
}
