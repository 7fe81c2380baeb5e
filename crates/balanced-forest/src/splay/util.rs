use log::trace;

use crate::arena::NodeArena;
use crate::types::{InsertOutcome, RemoveOutcome};
use crate::util::{get_l, get_r, set_l, set_r};

use super::types::SplayNodeLike;

// ── single rotations ──────────────────────────────────────────────────────

/// Promotes the left child of `y`; returns it.
fn rotate_right<K, N: SplayNodeLike<K>>(arena: &mut [N], y: u32) -> u32 {
    let Some(x) = get_l(arena, y) else {
        return y;
    };
    let b = get_r(arena, x);
    set_l(arena, y, b);
    set_r(arena, x, Some(y));
    x
}

/// Promotes the right child of `x`; returns it.
fn rotate_left<K, N: SplayNodeLike<K>>(arena: &mut [N], x: u32) -> u32 {
    let Some(y) = get_r(arena, x) else {
        return x;
    };
    let b = get_l(arena, y);
    set_r(arena, x, b);
    set_l(arena, y, Some(x));
    y
}

// ── splay ─────────────────────────────────────────────────────────────────

/// Splays `key` toward the top of the subtree rooted at `root` and returns
/// the new subtree root.
///
/// If `key` is absent, the last node visited on its search path becomes the
/// root. Straight-line descents (zig-zig) rotate the grandparent first;
/// direction changes (zig-zag) rotate the child first.
pub fn splay<K, N, C>(arena: &mut [N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: SplayNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut n = root?;
    let cmp = comparator(key, arena[n as usize].key());
    if cmp == 0 {
        return Some(n);
    }

    if cmp < 0 {
        let Some(l) = get_l(arena, n) else {
            return Some(n);
        };
        let cmp2 = comparator(key, arena[l as usize].key());
        if cmp2 < 0 {
            let ll = get_l(arena, l);
            let sub = splay(arena, ll, key, comparator);
            set_l(arena, l, sub);
            n = rotate_right(arena, n);
        } else if cmp2 > 0 {
            let lr = get_r(arena, l);
            let sub = splay(arena, lr, key, comparator);
            set_r(arena, l, sub);
            if sub.is_some() {
                let l = rotate_left(arena, l);
                set_l(arena, n, Some(l));
            }
        }
        if get_l(arena, n).is_none() {
            Some(n)
        } else {
            Some(rotate_right(arena, n))
        }
    } else {
        let Some(r) = get_r(arena, n) else {
            return Some(n);
        };
        let cmp2 = comparator(key, arena[r as usize].key());
        if cmp2 > 0 {
            let rr = get_r(arena, r);
            let sub = splay(arena, rr, key, comparator);
            set_r(arena, r, sub);
            n = rotate_left(arena, n);
        } else if cmp2 < 0 {
            let rl = get_l(arena, r);
            let sub = splay(arena, rl, key, comparator);
            set_l(arena, r, sub);
            if sub.is_some() {
                let r = rotate_right(arena, r);
                set_r(arena, n, Some(r));
            }
        }
        if get_r(arena, n).is_none() {
            Some(n)
        } else {
            Some(rotate_left(arena, n))
        }
    }
}

// ── insert / remove ───────────────────────────────────────────────────────

/// Inserts `key` as the new root, splitting the splayed tree around it.
pub fn insert<K, N, C>(
    arena: &mut NodeArena<N>,
    root: Option<u32>,
    key: K,
    comparator: &C,
) -> (Option<u32>, InsertOutcome)
where
    N: SplayNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(top) = splay(arena, root, &key, comparator) else {
        return (Some(arena.alloc(N::leaf(key))), InsertOutcome::Inserted);
    };

    let cmp = comparator(&key, arena[top as usize].key());
    if cmp == 0 {
        return (Some(top), InsertOutcome::Duplicate);
    }

    let n = arena.alloc(N::leaf(key));
    if cmp < 0 {
        let tl = get_l(arena, top);
        set_l(arena, n, tl);
        set_r(arena, n, Some(top));
        set_l(arena, top, None);
    } else {
        let tr = get_r(arena, top);
        set_r(arena, n, tr);
        set_l(arena, n, Some(top));
        set_r(arena, top, None);
    }
    (Some(n), InsertOutcome::Inserted)
}

/// Removes `key` and joins its two subtrees.
///
/// The left subtree is splayed for the removed key, which brings its maximum
/// to the top with a free right link for the right subtree.
pub fn remove<K, N, C>(
    arena: &mut NodeArena<N>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> (Option<u32>, RemoveOutcome)
where
    N: SplayNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(top) = splay(arena, root, key, comparator) else {
        return (None, RemoveOutcome::NotFound);
    };
    if comparator(key, arena[top as usize].key()) != 0 {
        return (Some(top), RemoveOutcome::NotFound);
    }

    let l = get_l(arena, top);
    let r = get_r(arena, top);
    arena.release(top);

    let root = match splay(arena, l, key, comparator) {
        None => r,
        Some(max) => {
            trace!("splay: join at {max}");
            set_r(arena, max, r);
            Some(max)
        }
    };
    (root, RemoveOutcome::Removed)
}

/// Handles visited by a plain descent toward `key`, root first.
pub fn search_path<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Vec<u32>
where
    N: SplayNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut path = Vec::new();
    let mut curr = root;
    while let Some(i) = curr {
        path.push(i);
        let cmp = comparator(key, arena[i as usize].key());
        curr = match cmp {
            0 => None,
            c if c < 0 => get_l(arena, i),
            _ => get_r(arena, i),
        };
    }
    path
}
