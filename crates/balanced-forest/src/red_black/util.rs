use log::trace;

use crate::arena::NodeArena;
use crate::types::{Color, InsertOutcome, RemoveOutcome};
use crate::util::{assert_strict_order, find, first, get_l, get_r, set_l, set_r};

use super::types::RbNodeLike;

#[inline]
fn get_p<K, N: RbNodeLike<K>>(arena: &[N], i: u32) -> Option<u32> {
    arena[i as usize].p()
}

#[inline]
fn set_p<K, N: RbNodeLike<K>>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

/// Absent children count as black.
#[inline]
fn color<K, N: RbNodeLike<K>>(arena: &[N], i: Option<u32>) -> Color {
    i.map_or(Color::Black, |i| arena[i as usize].color())
}

#[inline]
fn is_red<K, N: RbNodeLike<K>>(arena: &[N], i: Option<u32>) -> bool {
    color(arena, i) == Color::Red
}

#[inline]
fn set_color<K, N: RbNodeLike<K>>(arena: &mut [N], i: u32, c: Color) {
    arena[i as usize].set_color(c);
}

/// Points `p`'s link that held `old` at `new`, or makes `new` the root.
fn replace_child<K, N: RbNodeLike<K>>(
    arena: &mut [N],
    root: Option<u32>,
    p: Option<u32>,
    old: u32,
    new: Option<u32>,
) -> Option<u32> {
    match p {
        None => new,
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
            root
        }
    }
}

/// ```text
///   x              y
///  / \            / \
/// a   y    →     x   c
///    / \        / \
///   b   c      a   b
/// ```
fn rotate_left<K, N: RbNodeLike<K>>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let Some(y) = get_r(arena, x) else {
        return root;
    };
    let b = get_l(arena, y);
    set_r(arena, x, b);
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }
    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    let root = replace_child(arena, root, xp, x, Some(y));
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

fn rotate_right<K, N: RbNodeLike<K>>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let Some(y) = get_l(arena, x) else {
        return root;
    };
    let b = get_r(arena, y);
    set_l(arena, x, b);
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }
    let xp = get_p(arena, x);
    set_p(arena, y, xp);
    let root = replace_child(arena, root, xp, x, Some(y));
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Inserts `key` and returns the new root.
pub fn insert<K, N, C>(
    arena: &mut NodeArena<N>,
    root: Option<u32>,
    key: K,
    comparator: &C,
) -> (Option<u32>, InsertOutcome)
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut parent = None;
    let mut go_left = false;
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(&key, arena[i as usize].key());
        if cmp == 0 {
            return (root, InsertOutcome::Duplicate);
        }
        parent = Some(i);
        go_left = cmp < 0;
        curr = if go_left {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }

    let n = arena.alloc(N::leaf(key));
    set_p(arena, n, parent);
    let root = match parent {
        None => Some(n),
        Some(p) => {
            if go_left {
                set_l(arena, p, Some(n));
            } else {
                set_r(arena, p, Some(n));
            }
            root
        }
    };

    (insert_fixup(arena, root, n), InsertOutcome::Inserted)
}

fn insert_fixup<K, N: RbNodeLike<K>>(arena: &mut [N], mut root: Option<u32>, mut z: u32) -> Option<u32> {
    while let Some(p) = get_p(arena, z) {
        if !is_red(arena, Some(p)) {
            break;
        }
        let Some(g) = get_p(arena, p) else {
            break;
        };
        let parent_is_left = get_l(arena, g) == Some(p);
        let uncle = if parent_is_left {
            get_r(arena, g)
        } else {
            get_l(arena, g)
        };

        if let Some(u) = uncle.filter(|&u| is_red(arena, Some(u))) {
            trace!("rb: red uncle at {g}, recolor");
            set_color(arena, p, Color::Black);
            set_color(arena, u, Color::Black);
            set_color(arena, g, Color::Red);
            z = g;
            continue;
        }

        let mut p = p;
        if parent_is_left {
            if get_r(arena, p) == Some(z) {
                trace!("rb: inner child at {z}, rotate parent left");
                root = rotate_left(arena, root, p);
                std::mem::swap(&mut z, &mut p);
            }
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            trace!("rb: rotate grandparent {g} right");
            root = rotate_right(arena, root, g);
        } else {
            if get_l(arena, p) == Some(z) {
                trace!("rb: inner child at {z}, rotate parent right");
                root = rotate_right(arena, root, p);
                std::mem::swap(&mut z, &mut p);
            }
            set_color(arena, p, Color::Black);
            set_color(arena, g, Color::Red);
            trace!("rb: rotate grandparent {g} left");
            root = rotate_left(arena, root, g);
        }
    }

    if let Some(r) = root {
        set_color(arena, r, Color::Black);
    }
    root
}

/// Removes the node holding `key` and returns the new root.
///
/// A node with two children takes its in-order successor's key and the
/// successor node is spliced out instead.
pub fn remove<K, N, C>(
    arena: &mut NodeArena<N>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> (Option<u32>, RemoveOutcome)
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut z) = find(arena, root, key, comparator) else {
        return (root, RemoveOutcome::NotFound);
    };

    if let (Some(_), Some(r)) = (get_l(arena, z), get_r(arena, z)) {
        if let Some(s) = first(arena, Some(r)) {
            let (a, b) = arena.pair_mut(z, s);
            std::mem::swap(a.key_mut(), b.key_mut());
            z = s;
        }
    }

    // `z` now has at most one child.
    let x = get_l(arena, z).or(get_r(arena, z));
    let x_parent = get_p(arena, z);
    let removed_color = arena[z as usize].color();

    let mut root = replace_child(arena, root, x_parent, z, x);
    if let Some(x) = x {
        set_p(arena, x, x_parent);
    }
    arena.release(z);

    if removed_color == Color::Black {
        root = remove_fixup(arena, root, x, x_parent);
    }
    (root, RemoveOutcome::Removed)
}

/// Restores equal black heights after a black node left the path through
/// `x`. `x` may be a virtual leaf, so its parent is tracked separately.
fn remove_fixup<K, N: RbNodeLike<K>>(
    arena: &mut [N],
    mut root: Option<u32>,
    mut x: Option<u32>,
    mut parent: Option<u32>,
) -> Option<u32> {
    while x != root && !is_red(arena, x) {
        let Some(p) = parent else {
            break;
        };

        if get_l(arena, p) == x {
            let Some(mut w) = get_r(arena, p) else {
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            };
            if is_red(arena, Some(w)) {
                trace!("rb: red sibling {w}, rotate {p} left");
                set_color(arena, w, Color::Black);
                set_color(arena, p, Color::Red);
                root = rotate_left(arena, root, p);
                let Some(s) = get_r(arena, p) else {
                    break;
                };
                w = s;
            }
            if !is_red(arena, get_l(arena, w)) && !is_red(arena, get_r(arena, w)) {
                trace!("rb: black nephews at {w}, push deficit to {p}");
                set_color(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }
            if !is_red(arena, get_r(arena, w)) {
                trace!("rb: near red nephew, rotate {w} right");
                if let Some(wl) = get_l(arena, w) {
                    set_color(arena, wl, Color::Black);
                }
                set_color(arena, w, Color::Red);
                root = rotate_right(arena, root, w);
                let Some(s) = get_r(arena, p) else {
                    break;
                };
                w = s;
            }
            trace!("rb: far red nephew, rotate {p} left");
            let pc = arena[p as usize].color();
            set_color(arena, w, pc);
            set_color(arena, p, Color::Black);
            if let Some(wr) = get_r(arena, w) {
                set_color(arena, wr, Color::Black);
            }
            root = rotate_left(arena, root, p);
            x = root;
            break;
        } else {
            let Some(mut w) = get_l(arena, p) else {
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            };
            if is_red(arena, Some(w)) {
                trace!("rb: red sibling {w}, rotate {p} right");
                set_color(arena, w, Color::Black);
                set_color(arena, p, Color::Red);
                root = rotate_right(arena, root, p);
                let Some(s) = get_l(arena, p) else {
                    break;
                };
                w = s;
            }
            if !is_red(arena, get_l(arena, w)) && !is_red(arena, get_r(arena, w)) {
                trace!("rb: black nephews at {w}, push deficit to {p}");
                set_color(arena, w, Color::Red);
                x = Some(p);
                parent = get_p(arena, p);
                continue;
            }
            if !is_red(arena, get_l(arena, w)) {
                trace!("rb: near red nephew, rotate {w} left");
                if let Some(wr) = get_r(arena, w) {
                    set_color(arena, wr, Color::Black);
                }
                set_color(arena, w, Color::Red);
                root = rotate_left(arena, root, w);
                let Some(s) = get_l(arena, p) else {
                    break;
                };
                w = s;
            }
            trace!("rb: far red nephew, rotate {p} right");
            let pc = arena[p as usize].color();
            set_color(arena, w, pc);
            set_color(arena, p, Color::Black);
            if let Some(wl) = get_l(arena, w) {
                set_color(arena, wl, Color::Black);
            }
            root = rotate_right(arena, root, p);
            x = root;
            break;
        }
    }

    if let Some(x) = x {
        set_color(arena, x, Color::Black);
    }
    root
}

pub fn assert_red_black_tree<K, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), String>
where
    N: RbNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }
    if is_red(arena, Some(root)) {
        return Err("Root is not black".to_string());
    }

    fn check<K, N: RbNodeLike<K>>(arena: &[N], node: Option<u32>) -> Result<usize, String> {
        let Some(node) = node else {
            return Ok(1);
        };

        let l = get_l(arena, node);
        let r = get_r(arena, node);

        if let Some(li) = l {
            if get_p(arena, li) != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
        }
        if let Some(ri) = r {
            if get_p(arena, ri) != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
        }

        if is_red(arena, Some(node)) {
            if is_red(arena, l) {
                return Err("Red node has red left child".to_string());
            }
            if is_red(arena, r) {
                return Err("Red node has red right child".to_string());
            }
        }

        let lh = check(arena, l)?;
        let rh = check(arena, r)?;
        if lh != rh {
            return Err("Black height mismatch".to_string());
        }

        Ok(lh + usize::from(!is_red(arena, Some(node))))
    }

    check(arena, Some(root))?;
    assert_strict_order(arena, Some(root), comparator)
}

/// Black nodes on any root-to-virtual-leaf path, counting the virtual leaf.
pub fn black_height<K, N: RbNodeLike<K>>(arena: &[N], root: Option<u32>) -> usize {
    let mut curr = root;
    let mut count = 1;
    while let Some(i) = curr {
        if !is_red(arena, Some(i)) {
            count += 1;
        }
        curr = get_l(arena, i);
    }
    count
}
