//! `Vec`-backed node storage addressed by `u32` handles.
//!
//! Nodes are never moved once allocated, so a handle stays valid until the
//! node is released. Releasing the last slot drops its node right away.
//! Any other released slot goes on a free list and keeps its stale node
//! (key included) alive until the next allocation overwrites it or the
//! arena is cleared.

use std::ops::{Deref, DerefMut};

#[derive(Clone, Debug)]
pub struct NodeArena<N> {
    slots: Vec<N>,
    free: Vec<u32>,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeArena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns its handle.
    pub fn alloc(&mut self, node: N) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = node;
                idx
            }
            None => {
                self.slots.push(node);
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Gives up the node at `idx`. The handle must not be used again.
    ///
    /// The tail slot is popped and its node dropped. An interior slot can't
    /// be vacated without breaking the `[N]` view, so it is parked on the
    /// free list and its node is only dropped on reuse or [`Self::clear`].
    pub fn release(&mut self, idx: u32) {
        debug_assert!(!self.free.contains(&idx), "double release of {idx}");
        if idx as usize + 1 == self.slots.len() {
            self.slots.pop();
        } else {
            self.free.push(idx);
        }
    }

    /// Number of live nodes.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Mutable access to two distinct nodes at once.
    pub fn pair_mut(&mut self, a: u32, b: u32) -> (&mut N, &mut N) {
        assert_ne!(a, b, "pair_mut needs distinct handles");
        let (a, b) = (a as usize, b as usize);
        if a < b {
            let (lo, hi) = self.slots.split_at_mut(b);
            (&mut lo[a], &mut hi[0])
        } else {
            let (lo, hi) = self.slots.split_at_mut(a);
            (&mut hi[0], &mut lo[b])
        }
    }
}

impl<N> Deref for NodeArena<N> {
    type Target = [N];

    fn deref(&self) -> &[N] {
        &self.slots
    }
}

impl<N> DerefMut for NodeArena<N> {
    fn deref_mut(&mut self) -> &mut [N] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused() {
        let mut arena = NodeArena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(arena.live(), 2);

        arena.release(a);
        assert_eq!(arena.live(), 1);

        let c = arena.alloc("c");
        assert_eq!(c, a);
        assert_eq!(arena[c as usize], "c");
        assert_eq!(arena[b as usize], "b");
    }

    #[test]
    fn released_keys_are_dropped() {
        use std::rc::Rc;

        let key = Rc::new(7);
        let mut arena = NodeArena::new();
        let a = arena.alloc(Rc::clone(&key));
        let b = arena.alloc(Rc::clone(&key));
        assert_eq!(Rc::strong_count(&key), 3);

        // Tail slot goes away immediately.
        arena.release(b);
        assert_eq!(Rc::strong_count(&key), 2);
        assert_eq!(arena.len(), 1);

        // Interior slot is parked until it is reused.
        let c = arena.alloc(Rc::clone(&key));
        arena.release(a);
        assert_eq!(Rc::strong_count(&key), 3);
        assert_eq!(arena.live(), 1);
        let d = arena.alloc(Rc::new(8));
        assert_eq!(d, a);
        assert_eq!(Rc::strong_count(&key), 2);

        arena.release(d);
        assert_eq!(arena.live(), 1);
        arena.release(c);
        assert_eq!(arena.live(), 0);
        assert_eq!(Rc::strong_count(&key), 1);

        let _ = arena.alloc(Rc::clone(&key));
        arena.clear();
        assert_eq!(Rc::strong_count(&key), 1);
    }

    #[test]
    fn pair_mut_either_order() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        {
            let (x, y) = arena.pair_mut(b, a);
            std::mem::swap(x, y);
        }
        assert_eq!(arena[a as usize], 2);
        assert_eq!(arena[b as usize], 1);
    }
}
