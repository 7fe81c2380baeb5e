use std::mem;

use log::trace;

use super::config::Order;
use crate::types::RemoveOutcome;

/// One B-tree node.
///
/// Internal nodes hold `keys.len() + 1` children; leaves hold none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BTreeNode<K> {
    pub(crate) keys: Vec<K>,
    pub(crate) children: Vec<BTreeNode<K>>,
    pub(crate) leaf: bool,
}

impl<K> BTreeNode<K> {
    pub(crate) fn new_leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            leaf: true,
        }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn children(&self) -> &[BTreeNode<K>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Index of the first key not less than `key`.
    fn lower_bound<C>(&self, key: &K, comparator: &C) -> usize
    where
        C: Fn(&K, &K) -> i32,
    {
        self.keys
            .iter()
            .position(|k| comparator(k, key) >= 0)
            .unwrap_or(self.keys.len())
    }

    pub(crate) fn search<C>(&self, key: &K, comparator: &C) -> Option<&BTreeNode<K>>
    where
        C: Fn(&K, &K) -> i32,
    {
        let mut node = self;
        loop {
            let i = node.lower_bound(key, comparator);
            if i < node.keys.len() && comparator(&node.keys[i], key) == 0 {
                return Some(node);
            }
            if node.leaf {
                return None;
            }
            node = node.children.get(i)?;
        }
    }

    // ── insertion ─────────────────────────────────────────────────────────

    /// Splits the full child at `index` around its median key, which moves
    /// up into `self`.
    pub(crate) fn split_child(&mut self, index: usize, order: Order) {
        let child = &mut self.children[index];
        let mid = order.max_keys / 2;

        let upper_keys = child.keys.split_off(mid + 1);
        let Some(median) = child.keys.pop() else {
            return;
        };
        let upper_children = if child.leaf {
            Vec::new()
        } else {
            child.children.split_off(mid + 1)
        };
        let sibling = BTreeNode {
            keys: upper_keys,
            children: upper_children,
            leaf: child.leaf,
        };
        trace!(
            "btree: split child {index} into {} + {} keys",
            child.keys.len(),
            sibling.keys.len()
        );

        self.keys.insert(index, median);
        self.children.insert(index + 1, sibling);
    }

    /// Inserts into a node known to have room. The key must be absent.
    pub(crate) fn insert_non_full<C>(&mut self, key: K, order: Order, comparator: &C)
    where
        C: Fn(&K, &K) -> i32,
    {
        let mut node = self;
        loop {
            let mut i = node.lower_bound(&key, comparator);
            if node.leaf {
                node.keys.insert(i, key);
                return;
            }
            if node.children[i].keys.len() == order.max_keys {
                node.split_child(i, order);
                if comparator(&key, &node.keys[i]) > 0 {
                    i += 1;
                }
            }
            node = &mut node.children[i];
        }
    }

    // ── deletion ──────────────────────────────────────────────────────────

    pub(crate) fn remove<C>(&mut self, key: &K, order: Order, comparator: &C) -> RemoveOutcome
    where
        C: Fn(&K, &K) -> i32,
    {
        let idx = self.lower_bound(key, comparator);

        if idx < self.keys.len() && comparator(&self.keys[idx], key) == 0 {
            if self.leaf {
                self.keys.remove(idx);
                return RemoveOutcome::Removed;
            }
            return self.remove_from_internal(idx, key, order, comparator);
        }

        if self.leaf {
            return RemoveOutcome::NotFound;
        }

        let idx = if self.children[idx].keys.len() < order.min_degree {
            self.fill(idx, order)
        } else {
            idx
        };
        self.children[idx].remove(key, order, comparator)
    }

    /// Replaces `keys[idx]` with its predecessor or successor when the
    /// neighbouring child can spare a key, otherwise merges both children
    /// around it and removes it from the merged node.
    fn remove_from_internal<C>(&mut self, idx: usize, key: &K, order: Order, comparator: &C) -> RemoveOutcome
    where
        C: Fn(&K, &K) -> i32,
    {
        if self.children[idx].keys.len() >= order.min_degree {
            if let Some(pred) = self.children[idx].pop_last(order) {
                self.keys[idx] = pred;
                return RemoveOutcome::Removed;
            }
        }
        if self.children[idx + 1].keys.len() >= order.min_degree {
            if let Some(succ) = self.children[idx + 1].pop_first(order) {
                self.keys[idx] = succ;
                return RemoveOutcome::Removed;
            }
        }
        self.merge(idx);
        self.children[idx].remove(key, order, comparator)
    }

    /// Removes and returns the greatest key, topping up thin children on
    /// the way down.
    fn pop_last(&mut self, order: Order) -> Option<K> {
        if self.leaf {
            return self.keys.pop();
        }
        let mut idx = self.children.len() - 1;
        if self.children[idx].keys.len() < order.min_degree {
            idx = self.fill(idx, order);
        }
        self.children[idx].pop_last(order)
    }

    /// Removes and returns the least key, topping up thin children on the
    /// way down.
    fn pop_first(&mut self, order: Order) -> Option<K> {
        if self.leaf {
            return if self.keys.is_empty() {
                None
            } else {
                Some(self.keys.remove(0))
            };
        }
        if self.children[0].keys.len() < order.min_degree {
            self.fill(0, order);
        }
        self.children[0].pop_first(order)
    }

    /// Gives `children[idx]` at least T keys; returns the index of the
    /// child that now covers the same key range.
    fn fill(&mut self, idx: usize, order: Order) -> usize {
        if idx > 0 && self.children[idx - 1].keys.len() >= order.min_degree {
            self.borrow_from_prev(idx);
            idx
        } else if idx + 1 < self.children.len() && self.children[idx + 1].keys.len() >= order.min_degree {
            self.borrow_from_next(idx);
            idx
        } else if idx + 1 < self.children.len() {
            self.merge(idx);
            idx
        } else {
            self.merge(idx - 1);
            idx - 1
        }
    }

    /// Rotates the left sibling's last key up and the separator down.
    fn borrow_from_prev(&mut self, idx: usize) {
        let (left, right) = self.children.split_at_mut(idx);
        let sibling = &mut left[idx - 1];
        let child = &mut right[0];

        let Some(up) = sibling.keys.pop() else {
            return;
        };
        let down = mem::replace(&mut self.keys[idx - 1], up);
        child.keys.insert(0, down);
        if !child.leaf {
            if let Some(c) = sibling.children.pop() {
                child.children.insert(0, c);
            }
        }
        trace!("btree: borrow from left sibling of child {idx}");
    }

    /// Rotates the right sibling's first key up and the separator down.
    fn borrow_from_next(&mut self, idx: usize) {
        let (left, right) = self.children.split_at_mut(idx + 1);
        let child = &mut left[idx];
        let sibling = &mut right[0];

        if sibling.keys.is_empty() {
            return;
        }
        let up = sibling.keys.remove(0);
        let down = mem::replace(&mut self.keys[idx], up);
        child.keys.push(down);
        if !child.leaf && !sibling.children.is_empty() {
            child.children.push(sibling.children.remove(0));
        }
        trace!("btree: borrow from right sibling of child {idx}");
    }

    /// Folds `children[idx + 1]` and the separator `keys[idx]` into
    /// `children[idx]`.
    fn merge(&mut self, idx: usize) {
        let sibling = self.children.remove(idx + 1);
        let separator = self.keys.remove(idx);
        let child = &mut self.children[idx];
        child.keys.push(separator);
        child.keys.extend(sibling.keys);
        child.children.extend(sibling.children);
        trace!("btree: merge into child {idx}, now {} keys", child.keys.len());
    }

    // ── inspection ────────────────────────────────────────────────────────

    pub(crate) fn for_each_in_order<'a, F: FnMut(&'a K)>(&'a self, f: &mut F) {
        if self.leaf {
            self.keys.iter().for_each(&mut *f);
            return;
        }
        for (i, child) in self.children.iter().enumerate() {
            child.for_each_in_order(f);
            if let Some(k) = self.keys.get(i) {
                f(k);
            }
        }
    }

    /// Checks key counts, child counts and leaf depth; returns the depth of
    /// every leaf below this node.
    pub(crate) fn validate(&self, is_root: bool, order: Order) -> Result<usize, String> {
        if self.keys.len() > order.max_keys {
            return Err(format!("Node overflow: {} keys, max {}", self.keys.len(), order.max_keys));
        }
        if !is_root && self.keys.len() + 1 < order.min_degree {
            return Err(format!(
                "Node underflow: {} keys, min {}",
                self.keys.len(),
                order.min_degree - 1
            ));
        }
        if is_root && self.keys.is_empty() {
            return Err("Empty root".to_string());
        }
        if self.leaf {
            if !self.children.is_empty() {
                return Err("Leaf has children".to_string());
            }
            return Ok(1);
        }
        if self.children.len() != self.keys.len() + 1 {
            return Err(format!(
                "Child count mismatch: {} keys, {} children",
                self.keys.len(),
                self.children.len()
            ));
        }
        let mut depth = None;
        for child in &self.children {
            let d = child.validate(false, order)?;
            if *depth.get_or_insert(d) != d {
                return Err("Leaves at unequal depth".to_string());
            }
        }
        Ok(1 + depth.unwrap_or(0))
    }
}
