//! Array-backed binary min-heap.
//!
//! Structure lives entirely in the index: the parent of `i` is
//! `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`. Unlike the tree
//! variants the heap keeps repeated keys.

use std::fmt;

use log::{debug, trace};

use crate::container::OrderedContainer;
use crate::print::{print_tree, PrintChild};
use crate::shape::Shape;
use crate::types::{default_comparator, InsertOutcome, RemoveOutcome};

#[inline]
pub fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
pub fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Binary min-heap whose keys are addressed by array index.
pub struct IndexedHeap<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    heap: Vec<K>,
    comparator: C,
}

impl<K> IndexedHeap<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for IndexedHeap<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> IndexedHeap<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            heap: Vec::new(),
            comparator,
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        (self.comparator)(&self.heap[a], &self.heap[b]) < 0
    }

    /// Always [`InsertOutcome::Inserted`]; repeats are kept.
    pub fn insert(&mut self, key: K) -> InsertOutcome {
        self.heap.push(key);
        self.sift_up(self.heap.len() - 1);
        InsertOutcome::Inserted
    }

    /// Removes the first occurrence of `key` in index order.
    pub fn delete(&mut self, key: &K) -> RemoveOutcome {
        let Some(index) = self.position(key) else {
            debug!("heap: delete of absent key ignored");
            return RemoveOutcome::NotFound;
        };
        self.heap.swap_remove(index);
        if index < self.heap.len() {
            // The element moved in from the tail may belong either side.
            self.sift_down(index);
            self.sift_up(index);
        }
        RemoveOutcome::Removed
    }

    /// Removes and returns the minimum.
    pub fn pop(&mut self) -> Option<K> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = parent(i);
            if !self.less(i, p) {
                break;
            }
            trace!("heap: sift up {i} -> {p}");
            self.heap.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let (l, r) = (left_child(i), right_child(i));
            let mut smallest = i;
            if l < len && self.less(l, smallest) {
                smallest = l;
            }
            if r < len && self.less(r, smallest) {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            trace!("heap: sift down {i} -> {smallest}");
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }

    /// Index of the first key equal to `key`, by linear scan.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.heap.iter().position(|k| (self.comparator)(k, key) == 0)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn peek(&self) -> Option<&K> {
        self.heap.first()
    }

    pub fn get(&self, index: usize) -> Option<&K> {
        self.heap.get(index)
    }

    pub fn as_slice(&self) -> &[K] {
        &self.heap
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Keys in index order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.heap.clone()
    }

    pub fn shape(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.heap.clone()
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        for i in 1..self.heap.len() {
            if self.less(i, parent(i)) {
                return Err(format!("Heap order violated at {i}: smaller than parent {}", parent(i)));
            }
        }
        Ok(())
    }
}

fn print_slot<K: fmt::Debug>(tab: &str, heap: &[K], i: usize) -> String {
    let child = |c: usize| move |tab: &str| print_slot(tab, heap, c);
    let (l, r) = (child(left_child(i)), child(right_child(i)));
    let children: [Option<&PrintChild<'_>>; 2] = [
        (left_child(i) < heap.len()).then_some(&l as &PrintChild<'_>),
        (right_child(i) < heap.len()).then_some(&r as &PrintChild<'_>),
    ];
    format!("{:?}{}", heap[i], print_tree(tab, &children))
}

impl<K: fmt::Debug, C> fmt::Display for IndexedHeap<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.heap.is_empty() {
            return f.write_str("IndexedHeap ∅");
        }
        write!(f, "IndexedHeap\n{}", print_slot("", &self.heap, 0))
    }
}

impl<K: Clone, C> OrderedContainer<K> for IndexedHeap<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn insert(&mut self, key: K) -> InsertOutcome {
        IndexedHeap::insert(self, key)
    }

    fn delete(&mut self, key: &K) -> RemoveOutcome {
        IndexedHeap::delete(self, key)
    }

    fn contains(&mut self, key: &K) -> bool {
        IndexedHeap::contains(self, key)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn keys(&self) -> Vec<K> {
        self.heap.clone()
    }

    fn shape(&self) -> Shape<K> {
        Shape::Heap(self.heap.clone())
    }
}
