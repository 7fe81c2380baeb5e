use std::fmt;

use log::debug;

use crate::arena::NodeArena;
use crate::container::OrderedContainer;
use crate::print::print_binary;
use crate::shape::{BinaryShape, Shape};
use crate::types::{default_comparator, InsertOutcome, Node, RemoveOutcome};
use crate::util::{height, keys_in_order, size};

use super::types::SplayNode;
use super::util;

/// Splay tree set.
///
/// Every insert, delete and search restructures the tree, which is why
/// [`SplayTree::search`] needs `&mut self`.
pub struct SplayTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: NodeArena<SplayNode<K>>,
    root: Option<u32>,
    len: usize,
    comparator: C,
}

impl<K> SplayTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for SplayTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> SplayTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            len: 0,
            comparator,
        }
    }

    pub fn insert(&mut self, key: K) -> InsertOutcome {
        let (root, outcome) = util::insert(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        match outcome {
            InsertOutcome::Inserted => self.len += 1,
            InsertOutcome::Duplicate => debug!("splay: duplicate key ignored"),
        }
        outcome
    }

    pub fn delete(&mut self, key: &K) -> RemoveOutcome {
        let (root, outcome) = util::remove(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        match outcome {
            RemoveOutcome::Removed => self.len -= 1,
            RemoveOutcome::NotFound => debug!("splay: delete of absent key ignored"),
        }
        outcome
    }

    /// Splays `key` to the root and returns its handle if present.
    ///
    /// When absent, the last node on the search path is left at the root.
    pub fn search(&mut self, key: &K) -> Option<u32> {
        self.root = util::splay(&mut self.arena, self.root, key, &self.comparator);
        let root = self.root?;
        ((self.comparator)(key, self.arena[root as usize].key()) == 0).then_some(root)
    }

    pub fn contains(&mut self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Handles a plain descent toward `key` would visit, without splaying.
    pub fn search_path(&self, key: &K) -> Vec<u32> {
        util::search_path(&self.arena, self.root, key, &self.comparator)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn root_key(&self) -> Option<&K> {
        self.root.map(|i| self.key(i))
    }

    pub fn node(&self, idx: u32) -> &SplayNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.root)
    }

    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        keys_in_order(&self.arena, self.root)
    }

    pub fn shape(&self) -> Option<Box<BinaryShape<K>>>
    where
        K: Clone,
    {
        BinaryShape::from_arena(&self.arena, self.root, &|_| None)
    }

    /// Splay trees carry no balance metadata; only ordering and node count
    /// can be checked.
    pub fn assert_valid(&self) -> Result<(), String> {
        crate::util::assert_strict_order(&self.arena, self.root, &self.comparator)?;
        let count = size(&self.arena, self.root);
        if count != self.len || self.arena.live() != self.len {
            return Err(format!(
                "Length mismatch: {count} reachable, {} live, len {}",
                self.arena.live(),
                self.len
            ));
        }
        Ok(())
    }
}

impl<K: fmt::Debug, C> fmt::Display for SplayTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = &self.arena;
        let out = print_binary(
            "",
            self.root,
            &|i| (arena[i as usize].l, arena[i as usize].r),
            &|i| format!("{:?}", arena[i as usize].k),
        );
        write!(f, "SplayTree{}", if self.root.is_some() { "\n" } else { " " })?;
        f.write_str(&out)
    }
}

impl<K: Clone, C> OrderedContainer<K> for SplayTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn insert(&mut self, key: K) -> InsertOutcome {
        SplayTree::insert(self, key)
    }

    fn delete(&mut self, key: &K) -> RemoveOutcome {
        SplayTree::delete(self, key)
    }

    fn contains(&mut self, key: &K) -> bool {
        SplayTree::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self) -> Vec<K> {
        SplayTree::keys(self)
    }

    fn shape(&self) -> Shape<K> {
        Shape::Binary(SplayTree::shape(self))
    }
}
