use std::fmt;

use log::debug;

use crate::arena::NodeArena;
use crate::container::OrderedContainer;
use crate::print::print_binary;
use crate::shape::{BinaryShape, Shape};
use crate::types::{default_comparator, Color, InsertOutcome, Node, RemoveOutcome};
use crate::util::{find, height, keys_in_order};

use super::types::RbNode;
use super::util;

/// Red-black tree set.
///
/// Search results are arena handles; read them back with [`RbTree::key`]
/// or [`RbTree::node`].
pub struct RbTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: NodeArena<RbNode<K>>,
    root: Option<u32>,
    len: usize,
    comparator: C,
}

impl<K> RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for RbTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
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
            InsertOutcome::Duplicate => debug!("rb: duplicate key ignored"),
        }
        outcome
    }

    pub fn delete(&mut self, key: &K) -> RemoveOutcome {
        let (root, outcome) = util::remove(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        match outcome {
            RemoveOutcome::Removed => self.len -= 1,
            RemoveOutcome::NotFound => debug!("rb: delete of absent key ignored"),
        }
        outcome
    }

    pub fn search(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, idx: u32) -> &RbNode<K> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn color(&self, idx: u32) -> Color {
        self.node(idx).c
    }

    /// Black nodes on every root-to-virtual-leaf path, the virtual leaf
    /// included.
    pub fn black_height(&self) -> usize {
        util::black_height(&self.arena, self.root)
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
        BinaryShape::from_arena(&self.arena, self.root, &|n: &RbNode<K>| Some(n.c))
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        util::assert_red_black_tree(&self.arena, self.root, &self.comparator)?;
        let live = self.arena.live();
        if live != self.len {
            return Err(format!("Length mismatch: {} live nodes, len {}", live, self.len));
        }
        Ok(())
    }
}

impl<K: fmt::Debug, C> fmt::Display for RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = &self.arena;
        let out = print_binary(
            "",
            self.root,
            &|i| (arena[i as usize].l, arena[i as usize].r),
            &|i| {
                let n = &arena[i as usize];
                let color = if n.c.is_black() { "black" } else { "red" };
                format!("{:?} {color}", n.k)
            },
        );
        write!(f, "RbTree{}", if self.root.is_some() { "\n" } else { " " })?;
        f.write_str(&out)
    }
}

impl<K: Clone, C> OrderedContainer<K> for RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn insert(&mut self, key: K) -> InsertOutcome {
        RbTree::insert(self, key)
    }

    fn delete(&mut self, key: &K) -> RemoveOutcome {
        RbTree::delete(self, key)
    }

    fn contains(&mut self, key: &K) -> bool {
        RbTree::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self) -> Vec<K> {
        RbTree::keys(self)
    }

    fn shape(&self) -> Shape<K> {
        Shape::Binary(RbTree::shape(self))
    }
}
