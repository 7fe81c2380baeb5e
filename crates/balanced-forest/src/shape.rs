//! Owned snapshots of container structure for rendering.
//!
//! A snapshot is detached from the container it came from: mutating the
//! container afterwards does not affect a snapshot already taken.

use serde::Serialize;

use crate::types::{Color, Node};

/// One node of a binary tree and everything below it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BinaryShape<K> {
    pub key: K,
    /// Set for red-black trees only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub left: Option<Box<BinaryShape<K>>>,
    pub right: Option<Box<BinaryShape<K>>>,
}

impl<K> BinaryShape<K> {
    pub fn height(&self) -> usize {
        let l = self.left.as_ref().map_or(0, |n| n.height());
        let r = self.right.as_ref().map_or(0, |n| n.height());
        1 + l.max(r)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Builds a snapshot of the arena subtree rooted at `node`.
    pub(crate) fn from_arena<N, F>(arena: &[N], node: Option<u32>, color_of: &F) -> Option<Box<Self>>
    where
        K: Clone,
        N: Node<K>,
        F: Fn(&N) -> Option<Color>,
    {
        let n = &arena[node? as usize];
        Some(Box::new(BinaryShape {
            key: n.key().clone(),
            color: color_of(n),
            left: Self::from_arena(arena, n.l(), color_of),
            right: Self::from_arena(arena, n.r(), color_of),
        }))
    }
}

/// One B-tree node and everything below it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MultiwayShape<K> {
    pub keys: Vec<K>,
    pub leaf: bool,
    pub children: Vec<MultiwayShape<K>>,
}

impl<K> MultiwayShape<K> {
    /// Number of levels, counting this node.
    pub fn depth(&self) -> usize {
        1 + self.children.first().map_or(0, |c| c.depth())
    }
}

/// Snapshot of any container, tagged by container family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "root", rename_all = "snake_case")]
pub enum Shape<K> {
    Binary(Option<Box<BinaryShape<K>>>),
    Multiway(Option<MultiwayShape<K>>),
    /// Heap keys in index order; children of `i` sit at `2i+1` and `2i+2`.
    Heap(Vec<K>),
}

impl<K> Shape<K> {
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Binary(root) => root.is_none(),
            Shape::Multiway(root) => root.is_none(),
            Shape::Heap(keys) => keys.is_empty(),
        }
    }
}
