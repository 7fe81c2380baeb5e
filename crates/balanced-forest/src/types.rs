//! Node link traits and the result types shared by every container.
//!
//! Binary nodes live in a [`NodeArena`](crate::arena::NodeArena); each link
//! is an `Option<u32>` handle into that arena rather than a pointer. Only the
//! red-black tree needs upward walks, so parent links are a separate trait.

use serde::{Deserialize, Serialize};

/// Child links and key of a binary-tree node.
pub trait Node<K> {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
    fn key(&self) -> &K;
    fn key_mut(&mut self) -> &mut K;
}

/// Parent link, for nodes whose rebalancing walks toward the root.
pub trait ParentNode<K>: Node<K> {
    fn p(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
}

/// Three-way key comparator: negative, zero or positive.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Comparator used by every `new()` constructor.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Result of an insert.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsertOutcome {
    Inserted,
    /// The key was already present; nothing changed.
    Duplicate,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        self == InsertOutcome::Inserted
    }
}

/// Result of a delete.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RemoveOutcome {
    Removed,
    /// The key was absent; nothing changed.
    NotFound,
}

impl RemoveOutcome {
    pub fn is_removed(self) -> bool {
        self == RemoveOutcome::Removed
    }
}

/// Red-black node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}
