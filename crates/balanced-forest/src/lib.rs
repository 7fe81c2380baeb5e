//! Ordered-key containers with different balance invariants.
//!
//! Four search trees (B-tree, AVL, red-black, splay) and an array-backed
//! min-heap. All of them order keys through a three-way comparator and share
//! the [`OrderedContainer`] capability, so a consumer can drive any of them
//! and read back an immutable [`Shape`] snapshot for display.
//!
//! Binary-tree nodes live in a [`NodeArena`]; links are `Option<u32>`
//! handles into it rather than pointers, which lets the red-black tree keep
//! a parent link without a reference cycle.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`ParentNode`] link traits, outcomes, [`Color`] |
//! [`arena`] | [`NodeArena`] with slot reuse |
//! [`util`] | traversal helpers shared by the binary trees |
//! [`btree`] | [`BTree`]: split on overflow, borrow/merge on underflow |
//! [`avl`] | [`AvlTree`]: height-balanced rotations |
//! [`red_black`] | [`RbTree`]: recolor and rotate fixups |
//! [`splay`] | [`SplayTree`]: restructures on every access |
//! [`heap`] | [`IndexedHeap`]: sift-up / sift-down over an array |
//! [`shape`] | serializable structure snapshots |
//! [`container`] | [`OrderedContainer`], [`replay`](container::replay) |
//! [`print`] | box-drawing dumps behind every `Display` impl |
//! [`fuzzer`] | seeded random keys |

pub mod arena;
pub mod avl;
pub mod btree;
pub mod container;
pub mod error;
pub mod fuzzer;
pub mod heap;
pub mod print;
pub mod red_black;
pub mod shape;
pub mod splay;
pub mod types;
pub mod util;

pub use arena::NodeArena;
pub use avl::AvlTree;
pub use btree::{BTree, BTreeConfig};
pub use container::{replay, Op, OrderedContainer};
pub use error::{ForestError, Result};
pub use heap::IndexedHeap;
pub use red_black::RbTree;
pub use shape::{BinaryShape, MultiwayShape, Shape};
pub use splay::SplayTree;
pub use types::{default_comparator, Color, InsertOutcome, Node, ParentNode, RemoveOutcome};
