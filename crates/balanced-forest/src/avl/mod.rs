//! Height-balanced binary search tree.
//!
//! Nodes carry no parent link: every rotation relinks locally and returns
//! the new subtree root to its caller.

pub mod avl_tree;
pub mod types;
pub mod util;

pub use avl_tree::AvlTree;
pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, balance};
