//! Color-balanced binary search tree.

pub mod rb_tree;
pub mod types;
pub mod util;

pub use rb_tree::RbTree;
pub use types::{RbNode, RbNodeLike};
pub use util::assert_red_black_tree;
