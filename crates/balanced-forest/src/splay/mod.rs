//! Self-adjusting binary search tree.
//!
//! Every access splays: the accessed key, or the last node on its search
//! path, is rotated up to the root. Nodes keep no parent link; rotations
//! return the new subtree root instead.

pub mod splay_tree;
pub mod types;
pub mod util;

pub use splay_tree::SplayTree;
pub use types::{SplayNode, SplayNodeLike};
pub use util::splay;
