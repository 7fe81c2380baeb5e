//! Multiway search tree with split-on-overflow and borrow/merge on
//! underflow.
//!
//! Insertion splits full children on the way down and deletion tops up thin
//! children on the way down, so neither ever walks back up.

pub mod b_tree;
pub mod config;
pub mod node;

pub use b_tree::BTree;
pub use config::{BTreeConfig, MIN_MAX_KEYS};
pub use node::BTreeNode;
