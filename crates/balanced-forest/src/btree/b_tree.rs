use std::fmt;

use log::{debug, trace};

use crate::container::OrderedContainer;
use crate::error::Result;
use crate::print::{print_tree, PrintChild};
use crate::shape::{MultiwayShape, Shape};
use crate::types::{default_comparator, InsertOutcome, RemoveOutcome};

use super::config::{BTreeConfig, Order};
use super::node::BTreeNode;

/// B-tree set with a configurable fan-out.
///
/// Every node holds at most `max_keys` keys and every non-root node at
/// least `min_degree - 1`.
pub struct BTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<BTreeNode<K>>,
    config: BTreeConfig,
    order: Order,
    len: usize,
    comparator: C,
}

impl<K> BTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new(max_keys: usize) -> Result<Self> {
        Self::with_comparator(max_keys, default_comparator::<K>)
    }

    pub fn from_config(config: BTreeConfig) -> Result<Self> {
        Self::with_config(config, default_comparator::<K>)
    }
}

impl<K> Default for BTree<K, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        let config = BTreeConfig::default();
        Self {
            root: None,
            config,
            order: config.order(),
            len: 0,
            comparator: default_comparator::<K>,
        }
    }
}

impl<K, C> BTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(max_keys: usize, comparator: C) -> Result<Self> {
        Self::with_config(BTreeConfig::new(max_keys), comparator)
    }

    pub fn with_config(config: BTreeConfig, comparator: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            root: None,
            config,
            order: config.order(),
            len: 0,
            comparator,
        })
    }

    pub fn config(&self) -> BTreeConfig {
        self.config
    }

    pub fn insert(&mut self, key: K) -> InsertOutcome {
        if self.contains(&key) {
            debug!("btree: duplicate key ignored");
            return InsertOutcome::Duplicate;
        }
        let order = self.order;
        let root = self.root.get_or_insert_with(BTreeNode::new_leaf);
        if root.keys.len() == order.max_keys {
            let old = std::mem::replace(root, BTreeNode::new_leaf());
            root.leaf = false;
            root.children.push(old);
            root.split_child(0, order);
            trace!("btree: root split, height now {}", self.height());
        }
        if let Some(root) = self.root.as_mut() {
            root.insert_non_full(key, order, &self.comparator);
        }
        self.len += 1;
        InsertOutcome::Inserted
    }

    /// Deleting an absent key leaves the structure untouched: the top-down
    /// rebalancing only runs once the key is known to be present.
    pub fn delete(&mut self, key: &K) -> RemoveOutcome {
        if !self.contains(key) {
            debug!("btree: delete of absent key ignored");
            return RemoveOutcome::NotFound;
        }
        let Some(root) = self.root.as_mut() else {
            return RemoveOutcome::NotFound;
        };
        let outcome = root.remove(key, self.order, &self.comparator);

        if root.keys.is_empty() {
            if root.leaf {
                self.root = None;
            } else {
                let child = root.children.pop();
                self.root = child;
                trace!("btree: root collapsed");
            }
        }

        if outcome.is_removed() {
            self.len -= 1;
        }
        outcome
    }

    /// The node holding `key`, if any.
    pub fn search(&self, key: &K) -> Option<&BTreeNode<K>> {
        self.root.as_ref()?.search(key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    pub fn root(&self) -> Option<&BTreeNode<K>> {
        self.root.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Number of node levels; zero when empty.
    pub fn height(&self) -> usize {
        let mut depth = 0;
        let mut node = self.root.as_ref();
        while let Some(n) = node {
            depth += 1;
            node = n.children.first();
        }
        depth
    }

    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = &self.root {
            root.for_each_in_order(&mut |k| out.push(k.clone()));
        }
        out
    }

    pub fn shape(&self) -> Option<MultiwayShape<K>>
    where
        K: Clone,
    {
        fn build<K: Clone>(node: &BTreeNode<K>) -> MultiwayShape<K> {
            MultiwayShape {
                keys: node.keys.clone(),
                leaf: node.leaf,
                children: node.children.iter().map(build).collect(),
            }
        }
        self.root.as_ref().map(build)
    }

    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        let Some(root) = &self.root else {
            if self.len != 0 {
                return Err(format!("Empty tree with len {}", self.len));
            }
            return Ok(());
        };
        root.validate(true, self.order)?;

        let mut count = 0usize;
        let mut prev: Option<&K> = None;
        let mut error = None;
        root.for_each_in_order(&mut |k| {
            count += 1;
            if let Some(p) = prev {
                if error.is_none() && (self.comparator)(p, k) >= 0 {
                    error = Some(format!("Keys out of order at position {count}"));
                }
            }
            prev = Some(k);
        });
        if let Some(e) = error {
            return Err(e);
        }
        if count != self.len {
            return Err(format!("Length mismatch: {count} keys, len {}", self.len));
        }
        Ok(())
    }
}

fn print_node<K: fmt::Debug>(tab: &str, node: &BTreeNode<K>) -> String {
    let closures: Vec<Box<PrintChild<'_>>> = node
        .children
        .iter()
        .map(|c| Box::new(move |tab: &str| print_node(tab, c)) as Box<PrintChild<'_>>)
        .collect();
    let children: Vec<Option<&PrintChild<'_>>> = closures.iter().map(|c| Some(c.as_ref())).collect();
    format!("{:?}{}", node.keys, print_tree(tab, &children))
}

impl<K: fmt::Debug, C> fmt::Display for BTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            None => f.write_str("BTree ∅"),
            Some(root) => write!(f, "BTree\n{}", print_node("", root)),
        }
    }
}

impl<K: Clone, C> OrderedContainer<K> for BTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn insert(&mut self, key: K) -> InsertOutcome {
        BTree::insert(self, key)
    }

    fn delete(&mut self, key: &K) -> RemoveOutcome {
        BTree::delete(self, key)
    }

    fn contains(&mut self, key: &K) -> bool {
        BTree::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self) -> Vec<K> {
        BTree::keys(self)
    }

    fn shape(&self) -> Shape<K> {
        Shape::Multiway(BTree::shape(self))
    }
}
