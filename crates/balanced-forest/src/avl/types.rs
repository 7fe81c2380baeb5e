use crate::types::Node;

/// Height-balanced tree node.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// Cached subtree height; a leaf is 1.
    pub h: u32,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            h: 1,
        }
    }
}

impl<K> Node<K> for AvlNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }

    fn key(&self) -> &K {
        &self.k
    }

    fn key_mut(&mut self) -> &mut K {
        &mut self.k
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike<K>: Node<K> {
    fn leaf(key: K) -> Self;
    fn h(&self) -> u32;
    fn set_h(&mut self, h: u32);
}

impl<K> AvlNodeLike<K> for AvlNode<K> {
    fn leaf(key: K) -> Self {
        Self::new(key)
    }

    fn h(&self) -> u32 {
        self.h
    }

    fn set_h(&mut self, h: u32) {
        self.h = h;
    }
}
