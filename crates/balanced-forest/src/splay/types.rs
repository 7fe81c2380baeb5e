use crate::types::Node;

/// Self-adjusting tree node: links and key only.
#[derive(Clone, Debug)]
pub struct SplayNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
}

impl<K> SplayNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
        }
    }
}

impl<K> Node<K> for SplayNode<K> {
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

/// Nodes that can be created from a bare key.
pub trait SplayNodeLike<K>: Node<K> {
    fn leaf(key: K) -> Self;
}

impl<K> SplayNodeLike<K> for SplayNode<K> {
    fn leaf(key: K) -> Self {
        Self::new(key)
    }
}
