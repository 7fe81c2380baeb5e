use crate::types::{Color, Node, ParentNode};

/// Color-balanced tree node.
///
/// `p` is a plain handle used for upward fixup walks; ownership of nodes
/// stays with the arena.
#[derive(Clone, Debug)]
pub struct RbNode<K> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub c: Color,
}

impl<K> RbNode<K> {
    /// New nodes start red.
    pub fn new(k: K) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            c: Color::Red,
        }
    }
}

impl<K> Node<K> for RbNode<K> {
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

impl<K> ParentNode<K> for RbNode<K> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }
}

/// Red-black specific node behavior.
pub trait RbNodeLike<K>: ParentNode<K> {
    fn leaf(key: K) -> Self;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);
}

impl<K> RbNodeLike<K> for RbNode<K> {
    fn leaf(key: K) -> Self {
        Self::new(key)
    }

    fn color(&self) -> Color {
        self.c
    }

    fn set_color(&mut self, color: Color) {
        self.c = color;
    }
}
