//! Common capability shared by all containers.

use crate::shape::Shape;
use crate::types::{InsertOutcome, RemoveOutcome};

/// Insert, delete, membership and shape export over ordered keys.
///
/// `contains` takes `&mut self` because a splay tree restructures on every
/// access.
pub trait OrderedContainer<K> {
    fn insert(&mut self, key: K) -> InsertOutcome;

    fn delete(&mut self, key: &K) -> RemoveOutcome;

    fn contains(&mut self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys in ascending order for trees, index order for the heap.
    fn keys(&self) -> Vec<K>;

    fn shape(&self) -> Shape<K>;

    /// Inserts every key in order; returns how many were new.
    fn insert_all<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        Self: Sized,
    {
        keys.into_iter()
            .fold(0, |n, k| n + usize::from(self.insert(k).is_inserted()))
    }
}

/// A recorded mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op<K> {
    Insert(K),
    Delete(K),
}

/// Applies `ops` in order to `container` and returns it.
///
/// Rebuilding from an empty container with a prefix of a recorded sequence
/// is how a consumer steps backward without the container keeping history.
pub fn replay<K, C, I>(mut container: C, ops: I) -> C
where
    C: OrderedContainer<K>,
    I: IntoIterator<Item = Op<K>>,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                let _ = container.insert(k);
            }
            Op::Delete(k) => {
                let _ = container.delete(&k);
            }
        }
    }
    container
}
