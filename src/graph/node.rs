//! Node identifiers.
//!
//! Two notions of "node" meet in this crate:
//!
//! - **Node keys** are the caller's identifiers as they appear in an edge list. Any
//!   [`NodeKey`] type works; `u32` is the canonical case.
//! - **Node indices** ([`NodeIndex`]) are dense, 0-based positions assigned by a
//!   [`NodeUniverse`](crate::graph::NodeUniverse). They address rows and columns of a
//!   closure matrix and never escape into adjacency mappings.

use std::{fmt, hash::Hash};

/// Requirements for a node identifier.
///
/// Identifiers must be cheap to copy, totally ordered (for deterministic iteration and
/// tie-breaking), hashable (for visited sets) and shareable across threads (for parallel
/// ranking). The trait is implemented automatically for every type that meets these bounds.
pub trait NodeKey: Copy + Ord + Hash + fmt::Debug + Send + Sync {}

impl<T> NodeKey for T where T: Copy + Ord + Hash + fmt::Debug + Send + Sync {}

/// A dense, 0-based index of a node within a [`NodeUniverse`](crate::graph::NodeUniverse).
///
/// `NodeIndex` wraps a `usize` so that matrix positions cannot be confused with the
/// caller's node identifiers. For the canonical integer case, identifier `id` of the dense
/// range `1..=n` maps to index `id - 1`.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{NodeIndex, NodeUniverse};
///
/// let universe = NodeUniverse::dense(5);
/// assert_eq!(universe.index_of(3), Some(NodeIndex::new(2)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// Creates a new `NodeIndex` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeIndex(index)
    }

    /// Returns the raw index value.
    ///
    /// The index can be used directly to address rows of a
    /// [`ClosureMatrix`](crate::graph::algorithms::ClosureMatrix).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeIndex({})", self.0)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for NodeIndex {
    #[inline]
    fn from(index: usize) -> Self {
        NodeIndex(index)
    }
}

impl From<NodeIndex> for usize {
    #[inline]
    fn from(node: NodeIndex) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_node_key<N: NodeKey>(_: N) {}

    #[test]
    fn test_node_key_blanket_impls() {
        assert_node_key(1u32);
        assert_node_key(7u64);
        assert_node_key('a');
        assert_node_key("student");
        assert_node_key((1u8, 2u8));
    }

    #[test]
    fn test_node_index_roundtrip() {
        let idx: NodeIndex = 42usize.into();
        assert_eq!(idx.index(), 42);
        let raw: usize = idx.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_node_index_ordering() {
        let mut indices = vec![NodeIndex::new(3), NodeIndex::new(1), NodeIndex::new(2)];
        indices.sort();
        assert_eq!(
            indices,
            vec![NodeIndex::new(1), NodeIndex::new(2), NodeIndex::new(3)]
        );
    }

    #[test]
    fn test_node_index_hash() {
        let mut set = HashSet::new();
        set.insert(NodeIndex::new(1));
        set.insert(NodeIndex::new(1));
        set.insert(NodeIndex::new(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_index_formatting() {
        let idx = NodeIndex::new(7);
        assert_eq!(format!("{idx:?}"), "NodeIndex(7)");
        assert_eq!(format!("{idx}"), "#7");
    }
}
