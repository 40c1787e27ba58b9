//! Explicit, ordered sets of node identifiers.
//!
//! This module provides [`NodeUniverse`], the "universe of nodes" passed alongside an edge list
//! whenever an algorithm needs to enumerate every node or address nodes by a dense index.
//!
//! # Motivation
//!
//! Datasets keyed by `1..=n` invite code that loops over the integer range and indexes
//! matrices with `id - 1`. That breaks as soon as identifiers are sparse or not integers. A
//! `NodeUniverse` makes the node set explicit instead:
//!
//! 1. Build it from a dense range ([`NodeUniverse::dense`]) or from the endpoints of an edge
//!    list ([`NodeUniverse::from_edges`]).
//! 2. Enumerate it to drive per-node computations; its order is the tie-break order of
//!    rankings.
//! 3. Map keys to [`NodeIndex`] positions (and back) to address rows of a closure matrix.
//!
//! # Examples
//!
//! ```rust
//! use depscope::graph::{Edge, NodeIndex, NodeUniverse};
//!
//! let edges = vec![Edge::new(40, 10), Edge::new(10, 25)];
//! let universe = NodeUniverse::from_edges(&edges);
//!
//! // Endpoints are enumerated in ascending order.
//! assert_eq!(universe.iter().collect::<Vec<_>>(), vec![10, 25, 40]);
//! assert_eq!(universe.index_of(25), Some(NodeIndex::new(1)));
//! assert_eq!(universe.key(NodeIndex::new(2)), Some(40));
//! ```

use std::collections::HashMap;

use crate::graph::{Edge, NodeIndex, NodeKey, WeightedEdge};

/// An ordered set of node identifiers with a bidirectional mapping to dense indices.
///
/// Keys are stored in enumeration order; the first key has index 0. Inserting a key that is
/// already present is a no-op that returns the existing index.
///
/// # Type Parameters
///
/// * `N` - The node identifier type
///
/// # Thread Safety
///
/// `NodeUniverse<N>` is `Send` and `Sync`, and is never mutated by the algorithms that read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeUniverse<N: NodeKey> {
    /// Keys in enumeration order; position is the dense index
    keys: Vec<N>,
    /// Map from key to its dense index
    key_to_index: HashMap<N, NodeIndex>,
}

impl<N: NodeKey> Default for NodeUniverse<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> NodeUniverse<N> {
    /// Creates a new empty universe.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            key_to_index: HashMap::new(),
        }
    }

    /// Creates a new empty universe with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            key_to_index: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a universe from keys in the given order, dropping repeated keys.
    ///
    /// The first occurrence of each key fixes its position.
    pub fn from_keys<I: IntoIterator<Item = N>>(keys: I) -> Self {
        let mut universe = Self::new();
        for key in keys {
            universe.insert(key);
        }
        universe
    }

    /// Builds a universe from every endpoint of `edges`, in ascending key order.
    ///
    /// Nodes that only appear as destinations are included, so the result covers every node
    /// the edge list mentions.
    #[must_use]
    pub fn from_edges(edges: &[Edge<N>]) -> Self {
        Self::sorted(edges.iter().flat_map(|e| [e.origin, e.destination]))
    }

    /// Builds a universe from every endpoint of `edges`, in ascending key order.
    #[must_use]
    pub fn from_weighted_edges(edges: &[WeightedEdge<N>]) -> Self {
        Self::sorted(edges.iter().flat_map(|e| [e.origin, e.destination]))
    }

    fn sorted<I: Iterator<Item = N>>(endpoints: I) -> Self {
        let mut keys: Vec<N> = endpoints.collect();
        keys.sort_unstable();
        keys.dedup();
        Self::from_keys(keys)
    }

    /// Adds a key, or returns the index it already has.
    ///
    /// This method is idempotent - calling it multiple times with the same key
    /// always returns the same `NodeIndex`.
    pub fn insert(&mut self, key: N) -> NodeIndex {
        if let Some(&index) = self.key_to_index.get(&key) {
            return index;
        }

        let index = NodeIndex::new(self.keys.len());
        self.keys.push(key);
        self.key_to_index.insert(key, index);
        index
    }

    /// Returns the dense index of `key`, if it is part of the universe.
    #[must_use]
    pub fn index_of(&self, key: N) -> Option<NodeIndex> {
        self.key_to_index.get(&key).copied()
    }

    /// Returns the key stored at `index`, if it exists.
    #[must_use]
    pub fn key(&self, index: NodeIndex) -> Option<N> {
        self.keys.get(index.index()).copied()
    }

    /// Returns `true` if `key` is part of the universe.
    #[must_use]
    pub fn contains(&self, key: N) -> bool {
        self.key_to_index.contains_key(&key)
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the universe holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns an iterator over the keys in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = N> + '_ {
        self.keys.iter().copied()
    }

    /// Returns the keys in enumeration order as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[N] {
        &self.keys
    }

    /// Maps dense indices back to keys.
    ///
    /// Indices without a corresponding key are skipped.
    #[must_use]
    pub fn map_indices_to_keys(&self, indices: &[NodeIndex]) -> Vec<N> {
        indices.iter().filter_map(|&index| self.key(index)).collect()
    }
}

impl NodeUniverse<u32> {
    /// Creates the dense universe `1..=total_nodes`.
    ///
    /// Identifier `id` receives index `id - 1`, reproducing the classic matrix layout of
    /// integer-keyed datasets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use depscope::graph::NodeUniverse;
    ///
    /// let universe = NodeUniverse::dense(3);
    /// assert_eq!(universe.as_slice(), &[1, 2, 3]);
    /// assert!(NodeUniverse::dense(0).is_empty());
    /// ```
    #[must_use]
    pub fn dense(total_nodes: u32) -> Self {
        Self::from_keys(1..=total_nodes)
    }
}

impl<N: NodeKey> FromIterator<N> for NodeUniverse<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}
