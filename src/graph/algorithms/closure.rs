//! Transitive closure via Warshall's algorithm.
//!
//! The closure of a directed graph with `n` nodes is the `n x n` boolean matrix whose entry
//! `(i, j)` is set iff there is a path of length at least one from node `i` to node `j`. The
//! diagonal is not implicitly reflexive: `(i, i)` is set only when `i` has a self-loop or lies
//! on a cycle.
//!
//! # Algorithm
//!
//! The matrix starts as the direct adjacency matrix. For each pivot `k` (outermost loop), every
//! row `i` that already reaches `k` absorbs row `k`:
//!
//! ```text
//! for k in 0..n:
//!     for i in 0..n:
//!         if m[i][k]:
//!             m[i] |= m[k]
//! ```
//!
//! This is the textbook triple loop `m[i][j] ||= m[i][k] && m[k][j]` with the inner `j` loop
//! replaced by a word-wise OR of [`BitSet`] rows. Row `k` cannot change during pass `k`
//! (absorbing itself is a no-op), so the result matches the scalar version bit for bit.
//!
//! # Complexity
//!
//! - Time: O(n^3 / 64)
//! - Space: O(n^2 / 8) bytes

use std::fmt;

use crate::{
    graph::{Edge, NodeKey, NodeUniverse},
    utils::BitSet,
    Error, Result,
};

/// Dense reachability matrix produced by [`compute_closure`] and [`compute_closure_in`].
///
/// Rows and columns are 0-based positions. For [`compute_closure`] node `id` lives at position
/// `id - 1`; for [`compute_closure_in`] positions are the dense indices of the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureMatrix {
    size: usize,
    rows: Vec<BitSet>,
}

impl ClosureMatrix {
    fn new(size: usize) -> Self {
        ClosureMatrix {
            size,
            rows: (0..size).map(|_| BitSet::new(size)).collect(),
        }
    }

    fn warshall(&mut self) {
        for k in 0..self.size {
            let pivot = self.rows[k].clone();
            for row in &mut self.rows {
                if row.contains(k) {
                    row.union_with(&pivot);
                }
            }
        }
    }

    /// Returns the number of rows (and columns) of the matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if a path of length at least one leads from position `from` to position
    /// `to`. Positions outside the matrix are never reachable.
    #[must_use]
    pub fn reaches(&self, from: usize, to: usize) -> bool {
        to < self.size && self.rows.get(from).is_some_and(|row| row.contains(to))
    }

    /// Returns row `index` as a vector of booleans.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn row(&self, index: usize) -> Vec<bool> {
        let bits = &self.rows[index];
        (0..self.size).map(|j| bits.contains(j)).collect()
    }

    /// Returns row `index` as its underlying bit set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn row_bits(&self, index: usize) -> &BitSet {
        &self.rows[index]
    }

    /// Returns the whole matrix as nested boolean vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.size).map(|i| self.row(i)).collect()
    }

    /// Returns how many positions are reachable from position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn reachable_count(&self, index: usize) -> usize {
        self.rows[index].count()
    }

    /// Returns every set entry as an edge between 1-based node identifiers.
    ///
    /// Feeding these edges back into [`compute_closure`] with the same size reproduces the
    /// matrix, since a closed relation is its own closure.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn implied_edges(&self) -> Vec<Edge<u32>> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .map(move |j| Edge::new((i + 1) as u32, (j + 1) as u32))
            })
            .collect()
    }
}

impl fmt::Display for ClosureMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            for j in 0..self.size {
                if j > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.rows[i].contains(j) { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Computes the transitive closure of the graph over nodes `1..=total_nodes`.
///
/// # Errors
///
/// Returns [`Error::NodeOutOfRange`] for the first edge endpoint that is `0` or greater than
/// `total_nodes`. No partial matrix is produced.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{algorithms::compute_closure, Edge};
///
/// let closure = compute_closure(3, &[Edge::new(1, 2), Edge::new(2, 3), Edge::new(1, 3)])?;
/// assert_eq!(closure.row(0), vec![false, true, true]);
/// assert_eq!(closure.row(2), vec![false, false, false]);
/// # Ok::<(), depscope::Error>(())
/// ```
pub fn compute_closure(total_nodes: usize, edges: &[Edge<u32>]) -> Result<ClosureMatrix> {
    let position = |node: u32| -> Result<usize> {
        let id = node as usize;
        if id == 0 || id > total_nodes {
            return Err(Error::NodeOutOfRange { node, total_nodes });
        }
        Ok(id - 1)
    };

    let mut matrix = ClosureMatrix::new(total_nodes);
    for edge in edges {
        let from = position(edge.origin)?;
        let to = position(edge.destination)?;
        matrix.rows[from].insert(to);
    }

    matrix.warshall();
    log::debug!(
        "computed closure over {} nodes from {} edges",
        total_nodes,
        edges.len()
    );
    Ok(matrix)
}

/// Computes the transitive closure over an explicit node universe.
///
/// Row and column `i` belong to the node with dense index `i` in `universe`.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] for the first edge endpoint that is not part of `universe`.
///
/// # Examples
///
/// ```rust
/// use depscope::graph::{algorithms::compute_closure_in, Edge, NodeUniverse};
///
/// let edges = vec![Edge::new('a', 'b'), Edge::new('b', 'c')];
/// let universe = NodeUniverse::from_edges(&edges);
/// let closure = compute_closure_in(&universe, &edges)?;
///
/// let a = universe.index_of('a').unwrap().index();
/// let c = universe.index_of('c').unwrap().index();
/// assert!(closure.reaches(a, c));
/// # Ok::<(), depscope::Error>(())
/// ```
pub fn compute_closure_in<N: NodeKey>(
    universe: &NodeUniverse<N>,
    edges: &[Edge<N>],
) -> Result<ClosureMatrix> {
    let position = |node: N| -> Result<usize> {
        universe
            .index_of(node)
            .map(|index| index.index())
            .ok_or_else(|| Error::UnknownNode(format!("{node:?}")))
    };

    let mut matrix = ClosureMatrix::new(universe.len());
    for edge in edges {
        let from = position(edge.origin)?;
        let to = position(edge.destination)?;
        matrix.rows[from].insert(to);
    }

    matrix.warshall();
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{chain_edges, cycle_edges, triangle_edges};

    #[test]
    fn test_closure_triangle() {
        let closure = compute_closure(3, &triangle_edges()).unwrap();
        assert_eq!(
            closure.to_rows(),
            vec![
                vec![false, true, true],
                vec![false, false, true],
                vec![false, false, false],
            ]
        );
    }

    #[test]
    fn test_closure_chain_is_upper_triangular() {
        let closure = compute_closure(6, &chain_edges(6)).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(closure.reaches(i, j), j > i, "entry ({i}, {j})");
            }
        }
        assert_eq!(closure.reachable_count(0), 5);
    }

    #[test]
    fn test_closure_cycle_sets_diagonal() {
        let closure = compute_closure(3, &cycle_edges()).unwrap();
        for i in 0..3 {
            assert_eq!(closure.reachable_count(i), 3);
            assert!(closure.reaches(i, i));
        }
    }

    #[test]
    fn test_closure_diagonal_not_reflexive() {
        let closure = compute_closure(2, &[Edge::new(1, 2)]).unwrap();
        assert!(!closure.reaches(0, 0));
        assert!(!closure.reaches(1, 1));
    }

    #[test]
    fn test_closure_self_loop() {
        let closure = compute_closure(2, &[Edge::new(2, 2)]).unwrap();
        assert!(closure.reaches(1, 1));
        assert!(!closure.reaches(0, 0));
    }

    #[test]
    fn test_closure_empty_edges() {
        let closure = compute_closure(4, &[]).unwrap();
        assert_eq!(closure.size(), 4);
        assert!(closure.to_rows().iter().flatten().all(|&b| !b));
        assert!(closure.implied_edges().is_empty());
    }

    #[test]
    fn test_closure_zero_nodes() {
        let closure = compute_closure(0, &[]).unwrap();
        assert_eq!(closure.size(), 0);
        assert_eq!(closure.to_string(), "");
    }

    #[test]
    fn test_closure_rejects_out_of_range() {
        let err = compute_closure(3, &[Edge::new(1, 4)]).unwrap_err();
        assert!(matches!(
            err,
            Error::NodeOutOfRange {
                node: 4,
                total_nodes: 3
            }
        ));

        let err = compute_closure(3, &[Edge::new(0, 1)]).unwrap_err();
        assert!(matches!(err, Error::NodeOutOfRange { node: 0, .. }));
    }

    #[test]
    fn test_closure_idempotent() {
        let closure = compute_closure(5, &[Edge::new(1, 3), Edge::new(3, 5), Edge::new(5, 2)])
            .unwrap();
        let again = compute_closure(5, &closure.implied_edges()).unwrap();
        assert_eq!(closure, again);
    }

    #[test]
    fn test_closure_out_of_bounds_query() {
        let closure = compute_closure(2, &[Edge::new(1, 2)]).unwrap();
        assert!(!closure.reaches(0, 9));
        assert!(!closure.reaches(9, 0));
    }

    #[test]
    fn test_closure_display() {
        let closure = compute_closure(3, &triangle_edges()).unwrap();
        assert_eq!(closure.to_string(), "0 1 1\n0 0 1\n0 0 0\n");
    }

    #[test]
    fn test_closure_in_universe() {
        let edges = vec![Edge::new(30, 10), Edge::new(10, 20)];
        let universe = NodeUniverse::from_edges(&edges);
        let closure = compute_closure_in(&universe, &edges).unwrap();

        // universe order: 10, 20, 30
        assert_eq!(closure.row(2), vec![true, true, false]);
        assert_eq!(closure.row(0), vec![false, true, false]);
    }

    #[test]
    fn test_closure_in_unknown_node() {
        let universe = NodeUniverse::from_keys(["a", "b"]);
        let err = compute_closure_in(&universe, &[Edge::new("a", "z")]).unwrap_err();
        assert!(matches!(err, Error::UnknownNode(ref name) if name == "\"z\""));
    }
}
