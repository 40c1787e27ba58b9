//! Supporting data structures shared by the graph algorithms.
//!
//! - [`BitSet`] - word-packed bit vector used for closure matrix rows

mod bitset;

pub use bitset::{BitSet, BitSetIter};
