//! A bit vector for compact boolean rows.
//!
//! This module provides the bit set that backs each row of a
//! [`ClosureMatrix`](crate::graph::algorithms::ClosureMatrix). Storing 64 columns per word
//! keeps an `N x N` reachability matrix at `N * N / 8` bytes and lets Warshall's inner loop
//! run as a word-wise OR instead of a per-column branch.
//!
//! # Example
//!
//! ```rust
//! use depscope::utils::BitSet;
//!
//! let mut set = BitSet::new(100);
//! set.insert(0);
//! set.insert(50);
//! set.insert(99);
//!
//! assert!(set.contains(50));
//! assert_eq!(set.count(), 3);
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 50, 99]);
//! ```

/// A fixed-capacity bit vector.
///
/// Indices range over `0..len()`. Bits beyond the capacity in the final word are always
/// zero, so word-level operations never produce phantom members.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// The bits, stored as a vector of words.
    words: Vec<u64>,
    /// The number of bits in the set.
    len: usize,
}

impl BitSet {
    /// Creates a new empty bit set with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let num_words = capacity.div_ceil(64);
        Self {
            words: vec![0; num_words],
            len: capacity,
        }
    }

    /// Returns the capacity of this bit set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bit set has no bits set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn insert(&mut self, index: usize) {
        assert!(index < self.len, "index out of bounds");
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        assert!(index < self.len, "index out of bounds");
        (self.words[index / 64] & (1u64 << (index % 64))) != 0
    }

    /// Returns the number of bits set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Computes the union with another bit set (in place).
    ///
    /// Returns `true` if `self` changed.
    ///
    /// # Panics
    ///
    /// Panics if the two sets have different capacities.
    pub fn union_with(&mut self, other: &Self) -> bool {
        assert_eq!(self.len, other.len, "bit sets must have same length");
        let mut changed = false;
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            let old = *a;
            *a |= *b;
            changed |= old != *a;
        }
        changed
    }

    /// Returns an iterator over the indices of set bits, in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            set: self,
            word_idx: 0,
            bit_idx: 0,
        }
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set bits in a `BitSet`.
pub struct BitSetIter<'a> {
    set: &'a BitSet,
    word_idx: usize,
    bit_idx: usize,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.set.words.len() {
            let word = self.set.words[self.word_idx];
            while self.bit_idx < 64 {
                let idx = self.word_idx * 64 + self.bit_idx;
                if idx >= self.set.len {
                    return None;
                }
                self.bit_idx += 1;
                if (word & (1u64 << (self.bit_idx - 1))) != 0 {
                    return Some(idx);
                }
            }
            self.word_idx += 1;
            self.bit_idx = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitset_basic() {
        let mut bs = BitSet::new(100);
        assert!(bs.is_empty());
        assert_eq!(bs.count(), 0);
        assert_eq!(bs.len(), 100);

        bs.insert(0);
        bs.insert(50);
        bs.insert(99);

        assert!(!bs.is_empty());
        assert_eq!(bs.count(), 3);
        assert!(bs.contains(0));
        assert!(bs.contains(50));
        assert!(bs.contains(99));
        assert!(!bs.contains(1));
    }

    #[test]
    fn test_bitset_insert_is_idempotent() {
        let mut bs = BitSet::new(10);
        bs.insert(3);
        bs.insert(3);
        assert_eq!(bs.count(), 1);
    }

    #[test]
    fn test_bitset_union_reports_change() {
        let mut a = BitSet::new(130);
        let mut b = BitSet::new(130);

        a.insert(0);
        a.insert(1);
        b.insert(1);
        b.insert(129);

        assert!(a.union_with(&b));
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![0, 1, 129]);

        // Second union adds nothing new.
        assert!(!a.union_with(&b));
    }

    #[test]
    #[should_panic(expected = "bit sets must have same length")]
    fn test_bitset_union_length_mismatch() {
        let mut a = BitSet::new(10);
        let b = BitSet::new(11);
        a.union_with(&b);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_bitset_insert_out_of_bounds() {
        let mut bs = BitSet::new(64);
        bs.insert(64);
    }

    #[test]
    fn test_bitset_iter_across_words() {
        let mut bs = BitSet::new(200);
        bs.insert(5);
        bs.insert(63);
        bs.insert(64);
        bs.insert(199);

        let bits: Vec<_> = bs.iter().collect();
        assert_eq!(bits, vec![5, 63, 64, 199]);
    }

    #[test]
    fn test_bitset_zero_capacity() {
        let bs = BitSet::new(0);
        assert!(bs.is_empty());
        assert_eq!(bs.iter().count(), 0);
    }

    #[test]
    fn test_bitset_debug_format() {
        let mut bs = BitSet::new(8);
        bs.insert(1);
        bs.insert(4);
        assert_eq!(format!("{bs:?}"), "{1, 4}");
    }
}
