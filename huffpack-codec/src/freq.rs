//! Byte frequency counting.
//!
//! One pass over the input producing a weight per distinct byte value. The
//! table is also the unit of reduction for the parallel encoder: each page
//! counts locally and the per-page tables are merged into the global one.

/// Occurrence counts for each of the 256 byte values.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// An empty table.
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Count every byte of `input`.
    pub fn count(input: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in input {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Merge another table's counts into this one.
    pub fn merge(&mut self, other: &Self) {
        for (dst, src) in self.counts.iter_mut().zip(other.counts.iter()) {
            *dst += *src;
        }
    }

    /// The count for one byte value.
    #[inline]
    pub fn get(&self, value: u8) -> u64 {
        self.counts[value as usize]
    }

    /// Number of distinct byte values with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    /// The present symbols as `(value, weight)` pairs, ascending by value.
    pub fn present_symbols(&self) -> Vec<(u8, u64)> {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != 0)
            .map(|(v, &c)| (v as u8, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_basic() {
        let table = FrequencyTable::count(b"abracadabra");
        assert_eq!(table.get(b'a'), 5);
        assert_eq!(table.get(b'b'), 2);
        assert_eq!(table.get(b'r'), 2);
        assert_eq!(table.get(b'c'), 1);
        assert_eq!(table.get(b'd'), 1);
        assert_eq!(table.get(b'z'), 0);
        assert_eq!(table.distinct(), 5);
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::count(b"");
        assert_eq!(table.distinct(), 0);
        assert!(table.present_symbols().is_empty());
    }

    #[test]
    fn test_merge_matches_whole_input_count() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let (left, right) = data.split_at(17);

        let mut merged = FrequencyTable::count(left);
        merged.merge(&FrequencyTable::count(right));

        let whole = FrequencyTable::count(data);
        for v in 0..=255u8 {
            assert_eq!(merged.get(v), whole.get(v));
        }
    }

    #[test]
    fn test_present_symbols_ascending() {
        let table = FrequencyTable::count(b"cab");
        assert_eq!(
            table.present_symbols(),
            vec![(b'a', 1), (b'b', 1), (b'c', 1)]
        );
    }
}
