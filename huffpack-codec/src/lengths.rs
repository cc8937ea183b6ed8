//! Length-limited code length assignment via package-merge.
//!
//! Given the weights of the present symbols, assigns each a code length in
//! `[1, 16]` such that the lengths form a complete prefix code (the Kraft
//! sum is exactly 1). This is the coin-collector construction: items start
//! as one singleton per symbol; each round sorts by weight, merges adjacent
//! pairs into packages (dropping an unpaired trailing item), and reinjects a
//! fresh singleton per symbol. Once the working list reaches `2n - 2` items,
//! the `2n - 2` lightest items are selected and every symbol occurrence
//! inside a selected item adds one bit to that symbol's length.
//!
//! Packages hold index multisets into the caller's symbol slice rather than
//! pointers, so the accumulator graph stays flat and owned.

use huffpack_core::MAX_CODE_LENGTH;
use huffpack_core::error::{HuffpackError, Result};

/// A package-merge accumulator: a combined weight and the multiset of symbol
/// indices whose lengths it will increment if selected.
#[derive(Debug, Clone)]
struct MergeItem {
    weight: u64,
    symbols: Vec<u32>,
}

impl MergeItem {
    fn singleton(index: usize, weight: u64) -> Self {
        Self {
            weight,
            symbols: vec![index as u32],
        }
    }

    fn absorb(&mut self, other: MergeItem) {
        self.weight += other.weight;
        self.symbols.extend(other.symbols);
    }
}

/// Assign a code length to each weight.
///
/// Returns one length per input weight, in input order. All weights must be
/// non-zero. A single symbol gets length 1 (the degenerate one-symbol
/// alphabet still spends one bit per occurrence).
///
/// # Errors
///
/// [`HuffpackError::CodeLengthOverflow`] if any assigned length would exceed
/// 16 bits. Assigned lengths stay within roughly `log2(n) + 1` bits, so a
/// byte alphabet (n <= 256) can never overflow; the bound binds only for
/// alphabets beyond 2^16 symbols.
pub fn assign_lengths(weights: &[u64]) -> Result<Vec<u8>> {
    let n = weights.len();
    debug_assert!(weights.iter().all(|&w| w != 0));

    if n == 0 {
        return Ok(Vec::new());
    }
    let mut lengths = vec![0u32; n];
    if n == 1 {
        return Ok(vec![1]);
    }

    // 2n - 2: the non-root node count of a Huffman tree over n leaves.
    let cutoff = 2 * n - 2;

    let singletons: Vec<MergeItem> = weights
        .iter()
        .enumerate()
        .map(|(i, &w)| MergeItem::singleton(i, w))
        .collect();

    let mut items = singletons.clone();
    while items.len() < cutoff {
        // Stable sort keeps tie handling deterministic.
        items.sort_by_key(|item| item.weight);

        let mut packaged = Vec::with_capacity(items.len() / 2 + n);
        let mut drain = items.into_iter();
        // Pairwise adjacent merge; an unpaired trailing item is dropped.
        while let (Some(mut a), Some(b)) = (drain.next(), drain.next()) {
            a.absorb(b);
            packaged.push(a);
        }
        drop(drain);

        packaged.extend(singletons.iter().cloned());
        items = packaged;
    }

    // Select the cutoff lightest items; each occurrence of a symbol in a
    // selected item is one bit of code length.
    items.sort_by_key(|item| item.weight);
    for item in items.iter().take(cutoff) {
        for &index in &item.symbols {
            lengths[index as usize] += 1;
        }
    }

    lengths
        .into_iter()
        .map(|len| {
            if len > MAX_CODE_LENGTH as u32 {
                Err(HuffpackError::code_length_overflow(
                    len,
                    MAX_CODE_LENGTH as u32,
                ))
            } else {
                Ok(len as u8)
            }
        })
        .collect()
}

/// The Kraft sum of a length multiset, in units of 2^-16.
///
/// A complete prefix code sums to exactly `1 << 16`.
pub fn kraft_sum(lengths: &[u8]) -> u64 {
    lengths
        .iter()
        .filter(|&&len| len > 0)
        .map(|&len| 1u64 << (MAX_CODE_LENGTH - len.min(MAX_CODE_LENGTH)))
        .sum()
}

/// Whether a length multiset forms a complete prefix code.
///
/// The single symbol of length 1 is the accepted degenerate exception: its
/// Kraft sum is only 1/2, but the one-symbol alphabet has no second codeword
/// to complete the space with.
pub fn is_kraft_complete(lengths: &[u8]) -> bool {
    let present: Vec<u8> = lengths.iter().copied().filter(|&len| len > 0).collect();
    match present.as_slice() {
        [] => false,
        [1] => true,
        _ => {
            present.iter().all(|&len| len <= MAX_CODE_LENGTH)
                && kraft_sum(&present) == 1 << MAX_CODE_LENGTH
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_complete(weights: &[u64]) -> Vec<u8> {
        let lengths = assign_lengths(weights).unwrap();
        assert_eq!(lengths.len(), weights.len());
        assert!(
            lengths.iter().all(|&l| (1..=MAX_CODE_LENGTH).contains(&l)),
            "lengths out of range: {lengths:?}"
        );
        if weights.len() >= 2 {
            assert_eq!(
                kraft_sum(&lengths),
                1 << MAX_CODE_LENGTH,
                "Kraft sum not 1 for weights {weights:?}: lengths {lengths:?}"
            );
        }
        lengths
    }

    #[test]
    fn test_single_symbol_gets_length_one() {
        assert_eq!(assign_lengths(&[1000]).unwrap(), vec![1]);
    }

    #[test]
    fn test_two_equal_symbols() {
        assert_eq!(assign_lengths(&[1, 1]).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_two_skewed_symbols() {
        // Two symbols always get one bit each, however skewed.
        assert_eq!(assign_lengths(&[1, 1_000_000]).unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_three_symbols_skewed() {
        let lengths = assert_complete(&[1, 1, 100]);
        assert_eq!(lengths, vec![2, 2, 1]);
    }

    #[test]
    fn test_four_equal_symbols() {
        let lengths = assert_complete(&[5, 5, 5, 5]);
        assert_eq!(lengths, vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_kraft_equality_various_weight_sets() {
        assert_complete(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_complete(&[1, 1, 2, 4, 8]);
        assert_complete(&[10, 10, 10]);
        assert_complete(&[1, 1, 1, 1, 1, 1, 1]);
        assert_complete(&[7, 1, 1, 1, 1]);
    }

    #[test]
    fn test_full_byte_alphabet() {
        // 256 symbols with a spread of weights; byte alphabets stay well
        // within the 16-bit bound.
        let weights: Vec<u64> = (0..256u64).map(|i| i * i + 1).collect();
        assert_complete(&weights);
    }

    #[test]
    fn test_heavier_weight_never_longer_code() {
        let weights = [1u64, 2, 4, 8, 16, 32, 64, 128];
        let lengths = assert_complete(&weights);
        for pair in lengths.windows(2) {
            // weights ascend, so lengths must not.
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_overflow_past_sixteen_bits() {
        // A flat alphabet of 2^17 symbols needs 17-bit codes, one past the
        // representable maximum.
        let weights = vec![1u64; 1 << 17];
        let err = assign_lengths(&weights).unwrap_err();
        assert!(matches!(
            err,
            HuffpackError::CodeLengthOverflow { length: 17, max: 16 }
        ));
    }

    #[test]
    fn test_is_kraft_complete() {
        assert!(is_kraft_complete(&[1, 1]));
        assert!(is_kraft_complete(&[1, 2, 2]));
        assert!(is_kraft_complete(&[1])); // degenerate single symbol
        assert!(!is_kraft_complete(&[]));
        assert!(!is_kraft_complete(&[2, 2, 2])); // incomplete
        assert!(!is_kraft_complete(&[1, 1, 1])); // over-subscribed
        assert!(!is_kraft_complete(&[1, 17])); // length out of range
    }
}
