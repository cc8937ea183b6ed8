//! Canonical code construction and the table-lookup decoder.
//!
//! Codes are assigned in the DEFLATE canonical order: symbols sorted by
//! `(length ascending, value ascending)` receive numerically increasing
//! codewords, starting from all-zeros. The assignment is a pure function of
//! the `(value, length)` pairs, which is what lets the decoder regenerate
//! byte-identical codes from the stored header alone.
//!
//! Decoding uses a single window lookup instead of a trie walk: canonical
//! codes are numerically monotonic in sort order and prefix-free, so their
//! left-justified windows partition the lookup space into contiguous
//! non-overlapping ranges. The window is as wide as the longest code in the
//! table (up to 16 bits), never narrower, so every code's range is exact.

use huffpack_core::codeword::{Codeword, MAX_CODE_LENGTH};

/// Sort `(value, length)` pairs into canonical order.
///
/// This total order is the canonical-code contract; encode and decode must
/// reproduce it identically.
pub fn canonical_sort(symbols: &mut [(u8, u8)]) {
    symbols.sort_by_key(|&(value, length)| (length, value));
}

/// Per-byte-value canonical codewords.
///
/// Slots for absent byte values hold the empty codeword and are never read
/// by a well-formed encode or decode.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Codeword; 256],
}

impl CodeTable {
    /// Build canonical codes for the given `(value, length)` pairs.
    ///
    /// All lengths must be in `[1, 16]` and the multiset must be
    /// Kraft-complete (or the single degenerate length-1 symbol); the header
    /// parser guarantees this before decode reaches here, and the length
    /// assigner guarantees it on the encode side.
    pub fn from_lengths(symbols: &[(u8, u8)]) -> Self {
        let mut codes = [Codeword::default(); 256];
        if symbols.is_empty() {
            return Self { codes };
        }

        let mut sorted = symbols.to_vec();
        canonical_sort(&mut sorted);

        let mut code = Codeword::zero(sorted[0].1);
        codes[sorted[0].0 as usize] = code;
        for &(value, length) in &sorted[1..] {
            code.next(length);
            codes[value as usize] = code;
        }
        Self { codes }
    }

    /// The codeword for one byte value.
    #[inline]
    pub fn get(&self, value: u8) -> Codeword {
        self.codes[value as usize]
    }
}

/// Window-lookup decode table.
///
/// Indexed by the next `bits` bits of the stream, left-justified; each entry
/// is the decoded byte value and the true codeword length to advance by.
#[derive(Debug, Clone)]
pub struct DecodeTable {
    entries: Vec<(u8, u8)>,
    bits: u8,
}

impl DecodeTable {
    /// Build the table for the given `(value, length)` pairs.
    ///
    /// Same preconditions as [`CodeTable::from_lengths`]; the barrier fill
    /// below covers the whole window space exactly when the lengths are
    /// Kraft-complete.
    pub fn from_lengths(symbols: &[(u8, u8)]) -> Self {
        debug_assert!(!symbols.is_empty());

        let mut sorted = symbols.to_vec();
        canonical_sort(&mut sorted);
        let codes = CodeTable::from_lengths(&sorted);

        let bits = sorted.last().map(|&(_, length)| length).unwrap_or(1);
        debug_assert!(bits >= 1 && bits <= MAX_CODE_LENGTH);
        let size = 1usize << bits;
        let mut entries = vec![(0u8, 0u8); size];

        for (i, &(value, length)) in sorted.iter().enumerate() {
            let start = barrier(codes.get(value), bits) as usize;
            let end = match sorted.get(i + 1) {
                Some(&(next_value, _)) => barrier(codes.get(next_value), bits) as usize,
                // The last symbol fills through the end of the window space;
                // for the degenerate single-symbol table this also covers
                // the never-written half.
                None => size,
            };
            for entry in &mut entries[start..end] {
                *entry = (value, length);
            }
        }

        Self { entries, bits }
    }

    /// Window width in bits.
    #[inline]
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// Resolve a left-justified window to `(value, length)`.
    #[inline]
    pub fn lookup(&self, window: u16) -> (u8, u8) {
        self.entries[window as usize]
    }
}

/// The first window value whose range belongs to `code`: the code value
/// shifted up to the window width.
#[inline]
pub fn barrier(code: Codeword, window_bits: u8) -> u16 {
    debug_assert!(code.len() <= window_bits);
    code.value() << (window_bits - code.len())
}
