//! Packed prefix-code codewords.
//!
//! A [`Codeword`] is a right-justified code value together with its bit
//! length (0-16). It knows the canonical-code successor rule and how to OR
//! itself into a byte buffer at an arbitrary bit offset, MSB-first.
//!
//! # Bit Ordering
//!
//! Unlike DEFLATE's LSB-first packing, the huffpack container packs codewords
//! MSB-first within each byte: the first bit of a codeword lands in the
//! highest unused bit of the current byte. This keeps canonical codes
//! numerically ordered when read as left-justified windows, which is what the
//! table-lookup decoder relies on.
//!
//! # Example
//!
//! ```
//! use huffpack_core::codeword::Codeword;
//!
//! // Canonical codes for lengths (2, 3, 3): 00, 010, 011
//! let mut code = Codeword::zero(2);
//! assert_eq!((code.value(), code.len()), (0b00, 2));
//! code.next(3);
//! assert_eq!((code.value(), code.len()), (0b010, 3));
//! code.next(3);
//! assert_eq!((code.value(), code.len()), (0b011, 3));
//! ```

/// Maximum representable codeword length, in bits.
pub const MAX_CODE_LENGTH: u8 = 16;

/// A prefix codeword: a right-justified value and its bit length.
///
/// The default codeword has length 0 and must not be packed; table slots for
/// absent byte values carry it and are never read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codeword {
    bits: u16,
    len: u8,
}

impl Codeword {
    /// The all-zero codeword of the given length; always the first code in
    /// canonical order.
    pub fn zero(len: u8) -> Self {
        debug_assert!(len <= MAX_CODE_LENGTH);
        Self { bits: 0, len }
    }

    /// The codeword value, right-justified.
    #[inline]
    pub fn value(&self) -> u16 {
        self.bits
    }

    /// The codeword length in bits.
    #[inline]
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Whether this is the default zero-length codeword.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance to the canonical successor at `new_len` bits.
    ///
    /// Canonical rule: `value' = (value + 1) << (new_len - len)`. The caller
    /// must supply codeword lengths in non-decreasing order; `new_len` below
    /// the current length would shift by a negative amount and is a contract
    /// violation.
    #[inline]
    pub fn next(&mut self, new_len: u8) {
        debug_assert!(new_len >= self.len, "canonical lengths must not decrease");
        debug_assert!(new_len <= MAX_CODE_LENGTH);
        self.bits = (self.bits + 1) << (new_len - self.len);
        self.len = new_len;
    }

    /// OR this codeword into `dest`, starting `bit_offset` bits into
    /// `dest[0]`, MSB-first.
    ///
    /// A codeword of up to 16 bits at up to 7 bits of misalignment spans at
    /// most 3 bytes. Bits of `dest` outside `[bit_offset, bit_offset + len)`
    /// are left untouched; the caller is expected to have zero-filled the
    /// buffer, so OR-ing never needs a read-modify-mask cycle.
    #[inline]
    pub fn pack_into(&self, dest: &mut [u8], bit_offset: usize) {
        debug_assert!(bit_offset < 8);
        debug_assert!(!self.is_empty(), "cannot pack an empty codeword");
        let len = self.len as usize;
        // Left-justify into a 24-bit window so the code occupies
        // bits [bit_offset, bit_offset + len) of up to 3 bytes.
        let window = (self.bits as u32) << (24 - bit_offset - len);
        let span = (bit_offset + len).div_ceil(8);
        dest[0] |= (window >> 16) as u8;
        if span > 1 {
            dest[1] |= (window >> 8) as u8;
        }
        if span > 2 {
            dest[2] |= window as u8;
        }
    }
}

/// Read `bits` bits of `body` starting at `bit_pos`, MSB-first, as a
/// right-justified value. Positions past the end of `body` read as zero,
/// matching the zero padding of the final container byte.
#[inline]
pub fn read_window(body: &[u8], bit_pos: u64, bits: u8) -> u16 {
    debug_assert!(bits >= 1 && bits <= MAX_CODE_LENGTH);
    let byte = (bit_pos / 8) as usize;
    let phase = (bit_pos % 8) as u32;
    let b = |i: usize| body.get(byte + i).copied().unwrap_or(0) as u32;
    // phase <= 7 and bits <= 16, so 3 bytes always suffice.
    let acc = (b(0) << 16) | (b(1) << 8) | b(2);
    ((acc >> (24 - phase - bits as u32)) & ((1u32 << bits) - 1)) as u16
}
