//! Container header layout and validation.
//!
//! Every container starts with a fixed 264-byte header:
//!
//! ```text
//! offset  size  field
//! 0       8     original payload size, u64 little-endian
//! 8       256   per-byte-value codeword lengths (0 = value absent)
//! ```
//!
//! The body (MSB-first packed codewords, zero-padded to a byte boundary)
//! follows immediately. The header stores lengths only; both sides rebuild
//! identical canonical codes from them, so no code values travel on the wire.

use huffpack_core::{HuffpackError, Result};

use crate::lengths::is_kraft_complete;

/// Serialized header size in bytes.
pub const HEADER_SIZE: usize = 264;

/// Parsed container header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Decoded payload size in bytes.
    pub original_size: u64,
    /// Codeword length per byte value; 0 marks an absent value.
    pub code_lengths: [u8; 256],
}

impl Header {
    /// Serialize into the first [`HEADER_SIZE`] bytes of `dest`.
    pub fn write_to(&self, dest: &mut [u8]) {
        dest[..8].copy_from_slice(&self.original_size.to_le_bytes());
        dest[8..HEADER_SIZE].copy_from_slice(&self.code_lengths);
    }

    /// Parse and validate the header at the front of `container`.
    ///
    /// Rejects truncated input, lengths above 16, length multisets that are
    /// not Kraft-complete, and a claimed `original_size` the body cannot
    /// possibly hold (every symbol costs at least the shortest present code,
    /// so `original_size * min_length` must fit in the body's bits). The
    /// size check runs before any caller allocates output. Two degenerate
    /// shapes are legal: a single length-1 symbol (an incomplete code, but
    /// the only shape a one-symbol alphabet can have), and all-zero lengths
    /// when `original_size` is 0.
    pub fn parse(container: &[u8]) -> Result<Self> {
        if container.len() < HEADER_SIZE {
            return Err(HuffpackError::malformed_header(format!(
                "container is {} bytes, header needs {HEADER_SIZE}",
                container.len()
            )));
        }

        let original_size = u64::from_le_bytes(container[..8].try_into().unwrap());
        let mut code_lengths = [0u8; 256];
        code_lengths.copy_from_slice(&container[8..HEADER_SIZE]);

        let present: Vec<u8> = code_lengths.iter().copied().filter(|&l| l != 0).collect();
        if present.is_empty() {
            if original_size != 0 {
                return Err(HuffpackError::malformed_header(format!(
                    "no codeword lengths but original size is {original_size}"
                )));
            }
            return Ok(Self { original_size, code_lengths });
        }
        if let Some(&bad) = present.iter().find(|&&l| l > 16) {
            return Err(HuffpackError::malformed_header(format!(
                "codeword length {bad} exceeds the 16-bit limit"
            )));
        }
        if !is_kraft_complete(&present) {
            return Err(HuffpackError::malformed_header(
                "codeword lengths do not form a complete prefix code".to_string(),
            ));
        }

        // min_length >= 1, so the division never panics; comparing against
        // the floored quotient avoids overflowing original_size * min_length.
        let min_length = present.iter().copied().min().unwrap_or(1) as u64;
        let body_bits = (container.len() - HEADER_SIZE) as u64 * 8;
        if original_size > body_bits / min_length {
            return Err(HuffpackError::malformed_header(format!(
                "claimed size {original_size} cannot fit in a {}-byte body",
                container.len() - HEADER_SIZE
            )));
        }

        Ok(Self { original_size, code_lengths })
    }

    /// The present `(value, length)` pairs, in ascending byte-value order.
    pub fn symbols(&self) -> Vec<(u8, u8)> {
        self.code_lengths
            .iter()
            .enumerate()
            .filter(|&(_, &length)| length != 0)
            .map(|(value, &length)| (value as u8, length))
            .collect()
    }
}
