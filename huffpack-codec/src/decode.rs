//! Sequential container decoding.
//!
//! Decoding is header-driven: the stored lengths rebuild the canonical code,
//! a window-lookup table resolves one codeword per step, and exactly
//! `original_size` symbols are read. Anything that would walk past the end
//! of the body is corruption, not padding.

use huffpack_core::codeword::read_window;
use huffpack_core::{HuffpackError, Result};

use crate::canonical::DecodeTable;
use crate::header::{Header, HEADER_SIZE};

/// Decode one codeword per output slot from `body`, starting at `bit_pos`.
///
/// Returns the bit position after the last decoded codeword. The caller
/// decides how many symbols to read by sizing `out`.
pub(crate) fn unpack_body(
    body: &[u8],
    table: &DecodeTable,
    out: &mut [u8],
    mut bit_pos: u64,
) -> Result<u64> {
    let body_bits = body.len() as u64 * 8;
    for slot in out.iter_mut() {
        if bit_pos >= body_bits {
            return Err(HuffpackError::corrupted(
                bit_pos,
                "bitstream ended before all symbols were decoded",
            ));
        }
        let window = read_window(body, bit_pos, table.bits());
        let (value, length) = table.lookup(window);
        if bit_pos + length as u64 > body_bits {
            return Err(HuffpackError::corrupted(
                bit_pos,
                "codeword extends past the end of the bitstream",
            ));
        }
        *slot = value;
        bit_pos += length as u64;
    }
    Ok(bit_pos)
}

/// Decode a container produced by [`encode`](crate::encode::encode) back
/// into the original bytes.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    let header = Header::parse(container)?;
    if header.original_size == 0 {
        return Ok(Vec::new());
    }
    let size = usize::try_from(header.original_size).map_err(|_| {
        HuffpackError::malformed_header(format!(
            "original size {} does not fit in memory",
            header.original_size
        ))
    })?;

    let table = DecodeTable::from_lengths(&header.symbols());
    let body = &container[HEADER_SIZE..];
    let mut out = vec![0u8; size];
    unpack_body(body, &table, &mut out, 0)?;
    Ok(out)
}
