//! Sequential container encoding.
//!
//! The encoder makes three passes over its input: one to count byte
//! frequencies, one implicit pass through the length assigner and canonical
//! builder, and one to pack codewords into the body. The output buffer is
//! sized exactly up front, so packing writes into zeroed memory and the
//! final partial byte comes out zero-padded for free.

use huffpack_core::Result;

use crate::canonical::CodeTable;
use crate::freq::FrequencyTable;
use crate::header::{Header, HEADER_SIZE};
use crate::lengths::assign_lengths;

/// Build the per-byte-value codeword lengths for `freq`.
///
/// Returns the 256-slot length array (0 for absent values) together with the
/// packed body size in bits.
pub(crate) fn plan_lengths(freq: &FrequencyTable) -> Result<([u8; 256], u64)> {
    let present = freq.present_symbols();
    let weights: Vec<u64> = present.iter().map(|&(_, weight)| weight).collect();
    let lengths = assign_lengths(&weights)?;

    let mut code_lengths = [0u8; 256];
    let mut body_bits = 0u64;
    for (&(value, weight), &length) in present.iter().zip(&lengths) {
        code_lengths[value as usize] = length;
        body_bits += weight * length as u64;
    }
    Ok((code_lengths, body_bits))
}

/// Number of body bits `input` occupies under the given length table.
pub(crate) fn body_bits_of(input: &[u8], code_lengths: &[u8; 256]) -> u64 {
    let freq = FrequencyTable::count(input);
    (0u16..256)
        .map(|value| freq.get(value as u8) * code_lengths[value as usize] as u64)
        .sum()
}

/// Pack every byte of `input` as its codeword into `dest`, starting
/// `bit_pos` bits into `dest[0]`. `dest` must be zero-filled over the packed
/// range and large enough for the whole run.
pub(crate) fn pack_body(input: &[u8], codes: &CodeTable, dest: &mut [u8], mut bit_pos: usize) {
    for &byte in input {
        let code = codes.get(byte);
        code.pack_into(&mut dest[bit_pos / 8..], bit_pos % 8);
        bit_pos += code.len() as usize;
    }
}

/// Encode `input` into a self-describing container.
///
/// The container is `HEADER_SIZE + ceil(body_bits / 8)` bytes; an empty
/// input produces a bare header with an all-zero length table.
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    let freq = FrequencyTable::count(input);
    let (code_lengths, body_bits) = plan_lengths(&freq)?;

    let header = Header {
        original_size: input.len() as u64,
        code_lengths,
    };
    let body_bytes = body_bits.div_ceil(8) as usize;
    let mut out = vec![0u8; HEADER_SIZE + body_bytes];
    header.write_to(&mut out);

    let codes = CodeTable::from_lengths(&header.symbols());
    pack_body(input, &codes, &mut out[HEADER_SIZE..], 0);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_bare_header() {
        let out = encode(&[]).unwrap();
        assert_eq!(out.len(), HEADER_SIZE);
        assert!(out.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_single_value_run_packs_one_bit_per_byte() {
        // 1000 copies of one value: a single length-1 code, so the body is
        // ceil(1000 / 8) = 125 bytes.
        let input = vec![b'a'; 1000];
        let out = encode(&input).unwrap();
        assert_eq!(out.len(), HEADER_SIZE + 125);

        let header = Header::parse(&out).unwrap();
        assert_eq!(header.original_size, 1000);
        assert_eq!(header.symbols(), vec![(b'a', 1)]);
        // The code is all-zeros, so the body stays zeroed.
        assert!(out[HEADER_SIZE..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_two_value_body_bits() {
        // "ab" gets two length-1 codes: a=0, b=1, body = 0b01 zero-padded.
        let out = encode(b"ab").unwrap();
        assert_eq!(out.len(), HEADER_SIZE + 1);
        assert_eq!(out[HEADER_SIZE], 0b0100_0000);
    }

    #[test]
    fn test_header_survives_round_trip() {
        let out = encode(b"abracadabra").unwrap();
        let header = Header::parse(&out).unwrap();
        assert_eq!(header.original_size, 11);
        let values: Vec<u8> = header.symbols().iter().map(|&(v, _)| v).collect();
        assert_eq!(values, vec![b'a', b'b', b'c', b'd', b'r']);
    }

    #[test]
    fn test_body_bits_of_matches_plan() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let freq = FrequencyTable::count(input);
        let (code_lengths, body_bits) = plan_lengths(&freq).unwrap();
        assert_eq!(body_bits_of(input, &code_lengths), body_bits);
        let out = encode(input).unwrap();
        assert_eq!(out.len(), HEADER_SIZE + body_bits.div_ceil(8) as usize);
    }
}
