//! Page-partitioned concurrent encoding and decoding.
//!
//! Both directions split work into fixed-size pages and produce output
//! byte-identical to the sequential codec.
//!
//! Encoding counts frequencies per page in parallel, merges the counts into
//! one global code, then packs each page into a page-local buffer at the
//! bit phase its global start position dictates. Adjacent pages share at
//! most one output byte (when a page boundary is bit-misaligned), so a
//! short sequential stitch ORs the first byte of each local buffer and
//! copies the rest.
//!
//! Decoding cannot know where page boundaries fall in the bitstream without
//! walking it, so a sequential prepass resolves codeword lengths only and
//! records the bit offset at every page boundary; the pages then decode
//! independently in parallel.

use rayon::prelude::*;

use huffpack_core::{HuffpackError, Result};

use crate::canonical::{CodeTable, DecodeTable};
use crate::decode::{decode, unpack_body};
use crate::encode::{body_bits_of, encode, pack_body, plan_lengths};
use crate::freq::FrequencyTable;
use crate::header::{Header, HEADER_SIZE};

/// Bytes of payload per work unit.
pub const PAGE_SIZE: usize = 256 * 1024;

/// Payloads below this fall back to the sequential codec; the fork-join
/// overhead only pays for itself with a few pages per thread.
pub const PARALLEL_THRESHOLD: usize = 4 * PAGE_SIZE;

/// Encode `input` across the rayon thread pool.
///
/// Produces exactly the bytes [`encode`](crate::encode::encode) would.
pub fn encode_parallel(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() < PARALLEL_THRESHOLD {
        return encode(input);
    }
    encode_paged(input, PAGE_SIZE)
}

fn encode_paged(input: &[u8], page_size: usize) -> Result<Vec<u8>> {
    let page_tables: Vec<FrequencyTable> = input
        .par_chunks(page_size)
        .map(FrequencyTable::count)
        .collect();
    let mut freq = FrequencyTable::new();
    for table in &page_tables {
        freq.merge(table);
    }

    let (code_lengths, body_bits) = plan_lengths(&freq)?;
    let header = Header {
        original_size: input.len() as u64,
        code_lengths,
    };
    let mut out = vec![0u8; HEADER_SIZE + body_bits.div_ceil(8) as usize];
    header.write_to(&mut out);

    let codes = CodeTable::from_lengths(&header.symbols());

    // Bit offset of each page within the body, from its page's frequencies.
    let mut page_starts = Vec::with_capacity(page_tables.len());
    let mut bit_pos = 0u64;
    for table in &page_tables {
        page_starts.push(bit_pos);
        bit_pos += (0u16..256)
            .map(|v| table.get(v as u8) * code_lengths[v as usize] as u64)
            .sum::<u64>();
    }
    debug_assert_eq!(bit_pos, body_bits);

    // Pack each page into a local buffer at its global bit phase, then
    // stitch. Only the first byte of each local buffer can overlap the
    // previous page, and both sides leave the other's bits zero, so an OR
    // on that byte alone is enough.
    let locals: Vec<Vec<u8>> = input
        .par_chunks(page_size)
        .zip(page_starts.par_iter())
        .map(|(page, &start_bit)| {
            let phase = (start_bit % 8) as usize;
            let page_bits = body_bits_of(page, &header.code_lengths);
            let mut local = vec![0u8; (phase as u64 + page_bits).div_ceil(8) as usize];
            pack_body(page, &codes, &mut local, phase);
            local
        })
        .collect();

    let body = &mut out[HEADER_SIZE..];
    for (local, &start_bit) in locals.iter().zip(&page_starts) {
        let first = (start_bit / 8) as usize;
        body[first] |= local[0];
        body[first + 1..first + local.len()].copy_from_slice(&local[1..]);
    }
    Ok(out)
}

/// Decode a container across the rayon thread pool.
///
/// Produces exactly the bytes [`decode`](crate::decode::decode) would, and
/// rejects the same malformed input.
pub fn decode_parallel(container: &[u8]) -> Result<Vec<u8>> {
    let header = Header::parse(container)?;
    if header.original_size < PARALLEL_THRESHOLD as u64 {
        return decode(container);
    }
    decode_paged(container, &header, PAGE_SIZE)
}

fn decode_paged(container: &[u8], header: &Header, page_size: usize) -> Result<Vec<u8>> {
    let size = usize::try_from(header.original_size).map_err(|_| {
        HuffpackError::malformed_header(format!(
            "original size {} does not fit in memory",
            header.original_size
        ))
    })?;
    let table = DecodeTable::from_lengths(&header.symbols());
    let body = &container[HEADER_SIZE..];

    // Length-only prepass: find the bit offset where each page starts.
    // This walks the whole stream but touches no output.
    let page_starts = scan_page_starts(body, &table, size, page_size)?;

    let mut out = vec![0u8; size];
    out.par_chunks_mut(page_size)
        .zip(page_starts.par_iter())
        .try_for_each(|(page, &start_bit)| {
            unpack_body(body, &table, page, start_bit).map(|_| ())
        })?;
    Ok(out)
}

fn scan_page_starts(
    body: &[u8],
    table: &DecodeTable,
    symbols: usize,
    page_size: usize,
) -> Result<Vec<u64>> {
    let mut throwaway = [0u8; 1];
    let mut starts = Vec::with_capacity(symbols.div_ceil(page_size));
    let mut bit_pos = 0u64;
    let mut index = 0usize;
    while index < symbols {
        starts.push(bit_pos);
        let step = page_size.min(symbols - index);
        for _ in 0..step {
            bit_pos = unpack_body(body, table, &mut throwaway, bit_pos)?;
        }
        index += step;
    }
    Ok(starts)
}
