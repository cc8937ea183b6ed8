//! # Huffpack Codec
//!
//! Byte-oriented compression with length-limited canonical Huffman codes.
//!
//! The container format is self-describing: a 264-byte header carries the
//! payload size and one codeword length per byte value, and the decoder
//! rebuilds the exact canonical code from those lengths alone. Codeword
//! lengths are capped at 16 bits, which keeps every codeword in a `u16` and
//! lets the decoder resolve symbols with a single table lookup.
//!
//! ## Features
//!
//! - **Sequential codec**: [`encode`] and [`decode`], exact output sizing
//! - **Parallel codec** (feature `parallel`, on by default):
//!   [`encode_parallel`] and [`decode_parallel`] split work into 256 KiB
//!   pages across the rayon thread pool and produce output byte-identical
//!   to the sequential codec
//!
//! ## Example
//!
//! ```rust
//! use huffpack_codec::{decode, encode};
//!
//! let original = b"sphinx of black quartz, judge my vow";
//! let container = encode(original).unwrap();
//! let restored = decode(&container).unwrap();
//! assert_eq!(&restored, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod decode;
pub mod encode;
pub mod freq;
pub mod header;
pub mod lengths;
#[cfg(feature = "parallel")]
pub mod parallel;

// Re-exports
pub use canonical::{CodeTable, DecodeTable};
pub use decode::decode;
pub use encode::encode;
pub use freq::FrequencyTable;
pub use header::{HEADER_SIZE, Header};
pub use lengths::assign_lengths;
#[cfg(feature = "parallel")]
pub use parallel::{PAGE_SIZE, PARALLEL_THRESHOLD, decode_parallel, encode_parallel};
