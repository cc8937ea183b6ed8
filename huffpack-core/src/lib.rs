//! # huffpack core
//!
//! Foundation crate for the huffpack compressor.
//!
//! - [`codeword`]: packed prefix codewords and the canonical successor rule
//! - [`mmap`]: memory-mapped byte source/sink (feature `mmap`)
//! - [`error`]: error types
//!
//! The codec itself (frequency counting, package-merge length assignment,
//! canonical coding, and the sequential/parallel encoders and decoders)
//! lives in `huffpack-codec`; the command line in `huffpack-cli`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codeword;
pub mod error;
#[cfg(feature = "mmap")]
pub mod mmap;

// Re-exports for convenience
pub use codeword::{Codeword, MAX_CODE_LENGTH, read_window};
pub use error::{HuffpackError, Result};
#[cfg(feature = "mmap")]
pub use mmap::{ByteSink, ByteSource};
