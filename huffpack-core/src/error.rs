//! Error types for huffpack operations.
//!
//! This module provides an error type covering all failure modes of the
//! codec: I/O failures on the byte source/sink, code-length overflow during
//! length assignment, and malformed container headers at decode time.
//!
//! Diagnostics such as "compressed output is larger than the input" are not
//! errors; callers compare the returned container size against the input.

use std::io;
use thiserror::Error;

/// The main error type for huffpack operations.
#[derive(Debug, Error)]
pub enum HuffpackError {
    /// I/O error from the underlying byte source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Length assignment would require a codeword longer than the
    /// representable maximum of 16 bits.
    #[error("code length {length} exceeds maximum {max}")]
    CodeLengthOverflow {
        /// The length the assignment tried to produce.
        length: u32,
        /// The representable maximum.
        max: u32,
    },

    /// Invalid container header.
    #[error("malformed header: {message}")]
    MalformedHeader {
        /// Description of the header problem.
        message: String,
    },

    /// Corrupted data in the container body.
    #[error("corrupted data at bit offset {bit_offset}: {message}")]
    CorruptedData {
        /// Bit offset into the body where the corruption was detected.
        bit_offset: u64,
        /// Description of the corruption.
        message: String,
    },
}

/// Result type alias for huffpack operations.
pub type Result<T> = std::result::Result<T, HuffpackError>;

impl HuffpackError {
    /// Create a code-length overflow error.
    pub fn code_length_overflow(length: u32, max: u32) -> Self {
        Self::CodeLengthOverflow { length, max }
    }

    /// Create a malformed header error.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a corrupted data error.
    pub fn corrupted(bit_offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            bit_offset,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HuffpackError::code_length_overflow(17, 16);
        assert!(err.to_string().contains("17"));
        assert!(err.to_string().contains("16"));

        let err = HuffpackError::malformed_header("code lengths are not Kraft-complete");
        assert!(err.to_string().contains("malformed header"));

        let err = HuffpackError::corrupted(4096, "symbol start past end of body");
        assert!(err.to_string().contains("4096"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: HuffpackError = io_err.into();
        assert!(matches!(err, HuffpackError::Io(_)));
    }
}
