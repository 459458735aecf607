//! Decode error types

use thiserror::Error;

/// Errors raised while decoding a binary configuration.
///
/// None of these escape [`Disassembler::decode_file`](crate::Disassembler::decode_file):
/// they are rendered as `# ERROR: ...` comment lines and folded into the
/// report's error flag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("block truncated: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("block size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("block length is zero at offset {offset}")]
    ZeroLengthBlock { offset: usize },

    #[error("block length {declared} exceeds remaining {available} bytes at offset {offset}")]
    BlockOverrun {
        offset: usize,
        declared: usize,
        available: usize,
    },

    #[error("file too short: {len} bytes, header needs 6")]
    FileTooShort { len: usize },

    #[error("unrecognized block type {0}")]
    UnknownBlockType(u8),

    #[error("unrecognized force {field} value {value}")]
    InvalidForce { field: &'static str, value: u8 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
