//! Error types for vecbits.
//!
//! This module provides a unified error type for all fallible operations in the
//! crate, using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for vecbits operations.
#[derive(Error, Debug)]
pub enum VecbitsError {
    /// Operands of an element-wise operation have different lengths
    #[error("Vectors are of different sizes: left has {left} elements, right has {right}")]
    SizeMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },

    /// A formatted bit string does not have the element's bit width
    #[error("Bit string size is incorrect for element {index}: expected {expected} bits, got {actual}")]
    BitStringLengthMismatch {
        /// Index of the offending element
        index: usize,
        /// Bit width of the element type
        expected: usize,
        /// Length of the produced string
        actual: usize,
    },

    /// Index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds {
        /// The index that was accessed
        index: usize,
        /// The valid length
        length: usize,
    },

    /// Random fill bounds are inverted or not representable in the element type
    #[error("Invalid value range: [{min}, {max}]")]
    InvalidRange {
        /// Lower bound (inclusive)
        min: i64,
        /// Upper bound (inclusive)
        max: i64,
    },

    /// A requested array size is negative, unparsable or too large
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Input ended before a required value was read
    #[error("Missing input: expected {0}")]
    MissingInput(&'static str),

    /// Invalid parameter value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or serialized
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// A specialized `Result` type for vecbits operations.
pub type Result<T> = std::result::Result<T, VecbitsError>;
