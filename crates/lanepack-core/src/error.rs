//! Error types for lane pack operations
//!
//! Most misuse of a pack (mismatched widths, bitwise ops on float lanes,
//! unsupported lane counts) is rejected by the type system. The variants here
//! cover what can only be detected at runtime: slice lengths, lane indices,
//! pointer alignment and textual input.

use thiserror::Error;

/// Core error type for lane pack operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lane list or buffer did not hold the number of lanes the pack needs
    #[error("Lane count mismatch: expected {expected} lanes, got {actual}")]
    LaneCount { expected: usize, actual: usize },

    /// Lane index outside `0..N`
    #[error("Lane index {index} out of range for a pack of {lanes} lanes")]
    IndexOutOfRange { index: usize, lanes: usize },

    /// Aligned access through an address that does not meet the pack alignment
    #[error("Misaligned access: address {address:#x} is not aligned to {alignment} bytes")]
    Misaligned { address: usize, alignment: usize },

    /// Malformed textual lane
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a lane list of the wrong length
    pub fn lane_count(expected: usize, actual: usize) -> Self {
        Self::LaneCount { expected, actual }
    }

    /// Create an error for an out-of-range lane index
    pub fn index_out_of_range(index: usize, lanes: usize) -> Self {
        Self::IndexOutOfRange { index, lanes }
    }

    /// Create an error for a pointer that misses the required alignment
    pub fn misaligned<T>(ptr: *const T, alignment: usize) -> Self {
        Self::Misaligned {
            address: ptr as usize,
            alignment,
        }
    }

    /// Create an error for a token that is not a valid lane value
    pub fn parse(lane_type: &str, token: &str) -> Self {
        Self::Parse(format!("'{token}' is not a valid {lane_type} lane"))
    }
}
