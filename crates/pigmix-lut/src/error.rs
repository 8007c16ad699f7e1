//! Table error types.

use thiserror::Error;

/// Result type for table operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building a [`PigmentTable`](crate::PigmentTable).
///
/// `Clone` so a cached construction failure can be handed to every caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LutError {
    /// The compressed stream could not be inflated.
    #[error("table data malformed: {0}")]
    Decompress(String),

    /// Inflated data has the wrong length.
    #[error("invalid table size: expected {expected} bytes, got {got}")]
    InvalidSize {
        /// Expected decoded length
        expected: usize,
        /// Actual decoded length
        got: usize,
    },

    /// A cell holds concentrations that cannot sum to one.
    #[error("invalid table cell {index}: concentration sum {sum} exceeds {max}")]
    InvalidCell {
        /// Cell index (`x + y*64 + z*64*64`)
        index: usize,
        /// Sum of the stored `c0 + c1 + c2`
        sum: u16,
        /// Largest accepted sum
        max: u16,
    },
}
