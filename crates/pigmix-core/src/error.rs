//! Error types for pigmix-core.
//!
//! The only fallible operations in this crate are the color string parsers
//! (see [`crate::parse`]). Mixing itself never fails.
//!
//! # Usage
//!
//! ```rust
//! use pigmix_core::{ColorError, Rgb8};
//!
//! let err = "#12345".parse::<Rgb8>().unwrap_err();
//! assert!(matches!(err, ColorError::InvalidHex(_)));
//! ```

use thiserror::Error;

/// Result type alias using [`ColorError`].
pub type ColorResult<T> = std::result::Result<T, ColorError>;

/// Errors that can occur while parsing a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was empty after removing whitespace.
    #[error("empty color string")]
    Empty,

    /// Hex notation with a bad length or non-hex digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Malformed `rgb(...)` / `rgba(...)` notation.
    #[error("invalid color function: {0}")]
    InvalidFunction(String),

    /// A numeric component could not be parsed.
    #[error("invalid number '{value}' in {input}")]
    InvalidNumber {
        /// The offending component.
        value: String,
        /// The whole input.
        input: String,
    },

    /// Not a known CSS or pigment color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// The string described a color with alpha where none is accepted.
    #[error("alpha channel not supported here: {0}")]
    UnexpectedAlpha(String),
}
