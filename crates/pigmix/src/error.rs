//! Error types for the mixing API.

use pigmix_core::ColorError;
use pigmix_lut::LutError;
use thiserror::Error;

/// Result type for mixing operations.
pub type MixResult<T> = Result<T, MixError>;

/// Error type for mixing operations.
///
/// Blending itself never fails; errors come from building the pigment
/// table, parsing color strings, or mismatched batch inputs. Table and
/// parse errors convert with `?`:
///
/// ```rust
/// use pigmix::{MixResult, Rgb8};
///
/// fn mix_named(a: &str, b: &str) -> MixResult<Rgb8> {
///     let mixer = pigmix::try_global()?;
///     Ok(mixer.blend(a.parse::<Rgb8>()?, b.parse::<Rgb8>()?, 0.5))
/// }
///
/// assert!(mix_named("cobalt blue", "hansa yellow").is_ok());
/// assert!(matches!(mix_named("cobalt blue", "#12"), Err(pigmix::MixError::Color(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixError {
    /// The pigment table could not be built.
    #[error("pigment table: {0}")]
    Table(#[from] LutError),

    /// A color string could not be parsed.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Batch inputs have different lengths.
    #[error("length mismatch: {left} vs {right} colors")]
    LengthMismatch {
        /// Length of the first input
        left: usize,
        /// Length of the second input
        right: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigmix_core::Rgb8;

    fn parse_pair(a: &str, b: &str) -> MixResult<(Rgb8, Rgb8)> {
        Ok((a.parse()?, b.parse()?))
    }

    #[test]
    fn test_color_error_converts() {
        assert!(parse_pair("#002185", "navy").is_ok());
        let err = parse_pair("#002185", "not a color").unwrap_err();
        assert!(matches!(err, MixError::Color(ColorError::UnknownName(_))));
    }

    #[test]
    fn test_table_error_converts() {
        let lut = LutError::InvalidSize {
            expected: 786624,
            got: 12,
        };
        let err: MixError = lut.clone().into();
        assert_eq!(err, MixError::Table(lut.clone()));
        assert_eq!(err.to_string(), format!("pigment table: {lut}"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = MixError::LengthMismatch { left: 3, right: 4 };
        assert_eq!(err.to_string(), "length mismatch: 3 vs 4 colors");
    }
}
