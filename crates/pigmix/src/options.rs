//! Mixer configuration.

use pigmix_lut::Interpolation;

/// Runtime options for a [`PigmentMixer`](crate::PigmentMixer).
///
/// ```
/// use pigmix::{Interpolation, MixerOptions};
///
/// let opts = MixerOptions::default().with_interpolation(Interpolation::Tetrahedral);
/// assert_eq!(opts.interpolation, Interpolation::Tetrahedral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MixerOptions {
    /// Table interpolation used by `to_latent`.
    pub interpolation: Interpolation,
}

impl MixerOptions {
    /// Sets the table interpolation method.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_trilinear() {
        assert_eq!(MixerOptions::default().interpolation, Interpolation::Linear);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip() {
        let opts = MixerOptions::default().with_interpolation(Interpolation::Tetrahedral);
        let json = serde_json::to_string(&opts).unwrap();
        assert_eq!(json, r#"{"interpolation":"Tetrahedral"}"#);
        assert_eq!(serde_json::from_str::<MixerOptions>(&json).unwrap(), opts);

        let partial: MixerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, MixerOptions::default());
    }
}
