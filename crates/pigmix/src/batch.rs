//! Blending many colors at once.
//!
//! With the `parallel` feature (on by default) the work is spread over
//! rayon's global pool; without it the same code runs sequentially. Output
//! is identical either way.
//!
//! # Example
//!
//! ```rust
//! use pigmix::{PigmentMixer, Rgb8};
//!
//! let mixer = PigmentMixer::new().unwrap();
//! let a = vec![Rgb8::new(0, 33, 133); 64];
//! let b = vec![Rgb8::new(252, 211, 0); 64];
//! let greens = mixer.blend_slices(&a, &b, 0.5).unwrap();
//! assert_eq!(greens.len(), 64);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use pigmix_core::DisplayColor;

use crate::engine::PigmentMixer;
use crate::error::{MixError, MixResult};

impl PigmentMixer {
    /// Blends `a[i]` with `b[i]` at ratio `t` for every `i`.
    ///
    /// Fails with [`MixError::LengthMismatch`] if the slices differ in
    /// length.
    pub fn blend_slices<C: DisplayColor>(&self, a: &[C], b: &[C], t: f32) -> MixResult<Vec<C>> {
        if a.len() != b.len() {
            return Err(MixError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        trace!(len = a.len(), t, "blend_slices");

        #[cfg(feature = "parallel")]
        let out = a
            .par_iter()
            .zip(b.par_iter())
            .map(|(x, y)| self.blend(*x, *y, t))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let out = a
            .iter()
            .zip(b)
            .map(|(x, y)| self.blend(*x, *y, t))
            .collect();

        Ok(out)
    }

    /// Blends one pair of colors at each ratio in `ratios`.
    ///
    /// Both colors are converted once.
    pub fn blend_ratios<C: DisplayColor>(&self, a: C, b: C, ratios: &[f32]) -> Vec<C> {
        trace!(len = ratios.len(), "blend_ratios");
        let ends = self.endpoints(a, b);

        #[cfg(feature = "parallel")]
        let out = ratios.par_iter().map(|t| ends.at(*t)).collect();

        #[cfg(not(feature = "parallel"))]
        let out = ratios.iter().map(|t| ends.at(*t)).collect();

        out
    }
}
