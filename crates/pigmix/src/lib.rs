//! # pigmix
//!
//! Color mixing that behaves like paint.
//!
//! Averaging RGB values mixes light: blue and yellow give a muddy gray.
//! pigmix mixes pigments instead. Each color is decomposed into
//! concentrations of four primary pigments, the concentrations are mixed
//! linearly, and the mixture is converted back to RGB. Blue and yellow
//! give green.
//!
//! # Quick start
//!
//! ```rust
//! use pigmix::Rgb8;
//!
//! let blue = Rgb8::new(0, 33, 133);
//! let yellow = Rgb8::new(252, 211, 0);
//! let green = pigmix::blend(blue, yellow, 0.5);
//! assert!(green.g > 100 && green.b < 100);
//! ```
//!
//! # Entry points
//!
//! - [`blend`] - Any display type (`Rgb8`, `RgbF`, `LinearRgbF`, `Rgb16`, ...)
//! - [`blend_int8_gamma`], [`blend_float_gamma`], [`blend_float_linear`],
//!   [`blend_int8_linear`] - Fixed encodings
//! - [`blend_packed_rgb`], [`blend_packed_argb`] - Packed integers
//! - [`to_latent`], [`from_latent`], [`mix`] - Work in latent space directly,
//!   e.g. to mix three or more colors
//! - [`PigmentMixer`] - Explicit engine with its own options; batch helpers
//!   [`PigmentMixer::blend_slices`] and [`PigmentMixer::blend_ratios`]
//!
//! The free functions share one process-wide mixer that is built on first
//! use. Call [`init`] at startup to build it eagerly and handle a table
//! failure as an error rather than a panic.
//!
//! # Mixing more than two colors
//!
//! ```rust
//! use pigmix::{from_latent, to_latent, Latent, Pigment, Rgb8};
//!
//! let z1 = to_latent(Pigment::CobaltBlue.rgb());
//! let z2 = to_latent(Pigment::HansaYellow.rgb());
//! let z3 = to_latent(Pigment::CadmiumRed.rgb());
//! let mixed = Latent::weighted_sum(&[(z1, 0.3), (z2, 0.6), (z3, 0.1)]);
//! let olive: Rgb8 = from_latent(&mixed);
//! # let _ = olive;
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Rayon-parallel batch helpers
//! - `serde` - Serialization for colors, latents and options
//!
//! # Dependencies
//!
//! - [`pigmix-core`] - Color and latent types, parsing
//! - [`pigmix-lut`] - Pigment table and polynomial
//! - [`tracing`] - Diagnostics
//! - [`rayon`] - Parallel batches (optional)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod api;
mod batch;
mod engine;
mod error;
mod mixer;
mod options;

pub use api::{
    blend, blend_float_gamma, blend_float_linear, blend_int8_gamma, blend_int8_linear,
    blend_packed_argb, blend_packed_rgb, from_latent, to_latent,
};
pub use engine::{global, init, try_global, Endpoints, PigmentMixer};
pub use error::{MixError, MixResult};
pub use mixer::{mix, mix_weighted};
pub use options::MixerOptions;

pub use pigmix_core::{
    Channel, ColorError, ColorSpace, DisplayColor, Latent, LinearRgb8, LinearRgbF, LinearRgba8,
    LinearRgbaF, LinearSrgb, Pigment, Rgb, Rgb16, Rgb8, RgbF, RgbH, Rgba, Rgba8, RgbaF, Srgb,
    LATENT_SIZE,
};
pub use pigmix_lut::{Interpolation, LutError, PigmentTable};

/// Prelude module for convenient imports.
///
/// ```
/// use pigmix::prelude::*;
///
/// let c: Rgb8 = "#002185".parse().unwrap();
/// assert_eq!(c, Pigment::CobaltBlue.rgb());
/// ```
pub mod prelude {
    pub use crate::{blend, from_latent, mix, to_latent, MixerOptions, PigmentMixer};
    pub use pigmix_core::prelude::*;
    pub use pigmix_lut::Interpolation;
}
