//! # pigmix-core
//!
//! Core types for pigment-style color mixing.
//!
//! This crate provides the value types shared by the rest of the pigmix
//! workspace:
//!
//! - [`Rgb`], [`Rgba`] - Display colors with compile-time color space tracking
//! - [`Srgb`], [`LinearSrgb`] - Color space markers (gamma-encoded / linear light)
//! - [`Channel`] - Channel storage types (u8, u16, f16, f32)
//! - [`DisplayColor`] - Adapter to and from the canonical float sRGB triple
//! - [`Latent`] - Pigment-space vector in which mixing is linear
//! - [`Pigment`] - Reference paint colors
//!
//! ## Display color surfaces
//!
//! The four combinations of encoding and color space are the same generic
//! type, so the mixing engine only ever sees one canonical representation:
//!
//! ```
//! use pigmix_core::prelude::*;
//!
//! let blue = Rgb8::new(0, 33, 133);
//! let canonical = blue.to_canonical();
//! assert!((canonical[2] - 133.0 / 255.0).abs() < 1e-6);
//!
//! let linear: LinearRgbF = LinearRgbF::from_canonical(canonical);
//! assert!(linear.b < canonical[2]);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! pigmix-core (this crate)
//!    ^
//!    |
//!    +-- pigmix-lut (conversion table, RGB <-> latent)
//!    +-- pigmix     (mixer, blend API)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for colors and latent vectors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod latent;
mod named;
pub mod parse;
pub mod pigment;
pub mod pixel;
pub mod transfer;

pub use colorspace::{ColorSpace, LinearSrgb, Srgb};
pub use error::{ColorError, ColorResult};
pub use latent::{Latent, LATENT_SIZE};
pub use pigment::Pigment;
pub use pixel::{
    Channel, DisplayColor, LinearRgb8, LinearRgbF, LinearRgba8, LinearRgbaF, Rgb, Rgb16, Rgb8,
    RgbF, RgbH, Rgba, Rgba8, RgbaF,
};

/// Prelude module for convenient imports.
///
/// ```
/// use pigmix_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::colorspace::{ColorSpace, LinearSrgb, Srgb};
    pub use crate::error::{ColorError, ColorResult};
    pub use crate::latent::{Latent, LATENT_SIZE};
    pub use crate::pigment::Pigment;
    pub use crate::pixel::{
        Channel, DisplayColor, LinearRgb8, LinearRgbF, LinearRgba8, LinearRgbaF, Rgb, Rgb16,
        Rgb8, RgbF, RgbH, Rgba, Rgba8, RgbaF,
    };
}
