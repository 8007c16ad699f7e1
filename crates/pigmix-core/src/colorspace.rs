//! Color space markers for display colors.
//!
//! Color spaces are zero-sized marker types implementing [`ColorSpace`].
//! A color carries its space as a type parameter, so an 8-bit gamma-encoded
//! color cannot be passed where a linear float color is expected without an
//! explicit conversion.
//!
//! # Supported Color Spaces
//!
//! - [`Srgb`] - sRGB primaries, gamma-encoded (as stored in images and UIs)
//! - [`LinearSrgb`] - sRGB primaries, linear light (as used by renderers)
//!
//! The pigment table is indexed in gamma-encoded sRGB; each space knows how to
//! reach that canonical encoding through [`ColorSpace::to_srgb`] and back
//! through [`ColorSpace::from_srgb`].

use crate::transfer;
use std::fmt;

/// Trait for color space marker types.
///
/// # Implementing Custom Color Spaces
///
/// ```
/// use pigmix_core::ColorSpace;
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// pub struct Gamma22;
///
/// impl ColorSpace for Gamma22 {
///     const NAME: &'static str = "Gamma 2.2";
///     const IS_LINEAR: bool = false;
///
///     fn to_srgb(v: f32) -> f32 {
///         pigmix_core::transfer::oetf(v.max(0.0).powf(2.2))
///     }
///
///     fn from_srgb(v: f32) -> f32 {
///         pigmix_core::transfer::eotf(v).powf(1.0 / 2.2)
///     }
/// }
/// ```
pub trait ColorSpace: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the color space.
    const NAME: &'static str;

    /// Whether channel values are proportional to light intensity.
    const IS_LINEAR: bool;

    /// Converts one channel from this space into gamma-encoded sRGB.
    fn to_srgb(v: f32) -> f32;

    /// Converts one gamma-encoded sRGB channel into this space.
    fn from_srgb(v: f32) -> f32;
}

/// sRGB with the standard transfer function (gamma-encoded).
///
/// This is what 8-bit image buffers, CSS colors and color pickers hold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Srgb;

impl ColorSpace for Srgb {
    const NAME: &'static str = "sRGB";
    const IS_LINEAR: bool = false;

    #[inline]
    fn to_srgb(v: f32) -> f32 {
        v
    }

    #[inline]
    fn from_srgb(v: f32) -> f32 {
        v
    }
}

/// Linear sRGB (sRGB primaries, no transfer function).
///
/// This is what renderers and 3D material properties usually hold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinearSrgb;

impl ColorSpace for LinearSrgb {
    const NAME: &'static str = "Linear sRGB";
    const IS_LINEAR: bool = true;

    #[inline]
    fn to_srgb(v: f32) -> f32 {
        transfer::oetf(v)
    }

    #[inline]
    fn from_srgb(v: f32) -> f32 {
        transfer::eotf(v)
    }
}
