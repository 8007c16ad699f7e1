//! Display color types.
//!
//! [`Rgb`] and [`Rgba`] are parameterized by:
//! 1. **Color space** (`S: ColorSpace`) - gamma-encoded or linear
//! 2. **Channel type** (`T: Channel`) - u8, u16, f16 or f32
//!
//! The mixing engine only understands one canonical representation: a
//! `[f32; 3]` of gamma-encoded sRGB in [0, 1]. [`DisplayColor`] is the adapter
//! every surface type implements to reach it.
//!
//! ```
//! use pigmix_core::prelude::*;
//!
//! let byte: Rgb8 = Rgb::new(252, 211, 0);
//! let float: RgbF = RgbF::from_canonical(byte.to_canonical());
//! assert!((float.r - 252.0 / 255.0).abs() < 1e-6);
//! ```
//!
//! # Memory Layout
//!
//! Both types are `#[repr(C)]` so slices of them can be handed to and from
//! pixel buffers without reshuffling.

use crate::colorspace::{ColorSpace, LinearSrgb, Srgb};
use crate::transfer::clamp01;
use half::f16;
use std::fmt;
use std::marker::PhantomData;

/// 8-bit gamma-encoded sRGB.
pub type Rgb8 = Rgb<Srgb, u8>;
/// 16-bit gamma-encoded sRGB.
pub type Rgb16 = Rgb<Srgb, u16>;
/// Half-float gamma-encoded sRGB.
pub type RgbH = Rgb<Srgb, f16>;
/// Float gamma-encoded sRGB.
pub type RgbF = Rgb<Srgb, f32>;
/// Float linear sRGB.
pub type LinearRgbF = Rgb<LinearSrgb, f32>;
/// 8-bit linear sRGB.
pub type LinearRgb8 = Rgb<LinearSrgb, u8>;

/// 8-bit gamma-encoded sRGB with alpha.
pub type Rgba8 = Rgba<Srgb, u8>;
/// Float gamma-encoded sRGB with alpha.
pub type RgbaF = Rgba<Srgb, f32>;
/// Float linear sRGB with alpha.
pub type LinearRgbaF = Rgba<LinearSrgb, f32>;
/// 8-bit linear sRGB with alpha.
pub type LinearRgba8 = Rgba<LinearSrgb, u8>;

/// Channel storage type.
///
/// Integer channels map their full range onto [0, 1]; float channels store
/// the unit value directly.
///
/// ```
/// use pigmix_core::Channel;
///
/// assert!((128u8.to_unit() - 0.502).abs() < 0.001);
/// assert_eq!(u8::from_unit(0.5), 128);
/// assert_eq!(u8::from_unit(1.7), 255);
/// assert_eq!(f32::from_unit(-0.2), 0.0);
/// ```
pub trait Channel: Copy + Clone + Default + Send + Sync + PartialOrd + fmt::Debug + 'static {
    /// Stored value representing full intensity.
    const FULL: f32;

    /// Converts to a unit value (integers are divided by [`Self::FULL`]).
    fn to_unit(self) -> f32;

    /// Converts from a unit value, clamping to [0, 1].
    ///
    /// Integer channels round half up, so `0.5 / 255` steps land on the
    /// nearest code value.
    fn from_unit(v: f32) -> Self;
}

impl Channel for u8 {
    const FULL: f32 = 255.0;

    #[inline]
    fn to_unit(self) -> f32 {
        self as f32 / Self::FULL
    }

    #[inline]
    fn from_unit(v: f32) -> Self {
        (clamp01(v) * Self::FULL + 0.5) as u8
    }
}

impl Channel for u16 {
    const FULL: f32 = 65535.0;

    #[inline]
    fn to_unit(self) -> f32 {
        self as f32 / Self::FULL
    }

    #[inline]
    fn from_unit(v: f32) -> Self {
        (clamp01(v) * Self::FULL + 0.5) as u16
    }
}

impl Channel for f16 {
    const FULL: f32 = 1.0;

    #[inline]
    fn to_unit(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn from_unit(v: f32) -> Self {
        f16::from_f32(clamp01(v))
    }
}

impl Channel for f32 {
    const FULL: f32 = 1.0;

    #[inline]
    fn to_unit(self) -> f32 {
        self
    }

    #[inline]
    fn from_unit(v: f32) -> Self {
        clamp01(v)
    }
}

/// Adapter between a display color surface and the canonical float sRGB triple.
///
/// `to_canonical` always returns channels in [0, 1]; `from_canonical` clamps
/// and rounds into the target type. Implemented for every [`Rgb`].
pub trait DisplayColor: Copy + Send + Sync + 'static {
    /// Converts to gamma-encoded sRGB in [0, 1].
    fn to_canonical(self) -> [f32; 3];

    /// Builds a color from gamma-encoded sRGB, clamping out-of-range channels.
    fn from_canonical(rgb: [f32; 3]) -> Self;
}

/// RGB color with color space tracking.
///
/// # Example
///
/// ```
/// use pigmix_core::prelude::*;
///
/// let cobalt: Rgb8 = Rgb::new(0, 33, 133);
/// assert_eq!(cobalt.to_array(), [0, 33, 133]);
/// assert_eq!(cobalt.to_hex(), "#002185");
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb<S: ColorSpace, T: Channel> {
    /// Red channel value.
    pub r: T,
    /// Green channel value.
    pub g: T,
    /// Blue channel value.
    pub b: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _space: PhantomData<S>,
}

impl<S: ColorSpace, T: Channel> Rgb<S, T> {
    /// Creates a new RGB color.
    #[inline]
    pub const fn new(r: T, g: T, b: T) -> Self {
        Self {
            r,
            g,
            b,
            _space: PhantomData,
        }
    }

    /// Creates a gray color with equal channels.
    #[inline]
    pub const fn gray(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Returns channels as an array.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.r, self.g, self.b]
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(arr: [T; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Returns channels as unit floats in this color's own space.
    #[inline]
    pub fn to_unit_array(self) -> [f32; 3] {
        [self.r.to_unit(), self.g.to_unit(), self.b.to_unit()]
    }

    /// Creates from unit floats in this color's own space (clamped).
    #[inline]
    pub fn from_unit_array(arr: [f32; 3]) -> Self {
        Self::new(T::from_unit(arr[0]), T::from_unit(arr[1]), T::from_unit(arr[2]))
    }

    /// Converts to another surface type through the canonical encoding.
    ///
    /// ```
    /// use pigmix_core::prelude::*;
    ///
    /// let linear: LinearRgbF = Rgb8::new(255, 255, 255).convert();
    /// assert_eq!(linear.to_array(), [1.0, 1.0, 1.0]);
    /// ```
    #[inline]
    pub fn convert<S2: ColorSpace, T2: Channel>(self) -> Rgb<S2, T2> {
        Rgb::from_canonical(self.to_canonical())
    }

    /// Channel-wise linear interpolation in this color's own encoding.
    ///
    /// This is ordinary RGB averaging, kept for comparison with pigment
    /// mixing; it produces gray in-betweens for complementary colors.
    #[inline]
    pub fn lerp_naive(self, other: Self, t: f32) -> Self {
        let a = self.to_unit_array();
        let b = other.to_unit_array();
        Self::from_unit_array([
            a[0] + t * (b[0] - a[0]),
            a[1] + t * (b[1] - a[1]),
            a[2] + t * (b[2] - a[2]),
        ])
    }
}

impl<S: ColorSpace, T: Channel> DisplayColor for Rgb<S, T> {
    #[inline]
    fn to_canonical(self) -> [f32; 3] {
        [
            clamp01(S::to_srgb(self.r.to_unit())),
            clamp01(S::to_srgb(self.g.to_unit())),
            clamp01(S::to_srgb(self.b.to_unit())),
        ]
    }

    #[inline]
    fn from_canonical(rgb: [f32; 3]) -> Self {
        Self::new(
            T::from_unit(S::from_srgb(clamp01(rgb[0]))),
            T::from_unit(S::from_srgb(clamp01(rgb[1]))),
            T::from_unit(S::from_srgb(clamp01(rgb[2]))),
        )
    }
}

impl<S: ColorSpace> Rgb<S, u8> {
    /// Unpacks a `0xRRGGBB` integer. Bits above 24 are ignored.
    ///
    /// ```
    /// use pigmix_core::Rgb8;
    ///
    /// assert_eq!(Rgb8::from_packed(0xFCD200).to_array(), [252, 210, 0]);
    /// ```
    #[inline]
    pub const fn from_packed(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Packs into a `0xRRGGBB` integer.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Formats as `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<S: ColorSpace, T: Channel> fmt::Debug for Rgb<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Rgb<{}>", S::NAME))
            .field("r", &self.r)
            .field("g", &self.g)
            .field("b", &self.b)
            .finish()
    }
}

impl<S: ColorSpace, T: Channel + fmt::Display> fmt::Display for Rgb<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl<S: ColorSpace, T: Channel> From<[T; 3]> for Rgb<S, T> {
    #[inline]
    fn from(arr: [T; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl<S: ColorSpace, T: Channel> From<(T, T, T)> for Rgb<S, T> {
    #[inline]
    fn from((r, g, b): (T, T, T)) -> Self {
        Self::new(r, g, b)
    }
}

impl<S: ColorSpace, T: Channel> From<Rgb<S, T>> for [T; 3] {
    #[inline]
    fn from(rgb: Rgb<S, T>) -> Self {
        rgb.to_array()
    }
}

/// RGB color with straight (non-premultiplied) alpha.
///
/// Alpha is mixed linearly by the engine; only the color channels go through
/// pigment space.
///
/// ```
/// use pigmix_core::prelude::*;
///
/// let c: Rgba8 = Rgba::new(0, 33, 133, 128);
/// assert_eq!(c.rgb(), Rgb8::new(0, 33, 133));
/// assert!((c.alpha_unit() - 0.502).abs() < 0.001);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba<S: ColorSpace, T: Channel> {
    /// Red channel value.
    pub r: T,
    /// Green channel value.
    pub g: T,
    /// Blue channel value.
    pub b: T,
    /// Alpha channel value.
    pub a: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _space: PhantomData<S>,
}

impl<S: ColorSpace, T: Channel> Rgba<S, T> {
    /// Creates a new RGBA color.
    #[inline]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self {
            r,
            g,
            b,
            a,
            _space: PhantomData,
        }
    }

    /// Creates from RGB with the given alpha.
    #[inline]
    pub fn with_alpha(rgb: Rgb<S, T>, a: T) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// Creates from RGB with full alpha.
    #[inline]
    pub fn opaque(rgb: Rgb<S, T>) -> Self {
        Self::with_alpha(rgb, T::from_unit(1.0))
    }

    /// Returns the color channels.
    #[inline]
    pub fn rgb(self) -> Rgb<S, T> {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Returns alpha as a unit float.
    #[inline]
    pub fn alpha_unit(self) -> f32 {
        self.a.to_unit()
    }

    /// Returns channels as an array.
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates from an array.
    #[inline]
    pub fn from_array(arr: [T; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl<S: ColorSpace> Rgba<S, u8> {
    /// Unpacks a `0xAARRGGBB` integer.
    ///
    /// ```
    /// use pigmix_core::Rgba8;
    ///
    /// let c = Rgba8::from_argb(0x80002185);
    /// assert_eq!(c.to_array(), [0, 33, 133, 128]);
    /// assert_eq!(c.to_argb(), 0x80002185);
    /// ```
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self::new((argb >> 16) as u8, (argb >> 8) as u8, argb as u8, (argb >> 24) as u8)
    }

    /// Packs into a `0xAARRGGBB` integer.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24)
            | ((self.r as u32) << 16)
            | ((self.g as u32) << 8)
            | self.b as u32
    }

    /// Formats as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl<S: ColorSpace, T: Channel> fmt::Debug for Rgba<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Rgba<{}>", S::NAME))
            .field("r", &self.r)
            .field("g", &self.g)
            .field("b", &self.b)
            .field("a", &self.a)
            .finish()
    }
}

impl<S: ColorSpace, T: Channel + fmt::Display> fmt::Display for Rgba<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl<S: ColorSpace, T: Channel> From<Rgb<S, T>> for Rgba<S, T> {
    #[inline]
    fn from(rgb: Rgb<S, T>) -> Self {
        Self::opaque(rgb)
    }
}
