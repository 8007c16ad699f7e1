//! Free functions over the global mixer.
//!
//! One entry point per display encoding, plus packed-integer variants for
//! hosts that store colors as `0xRRGGBB` / `0xAARRGGBB`.
//!
//! # Panics
//!
//! All functions here panic if the embedded pigment table cannot be
//! decoded. Call [`init`](crate::init) once at startup to surface that as an
//! error instead.

use pigmix_core::{DisplayColor, Latent, LinearRgb8, LinearRgbF, Rgb8, Rgba8, RgbF};

use crate::engine::global;

/// Mixes two colors of any display type using the global mixer.
///
/// ```rust
/// use pigmix::{blend, RgbH};
/// use half::f16;
///
/// let a = RgbH::new(f16::from_f32(0.0), f16::from_f32(0.13), f16::from_f32(0.52));
/// let b = RgbH::new(f16::ONE, f16::ONE, f16::ONE);
/// let tint = blend(a, b, 0.5);
/// assert!(tint.b > tint.r);
/// ```
#[inline]
pub fn blend<C: DisplayColor>(a: C, b: C, t: f32) -> C {
    global().blend(a, b, t)
}

/// Mixes two 8-bit sRGB colors.
///
/// ```rust
/// let green = pigmix::blend_int8_gamma([0u8, 33, 133], [252u8, 211, 0], 0.5);
/// assert!(green.g > 120);
/// ```
#[inline]
pub fn blend_int8_gamma(a: impl Into<Rgb8>, b: impl Into<Rgb8>, t: f32) -> Rgb8 {
    blend(a.into(), b.into(), t)
}

/// Mixes two float sRGB colors.
#[inline]
pub fn blend_float_gamma(a: impl Into<RgbF>, b: impl Into<RgbF>, t: f32) -> RgbF {
    blend(a.into(), b.into(), t)
}

/// Mixes two float linear-light colors.
///
/// Inputs are gamma-encoded before the table lookup and the result is
/// decoded back to linear.
#[inline]
pub fn blend_float_linear(
    a: impl Into<LinearRgbF>,
    b: impl Into<LinearRgbF>,
    t: f32,
) -> LinearRgbF {
    blend(a.into(), b.into(), t)
}

/// Mixes two 8-bit linear-light colors.
#[inline]
pub fn blend_int8_linear(
    a: impl Into<LinearRgb8>,
    b: impl Into<LinearRgb8>,
    t: f32,
) -> LinearRgb8 {
    blend(a.into(), b.into(), t)
}

/// Mixes two packed `0xRRGGBB` colors. Bits above 24 are ignored.
///
/// ```rust
/// let green = pigmix::blend_packed_rgb(0x002185, 0xFCD300, 0.5);
/// assert_eq!(green >> 24, 0);
/// ```
#[inline]
pub fn blend_packed_rgb(a: u32, b: u32, t: f32) -> u32 {
    blend(Rgb8::from_packed(a), Rgb8::from_packed(b), t).to_packed()
}

/// Mixes two packed `0xAARRGGBB` colors. Alpha is interpolated linearly.
#[inline]
pub fn blend_packed_argb(a: u32, b: u32, t: f32) -> u32 {
    global()
        .blend_rgba(Rgba8::from_argb(a), Rgba8::from_argb(b), t)
        .to_argb()
}

/// Converts a display color to latent space using the global mixer.
///
/// Mix latents with [`mix`](crate::mix) or arithmetic on [`Latent`], then
/// convert back with [`from_latent`].
#[inline]
pub fn to_latent<C: DisplayColor>(color: C) -> Latent {
    global().to_latent(color)
}

/// Converts a latent back to a display color of the requested type.
///
/// ```rust
/// use pigmix::{from_latent, to_latent, Rgb8};
///
/// let c = Rgb8::new(12, 200, 99);
/// let back: Rgb8 = from_latent(&to_latent(c));
/// assert_eq!(back, c);
/// ```
#[inline]
pub fn from_latent<C: DisplayColor>(latent: &Latent) -> C {
    global().from_latent(latent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigmix_core::Channel;

    #[test]
    fn test_int8_gamma() {
        let g = blend_int8_gamma([0u8, 33, 133], [252u8, 211, 0], 0.5);
        assert!(g.g > g.r && g.g > g.b);
        assert_eq!(
            blend_int8_gamma([10u8, 20, 30], [10u8, 20, 30], 0.7),
            Rgb8::new(10, 20, 30)
        );
    }

    #[test]
    fn test_float_gamma_matches_int8() {
        let a = Rgb8::new(255, 39, 2);
        let b = Rgb8::new(255, 255, 255);
        let fa: RgbF = a.convert();
        let fb: RgbF = b.convert();
        let f: Rgb8 = blend_float_gamma(fa, fb, 0.5).convert();
        let i = blend_int8_gamma(a, b, 0.5);
        for (x, y) in f.to_array().into_iter().zip(i.to_array()) {
            assert!((x as i32 - y as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_float_linear_endpoints() {
        let a = LinearRgbF::new(0.0, 0.015, 0.23);
        let b = LinearRgbF::new(0.97, 0.65, 0.0);
        let start = blend_float_linear(a, b, 0.0);
        for (x, y) in start.to_array().into_iter().zip(a.to_array()) {
            assert!((x - y).abs() < 1e-4);
        }
    }

    #[test]
    fn test_int8_linear_matches_float_linear() {
        let a = LinearRgb8::new(0, 3, 58);
        let b = LinearRgb8::new(250, 166, 0);
        let m = blend_int8_linear(a, b, 0.5);
        assert!(m.g > m.b);

        let fa = LinearRgbF::new(0.0, 3.0 / 255.0, 58.0 / 255.0);
        let fb = LinearRgbF::new(250.0 / 255.0, 166.0 / 255.0, 0.0);
        for t in [0.25f32, 0.5, 1.5, 3.0] {
            let int8 = blend_int8_linear(a, b, t);
            let float = blend_float_linear(fa, fb, t);
            let quantized = float.to_array().map(u8::from_unit);
            assert_eq!(int8.to_array(), quantized, "t = {t}");
        }

        // Extrapolation moves past b instead of stopping there.
        assert_ne!(blend_int8_linear(a, b, 3.0), b);
    }

    #[test]
    fn test_packed() {
        let rgb = blend_packed_rgb(0x002185, 0xFCD300, 0.5);
        let direct = blend_int8_gamma([0u8, 33, 133], [252u8, 211, 0], 0.5);
        assert_eq!(rgb, direct.to_packed());

        let argb = blend_packed_argb(0x00002185, 0xFFFCD300, 0.5);
        assert_eq!(argb >> 24, 0x80);
        assert_eq!(argb & 0xFFFFFF, rgb);
        assert_eq!(blend_packed_rgb(0xFF002185, 0x002185, 0.5), 0x002185);
    }
}
