//! Mixing in latent space.
//!
//! Paint mixing is linear once colors are in latent pigment space; all the
//! subtractive behavior comes from the conversion on either side. These
//! functions are total and pure.

use pigmix_core::Latent;

/// Mixes two latents: `a + t * (b - a)`.
///
/// `t = 0` gives `a`, `t = 1` gives `b`. Values outside [0, 1]
/// extrapolate; the result is clamped only when converted back to a
/// display color.
///
/// # Example
///
/// ```rust
/// use pigmix::{mix, Latent};
///
/// let a = Latent::from_array([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// let b = Latent::from_array([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
/// assert_eq!(mix(&a, &b, 0.25).concentrations(), [0.75, 0.0, 0.0, 0.25]);
/// ```
#[inline]
pub fn mix(a: &Latent, b: &Latent, t: f32) -> Latent {
    a.lerp(b, t)
}

/// Mixes any number of latents by weight.
///
/// Weights are used as given; pass weights summing to one for a plain
/// mixture. Three paints in equal parts:
///
/// ```rust
/// use pigmix::{mix_weighted, Latent};
///
/// let paints = [Latent::ZERO; 3];
/// let third = 1.0 / 3.0;
/// let mixed = mix_weighted(&[(paints[0], third), (paints[1], third), (paints[2], third)]);
/// assert_eq!(mixed, Latent::ZERO);
/// ```
#[inline]
pub fn mix_weighted(parts: &[(Latent, f32)]) -> Latent {
    Latent::weighted_sum(parts)
}
