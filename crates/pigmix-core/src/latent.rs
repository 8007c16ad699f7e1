//! Latent pigment vectors.
//!
//! A [`Latent`] describes a color as a mixture of four primary pigments plus
//! an RGB residual:
//!
//! ```text
//! [ c0, c1, c2, c3, dr, dg, db ]
//!   \____________/  \________/
//!   concentrations   residual
//! ```
//!
//! The concentrations sum to one. The residual is the difference between the
//! input color and what the pigment model reproduces from the concentrations,
//! which makes RGB -> latent -> RGB lossless for in-gamut colors.
//!
//! Mixing paints is linear in this space, so every multi-color mix is a
//! weighted sum of latents.

use std::ops::{Add, AddAssign, Index, Mul, Sub};

/// Number of components in a latent vector.
pub const LATENT_SIZE: usize = 7;

/// Number of pigment concentrations at the head of a latent vector.
pub const PIGMENT_COUNT: usize = 4;

/// A color in latent pigment space.
///
/// # Example
///
/// ```
/// use pigmix_core::Latent;
///
/// let a = Latent::from_array([1.0, 0.0, 0.0, 0.0, 0.1, 0.0, 0.0]);
/// let b = Latent::from_array([0.0, 1.0, 0.0, 0.0, 0.0, 0.1, 0.0]);
/// let mid = a.lerp(&b, 0.5);
/// assert_eq!(mid.concentrations(), [0.5, 0.5, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Latent(pub [f32; LATENT_SIZE]);

impl Latent {
    /// All-zero vector, the identity for [`Add`].
    pub const ZERO: Latent = Latent([0.0; LATENT_SIZE]);

    /// Wraps a raw array.
    #[inline]
    pub const fn from_array(values: [f32; LATENT_SIZE]) -> Self {
        Self(values)
    }

    /// Assembles a latent from concentrations and residual.
    #[inline]
    pub const fn from_parts(c: [f32; PIGMENT_COUNT], residual: [f32; 3]) -> Self {
        Self([c[0], c[1], c[2], c[3], residual[0], residual[1], residual[2]])
    }

    /// Returns the raw array.
    #[inline]
    pub const fn to_array(self) -> [f32; LATENT_SIZE] {
        self.0
    }

    /// Pigment concentrations `c0..c3`.
    #[inline]
    pub fn concentrations(&self) -> [f32; PIGMENT_COUNT] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// RGB residual.
    #[inline]
    pub fn residual(&self) -> [f32; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    /// Linear interpolation: `self + t * (other - self)`.
    ///
    /// `t` is not clamped; values outside [0, 1] extrapolate. `lerp(x, x, t)`
    /// returns `x` exactly for any finite `t`.
    #[inline]
    pub fn lerp(&self, other: &Latent, t: f32) -> Latent {
        let mut out = [0.0; LATENT_SIZE];
        for (i, v) in out.iter_mut().enumerate() {
            *v = self.0[i] + t * (other.0[i] - self.0[i]);
        }
        Latent(out)
    }

    /// Weighted sum of latents.
    ///
    /// Weights are used as given. For a physically meaningful mix they should
    /// sum to one; an empty slice yields [`Latent::ZERO`].
    ///
    /// ```
    /// use pigmix_core::Latent;
    ///
    /// let a = Latent::from_array([1.0; 7]);
    /// let b = Latent::from_array([0.0; 7]);
    /// let m = Latent::weighted_sum(&[(a, 0.3), (b, 0.7)]);
    /// assert!((m.0[0] - 0.3).abs() < 1e-6);
    /// ```
    pub fn weighted_sum(parts: &[(Latent, f32)]) -> Latent {
        parts
            .iter()
            .fold(Latent::ZERO, |acc, (latent, w)| acc + *latent * *w)
    }
}

impl From<[f32; LATENT_SIZE]> for Latent {
    #[inline]
    fn from(values: [f32; LATENT_SIZE]) -> Self {
        Latent(values)
    }
}

impl From<Latent> for [f32; LATENT_SIZE] {
    #[inline]
    fn from(latent: Latent) -> Self {
        latent.0
    }
}

impl Index<usize> for Latent {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl Add for Latent {
    type Output = Latent;

    #[inline]
    fn add(self, rhs: Latent) -> Latent {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o += r;
        }
        Latent(out)
    }
}

impl AddAssign for Latent {
    #[inline]
    fn add_assign(&mut self, rhs: Latent) {
        *self = *self + rhs;
    }
}

impl Sub for Latent {
    type Output = Latent;

    #[inline]
    fn sub(self, rhs: Latent) -> Latent {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o -= r;
        }
        Latent(out)
    }
}

impl Mul<f32> for Latent {
    type Output = Latent;

    #[inline]
    fn mul(self, rhs: f32) -> Latent {
        Latent(self.0.map(|v| v * rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample() -> Latent {
        Latent::from_array([0.86, 0.005, 0.03, 0.105, -0.05, -0.01, 0.003])
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = sample();
        let b = Latent::from_array([0.004, 0.93, 0.004, 0.062, 0.03, 0.02, -0.05]);
        assert_eq!(a.lerp(&b, 0.0), a);
        let end = a.lerp(&b, 1.0);
        for i in 0..LATENT_SIZE {
            assert_abs_diff_eq!(end[i], b[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_lerp_self_is_exact() {
        let a = sample();
        for t in [-1.0, 0.0, 0.3, 1.0, 2.5] {
            assert_eq!(a.lerp(&a, t), a);
        }
    }

    #[test]
    fn test_lerp_extrapolates() {
        let a = Latent::ZERO;
        let b = Latent::from_array([1.0; LATENT_SIZE]);
        assert_eq!(a.lerp(&b, 1.5).0, [1.5; LATENT_SIZE]);
        assert_eq!(a.lerp(&b, -0.5).0, [-0.5; LATENT_SIZE]);
    }

    #[test]
    fn test_parts() {
        let l = Latent::from_parts([0.1, 0.2, 0.3, 0.4], [0.01, 0.02, 0.03]);
        assert_eq!(l.concentrations(), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(l.residual(), [0.01, 0.02, 0.03]);
    }

    #[test]
    fn test_weighted_sum_matches_lerp() {
        let a = sample();
        let b = Latent::from_array([0.004, 0.93, 0.004, 0.062, 0.03, 0.02, -0.05]);
        let lerp = a.lerp(&b, 0.25);
        let sum = Latent::weighted_sum(&[(a, 0.75), (b, 0.25)]);
        for i in 0..LATENT_SIZE {
            assert_abs_diff_eq!(lerp[i], sum[i], epsilon = 1e-6);
        }
        assert_eq!(Latent::weighted_sum(&[]), Latent::ZERO);
    }

    #[test]
    fn test_arithmetic() {
        let a = sample();
        let d = (a + a) - a;
        for i in 0..LATENT_SIZE {
            assert_abs_diff_eq!(d[i], a[i], epsilon = 1e-7);
        }
        assert_eq!((a * 0.0), Latent::ZERO);
        let mut acc = Latent::ZERO;
        acc += a;
        assert_eq!(acc, a);
    }
}
