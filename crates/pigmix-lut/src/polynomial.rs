//! Pigment mixing polynomial.
//!
//! Maps four pigment concentrations to the sRGB color the mixed paint
//! appears as. The model is a cubic in `(c0, c1, c2, c3)`: every degree-3
//! monomial in four variables except the pure-linear ones, 20 terms in all,
//! each weighted by a fixed RGB coefficient fitted to measured paint.

use pigmix_core::Latent;
use pigmix_core::transfer::clamp01;

/// Number of monomials in the polynomial.
pub const TERM_COUNT: usize = 20;

/// RGB weight per monomial, in the order produced by [`terms`].
const COEFFS: [[f32; 3]; TERM_COUNT] = [
    [0.07717053, 0.02826978, 0.24832992],
    [0.95912302, 0.80256528, 0.03561839],
    [0.74683774, 0.04868586, 0.00000000],
    [0.99518138, 0.99978149, 0.99704802],
    [0.04819146, 0.83363781, 0.32515377],
    [-0.68146950, 1.46107803, 1.06980936],
    [0.27058419, -0.15324870, 1.98735057],
    [0.80478189, 0.67093710, 0.18424500],
    [-0.35031003, 1.37855826, 3.68865000],
    [1.05128046, 1.97815239, 2.82989073],
    [3.21607125, 0.81270228, 1.03384539],
    [2.78893374, 0.41565549, -0.04487295],
    [3.02162577, 2.55374103, 0.32766114],
    [2.95124691, 2.81201112, 1.17578442],
    [2.82677043, 0.79933038, 1.81715262],
    [2.99691099, 1.22593053, 1.80653661],
    [1.87394106, 2.05027182, -0.29835996],
    [2.56609566, 7.03428198, 0.62575374],
    [4.08329484, -1.40408358, 2.14995522],
    [6.00078678, 2.55552042, 1.90739502],
];

/// The 20 cubic monomials of the concentrations.
///
/// Order: the four cubes, then `ci^2*cj` / `ci*cj^2` pairs for
/// `(0,1) (0,2) (0,3) (1,2) (1,3) (2,3)`, then the four triple products.
#[inline]
fn terms(c: [f32; 4]) -> [f32; TERM_COUNT] {
    let [c0, c1, c2, c3] = c;
    let (c00, c11, c22, c33) = (c0 * c0, c1 * c1, c2 * c2, c3 * c3);
    let (c01, c02, c12) = (c0 * c1, c0 * c2, c1 * c2);
    [
        c0 * c00,
        c1 * c11,
        c2 * c22,
        c3 * c33,
        c00 * c1,
        c01 * c1,
        c00 * c2,
        c02 * c2,
        c00 * c3,
        c0 * c33,
        c11 * c2,
        c1 * c22,
        c11 * c3,
        c1 * c33,
        c22 * c3,
        c2 * c33,
        c01 * c2,
        c01 * c3,
        c02 * c3,
        c12 * c3,
    ]
}

/// Evaluates the polynomial: the sRGB color of a pigment mixture.
///
/// The result is not clamped; concentrations outside the simplex can
/// produce values outside [0, 1].
///
/// ```
/// use pigmix_lut::polynomial::evaluate;
///
/// // Pure fourth pigment is (almost) white.
/// let white = evaluate([0.0, 0.0, 0.0, 1.0]);
/// assert!(white.iter().all(|v| *v > 0.99));
/// ```
pub fn evaluate(c: [f32; 4]) -> [f32; 3] {
    let w = terms(c);
    let mut rgb = [0.0f32; 3];
    for (wi, coeff) in w.iter().zip(COEFFS.iter()) {
        rgb[0] += wi * coeff[0];
        rgb[1] += wi * coeff[1];
        rgb[2] += wi * coeff[2];
    }
    rgb
}

/// Decodes a latent vector to canonical float sRGB in [0, 1].
///
/// `polynomial(c0..c3) + residual`, clamped per channel. Never fails;
/// out-of-gamut latents saturate.
#[inline]
pub fn latent_to_rgb(latent: &Latent) -> [f32; 3] {
    let rgb = evaluate(latent.concentrations());
    let residual = latent.residual();
    [
        clamp01(rgb[0] + residual[0]),
        clamp01(rgb[1] + residual[1]),
        clamp01(rgb[2] + residual[2]),
    ]
}
