//! Reference outputs for known paint pairs.
//!
//! Expected values were produced by an independent double-precision
//! evaluation of the same table and polynomial. The f32 pipeline may
//! differ by a code value, so 8-bit results are compared within +-2.

use approx::assert_abs_diff_eq;
use pigmix::{blend_float_gamma, blend_int8_gamma, to_latent, Pigment, Rgb8, RgbF};

const TOLERANCE: i32 = 2;

fn assert_close(actual: Rgb8, expected: [u8; 3], context: &str) {
    for (a, e) in actual.to_array().into_iter().zip(expected) {
        assert!(
            (a as i32 - e as i32).abs() <= TOLERANCE,
            "{context}: got {actual:?}, expected {expected:?}"
        );
    }
}

/// (a, b, t, expected)
const PAIRS: &[([u8; 3], [u8; 3], f32, [u8; 3])] = &[
    // Cobalt blue + hansa yellow across the ratio range.
    ([0, 33, 133], [252, 211, 0], 0.0, [0, 33, 133]),
    ([0, 33, 133], [252, 211, 0], 0.25, [14, 87, 82]),
    ([0, 33, 133], [252, 211, 0], 0.5, [41, 130, 57]),
    ([0, 33, 133], [252, 211, 0], 0.75, [111, 170, 37]),
    ([0, 33, 133], [252, 211, 0], 1.0, [252, 211, 0]),
    // Extrapolated ratios saturate.
    ([0, 33, 133], [252, 211, 0], 1.5, [255, 255, 0]),
    ([0, 33, 133], [252, 211, 0], -0.5, [0, 0, 255]),
    // Tints and a warm mix.
    ([255, 39, 2], [255, 255, 255], 0.5, [255, 130, 117]),
    ([0, 33, 133], [255, 255, 255], 0.5, [72, 146, 246]),
    ([254, 236, 0], [255, 39, 2], 0.5, [255, 117, 28]),
    // Neutrals stay neutral.
    ([0, 0, 0], [255, 255, 255], 0.5, [125, 122, 127]),
];

#[test]
fn test_reference_pairs() {
    for &(a, b, t, expected) in PAIRS {
        let got = blend_int8_gamma(a, b, t);
        assert_close(got, expected, &format!("{a:?} + {b:?} @ {t}"));
    }
}

#[test]
fn test_reference_pigments() {
    let got = blend_int8_gamma(Pigment::CobaltBlue.rgb(), Pigment::HansaYellow.rgb(), 0.5);
    assert_close(got, [41, 130, 57], "cobalt blue + hansa yellow");
}

#[test]
fn test_reference_float() {
    let blue = RgbF::new(0.0, 33.0 / 255.0, 133.0 / 255.0);
    let yellow = RgbF::new(252.0 / 255.0, 211.0 / 255.0, 0.0);
    let got = blend_float_gamma(blue, yellow, 0.5).to_array();
    let expected = [0.16215, 0.51004, 0.22309];
    for i in 0..3 {
        assert_abs_diff_eq!(got[i], expected[i], epsilon = 2e-3);
    }
}

#[test]
fn test_reference_latents() {
    let blue = to_latent(Rgb8::new(0, 33, 133));
    let expected = [0.86445, 0.00452, 0.02953, 0.10149, -0.05365, -0.01204, 0.00346];
    for i in 0..7 {
        assert_abs_diff_eq!(blue[i], expected[i], epsilon = 1e-3);
    }

    let white = to_latent(Rgb8::new(255, 255, 255));
    assert_eq!(white.concentrations(), [0.0, 0.0, 0.0, 1.0]);
    let residual = [0.00482, 0.00022, 0.00295];
    for i in 0..3 {
        assert_abs_diff_eq!(white.residual()[i], residual[i], epsilon = 1e-4);
    }
}
