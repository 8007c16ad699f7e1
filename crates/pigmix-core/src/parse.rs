//! Color string parsing.
//!
//! [`Rgb8`] and [`Rgba8`] implement [`FromStr`] for the notations host
//! applications typically hand around:
//!
//! | Form | Example |
//! |------|---------|
//! | hex, 3/4/6/8 digits, `#` optional | `#fcd200`, `fc0`, `#002185cc` |
//! | functional | `rgb(0, 33, 133)`, `rgb(100%, 50%, 0%)`, `rgba(0,33,133,0.5)` |
//! | CSS keyword | `gold`, `SteelBlue` |
//! | pigment name | `cobalt blue`, `hansa-yellow` |
//!
//! Whitespace is ignored and matching is case-insensitive. Hex is tried
//! before names, so `"add"` is the color `#aadddd`.
//!
//! Forms with an alpha component parse into [`Rgba8`]; parsing them into
//! [`Rgb8`] fails with [`ColorError::UnexpectedAlpha`].
//!
//! ```
//! use pigmix_core::{Rgb8, Rgba8};
//!
//! let yellow: Rgb8 = "#FCD300".parse().unwrap();
//! assert_eq!(yellow.to_array(), [252, 211, 0]);
//!
//! let glaze: Rgba8 = "rgba(0, 33, 133, 0.5)".parse().unwrap();
//! assert_eq!(glaze.a, 128);
//! ```

use crate::error::{ColorError, ColorResult};
use crate::named;
use crate::pigment::Pigment;
use crate::pixel::{Rgb8, Rgba8};
use std::str::FromStr;

/// Parsed color with a flag telling whether alpha was spelled out.
struct Parsed {
    rgba: [u8; 4],
    has_alpha: bool,
}

impl FromStr for Rgba8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).map(|p| Rgba8::from_array(p.rgba))
    }
}

impl FromStr for Rgb8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parse_color(s)?;
        if parsed.has_alpha {
            return Err(ColorError::UnexpectedAlpha(s.to_string()));
        }
        let [r, g, b, _] = parsed.rgba;
        Ok(Rgb8::new(r, g, b))
    }
}

fn parse_color(input: &str) -> ColorResult<Parsed> {
    let s: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(args) = function_args(&s, "rgba") {
        return parse_function(args, 4, input);
    }
    if let Some(args) = function_args(&s, "rgb") {
        return parse_function(args, 3, input);
    }

    let digits = s.strip_prefix('#');
    let hex = digits.unwrap_or(&s);
    if matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return parse_hex(hex, input);
    }
    if digits.is_some() {
        return Err(ColorError::InvalidHex(input.to_string()));
    }

    if let Some([r, g, b]) = named::lookup(&s) {
        return Ok(Parsed {
            rgba: [r, g, b, 255],
            has_alpha: false,
        });
    }
    if let Some(pigment) = Pigment::lookup(&s) {
        let [r, g, b] = pigment.rgb().to_array();
        return Ok(Parsed {
            rgba: [r, g, b, 255],
            has_alpha: false,
        });
    }

    Err(ColorError::UnknownName(input.to_string()))
}

/// Returns the text between `name(` and the closing `)`.
fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')
}

fn parse_function(args: &str, count: usize, input: &str) -> ColorResult<Parsed> {
    let parts: Vec<&str> = args.split(',').collect();
    if parts.len() != count {
        return Err(ColorError::InvalidFunction(input.to_string()));
    }

    let mut rgba = [0, 0, 0, 255];
    for (i, part) in parts.iter().enumerate() {
        let value = if i < 3 {
            parse_component(part, 255.0, input)?
        } else {
            parse_component(part, 1.0, input)? * 255.0
        };
        rgba[i] = value.round().clamp(0.0, 255.0) as u8;
    }

    Ok(Parsed {
        rgba,
        has_alpha: count == 4,
    })
}

/// Parses a number or percentage; `100%` maps to `full`.
fn parse_component(part: &str, full: f32, input: &str) -> ColorResult<f32> {
    let invalid = || ColorError::InvalidNumber {
        value: part.to_string(),
        input: input.to_string(),
    };
    let (number, scale) = match part.strip_suffix('%') {
        Some(n) => (n, full / 100.0),
        None => (part, 1.0),
    };
    let value: f32 = number.parse().map_err(|_| invalid())?;
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value * scale)
}

fn parse_hex(hex: &str, input: &str) -> ColorResult<Parsed> {
    let bad = || ColorError::InvalidHex(input.to_string());
    let short = hex.len() <= 4;
    let width = if short { 1 } else { 2 };
    let mut rgba = [0, 0, 0, 255];

    for (i, slot) in rgba.iter_mut().take(hex.len() / width).enumerate() {
        let digits = &hex[i * width..(i + 1) * width];
        let v = u8::from_str_radix(digits, 16).map_err(|_| bad())?;
        *slot = if short { v * 17 } else { v };
    }

    Ok(Parsed {
        rgba,
        has_alpha: hex.len() == 4 || hex.len() == 8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(s: &str) -> [u8; 3] {
        s.parse::<Rgb8>().unwrap().to_array()
    }

    fn rgba(s: &str) -> [u8; 4] {
        s.parse::<Rgba8>().unwrap().to_array()
    }

    #[test]
    fn test_hex() {
        assert_eq!(rgb("#002185"), [0, 33, 133]);
        assert_eq!(rgb("FCD300"), [252, 211, 0]);
        assert_eq!(rgb("#fc0"), [255, 204, 0]);
        assert_eq!(rgb("  # 00 21 85 "), [0, 33, 133]);
        assert_eq!(rgba("#00218580"), [0, 33, 133, 128]);
        assert_eq!(rgba("#f008"), [255, 0, 0, 136]);
        assert_eq!(rgba("#002185"), [0, 33, 133, 255]);
    }

    #[test]
    fn test_hex_errors() {
        assert!(matches!("#12345".parse::<Rgb8>(), Err(ColorError::InvalidHex(_))));
        assert!(matches!("#ggg".parse::<Rgb8>(), Err(ColorError::InvalidHex(_))));
        assert!(matches!(
            "#00218580".parse::<Rgb8>(),
            Err(ColorError::UnexpectedAlpha(_))
        ));
    }

    #[test]
    fn test_functional() {
        assert_eq!(rgb("rgb(0, 33, 133)"), [0, 33, 133]);
        assert_eq!(rgb("RGB(100%, 50%, 0%)"), [255, 128, 0]);
        assert_eq!(rgb("rgb(300, -4, 12.6)"), [255, 0, 13]);
        assert_eq!(rgba("rgba(0, 33, 133, 0.5)"), [0, 33, 133, 128]);
        assert_eq!(rgba("rgba(0, 33, 133, 25%)"), [0, 33, 133, 64]);
    }

    #[test]
    fn test_functional_errors() {
        assert!(matches!(
            "rgb(1, 2)".parse::<Rgb8>(),
            Err(ColorError::InvalidFunction(_))
        ));
        assert!(matches!(
            "rgb(1, x, 2)".parse::<Rgb8>(),
            Err(ColorError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "rgb(inf, 0, 0)".parse::<Rgb8>(),
            Err(ColorError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "rgba(1, 2, 3, 1)".parse::<Rgb8>(),
            Err(ColorError::UnexpectedAlpha(_))
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(rgb("gold"), [255, 215, 0]);
        assert_eq!(rgb("Steel Blue"), [70, 130, 180]);
        assert_eq!(rgb("cobalt blue"), [0, 33, 133]);
        assert_eq!(rgb("Burnt-Sienna"), [123, 72, 0]);
        assert_eq!(rgba("white"), [255, 255, 255, 255]);
        assert!(matches!(
            "cerulean".parse::<Rgb8>(),
            Err(ColorError::UnknownName(_))
        ));
        assert_eq!("".parse::<Rgb8>(), Err(ColorError::Empty));
    }

    #[test]
    fn test_hex_wins_over_names() {
        assert_eq!(rgb("add"), [170, 221, 221]);
    }
}
