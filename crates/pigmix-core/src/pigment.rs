//! Reference paint colors.
//!
//! The sRGB values of common artist pigments as measured for the pigment
//! table. Mixing two of these reproduces the result of mixing the physical
//! paints, e.g. [`Pigment::CobaltBlue`] + [`Pigment::HansaYellow`] gives green.

use crate::error::ColorError;
use crate::pixel::Rgb8;
use std::fmt;
use std::str::FromStr;

/// A reference artist pigment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pigment {
    /// Cadmium Yellow.
    CadmiumYellow,
    /// Hansa Yellow.
    HansaYellow,
    /// Cadmium Orange.
    CadmiumOrange,
    /// Cadmium Red.
    CadmiumRed,
    /// Quinacridone Magenta.
    QuinacridoneMagenta,
    /// Cobalt Violet.
    CobaltViolet,
    /// Ultramarine Blue.
    UltramarineBlue,
    /// Cobalt Blue.
    CobaltBlue,
    /// Phthalo Blue.
    PhthaloBlue,
    /// Phthalo Green.
    PhthaloGreen,
    /// Permanent Green.
    PermanentGreen,
    /// Sap Green.
    SapGreen,
    /// Burnt Sienna.
    BurntSienna,
}

impl Pigment {
    /// All pigments, from yellow through the blues to the earth tone.
    pub const ALL: [Pigment; 13] = [
        Pigment::CadmiumYellow,
        Pigment::HansaYellow,
        Pigment::CadmiumOrange,
        Pigment::CadmiumRed,
        Pigment::QuinacridoneMagenta,
        Pigment::CobaltViolet,
        Pigment::UltramarineBlue,
        Pigment::CobaltBlue,
        Pigment::PhthaloBlue,
        Pigment::PhthaloGreen,
        Pigment::PermanentGreen,
        Pigment::SapGreen,
        Pigment::BurntSienna,
    ];

    /// sRGB color of the pigment.
    ///
    /// ```
    /// use pigmix_core::Pigment;
    ///
    /// assert_eq!(Pigment::CobaltBlue.rgb().to_array(), [0, 33, 133]);
    /// ```
    pub const fn rgb(self) -> Rgb8 {
        match self {
            Pigment::CadmiumYellow => Rgb8::new(254, 236, 0),
            Pigment::HansaYellow => Rgb8::new(252, 211, 0),
            Pigment::CadmiumOrange => Rgb8::new(255, 105, 0),
            Pigment::CadmiumRed => Rgb8::new(255, 39, 2),
            Pigment::QuinacridoneMagenta => Rgb8::new(128, 2, 46),
            Pigment::CobaltViolet => Rgb8::new(78, 0, 66),
            Pigment::UltramarineBlue => Rgb8::new(25, 0, 89),
            Pigment::CobaltBlue => Rgb8::new(0, 33, 133),
            Pigment::PhthaloBlue => Rgb8::new(13, 27, 68),
            Pigment::PhthaloGreen => Rgb8::new(0, 60, 50),
            Pigment::PermanentGreen => Rgb8::new(7, 109, 22),
            Pigment::SapGreen => Rgb8::new(107, 148, 4),
            Pigment::BurntSienna => Rgb8::new(123, 72, 0),
        }
    }

    /// Human-readable name, e.g. `"Cadmium Yellow"`.
    pub const fn name(self) -> &'static str {
        match self {
            Pigment::CadmiumYellow => "Cadmium Yellow",
            Pigment::HansaYellow => "Hansa Yellow",
            Pigment::CadmiumOrange => "Cadmium Orange",
            Pigment::CadmiumRed => "Cadmium Red",
            Pigment::QuinacridoneMagenta => "Quinacridone Magenta",
            Pigment::CobaltViolet => "Cobalt Violet",
            Pigment::UltramarineBlue => "Ultramarine Blue",
            Pigment::CobaltBlue => "Cobalt Blue",
            Pigment::PhthaloBlue => "Phthalo Blue",
            Pigment::PhthaloGreen => "Phthalo Green",
            Pigment::PermanentGreen => "Permanent Green",
            Pigment::SapGreen => "Sap Green",
            Pigment::BurntSienna => "Burnt Sienna",
        }
    }

    /// Matches a name ignoring case, spaces, `-` and `_`.
    pub(crate) fn lookup(name: &str) -> Option<Pigment> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        Pigment::ALL.into_iter().find(|p| {
            p.name()
                .chars()
                .filter(|c| *c != ' ')
                .flat_map(char::to_lowercase)
                .eq(key.chars())
        })
    }
}

impl fmt::Display for Pigment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pigment {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pigment::lookup(s).ok_or_else(|| ColorError::UnknownName(s.to_string()))
    }
}

impl From<Pigment> for Rgb8 {
    fn from(p: Pigment) -> Self {
        p.rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!("Cadmium Yellow".parse::<Pigment>(), Ok(Pigment::CadmiumYellow));
        assert_eq!("cadmium-yellow".parse::<Pigment>(), Ok(Pigment::CadmiumYellow));
        assert_eq!("PHTHALO_GREEN".parse::<Pigment>(), Ok(Pigment::PhthaloGreen));
        assert_eq!("sapgreen".parse::<Pigment>(), Ok(Pigment::SapGreen));
        assert!("cerulean".parse::<Pigment>().is_err());
    }

    #[test]
    fn test_names_roundtrip() {
        for p in Pigment::ALL {
            assert_eq!(p.to_string().parse::<Pigment>(), Ok(p));
        }
    }

    #[test]
    fn test_rgb() {
        assert_eq!(Rgb8::from(Pigment::HansaYellow).to_array(), [252, 211, 0]);
        assert_eq!(Pigment::BurntSienna.rgb().to_packed(), 0x7B4800);
    }
}
