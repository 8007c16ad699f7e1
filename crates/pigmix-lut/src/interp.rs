//! Interpolation methods for table lookup.

/// Interpolation method used when reading the pigment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// Trilinear interpolation over the 8 surrounding cells.
    ///
    /// Default method; reproduces the reference mixing results.
    #[default]
    Linear,

    /// Tetrahedral interpolation over 4 of the 8 cells.
    ///
    /// Slightly cheaper, and exact along the neutral axis.
    Tetrahedral,
}

impl Interpolation {
    /// Short lowercase name, e.g. `"linear"`.
    pub const fn name(self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::Tetrahedral => "tetrahedral",
        }
    }
}
