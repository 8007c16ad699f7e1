//! The pigment conversion table.
//!
//! A 64x64x64 grid over gamma-encoded sRGB. Each cell stores the first three
//! pigment concentrations of the color at that grid point, scaled to 0..255;
//! the fourth is implied by the concentrations summing to one.

use std::time::Instant;

use pigmix_core::Latent;
use pigmix_core::transfer::clamp01;
use tracing::debug;

use crate::codec::{self, CELL_COUNT, GRID, HEADER_LEN};
use crate::polynomial;
use crate::{Interpolation, LutError, LutResult};

/// Compressed table shipped with the crate.
static EMBEDDED: &[u8] = include_bytes!("../data/pigment_lut.deflate");

/// Largest accepted `c0 + c1 + c2` in a cell.
///
/// Quantization lets stored sums run slightly past 255.
pub const MAX_CELL_SUM: u16 = 264;

/// RGB -> pigment concentration table.
///
/// Immutable once built. Share it between mixers with `Arc`.
///
/// # Example
///
/// ```rust
/// use pigmix_lut::{Interpolation, PigmentTable};
///
/// let table = PigmentTable::embedded().unwrap();
/// let latent = table.to_latent([0.0, 33.0 / 255.0, 133.0 / 255.0], Interpolation::Linear);
/// let c = latent.concentrations();
/// assert!((c.iter().sum::<f32>() - 1.0).abs() < 1e-5);
/// ```
#[derive(Clone)]
pub struct PigmentTable {
    /// Cells in `x + y*64 + z*64*64` order.
    cells: Vec<[u8; 3]>,
}

impl PigmentTable {
    /// Decodes the table embedded in this crate.
    pub fn embedded() -> LutResult<Self> {
        Self::from_compressed(EMBEDDED)
    }

    /// Decodes a table from its compressed storage format.
    ///
    /// See [`crate::codec`] for the layout.
    pub fn from_compressed(data: &[u8]) -> LutResult<Self> {
        let start = Instant::now();
        let decoded = codec::decode(data)?;

        let planes = &decoded[HEADER_LEN..];
        let (p0, rest) = planes.split_at(CELL_COUNT);
        let (p1, p2) = rest.split_at(CELL_COUNT);
        let cells = p0
            .iter()
            .zip(p1)
            .zip(p2)
            .map(|((c0, c1), c2)| [*c0, *c1, *c2])
            .collect();

        let table = Self::from_cells(cells)?;
        debug!(
            compressed = data.len(),
            decoded = decoded.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Decoded pigment table"
        );
        Ok(table)
    }

    /// Builds a table from raw cells in `x + y*64 + z*64*64` order.
    ///
    /// Fails if the cell count is not `64^3` or a cell's concentrations sum
    /// past [`MAX_CELL_SUM`].
    pub fn from_cells(cells: Vec<[u8; 3]>) -> LutResult<Self> {
        if cells.len() != CELL_COUNT {
            return Err(LutError::InvalidSize {
                expected: CELL_COUNT,
                got: cells.len(),
            });
        }
        for (index, cell) in cells.iter().enumerate() {
            let sum = cell.iter().map(|c| *c as u16).sum::<u16>();
            if sum > MAX_CELL_SUM {
                return Err(LutError::InvalidCell {
                    index,
                    sum,
                    max: MAX_CELL_SUM,
                });
            }
        }
        Ok(Self { cells })
    }

    /// Grid points per axis (64).
    #[inline]
    pub const fn size(&self) -> usize {
        GRID
    }

    /// Stored concentrations at grid position `(x, y, z)`.
    ///
    /// Coordinates past the last grid point are clamped to the edge.
    #[inline]
    pub fn cell(&self, x: usize, y: usize, z: usize) -> [u8; 3] {
        let last = GRID - 1;
        self.cells[x.min(last) + y.min(last) * GRID + z.min(last) * GRID * GRID]
    }

    #[inline]
    fn get(&self, x: usize, y: usize, z: usize) -> [f32; 3] {
        let c = self.cells[x + y * GRID + z * GRID * GRID];
        [c[0] as f32, c[1] as f32, c[2] as f32]
    }

    /// Looks up the four pigment concentrations for a gamma-encoded sRGB
    /// color. Channels are clamped to [0, 1] first.
    ///
    /// `c3` is `1 - (c0 + c1 + c2)` and may dip marginally below zero where
    /// stored sums exceed 255.
    pub fn concentrations(&self, rgb: [f32; 3], interpolation: Interpolation) -> [f32; 4] {
        let sampled = match interpolation {
            Interpolation::Linear => self.sample_trilinear(rgb),
            Interpolation::Tetrahedral => self.sample_tetrahedral(rgb),
        };
        let c0 = sampled[0] / 255.0;
        let c1 = sampled[1] / 255.0;
        let c2 = sampled[2] / 255.0;
        [c0, c1, c2, 1.0 - (c0 + c1 + c2)]
    }

    /// Converts a gamma-encoded sRGB color in [0, 1] to latent space.
    ///
    /// The residual is the input minus the polynomial's reproduction of the
    /// concentrations, so [`polynomial::latent_to_rgb`] returns the input.
    pub fn to_latent(&self, rgb: [f32; 3], interpolation: Interpolation) -> Latent {
        let rgb = rgb.map(clamp01);
        let c = self.concentrations(rgb, interpolation);
        let mixed = polynomial::evaluate(c);
        Latent::from_parts(
            c,
            [rgb[0] - mixed[0], rgb[1] - mixed[1], rgb[2] - mixed[2]],
        )
    }

    /// Grid cell and fractional offsets for an input color.
    #[inline]
    fn locate(rgb: [f32; 3]) -> ([usize; 3], [f32; 3]) {
        let n = (GRID - 1) as f32;
        let mut base = [0usize; 3];
        let mut frac = [0.0f32; 3];
        for i in 0..3 {
            let v = clamp01(rgb[i]) * n;
            base[i] = (v.floor() as usize).min(GRID - 2);
            frac[i] = v - base[i] as f32;
        }
        (base, frac)
    }

    /// Trilinear interpolation over the 8 surrounding cells.
    fn sample_trilinear(&self, rgb: [f32; 3]) -> [f32; 3] {
        let ([ri, gi, bi], [rf, gf, bf]) = Self::locate(rgb);

        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        let mut result = [0.0f32; 3];
        for i in 0..3 {
            let c00 = c000[i] * (1.0 - rf) + c100[i] * rf;
            let c01 = c001[i] * (1.0 - rf) + c101[i] * rf;
            let c10 = c010[i] * (1.0 - rf) + c110[i] * rf;
            let c11 = c011[i] * (1.0 - rf) + c111[i] * rf;

            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;

            result[i] = c0 * (1.0 - bf) + c1 * bf;
        }
        result
    }

    /// Tetrahedral interpolation over 4 of the 8 surrounding cells.
    fn sample_tetrahedral(&self, rgb: [f32; 3]) -> [f32; 3] {
        let ([ri, gi, bi], [rf, gf, bf]) = Self::locate(rgb);

        let c000 = self.get(ri, gi, bi);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        // Walk from c000 to c111 along the edges in decreasing order of
        // the fractional offsets.
        let (first, second, w) = if rf > gf {
            if gf > bf {
                (self.get(ri + 1, gi, bi), self.get(ri + 1, gi + 1, bi), [rf, gf, bf])
            } else if rf > bf {
                (self.get(ri + 1, gi, bi), self.get(ri + 1, gi, bi + 1), [rf, bf, gf])
            } else {
                (self.get(ri, gi, bi + 1), self.get(ri + 1, gi, bi + 1), [bf, rf, gf])
            }
        } else if gf > bf {
            if rf > bf {
                (self.get(ri, gi + 1, bi), self.get(ri + 1, gi + 1, bi), [gf, rf, bf])
            } else {
                (self.get(ri, gi + 1, bi), self.get(ri, gi + 1, bi + 1), [gf, bf, rf])
            }
        } else {
            (self.get(ri, gi, bi + 1), self.get(ri, gi + 1, bi + 1), [bf, gf, rf])
        };

        let mut result = [0.0f32; 3];
        for i in 0..3 {
            result[i] = c000[i]
                + w[0] * (first[i] - c000[i])
                + w[1] * (second[i] - first[i])
                + w[2] * (c111[i] - second[i]);
        }
        result
    }
}

impl std::fmt::Debug for PigmentTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PigmentTable")
            .field("size", &GRID)
            .field("cells", &self.cells.len())
            .finish()
    }
}
