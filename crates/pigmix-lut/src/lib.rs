//! # pigmix-lut
//!
//! Conversion between display RGB and latent pigment space.
//!
//! A color is decomposed into four pigment concentrations by looking it up
//! in a 64x64x64 table over sRGB; the concentrations are turned back into
//! RGB by a fixed cubic polynomial fitted to real paint. The difference
//! between the input and the polynomial's reproduction is kept as a residual
//! so the round trip is lossless.
//!
//! # Usage
//!
//! ```rust
//! use pigmix_lut::{latent_to_rgb, Interpolation, PigmentTable};
//!
//! let table = PigmentTable::embedded().unwrap();
//! let rgb = [0.2, 0.5, 0.7];
//! let latent = table.to_latent(rgb, Interpolation::Linear);
//! let back = latent_to_rgb(&latent);
//! assert!((back[1] - rgb[1]).abs() < 1e-5);
//! ```
//!
//! # Table data
//!
//! The table is embedded in the binary as a ~110 KB compressed stream and
//! decoded on demand (see [`codec`]). Decoding takes a few milliseconds, so
//! build one table and share it.
//!
//! # Dependencies
//!
//! - [`pigmix-core`] - Latent vector type, sRGB helpers
//! - [`zune-inflate`] - DEFLATE decoding
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Decode diagnostics
//!
//! # Used By
//!
//! - `pigmix` - Mixer and blend API

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
mod error;
mod interp;
pub mod polynomial;
mod table;

pub use error::{LutError, LutResult};
pub use interp::Interpolation;
pub use polynomial::latent_to_rgb;
pub use table::{PigmentTable, MAX_CELL_SUM};
