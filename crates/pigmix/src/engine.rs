//! The mixing engine.
//!
//! [`PigmentMixer`] bundles a shared [`PigmentTable`] with
//! [`MixerOptions`]. It is cheap to clone and safe to share across
//! threads; every method is a pure function of its inputs.
//!
//! A process-wide mixer backs the free functions in the crate root. It is
//! built on first use (or by [`init`]) and never changes afterwards.

use std::marker::PhantomData;
use std::sync::{Arc, OnceLock};

use pigmix_core::{Channel, ColorSpace, DisplayColor, Latent, Rgba};
use pigmix_lut::{latent_to_rgb, Interpolation, LutError, LutResult, PigmentTable};
use tracing::{debug, error};

use crate::error::{MixError, MixResult};
use crate::mixer;
use crate::options::MixerOptions;

/// Pigment mixing engine.
///
/// # Example
///
/// ```rust
/// use pigmix::{PigmentMixer, Rgb8};
///
/// let mixer = PigmentMixer::new().unwrap();
/// let blue = Rgb8::new(0, 33, 133);
/// let yellow = Rgb8::new(252, 211, 0);
/// let green = mixer.blend(blue, yellow, 0.5);
/// assert!(green.g > green.r && green.g > green.b);
/// ```
#[derive(Clone, Debug)]
pub struct PigmentMixer {
    table: Arc<PigmentTable>,
    options: MixerOptions,
}

impl PigmentMixer {
    /// Creates a mixer over a freshly decoded embedded table.
    ///
    /// Decoding takes a few milliseconds; prefer cloning an existing mixer
    /// or using the global one.
    pub fn new() -> LutResult<Self> {
        Ok(Self::from_table(Arc::new(PigmentTable::embedded()?)))
    }

    /// Creates a mixer over an existing table.
    pub fn from_table(table: Arc<PigmentTable>) -> Self {
        Self {
            table,
            options: MixerOptions::default(),
        }
    }

    /// Replaces the options.
    pub fn with_options(mut self, options: MixerOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the table interpolation method.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.options.interpolation = interpolation;
        self
    }

    /// The shared table.
    #[inline]
    pub fn table(&self) -> &Arc<PigmentTable> {
        &self.table
    }

    /// Current options.
    #[inline]
    pub fn options(&self) -> MixerOptions {
        self.options
    }

    /// Converts a display color to latent space.
    #[inline]
    pub fn to_latent<C: DisplayColor>(&self, color: C) -> Latent {
        self.table.to_latent(color.to_canonical(), self.options.interpolation)
    }

    /// Converts a latent back to a display color, clamping out-of-gamut
    /// channels.
    #[inline]
    pub fn from_latent<C: DisplayColor>(&self, latent: &Latent) -> C {
        C::from_canonical(latent_to_rgb(latent))
    }

    /// Mixes two colors like paint.
    ///
    /// `t = 0` returns `a`, `t = 1` returns `b`; values outside [0, 1]
    /// extrapolate and saturate.
    #[inline]
    pub fn blend<C: DisplayColor>(&self, a: C, b: C, t: f32) -> C {
        let la = self.to_latent(a);
        let lb = self.to_latent(b);
        self.from_latent(&mixer::mix(&la, &lb, t))
    }

    /// Mixes two colors with alpha.
    ///
    /// Color channels mix through latent space; alpha is interpolated
    /// linearly and clamped.
    pub fn blend_rgba<S: ColorSpace, T: Channel>(
        &self,
        a: Rgba<S, T>,
        b: Rgba<S, T>,
        t: f32,
    ) -> Rgba<S, T> {
        let rgb = self.blend(a.rgb(), b.rgb(), t);
        let alpha = a.alpha_unit() + t * (b.alpha_unit() - a.alpha_unit());
        Rgba::with_alpha(rgb, T::from_unit(alpha))
    }

    /// Mixes any number of colors by weight.
    ///
    /// Weights are used as given and should sum to one. An empty slice
    /// yields the color of an empty latent (black).
    ///
    /// ```rust
    /// use pigmix::{PigmentMixer, Rgb8};
    ///
    /// let mixer = PigmentMixer::new().unwrap();
    /// let red = Rgb8::new(255, 39, 2);
    /// let mixed = mixer.mix_many(&[(red, 0.5), (red, 0.5)]);
    /// assert_eq!(mixed, red);
    /// ```
    pub fn mix_many<C: DisplayColor>(&self, parts: &[(C, f32)]) -> C {
        let latents: Vec<(Latent, f32)> = parts
            .iter()
            .map(|(color, weight)| (self.to_latent(*color), *weight))
            .collect();
        self.from_latent(&mixer::mix_weighted(&latents))
    }

    /// Samples `steps` evenly spaced mixes from `a` to `b`, both included.
    ///
    /// `steps == 1` yields just `a`; `steps == 0` yields nothing.
    pub fn gradient<C: DisplayColor>(&self, a: C, b: C, steps: usize) -> Vec<C> {
        let ends = self.endpoints(a, b);
        match steps {
            0 => Vec::new(),
            1 => vec![ends.at(0.0)],
            _ => {
                let last = (steps - 1) as f32;
                (0..steps).map(|i| ends.at(i as f32 / last)).collect()
            }
        }
    }

    /// Converts a pair of colors once for repeated mixing.
    pub fn endpoints<C: DisplayColor>(&self, a: C, b: C) -> Endpoints<C> {
        Endpoints {
            mixer: self.clone(),
            start: self.to_latent(a),
            end: self.to_latent(b),
            _color: PhantomData,
        }
    }
}

/// A pair of colors already in latent space.
///
/// Mixing against a fixed pair skips both input conversions, which
/// dominate the cost of [`PigmentMixer::blend`].
///
/// ```rust
/// use pigmix::{PigmentMixer, RgbF};
///
/// let mixer = PigmentMixer::new().unwrap();
/// let ends = mixer.endpoints(RgbF::new(0.0, 0.13, 0.52), RgbF::new(1.0, 1.0, 1.0));
/// let tints: Vec<RgbF> = (0..=4).map(|i| ends.at(i as f32 / 4.0)).collect();
/// assert_eq!(tints.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Endpoints<C> {
    mixer: PigmentMixer,
    start: Latent,
    end: Latent,
    _color: PhantomData<fn() -> C>,
}

impl<C: DisplayColor> Endpoints<C> {
    /// Mix at ratio `t`.
    #[inline]
    pub fn at(&self, t: f32) -> C {
        self.mixer.from_latent(&mixer::mix(&self.start, &self.end, t))
    }

    /// Latent of the first color.
    #[inline]
    pub fn start(&self) -> &Latent {
        &self.start
    }

    /// Latent of the second color.
    #[inline]
    pub fn end(&self) -> &Latent {
        &self.end
    }
}

fn global_slot() -> &'static Result<PigmentMixer, LutError> {
    static INSTANCE: OnceLock<Result<PigmentMixer, LutError>> = OnceLock::new();
    INSTANCE.get_or_init(|| match PigmentMixer::new() {
        Ok(mixer) => {
            debug!("Initialized global pigment mixer");
            Ok(mixer)
        }
        Err(e) => {
            error!(error = %e, "Failed to build pigment table");
            Err(e)
        }
    })
}

/// Builds the global mixer now rather than on first use.
///
/// Calling it again is cheap and returns the same outcome. A table failure
/// comes back as [`MixError::Table`].
pub fn init() -> MixResult<()> {
    try_global().map(|_| ())
}

/// Returns the global mixer, building it on first call.
pub fn try_global() -> MixResult<&'static PigmentMixer> {
    global_slot()
        .as_ref()
        .map_err(|e| MixError::Table(e.clone()))
}

/// Returns the global mixer, building it on first call.
///
/// # Panics
///
/// Panics if the embedded pigment table cannot be decoded. Use
/// [`try_global`] to handle that case.
pub fn global() -> &'static PigmentMixer {
    match global_slot() {
        Ok(mixer) => mixer,
        Err(e) => panic!("pigment table unavailable: {e}"),
    }
}
