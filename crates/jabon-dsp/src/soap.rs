//! Second-order-allpass-derived bandpass filter ("SOAP").
//!
//! The jabón namesake. A second-order allpass section is run over the input
//! and subtracted from it; because the allpass phase passes through 180° at
//! the tuning frequency, `(x - allpass(x)) / 2` is a bandpass whose center
//! frequency and bandwidth are set independently (the Harris/Erbe
//! allpass-subtraction topology). The complementary sum would give a notch;
//! only the bandpass tap is exposed.
//!
//! # Coefficients
//!
//! With θ = 2π·fc/fs and β = π·bw/fs:
//!
//! ```text
//! d = -cos(θ)
//! c = (tan(β) - 1) / (tan(β) + 1)
//! ```
//!
//! Coefficients are computed in f64 and stored as f32. The delay-line state
//! stays in f32; mixing the precisions this way matches the reference
//! hardware unit's audible behavior.
//!
//! # Stability
//!
//! The section is numerically marginal as `bandwidth → 0` (c → -1), so the
//! setters clamp both parameters to `[1 Hz, 0.49·fs]`. Out-of-range requests
//! produce clamped audio, never a fault. Should non-finite values ever reach
//! the delay line, [`rescue`](Soap::rescue) zeroes the state; the engine
//! calls it once per block.

use core::fmt;

use libm::{cos, tan};

use crate::Effect;
use crate::math::flush_denormal;

/// Minimum center frequency / bandwidth in Hz after clamping.
const MIN_HZ: f32 = 1.0;

/// Error raised when constructing a [`Soap`] with an unusable sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoapError {
    /// Sample rate was zero, negative, or non-finite.
    InvalidSampleRate,
}

impl fmt::Display for SoapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoapError::InvalidSampleRate => write!(f, "sample rate must be finite and positive"),
        }
    }
}

impl core::error::Error for SoapError {}

/// Second-order-allpass-derived bandpass filter.
///
/// ## Parameters
///
/// - `center_freq`: passband center in Hz (1.0 to fs×0.49, default 400.0)
/// - `bandwidth`: passband width in Hz (1.0 to fs×0.49, default 50.0)
///
/// Parameter changes defer coefficient recomputation to the next
/// [`process`](Effect::process) call, so a control tick can set both knobs
/// for the price of one `cos`/`tan` pair.
///
/// # Example
///
/// ```rust
/// use jabon_dsp::{Effect, Soap};
///
/// let mut soap = Soap::new(48000.0).unwrap();
/// soap.set_center_freq(400.0);
/// soap.set_bandwidth(50.0);
///
/// let out = soap.process(0.5);
/// assert!(out.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct Soap {
    // Delay-line state: two input taps, two allpass output taps
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,

    // Coefficients (f64 math, f32 storage)
    d: f32,
    c: f32,
    dirty: bool,

    // Parameters
    sample_rate: f32,
    center_freq: f32,
    bandwidth: f32,
}

impl Soap {
    /// Create a new SOAP filter at the given sample rate.
    ///
    /// Initialises with center = 400 Hz, bandwidth = 50 Hz, zeroed state.
    ///
    /// # Errors
    ///
    /// Returns [`SoapError::InvalidSampleRate`] for non-finite or
    /// non-positive sample rates; there is no way to produce audio without
    /// a real one.
    pub fn new(sample_rate: f32) -> Result<Self, SoapError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SoapError::InvalidSampleRate);
        }
        let mut soap = Self {
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
            d: 0.0,
            c: 0.0,
            dirty: false,
            sample_rate,
            center_freq: 400.0,
            bandwidth: 50.0,
        };
        soap.update_coefficients();
        Ok(soap)
    }

    /// Set the passband center frequency in Hz.
    ///
    /// Clamped to `[1.0, sample_rate × 0.49]`.
    pub fn set_center_freq(&mut self, freq_hz: f32) {
        self.center_freq = freq_hz.clamp(MIN_HZ, self.sample_rate * 0.49);
        self.dirty = true;
    }

    /// Current center frequency in Hz.
    pub fn center_freq(&self) -> f32 {
        self.center_freq
    }

    /// Set the passband width in Hz.
    ///
    /// Clamped to `[1.0, sample_rate × 0.49]`. The 1 Hz floor keeps the
    /// allpass coefficient away from -1, where the section turns marginal.
    pub fn set_bandwidth(&mut self, bandwidth_hz: f32) {
        self.bandwidth = bandwidth_hz.clamp(MIN_HZ, self.sample_rate * 0.49);
        self.dirty = true;
    }

    /// Current bandwidth in Hz.
    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Zero the delay line if any tap has gone non-finite.
    ///
    /// Clamped parameters cannot infect the state, so this only ever fires
    /// on non-finite *input* samples. Called once per block by the engine so
    /// audio recovers on the next block.
    pub fn rescue(&mut self) {
        let probe = self.x1 + self.x2 + self.y1 + self.y2;
        if !probe.is_finite() {
            self.x1 = 0.0;
            self.x2 = 0.0;
            self.y1 = 0.0;
            self.y2 = 0.0;
        }
    }

    /// Recompute `d` and `c` from the current parameters.
    fn update_coefficients(&mut self) {
        use core::f64::consts::PI;

        let fs = f64::from(self.sample_rate);
        let theta = 2.0 * PI * f64::from(self.center_freq) / fs;
        let beta = PI * f64::from(self.bandwidth) / fs;

        let tf = tan(beta);
        self.d = (-cos(theta)) as f32;
        self.c = ((tf - 1.0) / (tf + 1.0)) as f32;
        self.dirty = false;
    }
}

impl Effect for Soap {
    /// Advance the allpass one sample and return the bandpass output.
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        if self.dirty {
            self.update_coefficients();
        }

        let x0 = input;
        let dc = self.d - self.d * self.c;
        let y0 = -self.c * x0 + dc * self.x1 + self.x2 - dc * self.y1 + self.c * self.y2;

        // Shift the delay line (order matters: oldest taps first)
        self.x2 = self.x1;
        self.x1 = x0;
        self.y2 = self.y1;
        self.y1 = flush_denormal(y0);

        // Subtracting the allpass gives the bandpass; adding would give a notch
        0.5 * (x0 - y0)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        if sample_rate.is_finite() && sample_rate > 0.0 {
            self.sample_rate = sample_rate;
            self.center_freq = self.center_freq.clamp(MIN_HZ, sample_rate * 0.49);
            self.bandwidth = self.bandwidth.clamp(MIN_HZ, sample_rate * 0.49);
            self.dirty = true;
        }
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}
