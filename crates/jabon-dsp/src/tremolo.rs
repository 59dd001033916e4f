//! Sinusoidal tremolo.
//!
//! Classic amplitude modulation: an LFO scales the signal gain between
//! `1 - depth` and 1. Runs in front of the SOAP bandpass in the composite
//! mode and stands alone in the pure tremolo mode.

use crate::Effect;
use crate::lfo::Lfo;

/// Sinusoidal amplitude modulator.
///
/// Gain law: `1 - depth × (1 - lfo_unipolar)`, so depth 0 is exact unity
/// gain and depth 1 swings the amplitude over the full [0, 1] range.
/// Parameters are plain scalar stores - the LFO phase accumulator already
/// keeps rate changes click-free, and the gain envelope itself is the
/// "smoothing" a tremolo performs.
///
/// ## Parameters
///
/// - `rate`: LFO rate in Hz (0 to 20, default 2.0)
/// - `depth`: modulation depth (0 to 1, default 0.75)
///
/// # Example
///
/// ```rust
/// use jabon_dsp::{Effect, Tremolo};
///
/// let mut tremolo = Tremolo::new(48000.0);
/// tremolo.set_rate(2.0);
/// tremolo.set_depth(0.75);
///
/// let output = tremolo.process(0.5);
/// assert!(output.abs() <= 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Tremolo {
    lfo: Lfo,
    depth: f32,
}

impl Tremolo {
    /// Create a new tremolo at the given sample rate (rate 2 Hz, depth 0.75).
    pub fn new(sample_rate: f32) -> Self {
        Self {
            lfo: Lfo::new(sample_rate, 2.0),
            depth: 0.75,
        }
    }

    /// Set LFO rate in Hz. Clamped to [0, 20]; phase is continuous across
    /// changes.
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.lfo.set_frequency(rate_hz.clamp(0.0, 20.0));
    }

    /// Current rate in Hz.
    pub fn rate(&self) -> f32 {
        self.lfo.frequency()
    }

    /// Set modulation depth. Clamped to [0, 1].
    pub fn set_depth(&mut self, depth: f32) {
        self.depth = depth.clamp(0.0, 1.0);
    }

    /// Current depth.
    pub fn depth(&self) -> f32 {
        self.depth
    }
}

impl Effect for Tremolo {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let lfo_unipolar = self.lfo.next_unipolar();
        let gain = 1.0 - self.depth * (1.0 - lfo_unipolar);
        input * gain
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.lfo.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.lfo.reset();
    }
}
