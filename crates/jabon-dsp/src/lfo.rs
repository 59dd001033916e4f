//! Sine low-frequency oscillator for amplitude modulation.
//!
//! Drives the [`Tremolo`](crate::Tremolo) gain stage. Uses phase
//! accumulation, so rate changes never jump the phase - the waveform stays
//! continuous across parameter updates.

use core::f32::consts::PI;
use libm::sinf;

/// Sine low-frequency oscillator.
///
/// Generates a sinusoid at sub-audio rates (typically 0.1-20 Hz) by phase
/// accumulation. [`set_frequency`](Lfo::set_frequency) only changes the
/// per-sample phase increment; the accumulated phase is untouched, which
/// keeps modulation click-free while a rate knob is turned.
///
/// # Example
///
/// ```rust
/// use jabon_dsp::Lfo;
///
/// let mut lfo = Lfo::new(48000.0, 2.0); // 2 Hz
///
/// // Values in [-1.0, 1.0]
/// let value = lfo.next();
/// assert!(value.abs() <= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Lfo {
    /// Current phase position [0.0, 1.0)
    phase: f32,
    /// Phase increment per sample
    phase_inc: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl Default for Lfo {
    fn default() -> Self {
        Self::new(48000.0, 1.0)
    }
}

impl Lfo {
    /// Create new LFO with given sample rate and frequency.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Self {
        Self {
            phase: 0.0,
            phase_inc: freq_hz / sample_rate,
            sample_rate,
        }
    }

    /// Set frequency in Hz.
    ///
    /// Phase is preserved, so there is no discontinuity in the output.
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.phase_inc = freq_hz / self.sample_rate;
    }

    /// Get current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.phase_inc * self.sample_rate
    }

    /// Reset phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Current phase (0.0 - 1.0).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Get next LFO value (-1.0 to 1.0).
    #[inline]
    pub fn next(&mut self) -> f32 {
        let output = sinf(self.phase * 2.0 * PI);

        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        output
    }

    /// Get next value scaled to the unipolar range (0.0 to 1.0).
    #[inline]
    pub fn next_unipolar(&mut self) -> f32 {
        (self.next() + 1.0) * 0.5
    }

    /// Set sample rate, preserving the configured frequency.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        let freq = self.phase_inc * self.sample_rate;
        self.sample_rate = sample_rate;
        self.set_frequency(freq);
    }
}
