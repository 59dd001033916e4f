//! State Variable Filter - the reference bandpass topology.
//!
//! A two-integrator filter producing lowpass, highpass, bandpass, and notch
//! taps simultaneously. The engine's BNP mode audits the SOAP filter against
//! this topology's bandpass tap.
//!
//! # Topology
//!
//! Implements the Topology-Preserving Transform (TPT) SVF after Zavalishin,
//! "The Art of VA Filter Design" (2012), Chapter 3. The trapezoidal
//! integrator discretization keeps the response stable while the cutoff is
//! swept from a control tick.
//!
//! # Nonlinear Drive
//!
//! Optional soft saturation of the bandpass integrator state via `tanh`.
//! Drive is applied to the state update only, preserving the filter's
//! frequency response at low levels while adding harmonic richness at high
//! drive.

use core::f32::consts::PI;
use libm::{tanf, tanhf};

use crate::Effect;
use crate::math::flush_denormal;

/// State Variable Filter output type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SvfOutput {
    /// Low-pass output - passes frequencies below the cutoff.
    Lowpass,
    /// High-pass output - passes frequencies above the cutoff.
    Highpass,
    /// Band-pass output - passes frequencies near the cutoff.
    #[default]
    Bandpass,
    /// Notch (band-reject) output - rejects frequencies near the cutoff.
    Notch,
}

/// State Variable Filter (2-pole, 12 dB/oct).
///
/// ## Parameters
///
/// - `cutoff`: cutoff frequency in Hz (20.0 to sr×0.49, default 1000.0)
/// - `resonance`: Q factor (0.5 to 20.0, default 0.707)
/// - `drive`: nonlinear saturation amount (0.0 to 1.0, default 0.0)
/// - `output_type`: which tap [`Effect::process`] returns (default `Bandpass`)
///
/// # Example
///
/// ```rust
/// use jabon_dsp::{Effect, StateVariableFilter, SvfOutput};
///
/// let mut svf = StateVariableFilter::new(48000.0);
/// svf.set_cutoff(300.0);
/// svf.set_resonance(0.85);
/// svf.set_drive(0.8);
///
/// let band = svf.process(0.5);
/// ```
#[derive(Debug, Clone)]
pub struct StateVariableFilter {
    // Filter state
    ic1eq: f32,
    ic2eq: f32,

    // Coefficients
    g: f32,
    k: f32,

    // Parameters
    sample_rate: f32,
    cutoff: f32,
    resonance: f32,
    output_type: SvfOutput,
    drive: f32,
}

impl Default for StateVariableFilter {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl StateVariableFilter {
    /// Create a new SVF with the given sample rate.
    ///
    /// Initialises with cutoff = 1000 Hz, Q = 0.707 (Butterworth), drive = 0,
    /// bandpass output.
    pub fn new(sample_rate: f32) -> Self {
        let mut svf = Self {
            ic1eq: 0.0,
            ic2eq: 0.0,
            g: 0.0,
            k: 0.0,
            sample_rate,
            cutoff: 1000.0,
            resonance: 0.707,
            output_type: SvfOutput::Bandpass,
            drive: 0.0,
        };
        svf.update_coefficients();
        svf
    }

    /// Set cutoff frequency in Hz.
    ///
    /// Range: 20.0 to `sample_rate × 0.49`. Values are clamped.
    pub fn set_cutoff(&mut self, freq: f32) {
        self.cutoff = freq.clamp(20.0, self.sample_rate * 0.49);
        self.update_coefficients();
    }

    /// Get current cutoff frequency in Hz.
    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    /// Set resonance (Q factor).
    ///
    /// Range: 0.5 to 20.0. Values are clamped. Q = 0.707 gives a Butterworth
    /// (maximally flat) response.
    pub fn set_resonance(&mut self, q: f32) {
        self.resonance = q.clamp(0.5, 20.0);
        self.update_coefficients();
    }

    /// Get current resonance (Q factor).
    pub fn resonance(&self) -> f32 {
        self.resonance
    }

    /// Set the output type (lowpass, highpass, bandpass, or notch).
    pub fn set_output_type(&mut self, output_type: SvfOutput) {
        self.output_type = output_type;
    }

    /// Get current output type.
    pub fn output_type(&self) -> SvfOutput {
        self.output_type
    }

    /// Set nonlinear drive amount.
    ///
    /// Range: 0.0 (linear) to 1.0 (maximum saturation). When drive > 0,
    /// `tanh` saturation is applied to the bandpass integrator state update
    /// with a pre-gain of `1 + drive × 3`, normalised to preserve
    /// small-signal gain.
    pub fn set_drive(&mut self, drive: f32) {
        self.drive = drive.clamp(0.0, 1.0);
    }

    /// Get current drive amount (0.0-1.0).
    pub fn drive(&self) -> f32 {
        self.drive
    }

    fn update_coefficients(&mut self) {
        self.g = tanf(PI * self.cutoff / self.sample_rate);
        self.k = 1.0 / self.resonance;
    }

    /// Process one sample and return all taps (lowpass, highpass, bandpass,
    /// notch).
    pub fn process_all(&mut self, input: f32) -> (f32, f32, f32, f32) {
        let v3 = input - self.ic2eq;
        let v1 = (self.g * v3 + self.ic1eq) / (1.0 + self.g * (self.g + self.k));
        let v2 = self.ic2eq + self.g * v1;

        // Saturate the bandpass integrator state only; tanh(x·d)/d ~= x for
        // small x, so the small-signal response is unchanged.
        let v1_sat = if self.drive > 0.0 {
            let d = 1.0 + self.drive * 3.0;
            tanhf(v1 * d) / d
        } else {
            v1
        };

        self.ic1eq = flush_denormal(2.0 * v1_sat - self.ic1eq);
        self.ic2eq = flush_denormal(2.0 * v2 - self.ic2eq);

        let lp = v2;
        let bp = v1;
        let hp = input - self.k * v1 - v2;
        let notch = lp + hp;

        (lp, hp, bp, notch)
    }
}

impl Effect for StateVariableFilter {
    fn process(&mut self, input: f32) -> f32 {
        let (lp, hp, bp, notch) = self.process_all(input);

        match self.output_type {
            SvfOutput::Lowpass => lp,
            SvfOutput::Highpass => hp,
            SvfOutput::Bandpass => bp,
            SvfOutput::Notch => notch,
        }
    }

    fn reset(&mut self) {
        self.ic1eq = 0.0;
        self.ic2eq = 0.0;
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.update_coefficients();
    }
}
