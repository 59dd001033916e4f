//! Block dispatcher and control tick.
//!
//! [`AudioEngine`] owns the three processors and routes interleaved stereo
//! blocks through whichever one the mode selector points at. Controls are
//! sampled exactly once per block, before the first sample of that block is
//! produced, so a block's mapping always matches its displayed mode.

use core::fmt;

use jabon_dsp::{Effect, Soap, SoapError, StateVariableFilter, SvfOutput, Tremolo};

use crate::controls::{ControlFrame, Rgb};
use crate::mode::{Mode, SabStyle};

/// Startup failure. There are no runtime errors: out-of-range parameters
/// are clamped at the setters and non-finite filter state is rescued at the
/// block boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The reported sample rate was zero, negative, or non-finite.
    InvalidSampleRate,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidSampleRate => {
                write!(f, "sample rate must be finite and positive")
            }
        }
    }
}

impl core::error::Error for EngineError {}

impl From<SoapError> for EngineError {
    fn from(err: SoapError) -> Self {
        match err {
            SoapError::InvalidSampleRate => EngineError::InvalidSampleRate,
        }
    }
}

/// The jabón effect engine.
///
/// Boot defaults: mode SAB (composite style), SOAP at 400 Hz / 50 Hz,
/// tremolo at 2 Hz / 0.75 depth, SVF at 300 Hz / Q 0.85 / drive 0.8.
/// Nothing is persisted; every boot starts here.
///
/// The SAB pre-stage and the TRM mode share one tremolo instance, as on the
/// hardware unit, so switching modes never resets the LFO phase.
#[derive(Debug)]
pub struct AudioEngine {
    sample_rate: f32,
    mode: Mode,
    sab_style: SabStyle,

    soap: Soap,
    tremolo: Tremolo,
    svf: StateVariableFilter,

    leds: [Rgb; 2],
}

impl AudioEngine {
    /// Create an engine at the device-reported sample rate.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSampleRate`] if the rate is non-finite or not
    /// positive. This is the fatal-at-startup case; there is no recovery.
    pub fn new(sample_rate: f32) -> Result<Self, EngineError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(EngineError::InvalidSampleRate);
        }

        let soap = Soap::new(sample_rate)?;

        let mut svf = StateVariableFilter::new(sample_rate);
        svf.set_cutoff(300.0);
        svf.set_resonance(0.85);
        svf.set_drive(0.8);
        svf.set_output_type(SvfOutput::Bandpass);

        Ok(Self {
            sample_rate,
            mode: Mode::Sab,
            sab_style: SabStyle::Composite,
            soap,
            tremolo: Tremolo::new(sample_rate),
            svf,
            leds: [Rgb::OFF; 2],
        })
    }

    /// Sample rate the engine was created with.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Currently selected mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Which SAB rendition `process_block` runs.
    pub fn sab_style(&self) -> SabStyle {
        self.sab_style
    }

    /// Select the SAB rendition (composite is the boot default).
    pub fn set_sab_style(&mut self, style: SabStyle) {
        self.sab_style = style;
    }

    /// Indicator colors as of the last control tick.
    pub fn leds(&self) -> [Rgb; 2] {
        self.leds
    }

    /// The SOAP filter stage (read-only; parameters move via the mapper).
    pub fn soap(&self) -> &Soap {
        &self.soap
    }

    /// The tremolo stage.
    pub fn tremolo(&self) -> &Tremolo {
        &self.tremolo
    }

    /// The SVF reference stage.
    pub fn svf(&self) -> &StateVariableFilter {
        &self.svf
    }

    /// The once-per-block control tick.
    ///
    /// Consumes the encoder delta, applies the active mode's knob mapping
    /// (and no other - mappings never cascade across modes), refreshes the
    /// indicators, and rescues the SOAP state if a non-finite input ever
    /// poisoned it.
    pub fn control_tick(&mut self, controls: &ControlFrame) {
        self.mode = self.mode.step(controls.encoder_delta);

        let k1 = controls.knob1.clamp(0.0, 1.0);
        let k2 = controls.knob2.clamp(0.0, 1.0);

        match self.mode {
            Mode::Sab => {
                self.soap.set_center_freq(1000.0 * k1);
                self.soap.set_bandwidth(100.0 * k2);
            }
            Mode::Bnp => {
                self.svf.set_cutoff(3000.0 * k1);
            }
            Mode::Trm => {
                self.tremolo.set_rate(3.0 * k1);
                self.tremolo.set_depth(k2);
            }
        }

        self.leds = [
            Rgb::for_mode(self.mode, k1),
            Rgb::for_mode(self.mode, k2),
        ];

        self.soap.rescue();
    }

    /// Process one interleaved stereo block.
    ///
    /// `input` and `output` are `[L, R, L, R, ...]` and must be the same,
    /// even, length. The control tick runs once, before the sample loop.
    /// Every mode is mono-summed: the right output equals the left.
    pub fn process_block(&mut self, input: &[f32], output: &mut [f32], controls: &ControlFrame) {
        debug_assert_eq!(input.len(), output.len());
        debug_assert_eq!(input.len() % 2, 0, "interleaved stereo blocks have even length");

        self.control_tick(controls);

        for (frame_in, frame_out) in input.chunks_exact(2).zip(output.chunks_exact_mut(2)) {
            let (out_l, out_r) = self.process_frame(frame_in[0]);
            frame_out[0] = out_l;
            frame_out[1] = out_r;
        }
    }

    /// One sample through the active mode. The right input does not reach
    /// any processor; the effect is mono-summed from the left channel.
    #[inline]
    fn process_frame(&mut self, in_l: f32) -> (f32, f32) {
        let out = match self.mode {
            Mode::Sab => match self.sab_style {
                SabStyle::Composite => {
                    let dry = in_l;
                    let banded = self.soap.process(self.tremolo.process(in_l));
                    (banded + 0.1 * dry) / 2.0
                }
                SabStyle::Direct => 3.0 * self.soap.process(in_l),
            },
            Mode::Bnp => self.svf.process(in_l),
            Mode::Trm => self.tremolo.process(in_l),
        };

        (out, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Knobs that map SAB back onto its boot defaults (400 Hz, 50 Hz)
    const NEUTRAL: ControlFrame = ControlFrame {
        knob1: 0.4,
        knob2: 0.5,
        encoder_delta: 0,
    };

    #[test]
    fn test_invalid_sample_rate_is_fatal() {
        assert_eq!(AudioEngine::new(0.0).unwrap_err(), EngineError::InvalidSampleRate);
        assert_eq!(AudioEngine::new(-1.0).unwrap_err(), EngineError::InvalidSampleRate);
        assert_eq!(
            AudioEngine::new(f32::INFINITY).unwrap_err(),
            EngineError::InvalidSampleRate
        );
    }

    #[test]
    fn test_boot_defaults() {
        let engine = AudioEngine::new(48000.0).unwrap();
        assert_eq!(engine.mode(), Mode::Sab);
        assert_eq!(engine.sab_style(), SabStyle::Composite);
        assert_eq!(engine.soap().center_freq(), 400.0);
        assert_eq!(engine.soap().bandwidth(), 50.0);
        assert_eq!(engine.tremolo().rate(), 2.0);
        assert_eq!(engine.tremolo().depth(), 0.75);
        assert_eq!(engine.svf().cutoff(), 300.0);
        assert_eq!(engine.svf().resonance(), 0.85);
        assert_eq!(engine.svf().drive(), 0.8);
    }

    #[test]
    fn test_mapper_isolation_in_bnp() {
        let mut engine = AudioEngine::new(48000.0).unwrap();
        let to_bnp = ControlFrame {
            knob1: 0.9,
            knob2: 0.9,
            encoder_delta: 1,
        };
        engine.control_tick(&to_bnp);

        assert_eq!(engine.mode(), Mode::Bnp);
        assert_eq!(engine.svf().cutoff(), 2700.0);
        // SAB and TRM parameters must not move
        assert_eq!(engine.soap().center_freq(), 400.0);
        assert_eq!(engine.soap().bandwidth(), 50.0);
        assert_eq!(engine.tremolo().rate(), 2.0);
        assert_eq!(engine.tremolo().depth(), 0.75);
    }

    #[test]
    fn test_leds_track_mode_and_knobs() {
        let mut engine = AudioEngine::new(48000.0).unwrap();
        engine.control_tick(&ControlFrame {
            knob1: 0.3,
            knob2: 0.7,
            encoder_delta: 0,
        });
        let [led1, led2] = engine.leds();
        assert_eq!(led1, Rgb { r: 0.0, g: 0.0, b: 0.3 });
        assert_eq!(led2, Rgb { r: 0.0, g: 0.0, b: 0.7 });

        engine.control_tick(&ControlFrame {
            knob1: 0.3,
            knob2: 0.7,
            encoder_delta: 2,
        });
        let [led1, _] = engine.leds();
        assert_eq!(led1, Rgb { r: 0.3, g: 0.0, b: 0.3 });
    }

    #[test]
    fn test_out_of_range_knobs_clamped() {
        let mut engine = AudioEngine::new(48000.0).unwrap();
        engine.control_tick(&ControlFrame {
            knob1: 1.8,
            knob2: -0.3,
            encoder_delta: 0,
        });
        assert_eq!(engine.soap().center_freq(), 1000.0);
        assert_eq!(engine.soap().bandwidth(), 1.0); // bandwidth floor
    }

    #[test]
    fn test_nan_input_recovers_next_block() {
        let mut engine = AudioEngine::new(48000.0).unwrap();

        let poisoned = [f32::NAN; 8];
        let mut out = [0.0f32; 8];
        engine.process_block(&poisoned, &mut out, &NEUTRAL);

        // Next block's tick rescues the state; silence in, silence out
        let silence = [0.0f32; 8];
        engine.process_block(&silence, &mut out, &NEUTRAL);
        let dirty = out.iter().any(|s| !s.is_finite());
        assert!(!dirty, "engine did not recover from a poisoned block");
    }
}
