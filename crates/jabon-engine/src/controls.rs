//! Control surface boundary: knob/encoder input and indicator output.
//!
//! The hardware layer (ADC scanning, encoder debounce, LED PWM) lives
//! outside this crate. It delivers one [`ControlFrame`] per audio block and
//! takes back two [`Rgb`] triples for the indicators.

use crate::mode::Mode;

/// Per-block snapshot of the control surface.
///
/// Knob values are normalized to [0, 1] by the collaborating hardware
/// layer; the engine clamps them again rather than trusting the caller.
/// The encoder delta is the signed number of detents accumulated since the
/// previous block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlFrame {
    /// Knob 1 position, 0.0 to 1.0.
    pub knob1: f32,
    /// Knob 2 position, 0.0 to 1.0.
    pub knob2: f32,
    /// Signed encoder detents since the last control tick.
    pub encoder_delta: i32,
}

/// An RGB indicator color, each channel in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// All channels dark.
    pub const OFF: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    /// Indicator color for a mode at a given brightness.
    ///
    /// SAB glows blue, BNP green, TRM magenta (red + blue); brightness
    /// tracks the knob the indicator belongs to.
    pub fn for_mode(mode: Mode, brightness: f32) -> Rgb {
        let k = brightness.clamp(0.0, 1.0);
        Rgb {
            r: if mode == Mode::Trm { k } else { 0.0 },
            g: if mode == Mode::Bnp { k } else { 0.0 },
            b: if mode == Mode::Sab || mode == Mode::Trm { k } else { 0.0 },
        }
    }
}
