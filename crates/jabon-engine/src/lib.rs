//! Jabón Engine - the pedal brain.
//!
//! Ties the [`jabon_dsp`] processors into the three-mode effect the hardware
//! presents: SAB (tremolo into the SOAP bandpass), BNP (the reference SVF
//! bandpass), and TRM (pure tremolo). The crate owns everything between the
//! control surface and the audio callback:
//!
//! - [`Mode`] - three-state selector advanced by encoder increments,
//!   wrapping in both directions
//! - [`ControlFrame`] - the per-block snapshot of knobs and encoder delta
//! - [`Rgb`] - indicator colors derived from the active mode and knob values
//! - [`AudioEngine`] - interleaved stereo block dispatcher with a
//!   once-per-block control tick
//!
//! # Concurrency model
//!
//! The engine is designed to be owned by the audio callback: `process_block`
//! mutates filter state and consumes the control snapshot without locking,
//! suspending, or allocating. Hosts sample their control hardware (or a
//! script) into a [`ControlFrame`] and hand it in with each block.
//!
//! # Example
//!
//! ```rust
//! use jabon_engine::{AudioEngine, ControlFrame};
//!
//! let mut engine = AudioEngine::new(48000.0).unwrap();
//! let controls = ControlFrame { knob1: 0.4, knob2: 0.5, encoder_delta: 0 };
//!
//! let input = [0.0f32; 8]; // 4 interleaved stereo frames
//! let mut output = [0.0f32; 8];
//! engine.process_block(&input, &mut output, &controls);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod controls;
pub mod engine;
pub mod mode;

pub use controls::{ControlFrame, Rgb};
pub use engine::{AudioEngine, EngineError};
pub use mode::{Mode, SabStyle};
