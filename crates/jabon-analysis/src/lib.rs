//! Jabón Analysis - offline measurement for the DSP chain.
//!
//! The audio path itself is verified off-line: the engine is pure with
//! respect to its inputs, so every acceptance property (passband peak,
//! stopband rejection, selectivity, silence) can be measured by driving it
//! with known signals and inspecting the output. This crate provides the
//! measuring instruments:
//!
//! - [`dynamics`] - RMS and peak levels, linear and dB
//! - [`fft`] - FFT wrapper with windowing
//! - [`spectrum`] - magnitude spectra and peak-frequency estimation
//! - [`signal`] - deterministic test stimuli (sine, impulse, silence)
//!
//! # Example
//!
//! ```rust
//! use jabon_analysis::{dynamics, signal};
//!
//! let tone = signal::sine(48000.0, 440.0, 1.0, 4800);
//! let level = dynamics::rms(&tone);
//! assert!((level - 0.707).abs() < 0.01);
//! ```

pub mod dynamics;
pub mod fft;
pub mod signal;
pub mod spectrum;

pub use fft::{Fft, Window};
