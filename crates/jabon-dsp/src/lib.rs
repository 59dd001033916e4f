//! Jabón DSP - signal processing primitives for the jabón bandpass/tremolo effect
//!
//! This crate provides the per-sample processors behind the jabón pedal,
//! designed for real-time audio processing with zero allocation in the
//! audio path.
//!
//! # Processors
//!
//! - [`Soap`] - Second-order-allpass-derived bandpass filter (the project's
//!   namesake). A direct-form IIR allpass whose output is subtracted from
//!   the input to form a bandpass with independent center frequency and
//!   bandwidth controls.
//! - [`Tremolo`] - Sinusoidal amplitude modulator with rate and depth.
//! - [`StateVariableFilter`] - Multi-output TPT SVF (lowpass, highpass,
//!   bandpass, notch) used as the reference bandpass topology.
//! - [`Lfo`] - Sine low-frequency oscillator driving the tremolo.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Object-safe trait for per-sample processors
//! - [`EffectExt`] / [`Chain`] - Zero-cost series combinator
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jabon-dsp = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use jabon_dsp::{Effect, Soap, Tremolo};
//!
//! let mut trem = Tremolo::new(48000.0);
//! let mut soap = Soap::new(48000.0).unwrap();
//! soap.set_center_freq(400.0);
//! soap.set_bandwidth(50.0);
//!
//! // Tremolo in front of the bandpass, per sample
//! let banded = soap.process(trem.process(0.25));
//! assert!(banded.is_finite());
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocations or locks in processing paths
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Coefficients in double, state in single**: SOAP coefficients are
//!   computed in f64 and stored as f32, matching the hardware unit's
//!   audible behavior

#![cfg_attr(not(feature = "std"), no_std)]

pub mod effect;
pub mod lfo;
pub mod math;
pub mod soap;
pub mod svf;
pub mod tremolo;

pub use effect::{Chain, Effect, EffectExt};
pub use lfo::Lfo;
pub use math::{db_to_linear, flush_denormal, linear_to_db};
pub use soap::{Soap, SoapError};
pub use svf::{StateVariableFilter, SvfOutput};
pub use tremolo::Tremolo;
