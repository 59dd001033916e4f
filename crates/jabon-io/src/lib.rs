//! Audio file I/O for the jabón offline harness.
//!
//! The engine itself is freestanding; files only exist in the test/audition
//! world. This crate provides:
//!
//! - [`read_wav`] / [`write_wav`] for mono buffers (multi-channel input is
//!   mixed down)
//! - [`read_wav_stereo`] / [`write_wav_stereo`] for the interleaved stereo
//!   buffers the engine's dispatcher consumes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jabon_io::{read_wav_stereo, write_wav_stereo, WavSpec};
//!
//! let (samples, spec) = read_wav_stereo("input.wav")?;
//! // ... process interleaved samples ...
//! write_wav_stereo("output.wav", &samples, spec)?;
//! ```

mod wav;

pub use wav::{WavSpec, read_wav, read_wav_stereo, write_wav, write_wav_stereo};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file has no audio channels.
    #[error("WAV file has no channels")]
    NoChannels,

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
