//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// WAV file specification.
#[derive(Debug, Clone, Copy)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample (e.g., 16, 24, 32).
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

fn read_samples<R: std::io::Read>(reader: WavReader<R>) -> Result<Vec<f32>> {
    let spec = reader.spec();
    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            // 1 << 31 overflows i32 for 32-bit PCM; compute the scale in f32
            let max_val = 2f32.powi(i32::from(spec.bits_per_sample) - 1);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };
    Ok(samples)
}

/// Read a WAV file and return samples as f32 along with the spec.
///
/// Multi-channel files are mixed down to mono by averaging channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(Error::NoChannels);
    }

    let samples = read_samples(reader)?;

    let mono = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok((mono, spec))
}

/// Read a WAV file as interleaved stereo (`[L, R, L, R, ...]`).
///
/// Mono files are duplicated to both channels; files with more than two
/// channels keep the first two.
pub fn read_wav_stereo<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = spec.channels as usize;
    if channels == 0 {
        return Err(Error::NoChannels);
    }

    let samples = read_samples(reader)?;

    let stereo = match channels {
        1 => {
            let mut out = Vec::with_capacity(samples.len() * 2);
            for &s in &samples {
                out.push(s);
                out.push(s);
            }
            out
        }
        2 => samples,
        _ => {
            let mut out = Vec::with_capacity(samples.len() / channels * 2);
            for frame in samples.chunks(channels) {
                out.push(frame[0]);
                out.push(frame[1]);
            }
            out
        }
    };

    Ok((stereo, spec))
}

fn write_samples<P: AsRef<Path>>(path: P, samples: &[f32], spec: hound::WavSpec) -> Result<()> {
    let mut writer = WavWriter::create(path, spec)?;

    if spec.sample_format == SampleFormat::Float {
        for &sample in samples {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = 2f32.powi(i32::from(spec.bits_per_sample) - 1);
        for &sample in samples {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

/// Write mono samples to a WAV file.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    let hound_spec = hound::WavSpec::from(WavSpec { channels: 1, ..spec });
    write_samples(path, samples, hound_spec)
}

/// Write interleaved stereo samples (`[L, R, L, R, ...]`) to a WAV file.
pub fn write_wav_stereo<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    let hound_spec = hound::WavSpec::from(WavSpec { channels: 2, ..spec });
    write_samples(path, samples, hound_spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_round_trip_f32() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        let samples: Vec<f32> = (0..480).map(|n| (n as f32 * 0.01).sin() * 0.5).collect();

        write_wav(&path, &samples, WavSpec::default()).unwrap();
        let (back, spec) = read_wav(&path).unwrap();

        assert_eq!(spec.sample_rate, 48000);
        assert_eq!(back.len(), samples.len());
        for (a, b) in samples.iter().zip(&back) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_stereo_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        let samples = vec![0.1f32, -0.1, 0.2, -0.2, 0.3, -0.3];

        write_wav_stereo(&path, &samples, WavSpec::default()).unwrap();
        let (back, spec) = read_wav_stereo(&path).unwrap();

        assert_eq!(spec.channels, 2);
        assert_eq!(back.len(), samples.len());
        for (a, b) in samples.iter().zip(&back) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_mono_reads_as_duplicated_stereo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono2.wav");
        let samples = vec![0.25f32, -0.5];

        write_wav(&path, &samples, WavSpec::default()).unwrap();
        let (stereo, _) = read_wav_stereo(&path).unwrap();
        assert_eq!(stereo, vec![0.25, 0.25, -0.5, -0.5]);
    }

    #[test]
    fn test_pcm16_round_trip_tolerance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pcm16.wav");
        let samples = vec![0.0f32, 0.5, -0.5, 0.99];
        let spec = WavSpec {
            bits_per_sample: 16,
            ..WavSpec::default()
        };

        write_wav(&path, &samples, spec).unwrap();
        let (back, _) = read_wav(&path).unwrap();
        for (a, b) in samples.iter().zip(&back) {
            assert!((a - b).abs() < 1e-3);
        }
    }

    #[test]
    fn test_pcm32_int_keeps_polarity_and_scale() {
        // 2^31 does not fit an i32 shift; a naive scale flips the sign
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pcm32.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Int,
        };

        let mut writer = WavWriter::create(&path, spec).unwrap();
        for &sample in &[0.5f32, -0.25, 0.0] {
            writer
                .write_sample((f64::from(sample) * 2f64.powi(31)) as i32)
                .unwrap();
        }
        writer.finalize().unwrap();

        let (back, _) = read_wav(&path).unwrap();
        assert!((back[0] - 0.5).abs() < 1e-6);
        assert!((back[1] + 0.25).abs() < 1e-6);
        assert_eq!(back[2], 0.0);
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(read_wav("/nonexistent/nope.wav").is_err());
    }
}
