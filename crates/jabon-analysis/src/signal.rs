//! Deterministic test stimuli.

use std::f32::consts::PI;

/// Generate a sine tone.
pub fn sine(sample_rate: f32, freq_hz: f32, amplitude: f32, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|n| amplitude * (2.0 * PI * freq_hz * n as f32 / sample_rate).sin())
        .collect()
}

/// Generate a unit impulse at sample 0, zeros thereafter.
pub fn impulse(amplitude: f32, num_samples: usize) -> Vec<f32> {
    let mut samples = vec![0.0; num_samples];
    if let Some(first) = samples.first_mut() {
        *first = amplitude;
    }
    samples
}

/// Generate silence.
pub fn silence(num_samples: usize) -> Vec<f32> {
    vec![0.0; num_samples]
}

/// Duplicate a mono signal into interleaved stereo (`[L, R, L, R, ...]`).
pub fn interleave_mono(mono: &[f32]) -> Vec<f32> {
    let mut stereo = Vec::with_capacity(mono.len() * 2);
    for &sample in mono {
        stereo.push(sample);
        stereo.push(sample);
    }
    stereo
}

/// Split an interleaved stereo signal into (left, right).
pub fn deinterleave(stereo: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let mut left = Vec::with_capacity(stereo.len() / 2);
    let mut right = Vec::with_capacity(stereo.len() / 2);
    for frame in stereo.chunks_exact(2) {
        left.push(frame[0]);
        right.push(frame[1]);
    }
    (left, right)
}
