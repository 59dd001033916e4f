//! Spectral analysis utilities.

use crate::fft::{Fft, Window};

/// Compute magnitude spectrum from a time-domain signal.
///
/// Returns `fft_size/2 + 1` bins from DC to Nyquist.
pub fn magnitude_spectrum(signal: &[f32], fft_size: usize, window: Window) -> Vec<f32> {
    let fft = Fft::new(fft_size);

    let mut windowed = signal.to_vec();
    windowed.resize(fft_size, 0.0);
    window.apply(&mut windowed);

    let spectrum = fft.forward(&windowed);
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Frequency of the strongest bin in a magnitude spectrum, in Hz.
///
/// The DC bin is skipped; silence returns 0.
pub fn peak_frequency(spectrum: &[f32], sample_rate: f32) -> f32 {
    if spectrum.len() < 2 {
        return 0.0;
    }
    let fft_size = (spectrum.len() - 1) * 2;
    let bin_width = sample_rate / fft_size as f32;

    let mut best_bin = 0;
    let mut best_mag = 0.0f32;
    for (bin, &mag) in spectrum.iter().enumerate().skip(1) {
        if mag > best_mag {
            best_mag = mag;
            best_bin = bin;
        }
    }

    best_bin as f32 * bin_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal;

    #[test]
    fn test_peak_frequency_of_sine() {
        // Bin-aligned tone: 40 * (48000 / 4096) = 468.75 Hz
        let freq = 40.0 * 48000.0 / 4096.0;
        let tone = signal::sine(48000.0, freq, 1.0, 4096);
        let spectrum = magnitude_spectrum(&tone, 4096, Window::Hann);
        let peak = peak_frequency(&spectrum, 48000.0);
        assert!((peak - freq).abs() < 1.0, "peak at {} Hz, expected {}", peak, freq);
    }

    #[test]
    fn test_silence_has_no_peak() {
        let spectrum = magnitude_spectrum(&signal::silence(1024), 1024, Window::Rectangular);
        assert_eq!(peak_frequency(&spectrum, 48000.0), 0.0);
    }
}
