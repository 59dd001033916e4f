//! Level measurement: RMS and peak, linear and dB.

/// Compute RMS (Root Mean Square) level of a signal.
///
/// Returns RMS value in linear scale (not dB).
pub fn rms(signal: &[f32]) -> f32 {
    if signal.is_empty() {
        return 0.0;
    }

    let sum_sq: f32 = signal.iter().map(|&x| x * x).sum();
    (sum_sq / signal.len() as f32).sqrt()
}

/// Compute RMS level in dB.
pub fn rms_db(signal: &[f32]) -> f32 {
    let rms_val = rms(signal);
    if rms_val > 1e-10 {
        20.0 * rms_val.log10()
    } else {
        -200.0 // Effectively silence
    }
}

/// Compute peak level (maximum absolute value).
pub fn peak(signal: &[f32]) -> f32 {
    signal.iter().fold(0.0f32, |acc, x| acc.max(x.abs()))
}

/// Compute peak level in dB.
pub fn peak_db(signal: &[f32]) -> f32 {
    let peak_val = peak(signal);
    if peak_val > 1e-10 {
        20.0 * peak_val.log10()
    } else {
        -200.0
    }
}
