//! Sine oscillator
//!
//! All cues are built from plain sine partials; timbre comes from the
//! envelopes and from layering, not from the waveform.

use std::f64::consts::PI;

/// Number of whole samples that fit in `duration` seconds
pub fn num_samples(duration: f64, sample_rate: u32) -> usize {
    (duration * sample_rate as f64).max(0.0) as usize
}

/// Generate a sine wave starting at zero phase
///
/// Sample `i` is `sin(2π·f·t)` with `t = i / sample_rate`, evaluated in
/// double precision so rendered cues are bit-for-bit repeatable.
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `duration` - Duration in seconds
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// Vector of samples in -1.0 to 1.0 range
pub fn sine(frequency: f64, duration: f64, sample_rate: u32) -> Vec<f64> {
    let omega = 2.0 * PI * frequency;
    let rate = sample_rate as f64;

    (0..num_samples(duration, sample_rate))
        .map(|i| (omega * (i as f64 / rate)).sin())
        .collect()
}
