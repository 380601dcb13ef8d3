//! Audio export and utility functions
//!
//! Provides mixing, peak normalization, PCM conversion and WAV export.

use crate::SfxError;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::{Cursor, Seek, Write};
use std::path::Path;

/// Convert f64 samples (-1.0 to 1.0) to PCM i16
///
/// Samples are clamped, scaled by `i16::MAX` and truncated toward zero,
/// so the output range is symmetric (-32767..=32767).
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| {
            let clamped = s.clamp(-1.0, 1.0);
            (clamped * i16::MAX as f64) as i16
        })
        .collect()
}

/// Mix multiple audio signals together
///
/// Each signal is multiplied by its gain before summing. The result is as
/// long as the longest input and is NOT normalized.
///
/// # Example
/// ```
/// use proc_sfx::audio::*;
///
/// let synth = Synth::new(SAMPLE_RATE);
/// let low = synth.tone(220.0, 0.5, Envelope::Linear, 1.0);
/// let high = synth.tone(440.0, 0.25, Envelope::Linear, 1.0);
///
/// let mixed = mix(&[(&low, 0.7), (&high, 0.3)]);
/// assert_eq!(mixed.len(), low.len());
/// ```
pub fn mix(signals: &[(&[f64], f64)]) -> Vec<f64> {
    let max_len = signals.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
    let mut result = vec![0.0f64; max_len];

    for (samples, gain) in signals {
        for (out, &sample) in result.iter_mut().zip(samples.iter()) {
            *out += sample * gain;
        }
    }

    result
}

/// Concatenate multiple audio signals in order
pub fn concat(signals: &[&[f64]]) -> Vec<f64> {
    let total_len: usize = signals.iter().map(|s| s.len()).sum();
    let mut result = Vec::with_capacity(total_len);
    for signal in signals {
        result.extend_from_slice(signal);
    }
    result
}

/// Peak absolute amplitude (0.0 for an empty buffer)
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()))
}

/// Scale samples so the peak amplitude equals `target`
///
/// Silent buffers are left untouched.
pub fn normalize_to(samples: &mut [f64], target: f64) {
    let max_amplitude = peak(samples);
    if max_amplitude <= 0.0 {
        return;
    }

    let scale = target / max_amplitude;
    tracing::debug!(peak = max_amplitude, scale, "normalizing");
    for sample in samples.iter_mut() {
        *sample *= scale;
    }
}

fn mono_16bit(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

fn write_pcm<W: Write + Seek>(writer: W, samples: &[i16], sample_rate: u32) -> Result<(), SfxError> {
    let mut writer = WavWriter::new(writer, mono_16bit(sample_rate))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Encode PCM i16 samples as an in-memory mono 16-bit WAV file
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, SfxError> {
    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    write_pcm(&mut cursor, samples, sample_rate)?;
    Ok(cursor.into_inner())
}

/// Write PCM i16 samples to a mono 16-bit WAV file
///
/// # Arguments
/// * `samples` - PCM i16 samples
/// * `sample_rate` - Sample rate in Hz
/// * `path` - Output file path
pub fn write_wav(samples: &[i16], sample_rate: u32, path: &Path) -> Result<(), SfxError> {
    let file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_pcm(file, samples, sample_rate)?;
    tracing::debug!(path = %path.display(), samples = samples.len(), "wrote WAV");
    Ok(())
}

/// Write f64 samples directly to WAV (clamps and quantizes first)
pub fn write_wav_f64(samples: &[f64], sample_rate: u32, path: &Path) -> Result<(), SfxError> {
    let pcm = to_pcm_i16(samples);
    write_wav(&pcm, sample_rate, path)
}
