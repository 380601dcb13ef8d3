//! Procedural audio synthesis
//!
//! This module provides the building blocks for the sound-effect cues:
//! a sine oscillator, decay envelopes, seeded noise, a leaky-integrator
//! filter and a high-level Synth API, plus PCM conversion and WAV export.
//!
//! # Example
//! ```no_run
//! use proc_sfx::audio::*;
//!
//! let synth = Synth::new(SAMPLE_RATE);
//!
//! // Two notes back to back
//! let a = synth.tone(440.0, 0.2, Envelope::Linear, 0.5);
//! let b = synth.tone(660.0, 0.4, Envelope::Exponential { rate: 3.0 }, 0.5);
//! let phrase = concat(&[&a, &b]);
//!
//! // Convert to PCM i16 and write
//! let pcm = to_pcm_i16(&phrase);
//! write_wav(&pcm, SAMPLE_RATE, std::path::Path::new("phrase.wav")).unwrap();
//! ```

mod envelope;
mod export;
mod filters;
mod noise;
mod oscillators;
mod synth;

/// Output sample rate (44.1kHz)
pub const SAMPLE_RATE: u32 = 44100;

// Oscillators
pub use oscillators::{num_samples, sine};

// Envelope
pub use envelope::Envelope;

// Noise and filtering
pub use filters::LeakyIntegrator;
pub use noise::NoiseSource;

// Synth API
pub use synth::{FireParams, Note, Synth};

// Utilities and export
pub use export::{
    concat, encode_wav, mix, normalize_to, peak, to_pcm_i16, write_wav, write_wav_f64,
};

/// Audio sample buffer (f64 samples, -1.0 to 1.0 range)
#[derive(Clone, Debug)]
pub struct AudioBuffer {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Audio samples in -1.0 to 1.0 range
    pub samples: Vec<f64>,
}

impl AudioBuffer {
    /// Create a new empty audio buffer
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            samples: Vec::new(),
        }
    }

    /// Create a buffer from samples
    pub fn from_samples(sample_rate: u32, samples: Vec<f64>) -> Self {
        Self { sample_rate, samples }
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Quantize to 16-bit PCM
    pub fn to_pcm_i16(&self) -> Vec<i16> {
        to_pcm_i16(&self.samples)
    }
}
