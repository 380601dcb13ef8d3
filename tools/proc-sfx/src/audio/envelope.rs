//! Decay envelopes
//!
//! Every note in the cue set starts at full level and only decays, so the
//! envelope is just the shape of that decay.

/// Amplitude decay shape applied over the length of a note
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Envelope {
    /// Straight ramp from 1.0 down towards 0.0 over the note
    Linear,
    /// `exp(-rate * t)` with `t` in seconds; independent of note length
    Exponential {
        /// Decay rate per second
        rate: f64,
    },
}

impl Envelope {
    /// Amplitude for sample `index` of a note lasting `length` samples
    ///
    /// `length` is `duration * sample_rate` before flooring, so a linear
    /// ramp reaches zero exactly at the nominal end of the note.
    pub fn level(&self, index: usize, length: f64, sample_rate: u32) -> f64 {
        match *self {
            Envelope::Linear => 1.0 - index as f64 / length.max(1.0),
            Envelope::Exponential { rate } => (-rate * (index as f64 / sample_rate as f64)).exp(),
        }
    }

    /// Apply envelope to samples
    ///
    /// # Arguments
    /// * `samples` - Audio samples to shape
    /// * `length` - Nominal note length in samples (unfloored)
    /// * `sample_rate` - Sample rate in Hz
    pub fn apply(&self, samples: &mut [f64], length: f64, sample_rate: u32) {
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample *= self.level(i, length, sample_rate);
        }
    }
}
