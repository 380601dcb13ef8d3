//! High-level synthesizer API
//!
//! Turns the primitives (sine partials, decay envelopes, seeded noise and
//! the leaky integrator) into complete sound effects.

use super::envelope::Envelope;
use super::export::{concat, mix, normalize_to};
use super::filters::LeakyIntegrator;
use super::noise::NoiseSource;
use super::oscillators::{num_samples, sine};

/// One note of a melodic cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Frequency in Hz
    pub frequency: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Decay shape over the note
    pub envelope: Envelope,
}

impl Note {
    pub const fn new(frequency: f64, duration: f64, envelope: Envelope) -> Self {
        Self {
            frequency,
            duration,
            envelope,
        }
    }
}

/// Parameters of the fire crackle texture
///
/// The texture is a low rumble (leaky-integrated white noise) with rare,
/// sharp pops on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireParams {
    /// Duration in seconds
    pub duration: f64,
    /// Peak amplitude after normalization
    pub volume: f64,
    /// Gain of each white noise sample entering the integrator
    pub rumble_input_gain: f64,
    /// Integrator leak factor
    pub rumble_leak: f64,
    /// Level of the rumble in the mix
    pub rumble_gain: f64,
    /// Per-sample probability of a pop
    pub pop_probability: f64,
    /// Smallest pop magnitude
    pub pop_min: f64,
    /// Largest pop magnitude (exclusive)
    pub pop_max: f64,
}

impl Default for FireParams {
    fn default() -> Self {
        Self {
            duration: 1.5,
            volume: 0.6,
            rumble_input_gain: 0.1,
            rumble_leak: 0.95,
            rumble_gain: 0.5,
            pop_probability: 0.0005,
            pop_min: 0.5,
            pop_max: 1.0,
        }
    }
}

/// High-level synthesizer for generating sound effects
///
/// # Example
/// ```
/// use proc_sfx::audio::*;
///
/// let synth = Synth::new(SAMPLE_RATE);
///
/// let chime = synth.arpeggio(
///     &[
///         Note::new(523.25, 0.1, Envelope::Linear),
///         Note::new(783.99, 0.3, Envelope::Exponential { rate: 4.0 }),
///     ],
///     0.5,
/// );
/// assert_eq!(chime.len(), 4410 + 13230);
///
/// let fire = synth.fire_crackle(&FireParams::default(), 42);
/// assert_eq!(fire.len(), 66150);
/// ```
pub struct Synth {
    sample_rate: u32,
}

impl Synth {
    /// Create a new synthesizer with the given sample rate
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Sample rate in Hz used for every rendered sample
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Generate a sine tone with a decay envelope
    ///
    /// # Arguments
    /// * `frequency` - Frequency in Hz
    /// * `duration` - Duration in seconds
    /// * `envelope` - Decay shape over the tone
    /// * `volume` - Peak amplitude
    pub fn tone(&self, frequency: f64, duration: f64, envelope: Envelope, volume: f64) -> Vec<f64> {
        let mut samples = sine(frequency, duration, self.sample_rate);
        let length = duration * self.sample_rate as f64;
        envelope.apply(&mut samples, length, self.sample_rate);
        for sample in samples.iter_mut() {
            *sample *= volume;
        }
        samples
    }

    /// Play notes one after another
    ///
    /// Each note restarts at zero phase, so note boundaries carry a small
    /// step that reads as a soft pluck.
    pub fn arpeggio(&self, notes: &[Note], volume: f64) -> Vec<f64> {
        let tones: Vec<Vec<f64>> = notes
            .iter()
            .map(|note| self.tone(note.frequency, note.duration, note.envelope, volume))
            .collect();
        let refs: Vec<&[f64]> = tones.iter().map(Vec::as_slice).collect();
        concat(&refs)
    }

    /// Generate the fire crackle texture
    ///
    /// Rumble and pops are drawn from one seeded source, sample by sample,
    /// then mixed and peak-normalized to `params.volume`.
    pub fn fire_crackle(&self, params: &FireParams, seed: u64) -> Vec<f64> {
        let len = num_samples(params.duration, self.sample_rate);
        let mut source = NoiseSource::new(seed);
        let mut integrator = LeakyIntegrator::new(params.rumble_input_gain, params.rumble_leak);

        let mut rumble = Vec::with_capacity(len);
        let mut pops = Vec::with_capacity(len);
        for _ in 0..len {
            rumble.push(integrator.process(source.white()));
            pops.push(if source.chance(params.pop_probability) {
                source.impulse(params.pop_min, params.pop_max)
            } else {
                0.0
            });
        }

        let mut result = mix(&[(&rumble, params.rumble_gain), (&pops, 1.0)]);
        normalize_to(&mut result, params.volume);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{SAMPLE_RATE, peak};

    #[test]
    fn test_tone_volume_and_length() {
        let synth = Synth::new(SAMPLE_RATE);
        let tone = synth.tone(441.0, 0.1, Envelope::Exponential { rate: 0.0 }, 0.5);

        assert_eq!(tone.len(), 4410);
        assert!((peak(&tone) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_tone_linear_decay() {
        let synth = Synth::new(SAMPLE_RATE);
        let tone = synth.tone(441.0, 0.1, Envelope::Linear, 1.0);

        // Peaks of successive periods shrink
        let first = peak(&tone[..100]);
        let last = peak(&tone[tone.len() - 100..]);
        assert!(first > 0.9);
        assert!(last < 0.05);
    }

    #[test]
    fn test_arpeggio_concatenates() {
        let synth = Synth::new(SAMPLE_RATE);
        let notes = [
            Note::new(440.0, 0.1, Envelope::Linear),
            Note::new(660.0, 0.2, Envelope::Linear),
        ];
        let out = synth.arpeggio(&notes, 0.5);

        assert_eq!(out.len(), 4410 + 8820);
        // Second note restarts at zero phase
        assert_eq!(out[4410], 0.0);
        assert!(peak(&out) <= 0.5);
    }

    #[test]
    fn test_arpeggio_empty() {
        let synth = Synth::new(SAMPLE_RATE);
        assert!(synth.arpeggio(&[], 0.5).is_empty());
    }

    #[test]
    fn test_fire_crackle_normalized() {
        let synth = Synth::new(SAMPLE_RATE);
        let fire = synth.fire_crackle(&FireParams::default(), 1234);

        assert_eq!(fire.len(), 66150);
        assert!((peak(&fire) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_fire_crackle_deterministic() {
        let synth = Synth::new(SAMPLE_RATE);
        let params = FireParams::default();

        assert_eq!(synth.fire_crackle(&params, 7), synth.fire_crackle(&params, 7));
        assert_ne!(synth.fire_crackle(&params, 7), synth.fire_crackle(&params, 8));
    }

    #[test]
    fn test_fire_crackle_pops_dominate() {
        // Pops on every sample; the rumble is bounded by 0.1 * 1.9 so it
        // can never cancel an impulse of at least 0.5.
        let synth = Synth::new(SAMPLE_RATE);
        let params = FireParams {
            duration: 0.01,
            rumble_gain: 0.1,
            pop_probability: 1.0,
            ..FireParams::default()
        };
        let fire = synth.fire_crackle(&params, 3);
        let quiet = fire.iter().filter(|s| s.abs() < 0.1).count();
        assert_eq!(quiet, 0);
    }

    #[test]
    fn test_fire_crackle_without_pops() {
        let synth = Synth::new(SAMPLE_RATE);
        let params = FireParams {
            pop_probability: 0.0,
            ..FireParams::default()
        };
        let fire = synth.fire_crackle(&params, 5);

        assert!((peak(&fire) - 0.6).abs() < 1e-12);
        // Integrated noise moves slowly: neighbouring samples stay close
        let max_step = fire
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .fold(0.0f64, f64::max);
        assert!(max_step < 0.6);
    }

    #[test]
    fn test_fire_crackle_zero_duration() {
        let synth = Synth::new(SAMPLE_RATE);
        let params = FireParams {
            duration: 0.0,
            ..FireParams::default()
        };
        assert!(synth.fire_crackle(&params, 1).is_empty());
    }
}
