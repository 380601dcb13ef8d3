//! Procedural sound-effect library
//!
//! Generates short game sound effects entirely in code and exports them as
//! 16-bit mono PCM WAV files.
//!
//! # Example
//! ```no_run
//! use proc_sfx::audio::*;
//! use proc_sfx::cues::Cue;
//!
//! let synth = Synth::new(SAMPLE_RATE);
//!
//! // Render one of the built-in cues
//! let success = Cue::Success.render(&synth, 0);
//! write_wav_f64(&success.samples, success.sample_rate, "success.wav".as_ref())?;
//!
//! // Or build a custom tone
//! let blip = synth.tone(880.0, 0.1, Envelope::Linear, 0.5);
//! let pcm = to_pcm_i16(&blip);
//! write_wav(&pcm, SAMPLE_RATE, "blip.wav".as_ref())?;
//! # Ok::<(), proc_sfx::SfxError>(())
//! ```

pub mod audio;
pub mod cues;
mod error;

pub use error::SfxError;
