//! Built-in sound-effect cues
//!
//! The catalogue is fixed: each cue has an id (also its file stem), a
//! display name and a recipe built from the [`Synth`] API.
//!
//! **TO ADD A NEW CUE:**
//! 1. Add a variant to [`Cue`] and an entry to [`CUES`]
//! 2. Add a match arm to [`Cue::render`]

use crate::SfxError;
use crate::audio::{AudioBuffer, Envelope, FireParams, Note, Synth};
use std::fmt;
use std::str::FromStr;

/// A built-in sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Rising C-major arpeggio
    Success,
    /// Rumble with sparse crackle pops
    Fire,
}

/// Catalogue entry for a cue
#[derive(Debug, Clone, Copy)]
pub struct CueDef {
    pub cue: Cue,
    pub id: &'static str,
    pub name: &'static str,
}

/// All cues, in generation order
pub const CUES: &[CueDef] = &[
    CueDef {
        cue: Cue::Success,
        id: "success",
        name: "Success arpeggio (C5 E5 G5 C6)",
    },
    CueDef {
        cue: Cue::Fire,
        id: "fire",
        name: "Fire crackle ambience",
    },
];

/// Peak level of each arpeggio note
pub const SUCCESS_VOLUME: f64 = 0.5;

/// C5, E5, G5 plucks then a ringing C6
pub const SUCCESS_NOTES: [Note; 4] = [
    Note::new(523.25, 0.15, Envelope::Linear),
    Note::new(659.25, 0.15, Envelope::Linear),
    Note::new(783.99, 0.15, Envelope::Linear),
    Note::new(1046.50, 0.6, Envelope::Exponential { rate: 3.0 }),
];

impl Cue {
    /// Look up a cue by id
    pub fn from_id(id: &str) -> Result<Self, SfxError> {
        CUES.iter()
            .find(|def| def.id == id)
            .map(|def| def.cue)
            .ok_or_else(|| SfxError::UnknownCue(id.to_string()))
    }

    /// Catalogue entry for this cue
    pub fn def(self) -> &'static CueDef {
        match self {
            Cue::Success => &CUES[0],
            Cue::Fire => &CUES[1],
        }
    }

    /// Short id, used on the command line and as the file stem
    pub fn id(self) -> &'static str {
        self.def().id
    }

    /// Human-readable name shown by `list`
    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Output file name (`{id}.wav`)
    pub fn file_name(self) -> String {
        format!("{}.wav", self.id())
    }

    /// Whether the output depends on the seed
    pub fn is_seeded(self) -> bool {
        matches!(self, Cue::Fire)
    }

    /// Synthesize the cue
    ///
    /// `seed` drives the noise of seeded cues and is ignored otherwise.
    pub fn render(self, synth: &Synth, seed: u64) -> AudioBuffer {
        let samples = match self {
            Cue::Success => synth.arpeggio(&SUCCESS_NOTES, SUCCESS_VOLUME),
            Cue::Fire => synth.fire_crackle(&FireParams::default(), seed),
        };
        AudioBuffer::from_samples(synth.sample_rate(), samples)
    }
}

impl FromStr for Cue {
    type Err = SfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
