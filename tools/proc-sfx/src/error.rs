//! Error type shared by the synthesis and export code

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SfxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
    #[error("Unknown cue: {0}")]
    UnknownCue(String),
}
