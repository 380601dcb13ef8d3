//! Cue generation
//!
//! Renders each requested cue and writes it as `{id}.wav` into the output
//! directory, creating the directory first if needed.

use crate::config::Settings;
use anyhow::{Context, Result};
use proc_sfx::audio::{Synth, write_wav};
use proc_sfx::cues::Cue;
use std::path::PathBuf;

/// Generate `cues` into `settings.output`, returning the written paths
pub fn generate_cues(settings: &Settings, cues: &[Cue]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(&settings.output).with_context(|| {
        format!(
            "Failed to create audio output directory: {}",
            settings.output.display()
        )
    })?;

    tracing::info!(
        "Generating {} sounds at {} Hz -> {}",
        cues.len(),
        settings.sample_rate,
        settings.output.display()
    );

    let synth = Synth::new(settings.sample_rate);
    let mut written = Vec::with_capacity(cues.len());

    for &cue in cues {
        let buffer = cue.render(&synth, settings.seed);
        let pcm = buffer.to_pcm_i16();
        let path = settings.output.join(cue.file_name());

        write_wav(&pcm, buffer.sample_rate, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let seed_note = if cue.is_seeded() {
            format!(", seed {}", settings.seed)
        } else {
            String::new()
        };
        tracing::info!(
            "  {} ({} samples, {:.2}s{}) -> {} - {}",
            cue,
            pcm.len(),
            buffer.duration(),
            seed_note,
            path.display(),
            cue.name()
        );
        println!("Generated {}", path.display());

        written.push(path);
    }

    Ok(written)
}
