//! sfx.toml configuration
//!
//! Every key is optional; command-line flags take precedence over the file
//! and built-in defaults fill whatever is left.

use anyhow::{Context, Result};
use proc_sfx::audio::SAMPLE_RATE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG: &str = "sfx.toml";

/// Output directory used when neither the file nor the CLI sets one
pub const DEFAULT_OUTPUT: &str = "assets/audio";

/// Highest accepted sample rate in Hz
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Contents of sfx.toml
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SfxConfig {
    /// Output directory for the WAV files
    pub output: Option<PathBuf>,
    /// Sample rate in Hz
    pub sample_rate: Option<u32>,
    /// Seed for the noise-based cues
    pub seed: Option<u64>,
}

/// Values given on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub sample_rate: Option<u32>,
    pub seed: Option<u64>,
}

/// Fully resolved generation settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output: PathBuf,
    pub sample_rate: u32,
    pub seed: u64,
}

impl SfxConfig {
    /// Load the config named by `--config`, or `sfx.toml` if it exists
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_if_present(Path::new(DEFAULT_CONFIG)),
        }
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Load config from file, falling back to defaults when it does not exist
    pub fn load_if_present(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse config from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse sfx.toml")
    }

    /// Merge with command-line overrides and fill in defaults
    ///
    /// When no seed is given anywhere a random one is drawn; it is logged so
    /// the run can be repeated.
    pub fn resolve(&self, overrides: Overrides) -> Result<Settings> {
        let output = overrides
            .output
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let sample_rate = overrides
            .sample_rate
            .or(self.sample_rate)
            .unwrap_or(SAMPLE_RATE);
        if sample_rate == 0 {
            anyhow::bail!("Sample rate must be greater than zero");
        }
        if sample_rate > MAX_SAMPLE_RATE {
            anyhow::bail!(
                "Sample rate {} Hz is above the {} Hz maximum",
                sample_rate,
                MAX_SAMPLE_RATE
            );
        }

        let seed = match overrides.seed.or(self.seed) {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                tracing::info!("No seed configured, using {}", seed);
                seed
            }
        };

        Ok(Settings {
            output,
            sample_rate,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = SfxConfig::parse(
            r#"
output = "build/sfx"
sample_rate = 22050
seed = 1234
"#,
        )
        .unwrap();

        assert_eq!(config.output, Some(PathBuf::from("build/sfx")));
        assert_eq!(config.sample_rate, Some(22050));
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(SfxConfig::parse("").unwrap(), SfxConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(SfxConfig::parse("volume = 0.9").is_err());
    }

    #[test]
    fn test_parse_rejects_negative_seed() {
        assert!(SfxConfig::parse("seed = -1").is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = SfxConfig::default()
            .resolve(Overrides {
                seed: Some(5),
                ..Overrides::default()
            })
            .unwrap();

        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.sample_rate, SAMPLE_RATE);
        assert_eq!(settings.seed, 5);
    }

    #[test]
    fn test_resolve_overrides_win() {
        let config = SfxConfig {
            output: Some(PathBuf::from("from-file")),
            sample_rate: Some(22050),
            seed: Some(1),
        };

        let settings = config
            .resolve(Overrides {
                output: Some(PathBuf::from("from-cli")),
                sample_rate: None,
                seed: Some(2),
            })
            .unwrap();

        assert_eq!(settings.output, PathBuf::from("from-cli"));
        assert_eq!(settings.sample_rate, 22050);
        assert_eq!(settings.seed, 2);
    }

    #[test]
    fn test_resolve_rejects_zero_rate() {
        let result = SfxConfig::default().resolve(Overrides {
            sample_rate: Some(0),
            seed: Some(1),
            ..Overrides::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_rejects_huge_rate() {
        let result = SfxConfig::default().resolve(Overrides {
            sample_rate: Some(4_000_000_000),
            seed: Some(1),
            ..Overrides::default()
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("maximum"), "{err}");

        let config = SfxConfig::parse("sample_rate = 192001\nseed = 1").unwrap();
        assert!(config.resolve(Overrides::default()).is_err());
    }

    #[test]
    fn test_resolve_accepts_max_rate() {
        let settings = SfxConfig::default()
            .resolve(Overrides {
                sample_rate: Some(MAX_SAMPLE_RATE),
                seed: Some(1),
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(settings.sample_rate, 192_000);
    }

    #[test]
    fn test_load_if_present_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = SfxConfig::load_if_present(&dir.path().join("sfx.toml")).unwrap();
        assert_eq!(config, SfxConfig::default());
    }

    #[test]
    fn test_load_explicit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(SfxConfig::load_or_default(Some(&path)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sfx.toml");
        std::fs::write(&path, "seed = 77\n").unwrap();

        let config = SfxConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.output, None);
    }
}
