//! Configuration file management for loadplan.
//!
//! Provides a TOML-based config file at `~/.config/loadplan/config.toml`
//! holding the loading constants (bar weight, plate step) and the lifter's
//! bodyweight. Resolution chain: CLI flag > config file > built-in default.
//! A missing config file is not an error; defaults apply.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use loadplan_core::ladder::{DEFAULT_BAR_WEIGHT, DEFAULT_BODYWEIGHT};
use loadplan_core::rounding::DEFAULT_PLATE_STEP;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub loading: LoadingSection,
    #[serde(default)]
    pub athlete: AthleteSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadingSection {
    /// Weight of the empty bar, the floor for barbell ladders.
    #[serde(default = "default_bar_weight")]
    pub bar_weight: f64,
    /// Plate-loading granularity for displayed weights.
    #[serde(default = "default_plate_step")]
    pub plate_step: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AthleteSection {
    /// Bodyweight used for the external-load column of
    /// bodyweight-relative ladders.
    #[serde(default = "default_bodyweight")]
    pub bodyweight: f64,
}

fn default_bar_weight() -> f64 {
    DEFAULT_BAR_WEIGHT
}

fn default_plate_step() -> f64 {
    DEFAULT_PLATE_STEP
}

fn default_bodyweight() -> f64 {
    DEFAULT_BODYWEIGHT
}

impl Default for LoadingSection {
    fn default() -> Self {
        LoadingSection {
            bar_weight: default_bar_weight(),
            plate_step: default_plate_step(),
        }
    }
}

impl Default for AthleteSection {
    fn default() -> Self {
        AthleteSection {
            bodyweight: default_bodyweight(),
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the loadplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/loadplan` or
/// `~/.config/loadplan`, ignoring the platform-specific config dir.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("loadplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("loadplan")
}

/// Return the path to the loadplan config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load the config at `path`, or the default config when no file exists.
pub fn load_from(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ConfigFile::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file at {}", path.display()))?;
    Ok(config)
}

/// Load the config from an explicit override path or the default location.
pub fn load(override_path: Option<&Path>) -> Result<ConfigFile> {
    match override_path {
        Some(path) => load_from(path),
        None => load_from(&config_path()),
    }
}

/// Serialize and write the config to `path`, creating parent dirs as
/// needed.
pub fn save_to(path: &Path, config: &ConfigFile) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config directory {}", dir.display()))?;
    }
    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.loading.bar_weight, 20.0);
        assert_eq!(cfg.loading.plate_step, 2.5);
        assert_eq!(cfg.athlete.bodyweight, 80.0);
    }

    #[test]
    fn round_trip_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = ConfigFile::default();
        cfg.loading.bar_weight = 15.0;
        cfg.loading.plate_step = 1.25;
        cfg.athlete.bodyweight = 72.5;
        save_to(&path, &cfg).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.loading.bar_weight, 15.0);
        assert_eq!(loaded.loading.plate_step, 1.25);
        assert_eq!(loaded.athlete.bodyweight, 72.5);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[athlete]\nbodyweight = 95.0\n").unwrap();

        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.athlete.bodyweight, 95.0);
        assert_eq!(cfg.loading.bar_weight, 20.0);
        assert_eq!(cfg.loading.plate_step, 2.5);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();
        assert!(load_from(&path).is_err());
    }
}
