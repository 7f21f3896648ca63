// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Generation settings loaded from YAML.
//!
//! Every field has a default, so a partial file (or none at all) still
//! produces a working configuration. Command-line flags override whatever
//! the file supplies.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::mood::Mood;

/// Settings for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Mood selecting the progression table.
    pub mood: Mood,
    /// Seed for reproducible output; `None` varies per run.
    pub seed: Option<u64>,
    /// Tempo in BPM, used for export and timing summaries.
    pub tempo: f64,
    /// Optional path for a Standard MIDI File export.
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mood: Mood::default(),
            seed: None,
            tempo: default_tempo(),
            output: None,
        }
    }
}

fn default_tempo() -> f64 {
    120.0
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save settings to a YAML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.mood, Mood::Euphoric);
        assert_eq!(settings.seed, None);
        assert_eq!(settings.tempo, 120.0);
        assert_eq!(settings.output, None);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings = Settings::from_yaml("mood: creepy\n").unwrap();
        assert_eq!(settings.mood, Mood::Creepy);
        assert_eq!(settings.tempo, 120.0);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_full_yaml_round_trip() {
        let settings = Settings {
            mood: Mood::Sad,
            seed: Some(99),
            tempo: 90.0,
            output: Some(PathBuf::from("melody.mid")),
        };
        let yaml = settings.to_yaml().unwrap();
        let parsed = Settings::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_invalid_mood_is_rejected() {
        assert!(Settings::from_yaml("mood: gloomy\n").is_err());
    }

    #[test]
    fn test_load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let settings = Settings {
            mood: Mood::Joyful,
            seed: Some(7),
            tempo: 132.0,
            output: None,
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }
}
