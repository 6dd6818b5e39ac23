//! Difficulty engine configuration with documented constants
//!
//! Every field has a default, so a partial TOML file (or none at all) still
//! yields a complete configuration.

use crate::core::error::{DifficultyError, Result};
use crate::difficulty::Mode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Inputs to the skill estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Health pool the player's damage taken is normalised against
    ///
    /// Damage taken is divided by this, the same way damage given is divided
    /// by the creature category's max health.
    pub player_max_health: f64,

    /// Distinct opponents required before the estimate moves
    ///
    /// Below this count a single lucky or unlucky fight would dominate.
    pub min_encounters: usize,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            player_max_health: 20.0,
            min_encounters: 3,
        }
    }
}

/// Values every freshly created difficulty record starts with
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordDefaults {
    pub mode: Mode,

    /// Largest change of the auto level per analysis pass
    pub max_step: u32,
}

impl Default for RecordDefaults {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            max_step: 10,
        }
    }
}

/// Scheduling of the periodic analysis pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Server ticks between analysis passes
    ///
    /// At 20 ticks per second the default of 1200 is one pass per minute.
    pub interval_ticks: u64,

    /// Minimum registered players before the pass runs in parallel
    ///
    /// Below this, thread overhead exceeds the benefit.
    pub parallel_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            interval_ticks: 1200,
            parallel_threshold: 256,
        }
    }
}

/// Where per-player records are stored between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub directory: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data/players"),
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub estimate: EstimateConfig,
    pub defaults: RecordDefaults,
    pub analysis: AnalysisConfig,
    pub storage: StorageConfig,
}

impl DifficultyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DifficultyConfig = toml::from_str(content)?;
        config.validate().map_err(DifficultyError::InvalidConfig)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(self.estimate.player_max_health.is_finite() && self.estimate.player_max_health > 0.0)
        {
            return Err(format!(
                "estimate.player_max_health ({}) must be a positive number",
                self.estimate.player_max_health
            ));
        }

        if self.estimate.min_encounters == 0 {
            return Err("estimate.min_encounters must be at least 1".into());
        }

        if self.analysis.interval_ticks == 0 {
            return Err("analysis.interval_ticks must be at least 1".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DifficultyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.estimate.player_max_health, 20.0);
        assert_eq!(config.estimate.min_encounters, 3);
        assert_eq!(config.defaults.max_step, 10);
        assert_eq!(config.defaults.mode, Mode::Auto);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DifficultyConfig::from_toml_str(
            r#"
            [analysis]
            interval_ticks = 200
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.interval_ticks, 200);
        assert_eq!(config.analysis.parallel_threshold, 256);
        assert_eq!(config.estimate.min_encounters, 3);
    }

    #[test]
    fn test_mode_parses_lowercase() {
        let config = DifficultyConfig::from_toml_str(
            r#"
            [defaults]
            mode = "manual"
            max_step = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.defaults.mode, Mode::Manual);
        assert_eq!(config.defaults.max_step, 5);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let result = DifficultyConfig::from_toml_str("[analysis]\ninterval_ticks = 0\n");
        assert!(matches!(result, Err(DifficultyError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_non_positive_health() {
        let mut config = DifficultyConfig::default();
        config.estimate.player_max_health = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_decode_error() {
        let result = DifficultyConfig::from_toml_str("[estimate\n");
        assert!(matches!(result, Err(DifficultyError::TomlDecode(_))));
    }
}
