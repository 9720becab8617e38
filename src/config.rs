//! Configuration management for the ATS matcher

use crate::error::{AtsMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

/// Score-composition weights. Deliberately not normalized to 1.0: the
/// experience bonus is added at full unit weight and the total is clipped to
/// [0, 100] afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub must_have_weight: f64,
    pub semantic_weight: f64,
    pub nice_to_have_weight: f64,
    pub experience_weight: f64,
    pub coverage_weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Dimension of the hashed bag-of-words embedding.
    pub embedding_dim: usize,
    /// Candidate sections shorter than this are skipped for section scoring.
    pub min_section_chars: usize,
    /// Candidate texts shorter than this are rejected before analysis.
    pub min_candidate_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                must_have_weight: 0.50,
                semantic_weight: 0.20,
                nice_to_have_weight: 0.10,
                experience_weight: 1.0,
                coverage_weight: 0.05,
            },
            processing: ProcessingConfig {
                embedding_dim: 1024,
                min_section_chars: 20,
                min_candidate_chars: 80,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| AtsMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-matcher")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_policy() {
        let config = Config::default();
        assert_eq!(config.scoring.must_have_weight, 0.50);
        assert_eq!(config.scoring.semantic_weight, 0.20);
        assert_eq!(config.scoring.nice_to_have_weight, 0.10);
        assert_eq!(config.scoring.experience_weight, 1.0);
        assert_eq!(config.scoring.coverage_weight, 0.05);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.processing.embedding_dim, config.processing.embedding_dim);
    }
}
