//! Configuration management for the ATS matcher

use crate::error::{AtsMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// Settings for the Gemini backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key. The key itself is never
    /// written to the config file.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

/// Scoring and recommendation policy. These are tunable constants, not
/// load-bearing design: nothing else in the pipeline depends on their
/// particular values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points added per validated soft match.
    pub soft_match_bonus: u32,
    /// Exact-match coverage below this ratio is flagged as critical.
    pub low_match_threshold: f64,
    /// Exact-match coverage above this ratio counts as a strong match.
    pub strong_match_threshold: f64,
    /// How many soft matches the report carries, highest confidence first.
    pub max_soft_matches: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            soft_match_bonus: 2,
            low_match_threshold: 0.3,
            strong_match_threshold: 0.7,
            max_soft_matches: 10,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            scoring: ScoringConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                AtsMatchError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AtsMatchError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-match")
            .join("config.toml")
    }

    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.service.api_key_env).map_err(|_| {
            AtsMatchError::Configuration(format!(
                "API key not found: set the {} environment variable",
                self.service.api_key_env
            ))
        })
    }
}
