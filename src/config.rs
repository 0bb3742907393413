use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConfigError;

/// Sampling settings shared by every curve in a session.
///
/// Loaded from TOML (all keys optional) and then overridden from the
/// environment:
///
/// ```toml
/// sample_count = 1201
/// jump_threshold = 10.0
/// mask_declared_asymptotes = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Number of evenly spaced samples per curve, endpoints included.
    pub sample_count: usize,
    /// Consecutive samples further apart than this in y are not connected.
    pub jump_threshold: f64,
    /// Also blank the samples next to each declared vertical asymptote.
    pub mask_declared_asymptotes: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            sample_count: 801,
            jump_threshold: 10.0,
            mask_declared_asymptotes: true,
        }
    }
}

impl QuizConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), ?config, "loaded quiz config");
        Ok(config)
    }

    /// Apply `CALCQUIZ_*` environment overrides on top of `self`.
    ///
    /// Unparseable values are ignored and the existing setting is kept.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let config = Self {
            sample_count: env_parse("CALCQUIZ_SAMPLE_COUNT").unwrap_or(self.sample_count),
            jump_threshold: env_parse("CALCQUIZ_JUMP_THRESHOLD").unwrap_or(self.jump_threshold),
            mask_declared_asymptotes: env_parse("CALCQUIZ_MASK_ASYMPTOTES")
                .unwrap_or(self.mask_declared_asymptotes),
        };
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count < 2 {
            return Err(ConfigError::Invalid {
                field: "sample_count",
                reason: format!("need at least 2 samples, got {}", self.sample_count),
            });
        }
        if !self.jump_threshold.is_finite() || self.jump_threshold <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "jump_threshold",
                reason: format!("must be finite and positive, got {}", self.jump_threshold),
            });
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(key, raw = %raw, "ignoring unparseable config override");
            None
        }
    }
}
