//! Validator configuration
//!
//! Settings that apply to a whole validator tree. Loaded from JSON or built
//! in code; every field has a default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::UnionMode;

/// Errors loading or checking a configuration
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {reason}")]
    Read { path: String, reason: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Exact-type checking everywhere (default: false)
    #[serde(default)]
    pub strict: bool,

    /// Maximum nesting of validator calls (default: 256)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Union resolution for unions that do not set their own `mode`
    #[serde(default)]
    pub union_mode: UnionMode,

    /// Title of validation reports (default: the root validator name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn default_max_depth() -> usize {
    256
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: default_max_depth(),
            union_mode: UnionMode::default(),
            title: None,
        }
    }
}

impl ValidatorConfig {
    /// Config with strict mode enabled
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_union_mode(mut self, union_mode: UnionMode) -> Self {
        self.union_mode = union_mode;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&content)
    }

    /// Parse and check configuration from JSON text
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: ValidatorConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be > 0".into()));
        }
        Ok(())
    }
}
