// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tool configuration.
//!
//! Loaded from a TOML file and/or built from command-line flags; flags win.

use crate::input::InputMode;
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use sha256_core::EmptyInput;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// sha256sum configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumConfig {
    /// How the positional argument is interpreted.
    #[serde(default)]
    pub input_mode: InputMode,

    /// Output line format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Hash zero-length input instead of rejecting it.
    #[serde(default = "default_true")]
    pub allow_empty: bool,

    /// Refuse inputs larger than this many bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_bytes: Option<u64>,

    /// Log level for this tool (off, trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Auto,
            format: OutputFormat::Text,
            allow_empty: true,
            max_input_bytes: None,
            log_level: default_log_level(),
        }
    }
}

impl SumConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == Some(0) {
            return Err(ConfigError::Invalid(
                "max_input_bytes must be greater than 0".into(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        self.log_filter()?;
        Ok(())
    }

    /// Tracing filter for `log_level`; the core crate stays at `warn`.
    pub fn log_filter(&self) -> Result<EnvFilter, ConfigError> {
        let directives = format!("sha256sum={},sha256_core=warn", self.log_level.trim());
        EnvFilter::try_new(directives).map_err(|e| {
            ConfigError::Invalid(format!("log_level {:?} is not a level: {}", self.log_level, e))
        })
    }

    /// Empty-input policy for the digest engine.
    pub fn empty_input(&self) -> EmptyInput {
        if self.allow_empty {
            EmptyInput::Allow
        } else {
            EmptyInput::Reject
        }
    }
}
