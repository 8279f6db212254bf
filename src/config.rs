//! TOML configuration shared by the demo programs.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [summation]
//! upper = 10000
//! workers = 5
//!
//! [bank]
//! currency = "$"
//! ```

use crate::error::ConfigError;
use crate::summation::{MAX_UPPER, MAX_WORKERS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV: &str = "OOP_PATTERNS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "oop-patterns.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub summation: SummationConfig,
    pub bank: BankConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummationConfig {
    pub upper: u64,
    pub workers: usize,
}

impl Default for SummationConfig {
    fn default() -> Self {
        Self {
            upper: 10_000,
            workers: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub currency: String,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::parse(&content)
    }

    /// `$OOP_PATTERNS_CONFIG`, then `./oop-patterns.toml`, then defaults.
    /// A file that is named but missing is an error; an absent default file is not.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(&PathBuf::from(path));
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }

        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::invalid_value(
                "logging.level",
                format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        if self.summation.upper == 0 {
            return Err(ConfigError::invalid_value(
                "summation.upper",
                "must be positive",
            ));
        }
        if self.summation.upper > MAX_UPPER {
            return Err(ConfigError::invalid_value(
                "summation.upper",
                format!("at most {MAX_UPPER}, larger sums overflow 64 bits"),
            ));
        }
        if self.summation.workers == 0 {
            return Err(ConfigError::invalid_value(
                "summation.workers",
                "at least one worker is required",
            ));
        }
        if self.summation.workers > MAX_WORKERS {
            return Err(ConfigError::invalid_value(
                "summation.workers",
                format!("at most {MAX_WORKERS} worker threads"),
            ));
        }
        Ok(())
    }
}
