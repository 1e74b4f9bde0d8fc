//! TOML configuration for the `jyoti` CLI.
//!
//! ```toml
//! [output]
//! format = "text"          # text | json
//! pretty = true
//!
//! [zodiac]
//! default_system = "both"  # tropical | sidereal | both
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Every section and key is optional. Command-line flags win over the file.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use jyoti_rs::ZodiacSystem;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// File picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "jyoti.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JyotiConfig {
    pub output: OutputConfig,
    pub zodiac: ZodiacConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZodiacConfig {
    pub default_system: SystemChoice,
}

/// Which sign table(s) to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SystemChoice {
    Tropical,
    Sidereal,
    #[default]
    Both,
}

impl SystemChoice {
    pub fn systems(self) -> &'static [ZodiacSystem] {
        match self {
            Self::Tropical => &[ZodiacSystem::Tropical],
            Self::Sidereal => &[ZodiacSystem::Sidereal],
            Self::Both => &[ZodiacSystem::Tropical, ZodiacSystem::Sidereal],
        }
    }
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

impl JyotiConfig {
    /// Load from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file that must exist.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Explicit path if given, otherwise `jyoti.toml` in `dir` when present,
    /// otherwise defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            let config = Self::from_file(&candidate)?;
            return Ok((config, Some(candidate)));
        }
        Ok((Self::default(), None))
    }

    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::InvalidConfig {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
                reason: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }
}
