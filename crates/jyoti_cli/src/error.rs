use std::path::PathBuf;

use jyoti_rs::{CalendarError, JyotiError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: '{value}' ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Calculation(#[from] JyotiError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("system clock date {0} is outside the supported calendar range")]
    ClockOutOfRange(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
