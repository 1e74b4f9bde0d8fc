//! Error type for the convenience wrapper.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_time::CalendarError;

/// Errors from building or rendering a profile reading.
#[derive(Debug)]
#[non_exhaustive]
pub enum JyotiError {
    /// Birth or target date/time failed validation.
    Calendar(CalendarError),
    /// JSON rendering failed.
    Json(serde_json::Error),
}

impl Display for JyotiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for JyotiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<CalendarError> for JyotiError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<serde_json::Error> for JyotiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
