use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ApiError;

/// Severity of a logged action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActivityLevel {
    Info,
    Warn,
    Error,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 3] = [ActivityLevel::Info, ActivityLevel::Warn, ActivityLevel::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Info => "INFO",
            ActivityLevel::Warn => "WARN",
            ActivityLevel::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(ActivityLevel::Info),
            "WARN" => Ok(ActivityLevel::Warn),
            "ERROR" => Ok(ActivityLevel::Error),
            _ => Err(ApiError::UnknownActivityLevel(s.to_string())),
        }
    }
}
