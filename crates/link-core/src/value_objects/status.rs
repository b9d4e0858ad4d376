//! Per-server visibility status

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a user has enabled visibility on a server
///
/// A missing preference row means `Disabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Enabled,
    #[default]
    Disabled,
}

impl ServerStatus {
    /// Stable lowercase name, used for storage and API payloads
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServerStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Error when parsing a ServerStatus from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("status must be \"enabled\" or \"disabled\", got: {0}")]
pub struct UnknownStatus(pub String);
