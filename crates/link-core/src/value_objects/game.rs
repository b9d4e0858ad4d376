//! Game discriminator for the server catalog

use std::fmt;

use serde::{Deserialize, Serialize};

/// The game a catalog entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Minecraft,
    Hytale,
}

impl Game {
    /// Stable lowercase name, used for storage and URLs
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minecraft => "minecraft",
            Self::Hytale => "hytale",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Game {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minecraft" => Ok(Self::Minecraft),
            "hytale" => Ok(Self::Hytale),
            other => Err(UnknownGame(other.to_string())),
        }
    }
}

/// Error when parsing a Game from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game: {0}")]
pub struct UnknownGame(pub String);
