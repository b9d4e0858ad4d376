//! Canonical game-account identifier
//!
//! Both Minecraft UUIDs and Hytale account ids (AIDs) use the canonical
//! 8-4-4-4-12 hyphenated hex shape. `GameUuid` accepts that shape
//! case-insensitively and stores the lowercase form, so database lookups
//! stay case-insensitive.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validated, lowercase, hyphenated game-account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameUuid(String);

impl GameUuid {
    /// Parse a canonical hyphenated UUID string
    ///
    /// # Errors
    /// Returns an error unless the input is exactly the 8-4-4-4-12 hex shape.
    pub fn parse(s: &str) -> Result<Self, GameUuidParseError> {
        // Uuid::parse_str also accepts simple/braced/urn forms; the fixed
        // 36-char length pins the input to the hyphenated shape.
        if s.len() != 36 {
            return Err(GameUuidParseError::InvalidFormat);
        }
        let uuid = Uuid::parse_str(s).map_err(|_| GameUuidParseError::InvalidFormat)?;
        Ok(Self(uuid.hyphenated().to_string()))
    }

    /// Borrow the canonical string form
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical string form
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a GameUuid from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameUuidParseError {
    #[error("expected a UUID in 8-4-4-4-12 hex format")]
    InvalidFormat,
}

impl fmt::Display for GameUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for GameUuid {
    type Err = GameUuidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameUuid::parse(s)
    }
}

impl TryFrom<String> for GameUuid {
    type Error = GameUuidParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        GameUuid::parse(&s)
    }
}

impl From<GameUuid> for String {
    fn from(uuid: GameUuid) -> Self {
        uuid.0
    }
}
