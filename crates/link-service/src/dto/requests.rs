//! Request DTOs for API endpoints
//!
//! Request bodies use camelCase keys to match the browser client.

use link_core::traits::AccountUpdate;
use link_core::value_objects::{GameUuid, ServerStatus};
use link_core::DomainError;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError, ValidationErrors};

// ============================================================================
// Auth Requests
// ============================================================================

/// Discord OAuth callback request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CallbackRequest {
    #[validate(length(min = 1, message = "Authorization code required"))]
    pub code: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial update of the linked game accounts
///
/// An absent key leaves the field untouched; an explicit `null` clears it.
/// The outer `Option` is "was the key present", the inner one is the value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountsRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub minecraft_uuid: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub hytale_aid: Option<Option<String>>,
}

/// Keep `null` distinct from "key absent" for partial updates
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl UpdateAccountsRequest {
    /// Convert into a validated domain update
    ///
    /// # Errors
    /// Returns a validation error when a supplied identifier is not the
    /// canonical UUID shape.
    pub fn to_update(&self) -> Result<AccountUpdate, DomainError> {
        Ok(AccountUpdate {
            minecraft_uuid: parse_field(&self.minecraft_uuid, "minecraftUuid")?,
            hytale_aid: parse_field(&self.hytale_aid, "hytaleAid")?,
        })
    }
}

fn parse_field(
    value: &Option<Option<String>>,
    field: &'static str,
) -> Result<Option<Option<GameUuid>>, DomainError> {
    match value {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(raw)) => {
            let uuid = GameUuid::parse(raw)
                .map_err(|_| DomainError::InvalidIdentifier { field })?;
            Ok(Some(Some(uuid)))
        }
    }
}

impl Validate for UpdateAccountsRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(Some(raw)) = &self.minecraft_uuid {
            if GameUuid::parse(raw).is_err() {
                errors.add("minecraftUuid", identifier_error("Invalid Minecraft UUID format"));
            }
        }
        if let Some(Some(raw)) = &self.hytale_aid {
            if GameUuid::parse(raw).is_err() {
                errors.add("hytaleAid", identifier_error("Invalid Hytale AID format"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn identifier_error(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("invalid_identifier");
    error.message = Some(message.into());
    error
}

// ============================================================================
// Server Requests
// ============================================================================

/// Set per-server visibility status request
///
/// Any status other than `enabled`/`disabled` is rejected at
/// deserialization time.
#[derive(Debug, Clone, Deserialize)]
pub struct SetServerStatusRequest {
    pub status: ServerStatus,
}

// ============================================================================
// Import Requests
// ============================================================================

/// Raw /plu/ral import request
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRequest {
    pub data: Option<serde_json::Value>,
}
