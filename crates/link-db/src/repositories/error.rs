//! Error handling utilities for repositories

use link_core::error::DomainError;
use link_core::value_objects::{ServerId, UserId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "server not found" error
pub fn server_not_found(id: ServerId) -> DomainError {
    DomainError::ServerNotFound(id)
}
