//! Path parameter extractors
//!
//! Type-safe extraction of catalog ids from path parameters.

use link_core::ServerId;
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with server_id
#[derive(Debug, Deserialize)]
pub struct ServerIdPath {
    pub server_id: String,
}

impl ServerIdPath {
    /// Parse server_id as a catalog id
    pub fn server_id(&self) -> Result<ServerId, ApiError> {
        self.server_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid server_id format"))
    }
}
