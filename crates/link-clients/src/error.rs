//! Outbound client error type

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from outbound API calls
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {service} failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned status {status}")]
    Status {
        service: &'static str,
        status: StatusCode,
    },

    #[error("failed to decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    pub(crate) fn request(service: &'static str, source: reqwest::Error) -> Self {
        Self::Request { service, source }
    }

    pub(crate) fn status(service: &'static str, status: StatusCode) -> Self {
        Self::Status { service, status }
    }

    pub(crate) fn decode(service: &'static str, source: reqwest::Error) -> Self {
        Self::Decode { service, source }
    }

    /// True for an HTTP 404 from the remote service
    ///
    /// The sync layer treats "not found" as an empty result; every other
    /// failure propagates.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
