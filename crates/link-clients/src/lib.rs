//! # link-clients
//!
//! Outbound HTTP adapters for the Discord OAuth API and the PluralKit API.
//! Thin translators over `reqwest` with explicit timeouts; no retries, any
//! non-2xx response surfaces as an error (PluralKit 404s are mapped to
//! empty results by the callers that treat "no system" as normal).

pub mod discord;
mod error;
pub mod pluralkit;

pub use discord::{DiscordClient, DiscordUser};
pub use error::ClientError;
pub use pluralkit::{PkMember, PkSystem, PluralKitClient};

/// HTTP connect timeout for outbound API calls.
const HTTP_CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);
/// HTTP total timeout for outbound API calls.
const HTTP_REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Build an HTTP client with timeouts.
fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .timeout(HTTP_REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}
