//! Discord OAuth client
//!
//! Performs the authorization-code exchange and fetches the caller's
//! profile. Client credentials and the redirect URI come from configuration;
//! the grant type is fixed.

use link_common::config::DiscordConfig;
use serde::Deserialize;
use tracing::instrument;

use crate::error::ClientError;

const SERVICE: &str = "discord";

/// Discord profile subset returned by `/users/@me`
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the Discord OAuth and user APIs
#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    config: DiscordConfig,
}

impl DiscordClient {
    /// Create a new client from configuration
    #[must_use]
    pub fn new(config: DiscordConfig) -> Self {
        Self {
            http: crate::build_http_client(),
            config,
        }
    }

    /// Build the provider authorization URL for the frontend to redirect to
    #[must_use]
    pub fn authorize_url(&self) -> String {
        format!(
            "{}/oauth2/authorize?client_id={}&redirect_uri={}&response_type=code&scope={}",
            self.config.api_base,
            urlencoding::encode(&self.config.client_id),
            urlencoding::encode(&self.config.redirect_uri),
            urlencoding::encode("identify email"),
        )
    }

    /// Exchange an authorization code for an access token
    #[instrument(skip(self, code))]
    pub async fn exchange_code(&self, code: &str) -> Result<String, ClientError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self
            .http
            .post(format!("{}/oauth2/token", self.config.api_base))
            .form(&params)
            .send()
            .await
            .map_err(|e| ClientError::request(SERVICE, e))?;

        if !response.status().is_success() {
            return Err(ClientError::status(SERVICE, response.status()));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ClientError::decode(SERVICE, e))?;

        Ok(token.access_token)
    }

    /// Fetch the authenticated user's profile
    #[instrument(skip(self, access_token))]
    pub async fn fetch_user(&self, access_token: &str) -> Result<DiscordUser, ClientError> {
        let response = self
            .http
            .get(format!("{}/users/@me", self.config.api_base))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ClientError::request(SERVICE, e))?;

        if !response.status().is_success() {
            return Err(ClientError::status(SERVICE, response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::decode(SERVICE, e))
    }
}

impl std::fmt::Debug for DiscordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordClient")
            .field("api_base", &self.config.api_base)
            .field("client_id", &self.config.client_id)
            .finish_non_exhaustive()
    }
}
