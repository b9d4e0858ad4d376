//! PluralKit API client
//!
//! Fetches a system and its members by Discord account id. A 404 from the
//! API means "no linked system" / "no members" and maps to an empty result;
//! every other failure propagates.

use link_common::config::PluralKitConfig;
use serde::Deserialize;
use tracing::instrument;

use crate::error::ClientError;

const SERVICE: &str = "pluralkit";

/// A PluralKit system
#[derive(Debug, Clone, Deserialize)]
pub struct PkSystem {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A PluralKit system member
#[derive(Debug, Clone, Deserialize)]
pub struct PkMember {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Client for the PluralKit v2 API
#[derive(Clone)]
pub struct PluralKitClient {
    http: reqwest::Client,
    config: PluralKitConfig,
}

impl PluralKitClient {
    /// Create a new client from configuration
    #[must_use]
    pub fn new(config: PluralKitConfig) -> Self {
        Self {
            http: crate::build_http_client(),
            config,
        }
    }

    /// Fetch the system linked to a Discord account, if any
    #[instrument(skip(self))]
    pub async fn system_by_account(
        &self,
        discord_uid: &str,
    ) -> Result<Option<PkSystem>, ClientError> {
        let response = self
            .get(&format!("{}/systems/@{}", self.config.api_url, discord_uid))
            .await?;

        match response {
            Some(response) => {
                let system = response
                    .json()
                    .await
                    .map_err(|e| ClientError::decode(SERVICE, e))?;
                Ok(Some(system))
            }
            None => Ok(None),
        }
    }

    /// Fetch all members of a system; empty when the system hides them
    #[instrument(skip(self))]
    pub async fn system_members(&self, system_id: &str) -> Result<Vec<PkMember>, ClientError> {
        let response = self
            .get(&format!(
                "{}/systems/{}/members",
                self.config.api_url, system_id
            ))
            .await?;

        match response {
            Some(response) => response
                .json()
                .await
                .map_err(|e| ClientError::decode(SERVICE, e)),
            None => Ok(Vec::new()),
        }
    }

    /// GET with the configured User-Agent; `Ok(None)` on a 404
    async fn get(&self, url: &str) -> Result<Option<reqwest::Response>, ClientError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(|e| ClientError::request(SERVICE, e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(ClientError::status(SERVICE, response.status()));
        }

        Ok(Some(response))
    }
}

impl std::fmt::Debug for PluralKitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluralKitClient")
            .field("api_url", &self.config.api_url)
            .finish_non_exhaustive()
    }
}
