//! REST API client for the upstream trivia endpoints.
//!
//! Wraps the upstream HTTP API (characters, episodes, quotes, deaths) using
//! [`reqwest`]. One method per endpoint; a failed call surfaces as an
//! [`UpstreamError`] with no retry and no timeout override.

use hermanos_core::character::Character;
use hermanos_core::death::Death;
use hermanos_core::episode::Episode;
use hermanos_core::quote::Quote;

/// HTTP client for the upstream REST API.
pub struct BreakingBadApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the upstream REST layer.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream returned a non-2xx status code.
    #[error("upstream API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl BreakingBadApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `https://www.breakingbadapi.com`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (connection pooling is shared across all callers of that client).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// List characters via `GET /api/characters?limit&offset&category&name`.
    ///
    /// All four parameters are forwarded verbatim, *including when unset*
    /// (sent as the empty string, not omitted). Upstream distinguishes
    /// empty from absent, so this must not be "cleaned up" into optional
    /// parameters. Filtering and pagination semantics are entirely
    /// upstream's.
    pub async fn characters(
        &self,
        limit: Option<i32>,
        offset: Option<i32>,
        category: &str,
        name: &str,
    ) -> Result<Vec<Character>, UpstreamError> {
        let limit = limit.map(|v| v.to_string()).unwrap_or_default();
        let offset = offset.map(|v| v.to_string()).unwrap_or_default();

        let response = self
            .client
            .get(format!("{}/api/characters", self.base_url))
            .query(&[
                ("limit", limit.as_str()),
                ("offset", offset.as_str()),
                ("category", category),
                ("name", name),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the entire character collection via `GET /api/characters`
    /// with no query string. Used by the by-id lookup, which has no
    /// dedicated upstream endpoint and linear-searches the full list.
    pub async fn all_characters(&self) -> Result<Vec<Character>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/api/characters", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch a single random character via `GET /api/character/random`.
    /// Upstream wraps the record in a one-element list.
    pub async fn random_character(&self) -> Result<Vec<Character>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/api/character/random", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List episodes via `GET /api/episodes?series=`. The `series`
    /// parameter is always present, empty when unfiltered.
    pub async fn episodes(&self, series: &str) -> Result<Vec<Episode>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/api/episodes", self.base_url))
            .query(&[("series", series)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch one episode via `GET /api/episodes/{id}`. Upstream answers
    /// with a list that is empty when the id is unknown.
    pub async fn episode(&self, id: i32) -> Result<Vec<Episode>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/api/episodes/{}", self.base_url, id))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// List quotes via `GET /api/quotes?series=`. The `series` parameter
    /// is always present, empty when unfiltered.
    pub async fn quotes(&self, series: &str) -> Result<Vec<Quote>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/api/quotes", self.base_url))
            .query(&[("series", series)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the entire quote collection via `GET /api/quotes` with no
    /// query string. Used by the by-id lookup and random selection.
    pub async fn all_quotes(&self) -> Result<Vec<Quote>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/api/quotes", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the full death collection via `GET /api/deaths`.
    pub async fn deaths(&self) -> Result<Vec<Death>, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/api/deaths", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch a single random death via `GET /api/random-death`. Unlike the
    /// other random endpoint this one returns a bare object, not a list,
    /// and omits `number_of_deaths`.
    pub async fn random_death(&self) -> Result<Death, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/api/random-death", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`UpstreamError::Api`] containing the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
