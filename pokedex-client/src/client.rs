use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::source::{CatalogSource, EntryKey};
use crate::types::{AbilityMetadata, EntryDetail, ListPage, SpeciesMetadata};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Transport-level ceiling per request. Not a retry policy.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest response excerpt quoted in a decode error.
const EXCERPT_CHARS: usize = 200;

/// HTTP client for the PokeAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Send a GET and decode the body. `resource` names the request in
    /// errors and logs.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        log::debug!("GET {}", resource);

        let resp = request.send().await.map_err(|source| {
            log::warn!("Request for {} failed: {}", resource, source);
            FetchError::Transport {
                resource: resource.to_string(),
                source,
            }
        })?;

        check_status(resource, resp.status())?;

        let text = resp.text().await.map_err(|source| FetchError::Transport {
            resource: resource.to_string(),
            source,
        })?;

        decode(resource, &text)
    }
}

impl CatalogSource for PokeApiClient {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ListPage, FetchError> {
        let resource = format!("pokemon?limit={}&offset={}", limit, offset);
        let request = self
            .http
            .get(self.endpoint("pokemon"))
            .query(&[("limit", limit), ("offset", offset)]);
        self.get_json(&resource, request).await
    }

    async fn fetch_detail(&self, key: &EntryKey) -> Result<EntryDetail, FetchError> {
        let resource = format!("pokemon/{}", key);
        let request = self.http.get(self.endpoint(&resource));
        self.get_json(&resource, request).await
    }

    async fn fetch_species(&self, key: &EntryKey) -> Result<SpeciesMetadata, FetchError> {
        let resource = format!("pokemon-species/{}", key);
        let request = self.http.get(self.endpoint(&resource));
        self.get_json(&resource, request).await
    }

    async fn fetch_ability(&self, reference: &str) -> Result<AbilityMetadata, FetchError> {
        let request = self.http.get(reference);
        self.get_json(reference, request).await
    }
}

/// Map an HTTP status to the error taxonomy. 404 is kept apart from other
/// failures so callers can report "not found".
pub(crate) fn check_status(resource: &str, status: reqwest::StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    log::warn!("{} returned HTTP {}", resource, status.as_u16());
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::not_found(resource));
    }
    Err(FetchError::Status {
        resource: resource.to_string(),
        status: status.as_u16(),
    })
}

pub(crate) fn decode<T: DeserializeOwned>(resource: &str, text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| {
        let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
        FetchError::malformed(resource, format!("{e}. Response: {excerpt}"))
    })
}
