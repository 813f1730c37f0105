//! `reqwest`-backed implementation of [`PokeProvider`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::types::{CreatureRecord, NamedResource, ResourceList, SpeciesRecord, TypeRecord};
use super::{Locator, PokeProvider};
use crate::error::{PokedexError, Result};
use crate::util::percent_encode;

/// Public `PokeAPI` v2 base address.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// HTTP client for the `PokeAPI` REST service.
///
/// One pooled `reqwest::Client` is shared by every request. No timeout is
/// applied unless one is configured.
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Base address without trailing slash.
    base_url: String,
}

impl PokeApiClient {
    /// What: Build a client for the given base address.
    ///
    /// Inputs:
    /// - `base_url`: Provider root such as `https://pokeapi.co/api/v2` (trailing `/` tolerated)
    /// - `timeout`: Optional whole-request timeout
    ///
    /// Output:
    /// - Ready client; falls back to `reqwest::Client::new()` if the builder fails.
    #[must_use]
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder()
            .user_agent(format!("pokedex/{}", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build().unwrap_or_else(|e| {
            warn!(error = %e, "failed to build HTTP client; using defaults");
            reqwest::Client::new()
        });
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base address in use, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: Build an absolute URL for a provider path.
    ///
    /// Inputs:
    /// - `path`: Path below the base, without leading slash (e.g. `pokemon/25/`)
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// What: GET a URL and decode its JSON body.
    ///
    /// Output:
    /// - Decoded body, or `NotFound` for 404, `Network` for other statuses and
    ///   transport errors, `Decode` for malformed bodies.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PokedexError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        let status = resp.status();
        debug!(url = %url, status = status.as_u16(), "provider response");
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(PokedexError::Network {
                url: url.to_string(),
                message: format!("HTTP status {status}"),
            });
        }
        let body = resp.text().await.map_err(|e| PokedexError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&body).map_err(|e| PokedexError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[async_trait]
impl PokeProvider for PokeApiClient {
    async fn list_creatures(&self, offset: u32, limit: u32) -> Result<Vec<NamedResource>> {
        let url = self.endpoint(&format!("pokemon?offset={offset}&limit={limit}"));
        let list: ResourceList = self.get_json(&url).await?;
        Ok(list.results)
    }

    async fn creature(&self, locator: &Locator) -> Result<CreatureRecord> {
        let url = match locator {
            Locator::Url(u) => u.clone(),
            Locator::Key(k) => self.endpoint(&format!("pokemon/{}", percent_encode(k))),
        };
        self.get_json(&url).await
    }

    async fn species(&self, id: u32) -> Result<SpeciesRecord> {
        let url = self.endpoint(&format!("pokemon-species/{id}/"));
        self.get_json(&url).await
    }

    async fn types(&self) -> Result<Vec<NamedResource>> {
        let url = self.endpoint("type/");
        let list: ResourceList = self.get_json(&url).await?;
        Ok(list.results)
    }

    async fn type_members(&self, name: &str) -> Result<Vec<NamedResource>> {
        let url = self.endpoint(&format!("type/{}/", percent_encode(name)));
        let rec: TypeRecord = self.get_json(&url).await?;
        Ok(rec.pokemon.into_iter().map(|m| m.pokemon).collect())
    }
}
