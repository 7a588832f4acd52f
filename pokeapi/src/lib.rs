//! Minimal PokéAPI client.
//!
//! This crate provides a focused, read-only client for the two PokéAPI
//! endpoints the game needs:
//! - The paginated species list (`/pokemon?limit=N`)
//! - Single entity lookup with sprite URLs (`/pokemon/{id}`)

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Environment variable that overrides the API base URL.
pub const BASE_URL_ENV: &str = "POKEAPI_BASE_URL";

/// Errors that can occur when using the PokéAPI client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// PokéAPI client.
#[derive(Clone)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApi {
    /// Create a client against the public PokéAPI.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: API_BASE.to_string(),
        }
    }

    /// Create a client, honoring `POKEAPI_BASE_URL` if it is set.
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::new().with_base_url(url),
            Err(std::env::VarError::NotPresent) => Ok(Self::new()),
            Err(e) => Err(Error::Config(format!("{BASE_URL_ENV}: {e}"))),
        }
    }

    /// Point the client at a different API root, e.g. a local mirror.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self, Error> {
        let url = url.into();
        let trimmed = url.trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!("Invalid base URL: {url}")));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the first `limit` entries of the species list, in catalog order.
    pub async fn list_pokemon(&self, limit: u32) -> Result<ResourceList, Error> {
        self.get_json(&format!("{}/pokemon?limit={limit}", self.base_url))
            .await
    }

    /// Fetch just the names of the first `limit` entries.
    pub async fn pokemon_names(&self, limit: u32) -> Result<Vec<String>, Error> {
        let list = self.list_pokemon(limit).await?;
        Ok(list.results.into_iter().map(|r| r.name).collect())
    }

    /// Fetch a single entity by its numeric id.
    pub async fn pokemon(&self, id: u32) -> Result<Pokemon, Error> {
        self.get_json(&format!("{}/pokemon/{id}", self.base_url))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status, "PokéAPI request failed");
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(%url, error = %e, "unexpected PokéAPI response");
            Error::Parse(e.to_string())
        })
    }
}

// ============================================================================
// Response types
// ============================================================================

/// A page of the species list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    pub results: Vec<NamedResource>,
}

/// A name plus the URL of the full resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// The subset of a `/pokemon/{id}` response the game uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
}

impl Pokemon {
    /// Best available artwork: official artwork first, then the default sprite.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .as_ref()
            .and_then(|a| a.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}
