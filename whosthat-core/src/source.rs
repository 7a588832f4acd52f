//! Where names and entities come from.

use async_trait::async_trait;
use pokeapi::PokeApi;
use thiserror::Error;

/// Errors from a [`CatalogSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Api(#[from] pokeapi::Error),

    #[error("Unavailable: {0}")]
    Unavailable(String),
}

/// One entity as the round needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: u32,
    pub name: String,
    pub artwork: Option<String>,
}

/// Read-only access to the remote catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Names of the first `limit` entities, in catalog order.
    async fn fetch_names(&self, limit: u32) -> Result<Vec<String>, SourceError>;

    /// A single entity by id.
    async fn fetch_entity(&self, id: u32) -> Result<Entity, SourceError>;
}

#[async_trait]
impl CatalogSource for PokeApi {
    async fn fetch_names(&self, limit: u32) -> Result<Vec<String>, SourceError> {
        Ok(self.pokemon_names(limit).await?)
    }

    async fn fetch_entity(&self, id: u32) -> Result<Entity, SourceError> {
        let pokemon = self.pokemon(id).await?;
        let artwork = pokemon.artwork_url().map(str::to_string);
        Ok(Entity {
            id,
            name: pokemon.name,
            artwork,
        })
    }
}
