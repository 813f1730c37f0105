//! Data provider seam: the read-only `PokeAPI` requests the controller issues.

use async_trait::async_trait;

use crate::error::Result;

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, PokeApiClient};
pub use types::{
    CreatureRecord, FlavorTextEntry, NamedResource, ResourceList, SpeciesRecord, TypeMember,
    TypeRecord, TypeSlot,
};

/// How a creature record is addressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Locator {
    /// Absolute resource URL, as returned inside listings.
    Url(String),
    /// Numeric id or lowercase name, resolved against the base address.
    Key(String),
}

impl Locator {
    /// Locator for a numeric id.
    #[must_use]
    pub fn id(id: u32) -> Self {
        Self::Key(id.to_string())
    }
}

impl From<&NamedResource> for Locator {
    fn from(res: &NamedResource) -> Self {
        if res.url.is_empty() {
            Self::Key(res.name.clone())
        } else {
            Self::Url(res.url.clone())
        }
    }
}

/// The external data provider.
///
/// Implemented over HTTP by [`PokeApiClient`]; tests substitute an in-memory
/// fake that records call order.
#[async_trait]
pub trait PokeProvider: Send + Sync {
    /// `GET /pokemon?offset={offset}&limit={limit}`
    async fn list_creatures(&self, offset: u32, limit: u32) -> Result<Vec<NamedResource>>;

    /// `GET /pokemon/{idOrName}` or a listing URL.
    async fn creature(&self, locator: &Locator) -> Result<CreatureRecord>;

    /// `GET /pokemon-species/{id}/`
    async fn species(&self, id: u32) -> Result<SpeciesRecord>;

    /// `GET /type/`
    async fn types(&self) -> Result<Vec<NamedResource>>;

    /// `GET /type/{name}/`, flattened to the member creatures.
    async fn type_members(&self, name: &str) -> Result<Vec<NamedResource>>;
}

#[async_trait]
impl<P: PokeProvider + ?Sized> PokeProvider for std::sync::Arc<P> {
    async fn list_creatures(&self, offset: u32, limit: u32) -> Result<Vec<NamedResource>> {
        (**self).list_creatures(offset, limit).await
    }

    async fn creature(&self, locator: &Locator) -> Result<CreatureRecord> {
        (**self).creature(locator).await
    }

    async fn species(&self, id: u32) -> Result<SpeciesRecord> {
        (**self).species(id).await
    }

    async fn types(&self) -> Result<Vec<NamedResource>> {
        (**self).types().await
    }

    async fn type_members(&self, name: &str) -> Result<Vec<NamedResource>> {
        (**self).type_members(name).await
    }
}
