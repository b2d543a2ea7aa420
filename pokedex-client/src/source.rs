use std::fmt;

use crate::error::FetchError;
use crate::types::{AbilityMetadata, EntryDetail, ListPage, SpeciesMetadata};

/// Identifies one catalog entry on the provider: by national number or by
/// canonical name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKey {
    Id(u32),
    Name(String),
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKey::Id(id) => write!(f, "{}", id),
            EntryKey::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<u32> for EntryKey {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for EntryKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Read-only access to the species provider.
///
/// Every call is a straight pass-through to the provider: implementations
/// must not retry or cache. A 404 is reported as [`FetchError::NotFound`].
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// One page of the catalog index plus the total entry count.
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ListPage, FetchError>;

    async fn fetch_detail(&self, key: &EntryKey) -> Result<EntryDetail, FetchError>;

    async fn fetch_species(&self, key: &EntryKey) -> Result<SpeciesMetadata, FetchError>;

    /// Fetch an ability by the reference URL found in an [`EntryDetail`].
    async fn fetch_ability(&self, reference: &str) -> Result<AbilityMetadata, FetchError>;
}
