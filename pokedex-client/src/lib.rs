pub mod aggregate;
pub mod client;
pub mod error;
pub mod settings;
pub mod source;
pub mod types;

pub use aggregate::{Catalog, CatalogOptions, merge_record};
pub use client::{DEFAULT_BASE_URL, PokeApiClient};
pub use error::FetchError;
pub use settings::{SettingSource, SettingSources, Settings, setting_sources, settings_path};
pub use source::{CatalogSource, EntryKey};

use std::sync::Arc;

/// Build a catalog backed by the live provider from resolved settings.
pub fn connect(settings: &Settings) -> Result<Catalog<PokeApiClient>, FetchError> {
    let client = PokeApiClient::new(settings.base_url.clone())?;
    log::debug!(
        "Using provider {} (max {} concurrent entries)",
        client.base_url(),
        settings.max_concurrency
    );
    Ok(Catalog::new(
        client,
        Arc::new(settings.locale.clone()),
        settings.catalog_options(),
    ))
}
