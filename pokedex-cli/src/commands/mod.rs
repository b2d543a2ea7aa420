pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod show;

use pokedex_client::{Catalog, PokeApiClient, Settings};
use tokio::runtime::Runtime;

use crate::CliError;

/// Resolve settings and build a catalog over the live provider.
pub(crate) fn connect() -> Result<(Settings, Catalog<PokeApiClient>), CliError> {
    let settings = Settings::load()?;
    let catalog = pokedex_client::connect(&settings)?;
    Ok((settings, catalog))
}

pub(crate) fn runtime() -> Result<Runtime, CliError> {
    Runtime::new().map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))
}
