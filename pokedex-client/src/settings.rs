//! Runtime settings: provider endpoint, pipeline limits and locale tables.
//!
//! Values resolve per field with the priority env var > config file >
//! built-in default. The config file lives at
//! `~/.config/pokedex/settings.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pokedex_core::LocaleTable;

use crate::aggregate::CatalogOptions;
use crate::client::DEFAULT_BASE_URL;
use crate::error::FetchError;

const ENV_BASE_URL: &str = "POKEDEX_BASE_URL";
const ENV_MAX_CONCURRENCY: &str = "POKEDEX_MAX_CONCURRENCY";

pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SEARCH_SCOPE: u32 = 1000;
/// Highest national number the catalog exposes.
pub const DEFAULT_MAX_ENTRY_ID: u32 = 1010;
pub const DEFAULT_FALLBACK_IMAGE: &str = "/images/dummy-pokemon.png";

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub max_concurrency: usize,
    pub page_size: u32,
    pub search_page_size: u32,
    pub search_scope: u32,
    pub max_entry_id: u32,
    pub fallback_image: String,
    pub locale: LocaleTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            page_size: DEFAULT_PAGE_SIZE,
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
            search_scope: DEFAULT_SEARCH_SCOPE,
            max_entry_id: DEFAULT_MAX_ENTRY_ID,
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
            locale: LocaleTable::default(),
        }
    }
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Provenance of each setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingSources {
    pub base_url: SettingSource,
    pub max_concurrency: SettingSource,
    pub page_size: SettingSource,
    pub search_page_size: SettingSource,
    pub search_scope: SettingSource,
    pub max_entry_id: SettingSource,
    pub fallback_image: SettingSource,
    pub locale: SettingSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct SettingsFile {
    api: ApiSection,
    catalog: CatalogSection,
    locale: LocaleSection,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ApiSection {
    base_url: Option<String>,
    max_concurrency: Option<usize>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct CatalogSection {
    page_size: Option<u32>,
    search_page_size: Option<u32>,
    search_scope: Option<u32>,
    max_entry_id: Option<u32>,
    fallback_image: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LocaleSection {
    name_preference: Option<Vec<String>>,
    text_language: Option<String>,
    fallback_language: Option<String>,
    types: HashMap<String, String>,
}

impl LocaleSection {
    fn is_empty(&self) -> bool {
        self.name_preference.is_none()
            && self.text_language.is_none()
            && self.fallback_language.is_none()
            && self.types.is_empty()
    }
}

/// Return the path to the settings file.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pokedex").join("settings.toml"))
}

impl Settings {
    /// Load settings from the environment and the default config file.
    pub fn load() -> Result<Self, FetchError> {
        Self::load_from(settings_path().as_deref(), |var| std::env::var(var).ok())
    }

    /// Load settings from an explicit config file (missing file = defaults)
    /// with `env` as the environment lookup.
    pub fn load_from(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, FetchError> {
        let file = read_settings_file(path)?.unwrap_or_default();
        Self::resolve(file, env)
    }

    fn resolve(file: SettingsFile, env: impl Fn(&str) -> Option<String>) -> Result<Self, FetchError> {
        let defaults = Self::default();

        let base_url = env(ENV_BASE_URL)
            .or(file.api.base_url)
            .unwrap_or(defaults.base_url);
        if base_url.trim().is_empty() {
            return Err(FetchError::config("base_url must not be empty"));
        }

        let max_concurrency = match env(ENV_MAX_CONCURRENCY) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                FetchError::config(format!("{} is not a number ({:?}): {}", ENV_MAX_CONCURRENCY, raw, e))
            })?,
            None => file.api.max_concurrency.unwrap_or(defaults.max_concurrency),
        };

        let settings = Self {
            base_url,
            max_concurrency,
            page_size: file.catalog.page_size.unwrap_or(defaults.page_size),
            search_page_size: file
                .catalog
                .search_page_size
                .unwrap_or(defaults.search_page_size),
            search_scope: file.catalog.search_scope.unwrap_or(defaults.search_scope),
            max_entry_id: file.catalog.max_entry_id.unwrap_or(defaults.max_entry_id),
            fallback_image: file
                .catalog
                .fallback_image
                .unwrap_or(defaults.fallback_image),
            locale: build_locale(defaults.locale, file.locale),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), FetchError> {
        let positive = [
            ("max_concurrency", self.max_concurrency as u64),
            ("page_size", u64::from(self.page_size)),
            ("search_page_size", u64::from(self.search_page_size)),
            ("search_scope", u64::from(self.search_scope)),
            ("max_entry_id", u64::from(self.max_entry_id)),
        ];
        for (name, value) in positive {
            if value == 0 {
                return Err(FetchError::config(format!("{} must be at least 1", name)));
            }
        }
        if self.locale.name_preference.is_empty() {
            return Err(FetchError::config("locale.name_preference must not be empty"));
        }
        Ok(())
    }

    /// Pipeline options derived from these settings.
    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            max_concurrency: self.max_concurrency,
            max_entry_id: self.max_entry_id,
            fallback_image: self.fallback_image.clone(),
        }
    }
}

fn build_locale(mut locale: LocaleTable, section: LocaleSection) -> LocaleTable {
    if let Some(pref) = section.name_preference {
        locale.name_preference = pref;
    }
    if let Some(lang) = section.text_language {
        locale.text_language = lang;
    }
    if let Some(lang) = section.fallback_language {
        locale.fallback_language = lang;
    }
    for (tag, label) in section.types {
        locale = locale.with_type_name(tag, label);
    }
    locale
}

/// Read and parse the config file. A missing file is not an error; a file
/// that exists but does not parse is.
fn read_settings_file(path: Option<&Path>) -> Result<Option<SettingsFile>, FetchError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(FetchError::config(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )));
        }
    };
    let file: SettingsFile = toml::from_str(&content)
        .map_err(|e| FetchError::config(format!("Failed to parse {}: {}", path.display(), e)))?;
    log::debug!("Loaded settings from {}", path.display());
    Ok(Some(file))
}

/// Determine where each setting is coming from.
pub fn setting_sources() -> SettingSources {
    sources_from(settings_path().as_deref(), |var| std::env::var(var).ok())
}

fn sources_from(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> SettingSources {
    let file = read_settings_file(path).ok().flatten().unwrap_or_default();

    let from_file = |present: bool| {
        if present {
            SettingSource::ConfigFile
        } else {
            SettingSource::Default
        }
    };

    let base_url = if env(ENV_BASE_URL).is_some() {
        SettingSource::EnvVar(ENV_BASE_URL)
    } else {
        from_file(file.api.base_url.is_some())
    };

    let max_concurrency = if env(ENV_MAX_CONCURRENCY).is_some() {
        SettingSource::EnvVar(ENV_MAX_CONCURRENCY)
    } else {
        from_file(file.api.max_concurrency.is_some())
    };

    SettingSources {
        base_url,
        max_concurrency,
        page_size: from_file(file.catalog.page_size.is_some()),
        search_page_size: from_file(file.catalog.search_page_size.is_some()),
        search_scope: from_file(file.catalog.search_scope.is_some()),
        max_entry_id: from_file(file.catalog.max_entry_id.is_some()),
        fallback_image: from_file(file.catalog.fallback_image.is_some()),
        locale: from_file(!file.locale.is_empty()),
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
