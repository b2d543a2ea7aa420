//! Assembles display records from provider documents.
//!
//! One record needs a detail fetch, then a species fetch and one fetch per
//! ability. Pages run that per entry with bounded, order-preserving
//! concurrency; the first failure aborts the request and drops every
//! in-flight sibling.

use std::sync::Arc;

use futures::future::try_join_all;
use futures::stream::{self, StreamExt, TryStreamExt};

use pokedex_core::{
    DisplayAbility, DisplayRecord, LocaleTable, Neighbors, PageRequest, PageResult, SearchResult,
    describe_ability, from_tenths,
};

use crate::error::FetchError;
use crate::settings::{DEFAULT_FALLBACK_IMAGE, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_ENTRY_ID};
use crate::source::{CatalogSource, EntryKey};
use crate::types::{AbilityMetadata, EntryDetail, SpeciesMetadata};

/// Limits and fixed values for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Entries assembled at once on a page
    pub max_concurrency: usize,
    /// Ids above this are reported as not found without a request
    pub max_entry_id: u32,
    /// Image path used when the provider has no sprite at all
    pub fallback_image: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            max_entry_id: DEFAULT_MAX_ENTRY_ID,
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
        }
    }
}

/// The query surface: pages, single entries and name search over a
/// [`CatalogSource`].
pub struct Catalog<S> {
    source: S,
    locale: Arc<LocaleTable>,
    options: CatalogOptions,
}

impl<S: CatalogSource> Catalog<S> {
    pub fn new(source: S, locale: Arc<LocaleTable>, options: CatalogOptions) -> Self {
        Self {
            source,
            locale,
            options,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn locale(&self) -> &LocaleTable {
        &self.locale
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    /// Fetch and assemble page `page` (1-based) of `page_size` entries.
    pub async fn get_page(&self, page: u32, page_size: u32) -> Result<PageResult, FetchError> {
        let request = PageRequest::new(page, page_size)?;
        log::debug!(
            "Loading page {} (size {}, offset {})",
            page,
            page_size,
            request.offset()
        );

        let list = self
            .source
            .fetch_list(request.size(), request.offset())
            .await?;

        let records: Vec<DisplayRecord> = stream::iter(list.results.iter().take(page_size as usize))
            .map(|summary| self.assemble(EntryKey::Name(summary.name.clone())))
            .buffered(self.options.max_concurrency.max(1))
            .try_collect()
            .await?;

        Ok(PageResult {
            records,
            page_info: request.info(list.count),
        })
    }

    /// Fetch and assemble a single entry by national number.
    pub async fn get_one(&self, id: u32) -> Result<DisplayRecord, FetchError> {
        if id == 0 {
            return Err(FetchError::invalid_request("entry id must be at least 1"));
        }
        if id > self.options.max_entry_id {
            log::debug!(
                "Entry {} is past the catalog end ({})",
                id,
                self.options.max_entry_id
            );
            return Err(FetchError::not_found(format!("pokemon/{}", id)));
        }
        self.assemble(EntryKey::Id(id)).await
    }

    /// Search the first `scope` entries by localized or canonical name and
    /// return page `page` of the matches.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
        scope: u32,
    ) -> Result<SearchResult, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FetchError::invalid_request("search query must not be empty"));
        }
        let request = PageRequest::new(page, page_size)?;

        let listing = self.get_page(1, scope).await?;
        let matches: Vec<DisplayRecord> = listing
            .records
            .into_iter()
            .filter(|r| r.matches_query(query))
            .collect();
        log::debug!("Search {:?}: {} matches", query, matches.len());

        Ok(SearchResult {
            query: query.to_string(),
            total_matches: matches.len(),
            records: request.slice(&matches).to_vec(),
            page_info: request.info(matches.len() as u64),
        })
    }

    /// Previous/next ids for detail navigation.
    pub fn neighbors(&self, id: u32) -> Neighbors {
        Neighbors::around(id, self.options.max_entry_id)
    }

    async fn assemble(&self, key: EntryKey) -> Result<DisplayRecord, FetchError> {
        let detail = self.source.fetch_detail(&key).await?;

        let species_key = EntryKey::Id(detail.id);
        let species = self.source.fetch_species(&species_key);
        let abilities = try_join_all(
            detail
                .abilities
                .iter()
                .map(|slot| self.source.fetch_ability(&slot.ability.url)),
        );
        let (species, abilities) = futures::try_join!(species, abilities)?;

        Ok(merge_record(
            &detail,
            &species,
            &abilities,
            &self.locale,
            &self.options.fallback_image,
        ))
    }
}

/// Merge one entry's documents into a display record.
///
/// `abilities` must line up index-for-index with `detail.abilities`.
pub fn merge_record(
    detail: &EntryDetail,
    species: &SpeciesMetadata,
    abilities: &[AbilityMetadata],
    locale: &LocaleTable,
    fallback_image: &str,
) -> DisplayRecord {
    let abilities = detail
        .abilities
        .iter()
        .zip(abilities)
        .map(|(slot, meta)| DisplayAbility {
            canonical_name: slot.ability.name.clone(),
            localized_name: locale.name(&meta.names),
            description: describe_ability(&meta.effect_entries, &meta.flavor_text_entries, locale),
            is_hidden: slot.is_hidden,
        })
        .collect();

    DisplayRecord {
        id: detail.id,
        canonical_name: detail.name.clone(),
        localized_name: locale.name(&species.names),
        category: locale.category(&species.genera),
        types: detail.type_names(),
        height_meters: from_tenths(detail.height),
        mass_kilograms: from_tenths(detail.weight),
        abilities,
        image_url: detail
            .sprites
            .best_image()
            .unwrap_or(fallback_image)
            .to_string(),
    }
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
