use serde::{Deserialize, Serialize};

use crate::paging::PageInfo;

/// One catalog entry, merged and localized for display.
///
/// Built fresh for every request from the provider's detail, species and
/// ability documents. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub id: u32,
    /// Provider name, e.g. "bulbasaur"
    pub canonical_name: String,
    /// Best-available Japanese name, or the unknown placeholder
    pub localized_name: String,
    /// Japanese genus ("たねポケモン"), or the unknown placeholder
    pub category: String,
    /// Provider type tags in slot order
    pub types: Vec<String>,
    pub height_meters: f64,
    pub mass_kilograms: f64,
    pub abilities: Vec<DisplayAbility>,
    pub image_url: String,
}

impl DisplayRecord {
    /// Case-insensitive match against the canonical name, substring match
    /// against the localized name.
    pub fn matches_query(&self, query: &str) -> bool {
        self.localized_name.contains(query)
            || self
                .canonical_name
                .to_lowercase()
                .contains(&query.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAbility {
    pub canonical_name: String,
    pub localized_name: String,
    /// Never empty; see [`describe_ability`](crate::locale::describe_ability)
    pub description: String,
    pub is_hidden: bool,
}

/// One page of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub records: Vec<DisplayRecord>,
    pub page_info: PageInfo,
}

/// A page of name-search matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: String,
    pub total_matches: usize,
    pub records: Vec<DisplayRecord>,
    pub page_info: PageInfo,
}

/// Adjacent catalog ids for detail navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub prev: Option<u32>,
    pub next: Option<u32>,
}

impl Neighbors {
    /// Ids one below and one above `id`, bounded by `[1, max_id]`.
    pub fn around(id: u32, max_id: u32) -> Self {
        Self {
            prev: (id > 1).then(|| id - 1),
            next: (id < max_id).then(|| id + 1),
        }
    }
}
