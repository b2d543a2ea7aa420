//! Provider document shapes (PokeAPI v2).
//!
//! Only the fields the pipeline reads are declared; serde ignores the rest,
//! so new upstream fields never break decoding. Collections default to empty.

use pokedex_core::{Effect, Localized};
use serde::Deserialize;

/// A `{name, url}` reference to another provider resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response of the paged `/pokemon?limit=&offset=` index.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPage {
    /// Total entries in the catalog, not just on this page
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<CatalogEntrySummary>,
}

/// Listing stub: the entry name and the URL of its detail document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntrySummary {
    pub name: String,
    #[serde(rename = "url")]
    pub detail_url: String,
}

/// `/pokemon/{id or name}`
#[derive(Debug, Clone, Deserialize)]
pub struct EntryDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub species: Option<NamedResource>,
}

impl EntryDetail {
    /// Type tags in slot order.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.kind.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<SpriteSet>,
    #[serde(default)]
    pub home: Option<SpriteSet>,
    #[serde(default)]
    pub dream_world: Option<SpriteSet>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
}

fn official_artwork(s: &Sprites) -> Option<&str> {
    s.other.official_artwork.as_ref()?.front_default.as_deref()
}

fn home_render(s: &Sprites) -> Option<&str> {
    s.other.home.as_ref()?.front_default.as_deref()
}

fn default_front(s: &Sprites) -> Option<&str> {
    s.front_default.as_deref()
}

/// Image accessors in priority order.
const IMAGE_SOURCES: [fn(&Sprites) -> Option<&str>; 3] =
    [official_artwork, home_render, default_front];

impl Sprites {
    /// Highest-priority non-empty image URL, if the provider has any.
    pub fn best_image(&self) -> Option<&str> {
        IMAGE_SOURCES
            .iter()
            .find_map(|get| get(self).filter(|url| !url.is_empty()))
    }
}

/// `/pokemon-species/{id or name}`
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesMetadata {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

/// An ability document, fetched by the URL in [`AbilitySlot::ability`].
#[derive(Debug, Clone, Deserialize)]
pub struct AbilityMetadata {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub names: Vec<Name>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Name {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

impl Localized for Name {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn text(&self) -> &str {
        &self.name
    }
}

impl Localized for Genus {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn text(&self) -> &str {
        &self.genus
    }
}

impl Localized for FlavorText {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn text(&self) -> &str {
        &self.flavor_text
    }
}

impl Effect for EffectEntry {
    fn language(&self) -> &str {
        &self.language.name
    }

    fn short_effect(&self) -> &str {
        &self.short_effect
    }

    fn effect(&self) -> &str {
        &self.effect
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
