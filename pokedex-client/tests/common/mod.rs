//! In-memory provider used by the pipeline tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use pokedex_client::types::{AbilityMetadata, EntryDetail, ListPage, SpeciesMetadata};
use pokedex_client::{CatalogSource, EntryKey, FetchError};
use serde_json::{Value, json};

/// Documents for one catalog entry.
pub struct FakeEntry {
    pub id: u32,
    pub name: String,
    pub detail: Value,
    pub species: Value,
}

pub struct FakeSource {
    /// Total reported by the list endpoint
    pub count: u64,
    entries: Vec<FakeEntry>,
    abilities: HashMap<String, Value>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            count: 0,
            entries: Vec::new(),
            abilities: HashMap::new(),
            failing: HashSet::new(),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// `n` generated entries plus their abilities; `count` matches `n`.
    pub fn generated(n: u32) -> Self {
        let mut source = Self::new();
        for id in 1..=n {
            source.add_generated(id, &format!("mon-{id}"), &format!("モン{id}"));
        }
        source
    }

    pub fn add_entry(&mut self, entry: FakeEntry) {
        self.entries.push(entry);
        self.count = self.entries.len() as u64;
    }

    pub fn add_ability(&mut self, url: &str, doc: Value) {
        self.abilities.insert(url.to_string(), doc);
    }

    /// Append an entry with one ability and a Japanese name.
    pub fn add_generated(&mut self, id: u32, name: &str, ja_name: &str) {
        let ability_url = format!("fake://ability/{id}");
        self.add_ability(
            &ability_url,
            json!({
                "id": id,
                "name": format!("{name}-ability"),
                "names": [{"name": format!("{ja_name}のとくせい"), "language": {"name": "ja-Hrkt"}}],
                "effect_entries": [
                    {"effect": "", "short_effect": format!("Effect of {name}."), "language": {"name": "en"}}
                ]
            }),
        );
        self.add_entry(FakeEntry {
            id,
            name: name.to_string(),
            detail: json!({
                "id": id,
                "name": name,
                "height": id,
                "weight": id * 10,
                "types": [{"slot": 1, "type": {"name": "normal"}}],
                "abilities": [
                    {"ability": {"name": format!("{name}-ability"), "url": ability_url}, "is_hidden": false, "slot": 1}
                ],
                "sprites": {"front_default": format!("https://img/{id}.png")}
            }),
            species: json!({
                "id": id,
                "name": name,
                "names": [{"name": ja_name, "language": {"name": "ja"}}],
                "genera": [{"genus": "テストポケモン", "language": {"name": "ja"}}]
            }),
        });
    }

    /// Make `resource` answer HTTP 500.
    pub fn fail(&mut self, resource: &str) {
        self.failing.insert(resource.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, resource: &str) -> Result<(), FetchError> {
        self.calls.lock().unwrap().push(resource.to_string());
        if self.failing.contains(resource) {
            return Err(FetchError::Status {
                resource: resource.to_string(),
                status: 500,
            });
        }
        Ok(())
    }

    fn find(&self, key: &EntryKey) -> Option<&FakeEntry> {
        self.entries.iter().find(|e| match key {
            EntryKey::Id(id) => e.id == *id,
            EntryKey::Name(name) => &e.name == name,
        })
    }

    fn decode<T: serde::de::DeserializeOwned>(resource: &str, doc: &Value) -> Result<T, FetchError> {
        serde_json::from_value(doc.clone())
            .map_err(|e| FetchError::malformed(resource, e.to_string()))
    }
}

impl CatalogSource for FakeSource {
    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<ListPage, FetchError> {
        let resource = format!("pokemon?limit={limit}&offset={offset}");
        self.record(&resource)?;
        let results: Vec<Value> = self
            .entries
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|e| json!({"name": e.name, "url": format!("fake://pokemon/{}/", e.id)}))
            .collect();
        Self::decode(&resource, &json!({"count": self.count, "results": results}))
    }

    async fn fetch_detail(&self, key: &EntryKey) -> Result<EntryDetail, FetchError> {
        let resource = format!("pokemon/{key}");
        self.record(&resource)?;

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let entry = self
            .find(key)
            .ok_or_else(|| FetchError::not_found(&resource))?;
        Self::decode(&resource, &entry.detail)
    }

    async fn fetch_species(&self, key: &EntryKey) -> Result<SpeciesMetadata, FetchError> {
        let resource = format!("pokemon-species/{key}");
        self.record(&resource)?;
        let entry = self
            .find(key)
            .ok_or_else(|| FetchError::not_found(&resource))?;
        Self::decode(&resource, &entry.species)
    }

    async fn fetch_ability(&self, reference: &str) -> Result<AbilityMetadata, FetchError> {
        self.record(reference)?;
        let doc = self
            .abilities
            .get(reference)
            .ok_or_else(|| FetchError::not_found(reference))?;
        Self::decode(reference, doc)
    }
}

/// Bulbasaur as PokeAPI serves it, trimmed to the fields that matter.
pub fn bulbasaur() -> (FakeEntry, Vec<(&'static str, Value)>) {
    let entry = FakeEntry {
        id: 1,
        name: "bulbasaur".to_string(),
        detail: json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
                {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
            ],
            "abilities": [
                {"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}, "is_hidden": true, "slot": 3}
            ],
            "sprites": {
                "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png",
                "other": {
                    "official-artwork": {"front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/1.png"},
                    "home": {"front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home/1.png"}
                }
            },
            "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"}
        }),
        species: json!({
            "id": 1,
            "name": "bulbasaur",
            "names": [
                {"name": "フシギダネ", "language": {"name": "ja-Hrkt"}},
                {"name": "Bulbasaur", "language": {"name": "en"}},
                {"name": "フシギダネ", "language": {"name": "ja"}}
            ],
            "genera": [
                {"genus": "たねポケモン", "language": {"name": "ja-Hrkt"}},
                {"genus": "Seed Pokémon", "language": {"name": "en"}},
                {"genus": "たねポケモン", "language": {"name": "ja"}}
            ],
            "flavor_text_entries": [
                {"flavor_text": "A strange seed was\nplanted on its\nback at birth.", "language": {"name": "en"}}
            ]
        }),
    };
    let abilities = vec![
        (
            "https://pokeapi.co/api/v2/ability/65/",
            json!({
                "id": 65,
                "name": "overgrow",
                "names": [
                    {"name": "しんりょく", "language": {"name": "ja-Hrkt"}},
                    {"name": "Overgrow", "language": {"name": "en"}}
                ],
                "effect_entries": [
                    {"effect": "When this Pokémon has 1/3 or less of its HP remaining, its grass-type moves inflict 1.5× as much regular damage.", "short_effect": "Strengthens grass moves to inflict 1.5× damage at 1/3 max HP or less.", "language": {"name": "en"}}
                ],
                "flavor_text_entries": [
                    {"flavor_text": "ＨＰが　へったとき\nくさタイプの　わざの\nいりょくが　あがる。", "language": {"name": "ja-Hrkt"}},
                    {"flavor_text": "ＨＰが　減ったとき\nくさタイプの\u{000C}技の　威力が　上がる。", "language": {"name": "ja"}}
                ]
            }),
        ),
        (
            "https://pokeapi.co/api/v2/ability/34/",
            json!({
                "id": 34,
                "name": "chlorophyll",
                "names": [{"name": "ようりょくそ", "language": {"name": "ja-Hrkt"}}],
                "effect_entries": [
                    {"effect": "This Pokémon's Speed is doubled during strong sunlight.", "short_effect": "Doubles Speed during strong sunlight.", "language": {"name": "en"}}
                ]
            }),
        ),
    ];
    (entry, abilities)
}

/// A source holding just bulbasaur.
pub fn bulbasaur_source() -> FakeSource {
    let mut source = FakeSource::new();
    let (entry, abilities) = bulbasaur();
    source.add_entry(entry);
    for (url, doc) in abilities {
        source.add_ability(url, doc);
    }
    source
}
