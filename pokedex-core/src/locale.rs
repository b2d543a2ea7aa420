//! Localized string resolution.
//!
//! Provider documents carry every human-readable string as a list of
//! `{text, language}` pairs. [`resolve_localized`] walks a language
//! preference order over such a list; [`describe_ability`] layers the
//! ability-description fallback chain on top of it.

use std::collections::HashMap;

/// A provider string tagged with its language (e.g. `"ja-Hrkt"`).
pub trait Localized {
    fn language(&self) -> &str;
    fn text(&self) -> &str;
}

/// A structured effect entry: a short summary plus the full text.
pub trait Effect {
    fn language(&self) -> &str;
    fn short_effect(&self) -> &str;
    fn effect(&self) -> &str;
}

/// Type tag translations shown by the bundled consumers.
const DEFAULT_TYPE_NAMES: &[(&str, &str)] = &[
    ("normal", "ノーマル"),
    ("fire", "ほのお"),
    ("water", "みず"),
    ("grass", "くさ"),
    ("electric", "でんき"),
    ("ice", "こおり"),
    ("fighting", "かくとう"),
    ("poison", "どく"),
    ("ground", "じめん"),
    ("flying", "ひこう"),
    ("psychic", "エスパー"),
    ("bug", "むし"),
    ("rock", "いわ"),
    ("ghost", "ゴースト"),
    ("dragon", "ドラゴン"),
    ("dark", "あく"),
    ("steel", "はがね"),
    ("fairy", "フェアリー"),
];

/// Language rules and fixed strings, built once at startup and shared
/// read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    /// Tried in order for entry and ability names (kana script first)
    pub name_preference: Vec<String>,
    /// Language used for categories and ability descriptions
    pub text_language: String,
    /// Cross-language fallback for ability short effects
    pub fallback_language: String,
    /// Substituted when no localized name or category exists
    pub unknown_placeholder: String,
    /// Substituted when an ability has no usable description
    pub no_description_placeholder: String,
    /// Provider type tag -> display label
    pub type_names: HashMap<String, String>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self {
            name_preference: vec!["ja-Hrkt".to_string(), "ja".to_string()],
            text_language: "ja".to_string(),
            fallback_language: "en".to_string(),
            unknown_placeholder: "不明".to_string(),
            no_description_placeholder: "説明なし".to_string(),
            type_names: DEFAULT_TYPE_NAMES
                .iter()
                .map(|(tag, label)| (tag.to_string(), label.to_string()))
                .collect(),
        }
    }
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override or add a type label.
    pub fn with_type_name(mut self, tag: impl Into<String>, label: impl Into<String>) -> Self {
        self.type_names.insert(tag.into(), label.into());
        self
    }

    /// Display label for a type tag; unknown tags are shown as-is.
    pub fn type_label<'a>(&'a self, tag: &'a str) -> &'a str {
        self.type_names.get(tag).map(String::as_str).unwrap_or(tag)
    }

    /// Localized entry or ability name.
    pub fn name<L: Localized>(&self, names: &[L]) -> String {
        resolve_localized(names, &self.name_preference, &self.unknown_placeholder)
    }

    /// Localized category (genus), matched on the text language only.
    pub fn category<L: Localized>(&self, genera: &[L]) -> String {
        find_language(genera, &self.text_language)
            .unwrap_or(self.unknown_placeholder.as_str())
            .to_string()
    }
}

/// First non-empty text in `lang`, if any.
pub fn find_language<'a, L: Localized>(entries: &'a [L], lang: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| e.language() == lang && !e.text().is_empty())
        .map(Localized::text)
}

/// Pick the best string for `preference`, or `placeholder` when no entry
/// matches any preferred language.
pub fn resolve_localized<L, P>(entries: &[L], preference: &[P], placeholder: &str) -> String
where
    L: Localized,
    P: AsRef<str>,
{
    preference
        .iter()
        .find_map(|lang| find_language(entries, lang.as_ref()))
        .unwrap_or(placeholder)
        .to_string()
}

/// Flatten flavor text onto one line.
///
/// Provider flavor text keeps the cartridge's hard line and page breaks.
pub fn normalize_flavor_text(text: &str) -> String {
    text.replace(['\n', '\r', '\u{000C}'], " ")
}

/// Resolve an ability description.
///
/// First non-empty wins:
/// 1. short effect in the text language
/// 2. full effect in the text language
/// 3. flavor text in the text language, line breaks flattened
/// 4. short effect in the fallback language
/// 5. the no-description placeholder
pub fn describe_ability<E, F>(effects: &[E], flavors: &[F], locale: &LocaleTable) -> String
where
    E: Effect,
    F: Localized,
{
    let lang = locale.text_language.as_str();

    let effect_in = |lang: &str, pick: fn(&E) -> &str| {
        effects
            .iter()
            .filter(|e| e.language() == lang)
            .map(pick)
            .find(|s| !s.is_empty())
            .map(str::to_string)
    };

    effect_in(lang, E::short_effect)
        .or_else(|| effect_in(lang, E::effect))
        .or_else(|| {
            find_language(flavors, lang)
                .map(normalize_flavor_text)
                .filter(|s| !s.trim().is_empty())
        })
        .or_else(|| effect_in(&locale.fallback_language, E::short_effect))
        .unwrap_or_else(|| locale.no_description_placeholder.clone())
}

#[cfg(test)]
#[path = "tests/locale_tests.rs"]
mod tests;
