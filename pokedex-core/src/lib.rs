//! Display model and localization rules for the pokedex catalog.
//!
//! Everything in this crate is pure: no I/O, no async. The client crate
//! fetches provider documents and feeds them through the resolvers here.

pub mod error;
pub mod locale;
pub mod paging;
pub mod record;

pub use error::PageError;
pub use locale::{
    Effect, LocaleTable, Localized, describe_ability, find_language, normalize_flavor_text,
    resolve_localized,
};
pub use paging::{PageInfo, PageRequest};
pub use record::{DisplayAbility, DisplayRecord, Neighbors, PageResult, SearchResult};

/// Provider units are tenths: decimetres for height, hectograms for weight.
pub const UNIT_DIVISOR: f64 = 10.0;

/// Convert a provider-native tenth unit to the display unit.
pub fn from_tenths(value: u32) -> f64 {
    f64::from(value) / UNIT_DIVISOR
}
