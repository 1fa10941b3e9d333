//! Pokedex Common Library
//!
//! CLIとWeb(WASM)で共有される型と図鑑ロジック

pub mod types;
pub mod api;
pub mod catalog;
pub mod card;
pub mod selection;
pub mod status;
pub mod theme;
pub mod format;
pub mod error;

pub use types::{AbilityEntry, DetailRecord, StatEntry, SummaryRecord, TypeSummary};
pub use api::{
    listing_url, type_list_url, parse_listing, parse_detail, parse_type_list,
    ListingResponse, PokemonResponse, DEFAULT_API_BASE_URL, LISTING_LIMIT, LISTING_OFFSET,
};
pub use catalog::{CatalogBrowser, PageView, PAGE_SIZE};
pub use card::{CardState, CardTicket, CardTracker};
pub use selection::Selection;
pub use status::{settle, LoadStatus};
pub use theme::Theme;
pub use error::{Error, Result};
