//! Tag-based gallery filtering.
//!
//! A [`Catalog`] fixes the cards and the filters derived from their tags; a
//! [`FilterEngine`] tracks which filters are applied and which cards remain
//! displayed, plus a transient search query layered on top.

mod catalog;
mod engine;
pub mod query;

pub use catalog::{tag_label, Card, CardId, Catalog, CatalogError, Filter, FilterId};
pub use engine::{FilterEngine, FilterState, VisibilityDelta};
