//! folio: tag-filtered project gallery for a static portfolio site.
//!
//! The [`gallery`] engine decides which project cards are visible for a set
//! of applied tag filters and a free-text query. [`site`] keeps the project
//! catalog and regenerates the gallery markup of the page, [`nav`] models
//! hash routes and project tabs, and [`tui`] is a terminal browser over all
//! of it.

pub mod cli;
pub mod config;
pub mod contact;
pub mod gallery;
pub mod logging;
pub mod nav;
pub mod site;
pub mod theme;
pub mod tui;
