//! Card scouting simulator.
//!
//! Rolls weighted rarities for a scouting box, plans how many cards of each
//! tier a scout needs, fetches them from a card catalog, pads and flips each
//! tier's results, renders a scout image and trims the cards for display.
//! The catalog and the image renderer are traits so a bot can plug in its
//! HTTP session while tests use in-memory stand-ins.

pub mod adjuster;
pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod normalizer;
pub mod planner;
pub mod rarity;
pub mod render;
pub mod roller;
pub mod scout;

pub use card::{CardRecord, CatalogPage};
pub use catalog::{CatalogClient, CatalogQuery, MemoryCatalog};
pub use config::ScoutConfig;
pub use error::{ScoutError, ScoutResult};
pub use filters::{FilterKind, ScoutFilters, parse_arguments};
pub use planner::TierCounts;
pub use rarity::{BoxProfile, Rarity};
pub use render::{ImageRenderer, ScoutImage};
pub use scout::{Scout, ScoutOutcome, ScoutRequest};
