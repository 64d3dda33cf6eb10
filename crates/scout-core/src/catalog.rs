//! Card catalog queries and clients.
//!
//! A scout issues one [`CatalogQuery`] per rarity tier it needs. The query
//! renders to the catalog's own parameter names; [`CatalogClient`] is the
//! seam where an HTTP client (or [`MemoryCatalog`]) answers it.

use std::future::Future;
use std::path::Path;
use std::sync::Mutex;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::Value;

use crate::card::{CardRecord, CatalogPage};
use crate::error::{ScoutError, ScoutResult};
use crate::filters::{FilterKind, ScoutFilters};
use crate::rarity::Rarity;

/// The catalog's spelling of the "Muse" unit.
pub const MUSE_CATALOG_NAME: &str = "µ's";

/// A request for a page of random cards of one rarity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Rarity every returned card must have.
    pub rarity: Rarity,
    /// Maximum number of cards to return.
    pub page_size: u32,
    /// User filters to pass through.
    pub filters: ScoutFilters,
}

impl CatalogQuery {
    /// Build the query for one tier of a scout.
    pub fn for_tier(rarity: Rarity, page_size: u32, filters: &ScoutFilters) -> Self {
        Self {
            rarity,
            page_size,
            filters: filters.clone(),
        }
    }

    /// Query parameters in the catalog's vocabulary.
    ///
    /// Promo and special cards are always excluded and ordering is always
    /// random. Multiple values of one filter are comma-joined.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("rarity".to_string(), self.rarity.code().to_string()),
            ("ordering".to_string(), "random".to_string()),
            ("is_promo".to_string(), "False".to_string()),
            ("is_special".to_string(), "False".to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];

        for (kind, values) in self.filters.iter() {
            let joined = values.join(",");
            let (key, value) = match kind {
                FilterKind::MainUnit => ("idol_main_unit", joined.replace("Muse", MUSE_CATALOG_NAME)),
                FilterKind::SubUnit => ("idol_sub_unit", joined),
                FilterKind::Name => ("name", joined),
                FilterKind::Year => ("idol_year", joined),
                FilterKind::Attribute => ("attribute", joined),
            };
            params.push((key.to_string(), value));
        }

        params
    }

    /// The value of one rendered parameter.
    pub fn param(&self, key: &str) -> Option<String> {
        self.params()
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

/// A source of card data.
pub trait CatalogClient {
    /// Fetch a page of cards matching the query.
    ///
    /// `count` on the returned page is the total number of matching cards
    /// in the catalog, which can differ from the number of results.
    fn fetch(
        &self,
        query: &CatalogQuery,
    ) -> impl Future<Output = ScoutResult<CatalogPage>> + Send;
}

/// An in-process catalog over a fixed list of cards.
#[derive(Debug)]
pub struct MemoryCatalog {
    cards: Vec<CardRecord>,
    rng: Mutex<StdRng>,
}

impl MemoryCatalog {
    /// Create a catalog with the given cards and shuffle seed.
    pub fn new(cards: Vec<CardRecord>, seed: u64) -> Self {
        Self {
            cards,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Parse cards from JSON: either a bare array or a `{"results": [...]}` page.
    pub fn from_json(json: &str, seed: u64) -> ScoutResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let cards: Vec<CardRecord> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            serde_json::from_value::<CatalogPage>(value)?.results
        };
        Ok(Self::new(cards, seed))
    }

    /// Load cards from a JSON file.
    pub fn load(path: &Path, seed: u64) -> ScoutResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, seed)
    }

    /// Number of cards in the catalog.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn matching(&self, query: &CatalogQuery) -> Vec<CardRecord> {
        let idol_filters = [
            ("idol_main_unit", "main_unit"),
            ("idol_sub_unit", "sub_unit"),
            ("idol_year", "year"),
        ];
        let attribute = query.param("attribute");
        let names: Vec<String> = query
            .param("name")
            .map(|n| n.split(',').map(str::to_lowercase).collect())
            .unwrap_or_default();

        self.cards
            .iter()
            .filter(|card| card.str_field("rarity") == Some(query.rarity.code()))
            .filter(|card| !card.flag("is_promo") && !card.flag("is_special"))
            .filter(|card| {
                idol_filters.iter().all(|(param, field)| match query.param(param) {
                    Some(values) => card
                        .idol_str(field)
                        .is_some_and(|v| values.split(',').any(|want| want == v)),
                    None => true,
                })
            })
            .filter(|card| match &attribute {
                Some(values) => card
                    .str_field("attribute")
                    .is_some_and(|v| values.split(',').any(|want| want == v)),
                None => true,
            })
            .filter(|card| {
                names.is_empty()
                    || card.idol_str("name").is_some_and(|n| {
                        let n = n.to_lowercase();
                        names.iter().any(|want| n.contains(want.as_str()))
                    })
            })
            .cloned()
            .collect()
    }
}

impl CatalogClient for MemoryCatalog {
    async fn fetch(&self, query: &CatalogQuery) -> ScoutResult<CatalogPage> {
        let mut results = self.matching(query);
        let count = results.len() as u64;
        {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| ScoutError::Catalog("catalog rng poisoned".to_string()))?;
            results.shuffle(&mut *rng);
        }
        results.truncate(query.page_size as usize);
        Ok(CatalogPage { results, count })
    }
}
