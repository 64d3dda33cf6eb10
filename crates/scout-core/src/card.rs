//! Card records as returned by the catalog.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One card from the catalog: a JSON object of catalog fields.
///
/// The catalog owns the schema, so records stay loosely typed. The nested
/// `idol` object carries the idol's name, year and unit membership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord(Map<String, Value>);

impl CardRecord {
    /// Wrap an existing JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// A top-level field as a non-empty string, if it is one.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// A top-level boolean flag, treating anything else as false.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// The nested idol record, if present.
    pub fn idol(&self) -> Option<&Map<String, Value>> {
        self.get("idol").and_then(Value::as_object)
    }

    /// A field of the nested idol record as a string.
    pub fn idol_str(&self, key: &str) -> Option<&str> {
        self.idol()
            .and_then(|idol| idol.get(key))
            .and_then(Value::as_str)
    }

    /// Set a top-level field.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// All top-level fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// The cards on this page.
    #[serde(default)]
    pub results: Vec<CardRecord>,
    /// Total cards in the catalog matching the query, not just this page.
    #[serde(default)]
    pub count: u64,
}
