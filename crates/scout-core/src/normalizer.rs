//! Trimming scouted cards down to display-safe fields.

use serde_json::{Map, Value};

use crate::card::CardRecord;

/// Fields kept on a normalized card.
pub const KEPT_FIELDS: &[&str] = &[
    "id",
    "name",
    "year",
    "main_unit",
    "sub_unit",
    "rarity",
    "attribute",
    "release_date",
    "round_card_image",
    "round_card_idolized_image",
];

/// Fields copied up from the nested idol record.
const IDOL_FIELDS: &[&str] = &["name", "year", "main_unit", "sub_unit"];

/// Build a fresh, trimmed copy of each card.
///
/// Idol name, year, main unit and sub-unit are lifted to the top level, every
/// field outside [`KEPT_FIELDS`] is dropped, and null or missing values
/// become empty strings. The input cards are never touched.
pub fn normalize_results(cards: &[CardRecord]) -> Vec<CardRecord> {
    cards.iter().map(normalize_card).collect()
}

fn normalize_card(card: &CardRecord) -> CardRecord {
    let mut out = Map::new();

    for field in KEPT_FIELDS {
        let value = if IDOL_FIELDS.contains(field) {
            card.idol().and_then(|idol| idol.get(*field))
        } else {
            card.get(field)
        };
        let value = match value {
            None | Some(Value::Null) => Value::String(String::new()),
            Some(v) => v.clone(),
        };
        out.insert((*field).to_string(), value);
    }

    CardRecord::new(out)
}
