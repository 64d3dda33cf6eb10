//! Scout images for the command line.
//!
//! Single cards are read from a local image directory by file name. Multi-card
//! scouts become a JSON contact sheet listing each card's image, laid out in
//! rows.

use std::path::PathBuf;

use serde_json::{Value, json};

use scout_core::render::{ImageRenderer, solo_file_name};
use scout_core::{CardRecord, ScoutError, ScoutResult};

pub struct DirectoryRenderer {
    image_dir: Option<PathBuf>,
}

impl DirectoryRenderer {
    pub fn new(image_dir: Option<PathBuf>) -> Self {
        Self { image_dir }
    }
}

impl ImageRenderer for DirectoryRenderer {
    async fn render_card(&self, url: &str) -> ScoutResult<Vec<u8>> {
        let Some(dir) = &self.image_dir else {
            // No local images: hand back a sheet pointing at the source
            return Ok(serde_json::to_vec_pretty(&json!({ "url": url }))?);
        };

        let path = dir.join(solo_file_name(url));
        tokio::fs::read(&path)
            .await
            .map_err(|e| ScoutError::Render(format!("{}: {e}", path.display())))
    }

    async fn render_composite(&self, cards: &[CardRecord], layout_hint: u32) -> ScoutResult<Vec<u8>> {
        let rows = layout_hint.max(1) as usize;
        let per_row = cards.len().div_ceil(rows).max(1);

        let sheet: Vec<Vec<Value>> = cards
            .chunks(per_row)
            .map(|row| row.iter().map(sheet_entry).collect())
            .collect();

        Ok(serde_json::to_vec_pretty(&json!({
            "rows": sheet,
            "cards": cards.len(),
        }))?)
    }
}

fn sheet_entry(card: &CardRecord) -> Value {
    let image = card
        .str_field("round_card_image")
        .or_else(|| card.str_field("round_card_idolized_image"))
        .unwrap_or_default();
    json!({
        "id": card.get("id").cloned().unwrap_or(Value::Null),
        "rarity": card.str_field("rarity").unwrap_or_default(),
        "image": image,
    })
}
