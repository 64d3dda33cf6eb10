use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::Value;
use tracing::debug;

use scout_core::{
    CardRecord, MemoryCatalog, Scout, ScoutConfig, ScoutRequest, parse_arguments,
};

use crate::renderer::DirectoryRenderer;

pub struct DrawArgs {
    pub catalog: PathBuf,
    pub profile: String,
    pub count: u32,
    pub guaranteed: bool,
    pub seed: Option<u64>,
    pub images: Option<PathBuf>,
    pub layout: u32,
    pub scheme: String,
    pub out: PathBuf,
    pub json: bool,
    pub filters: Vec<String>,
}

pub async fn run(args: DrawArgs) -> Result<(), String> {
    let profile = super::parse_box(&args.profile)?;
    let request = ScoutRequest::new(profile, args.count)
        .map_err(|e| e.to_string())?
        .with_guaranteed_rare(args.guaranteed)
        .with_filters(parse_arguments(&args.filters));

    let catalog_seed = args.seed.unwrap_or_else(rand::random);
    let catalog = MemoryCatalog::load(&args.catalog, catalog_seed)
        .map_err(|e| format!("failed to load catalog {}: {e}", args.catalog.display()))?;
    debug!(cards = catalog.len(), "catalog loaded");

    let mut config = ScoutConfig::default()
        .with_layout_hint(args.layout)
        .with_image_scheme(args.scheme);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let scout = Scout::new(catalog, DirectoryRenderer::new(args.images), config);
    let Some(outcome) = scout.run(&request).await else {
        println!("  No cards found.");
        return Ok(());
    };

    let image_path = args.out.join(&outcome.image.name);
    tokio::fs::write(&image_path, &outcome.image.bytes)
        .await
        .map_err(|e| format!("failed to write {}: {e}", image_path.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&outcome.cards).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "  {} {} cards from the {} box",
        "Scouted".bold(),
        outcome.cards.len(),
        request.profile()
    );
    println!();
    println!("{}", card_table(&outcome.cards));
    println!();
    println!("  Image saved to {}", image_path.display());

    Ok(())
}

fn card_table(cards: &[CardRecord]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "ID", "Rarity", "Name", "Attribute", "Unit", "Year"]);

    for (i, card) in cards.iter().enumerate() {
        let mut row = vec![(i + 1).to_string()];
        row.extend(
            ["id", "rarity", "name", "attribute", "main_unit", "year"]
                .iter()
                .map(|field| cell(card.get(field))),
        );
        table.add_row(row);
    }

    table
}

fn cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) if s.is_empty() => "—".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "—".to_string(),
        Some(other) => other.to_string(),
    }
}
