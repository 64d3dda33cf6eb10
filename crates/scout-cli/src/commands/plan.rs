use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use scout_core::planner::plan_scout;
use scout_core::{CatalogQuery, ScoutRequest, parse_arguments};

pub fn run(
    profile: &str,
    count: u32,
    guaranteed: bool,
    seed: u64,
    filters: &[String],
) -> Result<(), String> {
    let profile = super::parse_box(profile)?;
    let filters = parse_arguments(filters);
    let request = ScoutRequest::new(profile, count)
        .map_err(|e| e.to_string())?
        .with_guaranteed_rare(guaranteed)
        .with_filters(filters);

    let mut rng = StdRng::seed_from_u64(seed);
    let plan = plan_scout(
        request.profile(),
        request.count(),
        request.guaranteed_rare(),
        request.filters().has_name(),
        &mut rng,
    );

    println!(
        "  {} {} cards from the {} box {}",
        "Plan".bold(),
        request.count(),
        request.profile(),
        format!("(seed={seed})").dimmed()
    );
    if !request.filters().is_empty() {
        let filters: Vec<String> = request
            .filters()
            .iter()
            .map(|(kind, values)| format!("{kind}={}", values.join(",")))
            .collect();
        println!("  Filters: {}", filters.join(" "));
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rarity", "Cards"]);
    for (rarity, needed) in plan.non_empty() {
        table.add_row(vec![rarity.to_string(), needed.to_string()]);
    }
    println!("{table}");
    println!();

    println!("  {}", "Catalog queries".bold().underline());
    for (rarity, needed) in plan.non_empty() {
        let query = CatalogQuery::for_tier(rarity, needed, request.filters());
        let params: Vec<String> = query
            .params()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        println!("  ?{}", params.join("&"));
    }
    println!();
    println!("  {} fetches, {} cards", plan.non_empty().count(), plan.total());

    Ok(())
}
