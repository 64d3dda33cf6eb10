use comfy_table::{ContentArrangement, Table};

use scout_core::{BoxProfile, Rarity};

pub fn run(profile: Option<&str>) -> Result<(), String> {
    let profiles = match profile {
        Some(name) => vec![super::parse_box(name)?],
        None => BoxProfile::all().to_vec(),
    };

    let mut header = vec!["Box".to_string()];
    header.extend(Rarity::all().iter().map(|r| r.to_string()));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);

    for profile in profiles {
        let rates = profile.rates();
        let mut row = vec![profile.to_string()];
        row.extend(Rarity::all().iter().map(|r| super::percent(rates.weight(*r))));
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
