pub mod draw;
pub mod plan;
pub mod rates;

use scout_core::BoxProfile;

/// Parse a box name for a command, as a CLI error message.
fn parse_box(name: &str) -> Result<BoxProfile, String> {
    BoxProfile::parse(name).map_err(|e| e.to_string())
}

/// Format a probability as a percentage, blank for zero.
fn percent(weight: f64) -> String {
    if weight == 0.0 {
        "—".to_string()
    } else {
        format!("{:.2}%", weight * 100.0)
    }
}
