//! Fitting one tier's catalog page to the number of cards the scout needs.

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::card::{CardRecord, CatalogPage};

/// Pad a single-tier page to `required_count` and run the flip pass.
///
/// An empty page yields an empty list whatever the required count. When the
/// page is short, random cards already on it are duplicated until it is long
/// enough; a page longer than asked for is cut down. Then each card except
/// the last is replaced by its right neighbour with probability
/// `1 / page.count`, so tiers with a small catalog population flip more
/// often.
pub fn adjust_results(
    page: CatalogPage,
    required_count: usize,
    rng: &mut StdRng,
) -> Vec<CardRecord> {
    let mut results = page.results;
    if results.is_empty() {
        return results;
    }

    while results.len() < required_count {
        let pick = rng.random_range(0..results.len());
        results.push(results[pick].clone());
    }
    results.truncate(required_count);

    // A page with results but a zero count means the catalog under-reported;
    // fall back to what it actually returned.
    let population = if page.count == 0 {
        results.len() as f64
    } else {
        page.count as f64
    };
    let flip_chance = 1.0 / population;

    for i in 0..results.len().saturating_sub(1) {
        let u: f64 = rng.random();
        if u < flip_chance {
            debug!(index = i, "flipping card to its neighbour");
            results[i] = results[i + 1].clone();
        }
    }

    results
}
