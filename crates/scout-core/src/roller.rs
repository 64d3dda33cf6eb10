//! Weighted rarity rolls.
//!
//! A roll draws `u` uniformly from `[0, 1)` and walks the cumulative weights
//! from the rarest tier down: UR, SSR, SR, R, then N as the fallthrough.

use rand::Rng;
use rand::rngs::StdRng;

use crate::rarity::{BoxProfile, Rarity};

/// Map a uniform draw to a rarity for the given box.
///
/// With `forbid_common` set, a draw that lands on R is promoted to SR. Every
/// other outcome is untouched, so the true SSR and UR odds do not move.
pub fn rarity_for_roll(profile: BoxProfile, u: f64, forbid_common: bool) -> Rarity {
    let rates = profile.rates();
    let mut boundary = 0.0;

    for rarity in [Rarity::UR, Rarity::SSR, Rarity::SR, Rarity::R] {
        boundary += rates.weight(rarity);
        if u < boundary {
            return if rarity == Rarity::R && forbid_common {
                Rarity::SR
            } else {
                rarity
            };
        }
    }

    Rarity::N
}

/// Roll a single rarity for the given box.
pub fn roll_rarity(profile: BoxProfile, forbid_common: bool, rng: &mut StdRng) -> Rarity {
    let u: f64 = rng.random();
    rarity_for_roll(profile, u, forbid_common)
}
