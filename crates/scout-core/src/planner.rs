//! Scout planning: how many cards of each tier a scout needs.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::rarity::{BoxProfile, Rarity};
use crate::roller::roll_rarity;

/// Number of cards needed per rarity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    counts: [u32; 5],
}

impl TierCounts {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one card of the given tier.
    pub fn add(&mut self, rarity: Rarity) {
        self.counts[slot(rarity)] += 1;
    }

    /// Cards needed for one tier.
    pub fn get(&self, rarity: Rarity) -> u32 {
        self.counts[slot(rarity)]
    }

    /// Total cards across all tiers.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Tiers with a nonzero tally, in catalog order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Rarity, u32)> + '_ {
        Rarity::all()
            .iter()
            .map(|r| (*r, self.get(*r)))
            .filter(|(_, n)| *n > 0)
    }

    /// Whether any tier is SR or better.
    pub fn has_rare_or_better(&self) -> bool {
        self.non_empty().any(|(r, _)| r.is_rare_or_better())
    }
}

impl FromIterator<Rarity> for TierCounts {
    fn from_iter<I: IntoIterator<Item = Rarity>>(iter: I) -> Self {
        let mut counts = Self::new();
        for rarity in iter {
            counts.add(rarity);
        }
        counts
    }
}

impl std::fmt::Display for TierCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .non_empty()
            .map(|(r, n)| format!("{n}x {r}"))
            .collect();
        if parts.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

fn slot(rarity: Rarity) -> usize {
    match rarity {
        Rarity::N => 0,
        Rarity::R => 1,
        Rarity::SR => 2,
        Rarity::SSR => 3,
        Rarity::UR => 4,
    }
}

/// Decide the rarity of every card in a scout and tally them.
///
/// A name-filtered scout in the regular box is all N with no rolls. A
/// guaranteed-rare scout rolls `count - 1` cards normally; if none of them
/// came up SR or better, the last roll cannot land on R. Everything else is
/// `count` independent rolls.
pub fn plan_scout(
    profile: BoxProfile,
    count: u32,
    guaranteed_rare: bool,
    name_filter_present: bool,
    rng: &mut StdRng,
) -> TierCounts {
    if name_filter_present && profile == BoxProfile::Regular {
        let mut counts = TierCounts::new();
        counts.counts[slot(Rarity::N)] = count;
        return counts;
    }

    if guaranteed_rare && count > 0 {
        let mut rolls: Vec<Rarity> = (0..count - 1)
            .map(|_| roll_rarity(profile, false, rng))
            .collect();
        let all_common = rolls.iter().all(|r| matches!(r, Rarity::R | Rarity::N));
        rolls.push(roll_rarity(profile, all_common, rng));
        return rolls.into_iter().collect();
    }

    (0..count).map(|_| roll_rarity(profile, false, rng)).collect()
}
