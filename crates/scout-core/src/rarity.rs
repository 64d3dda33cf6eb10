//! Rarity tiers and box rate tables.
//!
//! A box is a fixed distribution of rarity weights. The three boxes are
//! compile-time constants; nothing about them changes at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{ScoutError, ScoutResult};

/// Card rarity, ordered from common to rare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    /// Normal.
    N,
    /// Rare.
    R,
    /// Super rare.
    SR,
    /// Super super rare.
    SSR,
    /// Ultra rare.
    UR,
}

impl Rarity {
    /// All tiers in catalog order, common first.
    pub fn all() -> &'static [Self] {
        &[Self::N, Self::R, Self::SR, Self::SSR, Self::UR]
    }

    /// The catalog code for this tier.
    pub fn code(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::R => "R",
            Self::SR => "SR",
            Self::SSR => "SSR",
            Self::UR => "UR",
        }
    }

    /// Whether this tier counts toward a guaranteed-rare scout (SR or better).
    pub fn is_rare_or_better(self) -> bool {
        self >= Self::SR
    }

    fn index(self) -> usize {
        match self {
            Self::N => 0,
            Self::R => 1,
            Self::SR => 2,
            Self::SSR => 3,
            Self::UR => 4,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Per-tier probabilities for one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    weights: [f64; 5],
}

impl RateTable {
    const fn new(n: f64, r: f64, sr: f64, ssr: f64, ur: f64) -> Self {
        Self {
            weights: [n, r, sr, ssr, ur],
        }
    }

    /// Probability of drawing the given tier.
    pub fn weight(&self, rarity: Rarity) -> f64 {
        self.weights[rarity.index()]
    }

    /// Sum of all tier weights.
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// True when no weight is negative and the weights sum to 1.
    pub fn is_valid(&self) -> bool {
        self.weights.iter().all(|w| *w >= 0.0) && (self.total() - 1.0).abs() < 1e-9
    }
}

const REGULAR_RATES: RateTable = RateTable::new(0.95, 0.05, 0.0, 0.0, 0.0);
const HONOUR_RATES: RateTable = RateTable::new(0.0, 0.80, 0.15, 0.04, 0.01);
const COUPON_RATES: RateTable = RateTable::new(0.0, 0.0, 0.80, 0.0, 0.20);

/// A named scouting box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxProfile {
    /// Friend-point box, almost entirely N cards.
    Regular,
    /// Premium box, R or better.
    Honour,
    /// Coupon box, SR or UR only.
    Coupon,
}

impl BoxProfile {
    /// All boxes.
    pub fn all() -> &'static [Self] {
        &[Self::Regular, Self::Honour, Self::Coupon]
    }

    /// Parse a box name, ignoring case.
    pub fn parse(s: &str) -> ScoutResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "honour" | "honor" => Ok(Self::Honour),
            "coupon" => Ok(Self::Coupon),
            _ => Err(ScoutError::UnknownBox(s.to_string())),
        }
    }

    /// The rate table for this box.
    pub fn rates(self) -> &'static RateTable {
        match self {
            Self::Regular => &REGULAR_RATES,
            Self::Honour => &HONOUR_RATES,
            Self::Coupon => &COUPON_RATES,
        }
    }
}

impl std::fmt::Display for BoxProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Honour => write!(f, "honour"),
            Self::Coupon => write!(f, "coupon"),
        }
    }
}
