//! Running a scout end to end.
//!
//! A scout plans its tiers, fetches one catalog page per non-empty tier,
//! fits each page to its tally, merges and shuffles the cards, renders an
//! image, and finally trims the cards for display. Any shortfall along the
//! way fails the whole scout: a caller gets every card it asked for or none.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, warn};

use crate::adjuster::adjust_results;
use crate::card::CardRecord;
use crate::catalog::{CatalogClient, CatalogQuery};
use crate::config::ScoutConfig;
use crate::error::{ScoutError, ScoutResult};
use crate::filters::ScoutFilters;
use crate::normalizer::normalize_results;
use crate::planner::plan_scout;
use crate::rarity::BoxProfile;
use crate::render::{
    ImageRenderer, ScoutImage, composite_file_name, solo_file_name, solo_image_url,
};

/// What a user asked to scout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutRequest {
    profile: BoxProfile,
    count: u32,
    guaranteed_rare: bool,
    filters: ScoutFilters,
}

impl ScoutRequest {
    /// A scout of `count` cards from `profile`. `count` must be at least 1.
    pub fn new(profile: BoxProfile, count: u32) -> ScoutResult<Self> {
        if count == 0 {
            return Err(ScoutError::InvalidCount(count));
        }
        Ok(Self {
            profile,
            count,
            guaranteed_rare: false,
            filters: ScoutFilters::new(),
        })
    }

    /// Require at least one SR or better.
    pub fn with_guaranteed_rare(mut self, guaranteed: bool) -> Self {
        self.guaranteed_rare = guaranteed;
        self
    }

    /// Restrict the scout with catalog filters.
    pub fn with_filters(mut self, filters: ScoutFilters) -> Self {
        self.filters = filters;
        self
    }

    /// The box being scouted.
    pub fn profile(&self) -> BoxProfile {
        self.profile
    }

    /// Number of cards requested.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether an SR or better is guaranteed.
    pub fn guaranteed_rare(&self) -> bool {
        self.guaranteed_rare
    }

    /// The scout's filters.
    pub fn filters(&self) -> &ScoutFilters {
        &self.filters
    }
}

/// A finished scout.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoutOutcome {
    /// The image to show for the scout.
    pub image: ScoutImage,
    /// The scouted cards, trimmed for display, in draw order.
    pub cards: Vec<CardRecord>,
}

/// Runs scouts against a catalog and renderer.
///
/// A runner keeps no draw state between requests. Each request gets a fresh
/// RNG, seeded from the configured seed when there is one, so a seeded runner
/// answers the same request the same way every time.
#[derive(Debug)]
pub struct Scout<C, R> {
    catalog: C,
    renderer: R,
    config: ScoutConfig,
}

impl<C: CatalogClient, R: ImageRenderer> Scout<C, R> {
    /// Create a scout runner.
    pub fn new(catalog: C, renderer: R, config: ScoutConfig) -> Self {
        Self {
            catalog,
            renderer,
            config,
        }
    }

    /// The catalog this runner draws from.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Run a scout. Any failure is logged and reported as `None`.
    #[instrument(skip_all, fields(profile = %request.profile, count = request.count))]
    pub async fn run(&self, request: &ScoutRequest) -> Option<ScoutOutcome> {
        match self.try_run(request).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!(error = %e, "scout produced no result");
                None
            }
        }
    }

    /// Run a scout, surfacing the reason for a failure.
    pub async fn try_run(&self, request: &ScoutRequest) -> ScoutResult<ScoutOutcome> {
        let mut rng = self.request_rng();
        let cards = self.draw_with(request, &mut rng).await?;

        let image = if request.count == 1 {
            self.render_solo(&cards[0]).await?
        } else {
            self.render_composite(&cards, &mut rng).await?
        };

        Ok(ScoutOutcome {
            image,
            cards: normalize_results(&cards),
        })
    }

    /// Plan, fetch, adjust, merge and shuffle the raw cards for a scout.
    ///
    /// Fails unless exactly `request.count` cards were gathered.
    pub async fn draw_cards(&self, request: &ScoutRequest) -> ScoutResult<Vec<CardRecord>> {
        let mut rng = self.request_rng();
        self.draw_with(request, &mut rng).await
    }

    fn request_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    async fn draw_with(
        &self,
        request: &ScoutRequest,
        rng: &mut StdRng,
    ) -> ScoutResult<Vec<CardRecord>> {
        let plan = plan_scout(
            request.profile,
            request.count,
            request.guaranteed_rare,
            request.filters.has_name(),
            rng,
        );
        debug!(%plan, "planned tiers");

        let expected = request.count as usize;
        let mut cards = Vec::with_capacity(expected);

        for (rarity, needed) in plan.non_empty() {
            let query = CatalogQuery::for_tier(rarity, needed, &request.filters);
            let page = self.catalog.fetch(&query).await?;
            debug!(
                %rarity,
                needed,
                returned = page.results.len(),
                population = page.count,
                "fetched tier"
            );

            let adjusted = adjust_results(page, needed as usize, rng);
            if adjusted.is_empty() {
                return Err(ScoutError::Shortfall {
                    expected,
                    actual: cards.len(),
                });
            }
            cards.extend(adjusted);
        }

        if cards.len() != expected {
            return Err(ScoutError::Shortfall {
                expected,
                actual: cards.len(),
            });
        }

        cards.shuffle(rng);
        Ok(cards)
    }

    async fn render_solo(&self, card: &CardRecord) -> ScoutResult<ScoutImage> {
        let url = solo_image_url(card, &self.config.image_scheme)?;
        let name = solo_file_name(&url);
        if name.is_empty() {
            return Err(ScoutError::MissingImage);
        }
        let bytes = self.renderer.render_card(&url).await?;
        Ok(ScoutImage { bytes, name })
    }

    async fn render_composite(
        &self,
        cards: &[CardRecord],
        rng: &mut StdRng,
    ) -> ScoutResult<ScoutImage> {
        let name = composite_file_name(Utc::now().timestamp(), rng.random_range(0..100));
        let bytes = self
            .renderer
            .render_composite(cards, self.config.layout_hint)
            .await?;
        Ok(ScoutImage { bytes, name })
    }
}
