//! Configuration for a scout runner.

/// Configuration for a [`Scout`](crate::Scout).
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    /// RNG seed for reproducible scouts; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Layout hint handed to the composite renderer (at least 1).
    pub layout_hint: u32,
    /// Scheme prepended to protocol-relative image URLs.
    pub image_scheme: String,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            seed: None,
            layout_hint: 2,
            image_scheme: "http:".to_string(),
        }
    }
}

impl ScoutConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the composite layout hint (at least 1).
    pub fn with_layout_hint(mut self, hint: u32) -> Self {
        self.layout_hint = hint.max(1);
        self
    }

    /// Set the scheme for protocol-relative image URLs, e.g. `"https:"`.
    pub fn with_image_scheme(mut self, scheme: impl Into<String>) -> Self {
        let mut scheme = scheme.into();
        if !scheme.ends_with(':') {
            scheme.push(':');
        }
        self.image_scheme = scheme;
        self
    }
}
