//! # catpoint-adapter-vision-fake
//!
//! Stand-in for a cloud vision service.
//!
//! Each image gets a pseudo-random "cat" confidence in `[0, 100)`; the image
//! counts as showing a cat when that confidence reaches the threshold passed by
//! the security service. With the default threshold of 50 this is a coin flip.
//! A fixed seed makes the verdict sequence reproducible.
//!
//! ## Dependency rule
//!
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use catpoint_app::ports::ImageService;
use catpoint_domain::image::Image;

/// Configuration for the fake verdict provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FakeVisionConfig {
    /// Seed for the confidence generator. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl FakeVisionConfig {
    /// Build the verdict provider described by this configuration.
    #[must_use]
    pub fn build(&self) -> FakeImageService {
        match self.seed {
            Some(seed) => FakeImageService::seeded(seed),
            None => FakeImageService::default(),
        }
    }
}

/// Verdict provider that draws a random confidence per image.
pub struct FakeImageService {
    rng: StdRng,
}

impl Default for FakeImageService {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl FakeImageService {
    /// Create a provider whose verdicts are reproducible for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ImageService for FakeImageService {
    fn image_contains_cat(&mut self, image: &Image, confidence_threshold: f32) -> bool {
        let confidence: f32 = self.rng.gen_range(0.0..100.0);
        let contains_cat = confidence >= confidence_threshold;
        tracing::debug!(
            bytes = image.len(),
            confidence,
            confidence_threshold,
            contains_cat,
            "fake vision verdict"
        );
        contains_cat
    }
}
