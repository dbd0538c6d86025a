//! Image verdict port: decides whether a camera image shows a cat.

use catpoint_domain::image::Image;

/// Classifies camera images.
///
/// How the verdict is reached (local model, vendor API, …) is up to the adapter.
pub trait ImageService {
    /// Whether `image` contains a cat with at least `confidence_threshold`
    /// percent confidence.
    fn image_contains_cat(&mut self, image: &Image, confidence_threshold: f32) -> bool;
}
