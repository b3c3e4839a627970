/// Tags reported for every image.
pub const FEATURE_TAGS: [&str; 4] = ["object", "scene", "lighting", "composition"];

/// Placeholder for real feature extraction.
///
/// The payload is never decoded or inspected; every image yields
/// [`FEATURE_TAGS`]. None of those tags contain a keyword from the pattern
/// table, so captions produced through this extractor always come from the
/// fallback pool.
pub fn extract_features(_image: &str) -> &'static [&'static str] {
    &FEATURE_TAGS
}
