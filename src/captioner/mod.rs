//! Simulated captioning: a fixed feature extractor feeding a keyword table.

pub mod features;
pub mod patterns;
pub mod selector;

pub use features::extract_features;
pub use selector::{select_caption, CaptionError, Selection};
