//! Features Module - URL Feature Extraction
//!
//! Turns a raw URL into the fixed record the classifier was trained on.

pub mod layout;
pub mod record;


// Re-export common types
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT, LayoutMismatchError, validate_feature_names};
pub use record::{extract, FeatureRecord};
