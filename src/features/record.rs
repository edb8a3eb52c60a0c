//! Feature Record - lexical summary of a URL
//!
//! Six integer attributes derived from the raw string. Extraction is total:
//! every string, including the empty one, produces a record.

use once_cell::sync::Lazy;
use regex::Regex;

use super::layout::FEATURE_COUNT;

/// Dotted-quad prefix. Anchored, so an IP later in the URL doesn't count.
static IP_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+\.\d+").expect("IP prefix pattern is valid")
});

/// Model input for a single URL
///
/// Field order mirrors `FEATURE_LAYOUT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureRecord {
    pub url_length: u32,
    pub has_at_symbol: u8,
    pub has_hyphen: u8,
    pub has_https: u8,
    pub num_dots: u32,
    pub uses_ip: u8,
}

impl FeatureRecord {
    /// Values in layout order, as the single input row for ONNX models
    pub fn as_f32_row(&self) -> [f32; FEATURE_COUNT] {
        [
            self.url_length as f32,
            self.has_at_symbol as f32,
            self.has_hyphen as f32,
            self.has_https as f32,
            self.num_dots as f32,
            self.uses_ip as f32,
        ]
    }

    /// Values in layout order, double precision
    pub fn as_f64_row(&self) -> [f64; FEATURE_COUNT] {
        self.as_f32_row().map(f64::from)
    }
}

/// Derive the feature record for `url`
pub fn extract(url: &str) -> FeatureRecord {
    FeatureRecord {
        url_length: url.chars().count() as u32,
        has_at_symbol: url.contains('@') as u8,
        has_hyphen: url.contains('-') as u8,
        has_https: url.to_lowercase().contains("https") as u8,
        num_dots: url.matches('.').count() as u32,
        uses_ip: IP_PREFIX.is_match(url) as u8,
    }
}
