//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the model input schema.**
//!
//! The order below is the column order the classifier was trained on.
//! Renaming or reordering a feature silently breaks every deployed model.

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the model input row
pub const FEATURE_LAYOUT: &[&str] = &[
    "url_length",    // 0: Character count of the URL
    "has_at_symbol", // 1: '@' present
    "has_hyphen",    // 2: '-' present
    "has_https",     // 3: "https" present (case-insensitive)
    "num_dots",      // 4: Count of '.'
    "uses_ip",       // 5: URL starts with a dotted quad
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 6;

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Error when an artifact's feature names don't match the layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMismatchError {
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl std::fmt::Display for LayoutMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Feature layout mismatch: expected [{}], got [{}]",
            self.expected.join(", "),
            self.actual.join(", ")
        )
    }
}

impl std::error::Error for LayoutMismatchError {}

/// Validate that a model's declared feature names match the current layout
pub fn validate_feature_names<S: AsRef<str>>(names: &[S]) -> Result<(), LayoutMismatchError> {
    let matches = names.len() == FEATURE_COUNT
        && names.iter().zip(FEATURE_LAYOUT).all(|(a, b)| a.as_ref() == *b);

    if !matches {
        return Err(LayoutMismatchError {
            expected: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
            actual: names.iter().map(|s| s.as_ref().to_string()).collect(),
        });
    }

    Ok(())
}
