//! Cross-origin policy
//!
//! `/predict` only answers browsers whose origin matches a configured
//! pattern, e.g. `chrome-extension://*`. Everything else stays open.

use std::sync::Arc;

use axum::http::{request::Parts, HeaderValue};
use regex::Regex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Origin pattern where `*` matches any run of characters
#[derive(Debug, Clone)]
pub struct OriginPattern {
    raw: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");

        Ok(Self {
            raw: pattern.to_string(),
            regex: Regex::new(&format!("^{}$", body))?,
        })
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.regex.is_match(origin)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Compile configured patterns
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<OriginPattern>, regex::Error> {
    patterns.iter().map(|p| OriginPattern::new(p)).collect()
}

/// CORS layer restricted to the given origin patterns
pub fn restricted(patterns: Vec<OriginPattern>) -> CorsLayer {
    let patterns = Arc::new(patterns);

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                origin
                    .to_str()
                    .map(|o| patterns.iter().any(|p| p.matches(o)))
                    .unwrap_or(false)
            },
        ))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// CORS layer accepting any origin
pub fn permissive() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_pattern() {
        let pattern = OriginPattern::new("chrome-extension://*").unwrap();
        assert!(pattern.matches("chrome-extension://abcdefghijklmnop"));
        assert!(pattern.matches("chrome-extension://"));
        assert!(!pattern.matches("https://chrome-extension://abc"));
        assert!(!pattern.matches("moz-extension://abc"));
        assert_eq!(pattern.as_str(), "chrome-extension://*");
    }

    #[test]
    fn test_literal_pattern() {
        let pattern = OriginPattern::new("https://app.example.com").unwrap();
        assert!(pattern.matches("https://app.example.com"));
        assert!(!pattern.matches("https://appXexample.com"));
        assert!(!pattern.matches("https://app.example.com.evil"));
    }

    #[test]
    fn test_compile_patterns() {
        let patterns =
            compile_patterns(&["chrome-extension://*".to_string(), "moz-extension://*".to_string()])
                .unwrap();
        assert_eq!(patterns.len(), 2);
        assert!(patterns.iter().any(|p| p.matches("moz-extension://id")));
    }
}
