//! Model Module - Classifier Inference
//!
//! The classifier is loaded once at startup and shared read-only by every
//! request. Backends are picked from the artifact's file extension:
//!
//! - `.onnx`: ONNX export of the trained model (requires the `onnx` feature)
//! - `.json`: logistic-regression coefficients

pub mod logistic;
#[cfg(feature = "onnx")]
pub mod onnx;


use std::path::Path;
use std::sync::Arc;

use crate::features::{FeatureRecord, LayoutMismatchError};

pub use logistic::LogisticClassifier;
#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;

/// Label the classifier emits for phishing URLs
pub const PHISHING_LABEL: i64 = 1;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model not found: {0}")]
    NotFound(String),

    #[error("failed to read model: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model: {0}")]
    Parse(String),

    #[error(transparent)]
    Schema(#[from] LayoutMismatchError),

    #[error("unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Raw classifier output for one feature record
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Predicted class (1 = phishing, 0 = benign)
    pub label: i64,
    /// Probability per class, indexed by label
    pub probabilities: Vec<f64>,
}

impl Prediction {
    /// Build a prediction, rejecting NaN or infinite probabilities
    pub fn checked(label: i64, probabilities: Vec<f64>) -> Result<Self, ModelError> {
        if let Some(bad) = probabilities.iter().find(|p| !p.is_finite()) {
            return Err(ModelError::Inference(format!("non-finite probability: {}", bad)));
        }

        Ok(Self { label, probabilities })
    }

    pub fn is_phishing(&self) -> bool {
        self.label == PHISHING_LABEL
    }

    /// Highest class probability (0.0 if the vector is empty)
    pub fn confidence(&self) -> f64 {
        self.probabilities.iter().copied().fold(0.0, f64::max)
    }
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Trained model exposing label + probability inference
///
/// Implementations must be safe to call from many requests at once.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureRecord) -> Result<Prediction, ModelError>;

    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;
}

/// Load a classifier artifact, choosing the backend by extension
pub fn load_classifier(path: impl AsRef<Path>) -> Result<Arc<dyn Classifier>, ModelError> {
    let path = path.as_ref();
    tracing::info!("Loading classifier from: {}", path.display());

    if !path.exists() {
        return Err(ModelError::NotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let classifier: Arc<dyn Classifier> = match extension.as_str() {
        "json" => Arc::new(LogisticClassifier::from_file(path)?),
        #[cfg(feature = "onnx")]
        "onnx" => Arc::new(OnnxClassifier::from_file(path)?),
        other => return Err(ModelError::UnsupportedFormat(other.to_string())),
    };

    tracing::info!("Classifier loaded ({})", classifier.backend());
    Ok(classifier)
}
