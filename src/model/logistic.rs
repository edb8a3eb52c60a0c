//! Logistic Regression Backend
//!
//! Artifact layout (JSON):
//!
//! ```json
//! {
//!   "feature_names": ["url_length", "has_at_symbol", "has_hyphen",
//!                     "has_https", "num_dots", "uses_ip"],
//!   "coefficients": [0.01, 1.2, 0.4, -0.8, 0.3, 2.1],
//!   "intercept": -1.5
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::features::{validate_feature_names, FeatureRecord, FEATURE_COUNT};
use super::{Classifier, ModelError, Prediction};

/// Serialized logistic-regression model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Binary logistic-regression classifier over the URL feature record
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LogisticClassifier {
    /// Build from an artifact, rejecting any schema mismatch
    pub fn from_artifact(artifact: LogisticArtifact) -> Result<Self, ModelError> {
        validate_feature_names(&artifact.feature_names)?;

        let coefficients: [f64; FEATURE_COUNT] = artifact
            .coefficients
            .as_slice()
            .try_into()
            .map_err(|_| {
                ModelError::Parse(format!(
                    "expected {} coefficients, got {}",
                    FEATURE_COUNT,
                    artifact.coefficients.len()
                ))
            })?;

        Ok(Self {
            coefficients,
            intercept: artifact.intercept,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        let artifact: LogisticArtifact =
            serde_json::from_str(&raw).map_err(|e| ModelError::Parse(e.to_string()))?;
        Self::from_artifact(artifact)
    }

    /// Probability of the phishing class
    fn positive_probability(&self, features: &FeatureRecord) -> f64 {
        let z = self.intercept
            + features
                .as_f64_row()
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>();

        1.0 / (1.0 + (-z).exp())
    }
}

impl Classifier for LogisticClassifier {
    fn predict(&self, features: &FeatureRecord) -> Result<Prediction, ModelError> {
        let p = self.positive_probability(features);
        Prediction::checked(i64::from(p > 0.5), vec![1.0 - p, p])
    }

    fn backend(&self) -> &'static str {
        "logistic"
    }
}
