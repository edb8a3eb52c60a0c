//! ONNX Backend - ONNX Runtime Integration
//!
//! Expects a binary classifier exported with a `[N, 6]` float input and two
//! outputs: the predicted label (int64) and the class probabilities as a
//! float tensor. For scikit-learn exports that means `zipmap=False`.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;
use parking_lot::Mutex;

use crate::features::{FeatureRecord, FEATURE_COUNT};
use super::{Classifier, ModelError, Prediction};

/// Conventional output names emitted by skl2onnx
const LABEL_OUTPUT: &str = "output_label";
const PROBABILITY_OUTPUT: &str = "output_probability";

pub struct OnnxClassifier {
    /// Running a session needs exclusive access
    session: Mutex<Session>,
    label_output: String,
    probability_output: String,
}

impl OnnxClassifier {
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let session = Session::builder()
            .map_err(|e| ModelError::Parse(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| ModelError::Parse(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| ModelError::Parse(format!("Failed to load model: {}", e)))?;

        if session.inputs.is_empty() {
            return Err(ModelError::Parse("model declares no inputs".to_string()));
        }

        let names: Vec<String> = session.outputs.iter().map(|o| o.name.clone()).collect();
        let (label_output, probability_output) = resolve_outputs(&names)?;

        tracing::debug!(
            "ONNX outputs: label='{}', probability='{}'",
            label_output,
            probability_output
        );

        Ok(Self {
            session: Mutex::new(session),
            label_output,
            probability_output,
        })
    }
}

/// Pick the label/probability outputs by name, falling back to position
fn resolve_outputs(names: &[String]) -> Result<(String, String), ModelError> {
    let has = |wanted: &str| names.iter().any(|n| n == wanted);

    if has(LABEL_OUTPUT) && has(PROBABILITY_OUTPUT) {
        return Ok((LABEL_OUTPUT.to_string(), PROBABILITY_OUTPUT.to_string()));
    }

    match names {
        [label, probability, ..] => Ok((label.clone(), probability.clone())),
        _ => Err(ModelError::Parse(format!(
            "expected label and probability outputs, got {:?}",
            names
        ))),
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &FeatureRecord) -> Result<Prediction, ModelError> {
        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.as_f32_row().to_vec(),
        )
        .map_err(|e| ModelError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Tensor::from_array(input_array)
            .map_err(|e| ModelError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| ModelError::Inference(format!("Inference failed: {}", e)))?;

        let label = outputs
            .get(&self.label_output)
            .ok_or_else(|| ModelError::Inference("No label output".to_string()))?
            .try_extract_tensor::<i64>()
            .map_err(|e| ModelError::Inference(format!("Label extract error: {}", e)))?
            .1
            .first()
            .copied()
            .ok_or_else(|| ModelError::Inference("Empty label output".to_string()))?;

        let probabilities: Vec<f64> = outputs
            .get(&self.probability_output)
            .ok_or_else(|| ModelError::Inference("No probability output".to_string()))?
            .try_extract_tensor::<f32>()
            .map_err(|e| ModelError::Inference(format!("Probability extract error: {}", e)))?
            .1
            .iter()
            .map(|&p| f64::from(p))
            .collect();

        Prediction::checked(label, probabilities)
    }

    fn backend(&self) -> &'static str {
        "onnx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_outputs_by_name() {
        let resolved =
            resolve_outputs(&names(&["output_probability", "output_label"])).unwrap();
        assert_eq!(resolved, ("output_label".to_string(), "output_probability".to_string()));
    }

    #[test]
    fn test_resolve_outputs_by_position() {
        let resolved = resolve_outputs(&names(&["label", "probabilities"])).unwrap();
        assert_eq!(resolved, ("label".to_string(), "probabilities".to_string()));
    }

    #[test]
    fn test_resolve_outputs_requires_two() {
        assert!(resolve_outputs(&names(&["only"])).is_err());
    }
}
