//! Prediction request/response models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Prediction;

pub const PHISHING: &str = "phishing";
pub const BENIGN: &str = "benign";

/// Predict request
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Kept loose so empty values of any type read as "no URL"
    #[serde(default)]
    pub url: Option<Value>,
}

/// Why a request carries no usable URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// Absent, `null`, or an empty value (`""`, `false`, `0`, `[]`, `{}`)
    Missing,
    /// Non-empty value that isn't a string
    NotAString(&'static str),
}

impl PredictRequest {
    pub fn into_url(self) -> Result<String, UrlError> {
        match self.url {
            Some(Value::String(url)) if !url.is_empty() => Ok(url),
            Some(other) if !is_empty_value(&other) => Err(UrlError::NotAString(type_name(&other))),
            _ => Err(UrlError::Missing),
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Predict response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub url: String,
    pub result: String,
    pub confidence: f64,
}

impl PredictResponse {
    pub fn new(url: String, prediction: &Prediction) -> Self {
        let result = if prediction.is_phishing() { PHISHING } else { BENIGN };

        Self {
            url,
            result: result.to_string(),
            confidence: prediction.confidence(),
        }
    }
}

/// Static status message for `GET /`
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}
