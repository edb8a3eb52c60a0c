//! Prediction handler

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};

use crate::features;
use crate::middleware::request_log;
use crate::model::{Classifier, ModelError};
use crate::models::{PredictRequest, PredictResponse, UrlError};
use crate::{AppError, AppResult, AppState};

/// Classify a URL
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<PredictResponse>> {
    let response = classify(Arc::clone(&state.classifier), &body).await?;
    Ok(Json(response))
}

/// Parse the body, extract features, run the classifier and format the result
pub async fn classify(
    classifier: Arc<dyn Classifier>,
    body: &[u8],
) -> AppResult<PredictResponse> {
    let url = parse_url(body)?;
    let record = features::extract(&url);

    // Model scoring is CPU-bound
    let prediction = tokio::task::spawn_blocking(move || classifier.predict(&record))
        .await
        .map_err(|e| ModelError::Inference(format!("inference task failed: {}", e)))??;

    tracing::debug!(
        "Classified {} as label {} ({:?})",
        url,
        prediction.label,
        prediction.probabilities
    );

    Ok(PredictResponse::new(url, &prediction))
}

/// Decode the request body and pull out a non-empty `url`
pub fn parse_url(body: &[u8]) -> AppResult<String> {
    let parsed: Option<PredictRequest> = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(target: request_log::TARGET, "JSON parsing error: {}", e);
        AppError::InvalidJson { details: Some(e.to_string()) }
    })?;

    tracing::debug!(target: request_log::TARGET, "Parsed JSON: {:?}", parsed);

    let request = parsed.ok_or(AppError::InvalidJson { details: None })?;

    request.into_url().map_err(|e| match e {
        UrlError::Missing => AppError::MissingUrl,
        UrlError::NotAString(kind) => AppError::InvalidJson {
            details: Some(format!("invalid type: {}, expected a string for `url`", kind)),
        },
    })
}
