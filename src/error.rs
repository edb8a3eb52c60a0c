//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::model::ModelError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body isn't JSON, doesn't fit the request shape, or is `null`
    #[error("invalid JSON")]
    InvalidJson { details: Option<String> },

    #[error("URL is required")]
    MissingUrl,

    /// Feature table or model invocation failed
    #[error("classifier failure: {0}")]
    Classifier(#[from] ModelError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::InvalidJson { details: Some(details) } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON", "details": details }),
            ),
            AppError::InvalidJson { details: None } => {
                (StatusCode::BAD_REQUEST, json!({ "error": "Invalid JSON" }))
            }
            AppError::MissingUrl => {
                (StatusCode::BAD_REQUEST, json!({ "error": "URL is required" }))
            }
            AppError::Classifier(err) => {
                tracing::error!("Classifier error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
