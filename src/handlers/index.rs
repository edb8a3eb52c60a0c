use axum::Json;

use crate::models::StatusMessage;

pub async fn index() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Phishing Link Detector API is running",
    })
}
