use axum::{http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "time": Utc::now().to_rfc3339(),
        })),
    )
}
