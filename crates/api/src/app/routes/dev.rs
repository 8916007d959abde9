use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/seed", post(seed))
}

/// Load the development catalog (idempotent).
pub async fn seed(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.seed() {
        Ok(report) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "seed complete",
                "items": report.items,
                "dependencies": report.dependencies,
            })),
        )
            .into_response(),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "seed_failed",
            e.to_string(),
        ),
    }
}
