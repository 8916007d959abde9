use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_dependencies))
}

/// Recipe edges grouped by parent item.
pub async fn list_dependencies(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let groups = services
        .list_dependencies()
        .into_iter()
        .map(|(parent, edges)| dto::dependency_group(parent, edges))
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(groups)).into_response()
}
