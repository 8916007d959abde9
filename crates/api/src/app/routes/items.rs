use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/:id", get(get_item))
        .route("/:id/resources", get(get_item_resources))
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.list_items())).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.find_item(&id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "Item not found"),
        Err(e) => errors::lookup_error_to_response(e),
    }
}

/// Flattened base-material bill for an item.
///
/// The existence check happens here because the aggregator cannot tell an
/// unknown item apart from one that needs nothing.
pub async fn get_item_resources(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    query: Result<Query<dto::ResourcesQuery>, QueryRejection>,
) -> axum::response::Response {
    let id = match errors::parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let quantity = match query {
        Ok(Query(q)) => match q.multiplier() {
            Ok(v) => v,
            Err(e) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_quantity",
                    e.to_string(),
                );
            }
        },
        Err(e) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_quantity", e.body_text());
        }
    };

    match services.find_item(&id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "Item not found");
        }
        Err(e) => return errors::lookup_error_to_response(e),
    }

    let totals = services.resources(&id, quantity).await;
    (StatusCode::OK, Json(totals)).into_response()
}
