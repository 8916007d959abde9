use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use forgebom_inventory::LookupError;

pub fn lookup_error_to_response(err: LookupError) -> axum::response::Response {
    tracing::error!("catalog lookup failed: {err}");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "Internal server error",
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn parse_item_id(raw: &str) -> Result<forgebom_core::ItemId, axum::response::Response> {
    raw.parse()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id"))
}
