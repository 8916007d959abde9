use axum::Router;

pub mod dependencies;
pub mod dev;
pub mod items;
pub mod system;

/// Router for all catalog endpoints (dev routes are mounted separately).
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .nest("/dependencies", dependencies::router())
}
