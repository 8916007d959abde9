//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: catalog store, aggregator, seeding
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use forgebom_infra::SeedError;
use forgebom_resources::AggregatorConfig;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Result<Router, SeedError> {
    let services = Arc::new(AppServices::in_memory(AggregatorConfig {
        fan_out: config.fan_out,
    }));

    if config.seed_on_startup {
        services.seed()?;
    }

    Ok(build_router(services, config.enable_dev_routes))
}

/// Router over already-wired services (used by tests to control the catalog).
///
/// Catalog endpoints live under `/api`; `/health` stays at the root.
pub fn build_router(services: Arc<AppServices>, enable_dev_routes: bool) -> Router {
    let mut api = routes::router();
    if enable_dev_routes {
        api = api.nest("/dev", routes::dev::router());
    }

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_span))
                .layer(Extension(services)),
        )
}
