//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared store handle and per-request unit of work
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request body parsing
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(pool: SqlitePool) -> Router {
    let services = Arc::new(services::AppServices::new(pool));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
