//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: shared handler state (the injected store)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query-string DTOs
//! - `envelope.rs`: the uniform response envelope
//! - `errors.rs`: request errors rendered as envelopes

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use shows_core::Show;
use shows_infra::{store::seeded_show_store, CollectionStore};

use crate::config::ApiConfig;

pub mod dto;
pub mod envelope;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a fresh in-memory store (entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    build_app_with_store(config, seeded_show_store(config.seed))
}

/// Build the router over an existing store.
pub fn build_app_with_store(config: &ApiConfig, store: Arc<dyn CollectionStore<Show>>) -> Router {
    let services = Arc::new(services::AppServices::new(store, config.missing_param_status));

    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
