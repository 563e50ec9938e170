use axum::{routing::get, Router};

pub mod shows;
pub mod system;

/// Router for every endpoint.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::hello_world))
        .route("/mirror/:name", get(system::mirror))
        .nest("/shows", shows::router())
}
