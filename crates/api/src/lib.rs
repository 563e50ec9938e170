//! HTTP API: configuration, routing, and the response envelope.

pub mod app;
pub mod config;

pub use config::ApiConfig;
