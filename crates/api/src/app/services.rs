//! Shared handler state.

use std::sync::Arc;

use axum::http::StatusCode;

use shows_core::Show;
use shows_infra::CollectionStore;

/// State injected into every handler through an `Extension`.
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<dyn CollectionStore<Show>>,
    pub missing_param_status: StatusCode,
}

impl AppServices {
    pub fn new(store: Arc<dyn CollectionStore<Show>>, missing_param_status: StatusCode) -> Self {
        Self {
            store,
            missing_param_status,
        }
    }
}
