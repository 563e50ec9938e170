use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    routing::get,
    Router,
};

use shows_core::{more_episodes_than, parse_episodes, RecordId, Show, SHOWS_COLLECTION};

use crate::app::dto::ShowParams;
use crate::app::envelope::ApiResponse;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

type ApiResult = Result<ApiResponse, ApiError>;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_shows).post(create_show))
        .route("/:id", get(get_show).put(update_show).delete(delete_show))
        .route("/minepisodes/:num", get(list_shows_above_episodes))
}

pub async fn list_shows(Extension(services): Extension<Arc<AppServices>>) -> ApiResult {
    let shows = services.store.get_all(SHOWS_COLLECTION)?;
    Ok(ApiResponse::ok().with_keyed("shows", &shows)?)
}

pub async fn get_show(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> ApiResult {
    let id: RecordId = id.parse()?;
    let show = services
        .store
        .get_by_id(SHOWS_COLLECTION, id)?
        .ok_or(ApiError::NotFound)?;
    Ok(ApiResponse::ok().with_result(&show)?)
}

pub async fn delete_show(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> ApiResult {
    let id: RecordId = id.parse()?;
    if !services.store.delete_by_id(SHOWS_COLLECTION, id)? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(%id, "show deleted");
    Ok(ApiResponse::ok().with_message("Show deleted"))
}

/// `POST /shows?param1=<name>&param2=<episodes>`.
///
/// Answers with a confirmation message only; the assigned id is not returned.
pub async fn create_show(
    Extension(services): Extension<Arc<AppServices>>,
    params: ShowParams,
) -> ApiResult {
    let (Some(name), Some(episodes)) = (params.name(), params.episodes()) else {
        return Err(ApiError::MissingParameter {
            status: services.missing_param_status,
        });
    };
    let episodes_seen = parse_episodes(episodes)?;

    let created = services
        .store
        .create(SHOWS_COLLECTION, Show::new(name, episodes_seen))?;

    tracing::info!(id = %created.id, name = %created.name, "show added");
    Ok(ApiResponse::ok().with_message("Show added"))
}

/// `PUT /shows/{id}?param1=&param2=`: overwrite whichever fields are non-empty.
pub async fn update_show(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    params: ShowParams,
) -> ApiResult {
    let id: RecordId = id.parse()?;
    if services.store.get_by_id(SHOWS_COLLECTION, id)?.is_none() {
        return Err(ApiError::NotFound);
    }

    let patch = params.to_patch()?;
    // The record may have been deleted since the check above.
    let updated = services
        .store
        .update_by_id(SHOWS_COLLECTION, id, &patch)?
        .ok_or(ApiError::NotFound)?;

    tracing::debug!(%id, ?patch, "show updated");
    Ok(ApiResponse::ok().with_result(&updated)?)
}

pub async fn list_shows_above_episodes(
    Extension(services): Extension<Arc<AppServices>>,
    Path(num): Path<String>,
) -> ApiResult {
    let threshold = parse_episodes(&num)?;
    let shows = more_episodes_than(services.store.get_all(SHOWS_COLLECTION)?, threshold);
    Ok(ApiResponse::ok().with_keyed("shows", &shows)?)
}
