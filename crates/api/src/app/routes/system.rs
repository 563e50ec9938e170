use axum::extract::Path;

use crate::app::envelope::ApiResponse;
use crate::app::errors::ApiError;

pub async fn hello_world() -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse::ok().with_keyed("content", "hello world!")?)
}

/// Echo the path segment back under `name`.
pub async fn mirror(Path(name): Path<String>) -> Result<ApiResponse, ApiError> {
    Ok(ApiResponse::ok().with_keyed("name", &name)?)
}
