use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use service_core::error::AppError;

/// Method fallback for the `/staff` routes.
pub async fn method_not_supported() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not supported")
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("{}", uri.path()))
}
