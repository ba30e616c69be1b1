use axum::{Json, http::StatusCode, response::IntoResponse};
use tracing::info;

use super::error_responses::ErrorResponse;

pub async fn not_found() -> impl IntoResponse {
    info!("router: not_found handler invoked");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            fields: None,
        }),
    )
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
