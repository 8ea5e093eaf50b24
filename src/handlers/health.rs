use crate::models::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The service holds no connections and performs no I/O, so being able to
/// answer at all is the liveness signal. Always returns 200 OK.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}
