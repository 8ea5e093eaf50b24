use crate::models::{ApiStatusResponse, API_NAME, API_VERSION};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET /api/v1/status handler - Versioned API status endpoint
#[utoipa::path(
    get,
    path = routes::API_STATUS,
    responses(
        (status = 200, description = "API is operational", body = ApiStatusResponse)
    ),
    tag = "status"
)]
pub async fn api_status_handler() -> (StatusCode, Json<ApiStatusResponse>) {
    (
        StatusCode::OK,
        Json(ApiStatusResponse {
            api: API_NAME.to_string(),
            version: API_VERSION.to_string(),
            status: "operational".to_string(),
        }),
    )
}
