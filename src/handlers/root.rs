use crate::models::{RootResponse, API_NAME, API_VERSION};
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET / handler - API identity endpoint
///
/// Returns a fixed payload identifying the service. The body never changes
/// across requests or the process lifetime.
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service identity", body = RootResponse)
    ),
    tag = "status"
)]
pub async fn root_handler() -> (StatusCode, Json<RootResponse>) {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: API_NAME.to_string(),
            version: API_VERSION.to_string(),
            status: "running".to_string(),
        }),
    )
}
