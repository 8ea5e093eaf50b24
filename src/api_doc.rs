use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ApiStatusResponse, HealthResponse, RootResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snorting Code API",
        version = "1.0.0",
        description = "Backend API for Snorting Code mobile application"
    ),
    paths(
        handlers::root::root_handler,
        handlers::health::health_handler,
        handlers::status::api_status_handler
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            ApiStatusResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "status", description = "Service identity and status operations")
    )
)]
pub struct ApiDoc;
