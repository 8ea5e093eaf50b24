use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;

/// Build the application router with request tracing and the permissive
/// CORS policy applied to every route.
///
/// tower-http refuses `allow_credentials(true)` combined with a wildcard
/// origin, so `Access-Control-Allow-Credentials: true` is attached through a
/// separate response-header layer to match the original wire contract.
/// Browsers reject wildcard origin with credentials, so the combination only
/// matters to non-browser clients.
pub fn build_router() -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::API_STATUS, get(handlers::api_status_handler))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
}
