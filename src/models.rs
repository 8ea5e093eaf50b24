use serde::{Deserialize, Serialize};

/// API display name, shared by the root and status payloads
pub const API_NAME: &str = "Snorting Code API";

/// API version advertised by the root and status payloads
pub const API_VERSION: &str = "1.0.0";

/// Response type for the root endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for the API status endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiStatusResponse {
    pub api: String,
    pub version: String,
    pub status: String,
}
