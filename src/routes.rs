// Route path constants - single source of truth for all API paths

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const API_STATUS: &str = "/api/v1/status";
