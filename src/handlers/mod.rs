pub mod root;
pub mod health;
pub mod status;

pub use root::root_handler;
pub use health::health_handler;
pub use status::api_status_handler;
