/// API endpoint map and request options
pub mod api;

/// Settings loading from config.toml and environment variables
pub mod settings;

pub use api::{ApiRoutes, DEFAULT_API_BASE_URL, RequestOptions, ResourceKind};
pub use settings::{AppConfig, Credentials, load_app_configuration};
