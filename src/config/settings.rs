//! Application settings loaded from `config.toml` and the environment.
//!
//! The file is optional. Environment variables always win over the file so that a
//! deployment can point the console at a different API without editing it.

use crate::config::api::DEFAULT_API_BASE_URL;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    /// API account the console signs in with, taken from `API_EMAIL`/`API_PASSWORD`.
    #[serde(skip)]
    pub credentials: Option<Credentials>,
}

/// `[api]` table of config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Login body for `POST /auth/login`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Gets the API base URL from the environment, falling back to `fallback`.
#[must_use]
pub fn get_api_base_url(fallback: &str) -> String {
    std::env::var("API_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Reads `API_EMAIL` and `API_PASSWORD`; both must be present.
#[must_use]
pub fn get_credentials() -> Option<Credentials> {
    match (std::env::var("API_EMAIL"), std::env::var("API_PASSWORD")) {
        (Ok(email), Ok(password)) if !email.is_empty() => Some(Credentials { email, password }),
        _ => None,
    }
}

/// Parses config.toml contents.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML syntax is invalid.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or its TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads the application configuration: `./config.toml` when present, then
/// environment overrides.
///
/// # Errors
/// Returns an error only if `config.toml` exists but cannot be read or parsed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = Path::new("config.toml");
    let mut config = if path.exists() {
        load_config(path)?
    } else {
        tracing::info!("No config.toml found, using defaults");
        AppConfig::default()
    };

    config.api.base_url = get_api_base_url(&config.api.base_url);
    config.credentials = get_credentials();

    tracing::info!(
        base_url = %config.api.base_url,
        has_credentials = config.credentials.is_some(),
        "Application configuration loaded"
    );
    Ok(config)
}
