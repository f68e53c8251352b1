//! Unified error types and result handling.

use thiserror::Error;

/// Every failure the console can run into, from configuration to the remote API.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered, but not with a success status.
    #[error("API returned {status} for {method} {url}")]
    Api {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("Unexpected response payload: {message}")]
    Payload { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
