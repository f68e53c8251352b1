#![allow(clippy::result_large_err)]

use dotenvy::dotenv;
use shift_planner::{
    api::ApiClient,
    bot,
    config::{self, ApiRoutes, RequestOptions},
    errors::{Error, Result},
};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration
    let app_config = config::load_app_configuration()?;
    info!("Successfully processed application configuration.");

    // 4. Build the API client
    let routes = ApiRoutes::new(&app_config.api.base_url);
    let api = ApiClient::new(routes, RequestOptions::default())
        .inspect_err(|e| error!("Failed to build API client: {}", e))?;
    info!("API client targets {}", api.routes().base_url());

    // 5. Sign in when credentials are configured; the bot starts either way
    match &app_config.credentials {
        Some(credentials) => match api.login(credentials).await {
            Ok(()) => info!("Logged in to the API."),
            Err(e) => warn!("API login failed, continuing without a session: {}", e),
        },
        None => info!("No API credentials configured; requests carry no session."),
    }

    // 6. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in AppConfig
    let token = env::var("DISCORD_BOT_TOKEN")
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))
        .map_err(Error::EnvVar)?;

    bot::run_bot(token, api).await.map_err(Error::from)?;

    Ok(())
}
