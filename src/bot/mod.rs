//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord front end of the shift planner: slash
//! commands for every page, autocomplete and confirmation handlers, embed
//! rendering, and the shared API client.

/// Discord command implementations (dashboard, employee, department, shift type, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, delete confirmation)
pub mod handlers;
/// Embed builders
pub mod render;

use crate::{api::ApiClient, errors::Error};
use poise::serenity_prelude as serenity;
use std::env;
use tracing::{error, info, instrument, warn};

/// Shared data available to all bot commands.
/// Holds the API client; its cookie store carries the session for every command.
pub struct BotData {
    /// Client for the shift planner API
    pub api: ApiClient,
}

impl BotData {
    /// Creates a new `BotData` instance around an (optionally logged-in) client.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Every slash command the bot registers.
#[must_use]
pub fn all_commands() -> Vec<poise::Command<BotData, Error>> {
    vec![
        commands::dashboard(),
        commands::employee(),
        commands::department(),
        commands::shift_type(),
        commands::colors(),
        commands::logout(),
        commands::help(),
        commands::ping(),
    ]
}

/// Guild for instant command registration during development, from `DEV_GUILD_ID`.
fn dev_guild() -> Option<serenity::GuildId> {
    let raw = env::var("DEV_GUILD_ID").ok()?;
    match raw.trim().parse::<u64>() {
        Ok(id) if id != 0 => Some(serenity::GuildId::new(id)),
        _ => {
            warn!("Ignoring invalid DEV_GUILD_ID '{}'", raw);
            None
        }
    }
}

/// Connects to Discord and serves commands until the client stops.
///
/// # Errors
/// Returns an error if the client cannot be built or the connection fails.
#[instrument(skip_all)]
pub async fn run_bot(token: String, api: ApiClient) -> Result<(), serenity::Error> {
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: all_commands(),
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Some(guild_id) = dev_guild() {
                    poise::builtins::register_in_guild(
                        ctx,
                        &framework.options().commands,
                        guild_id,
                    )
                    .await?;
                    info!("Registered commands in guild {}", guild_id);
                } else {
                    info!("Registering commands globally...");
                    poise::builtins::register_globally(ctx, &framework.options().commands)
                        .await?;
                }
                Ok(BotData::new(api))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))
}
