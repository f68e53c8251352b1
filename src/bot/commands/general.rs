//! General Discord commands - ping, help, colors and logout.
//! Help is generated from the route table, so every page in the navigation is
//! listed with the command that renders it.

use crate::core::shell::Route;

/// Slash command rendering `route`, if any.
#[must_use]
pub const fn command_for(route: Route) -> Option<&'static str> {
    match route {
        Route::Dashboard => Some("`/dashboard` - Headcount, weekly hours and department split"),
        Route::Employees => Some("`/employee list|add|edit|delete` - Manage employees"),
        Route::Departments => Some("`/department list|add|edit|delete` - Manage departments"),
        Route::ShiftTypes => Some("`/shifttype list|add|edit|delete` - Manage shift types"),
        Route::Login => None,
    }
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::command_for;
    use crate::{
        bot::{BotData, commands::parse_color, handlers::autocomplete, render},
        core::{
            colors::ColorPicker,
            shell::{Route, Shell},
        },
        errors::{Error, Result},
    };
    use std::fmt::Write;
    use tracing::{info, warn};

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    ///
    /// One line per navigation entry; `compact` lists the command names only.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Only list the pages, without descriptions"] compact: Option<bool>,
    ) -> Result<()> {
        let mut shell = Shell::new(Route::Dashboard);
        if compact.unwrap_or(false) {
            shell.toggle_collapsed();
        }

        let mut help_text = format!("**{} Help**\n", shell.brand());
        for item in shell.nav_items() {
            let Some(command) = command_for(item.route) else {
                continue;
            };
            match item.label {
                Some(label) => writeln!(help_text, "**{label}**\n• {command}")?,
                None => writeln!(help_text, "• {command}")?,
            }
        }
        help_text.push_str(
            "\n**Utility Commands**\n\
            • `/colors [color]` - Lists the selectable colors.\n\
            • `/logout` - Ends the API session.\n\
            • `/ping` - Checks if the bot is responsive.\n\
            • `/help [compact]` - Shows this help message.",
        );

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Lists the selectable colors, highlighting one if given.
    #[poise::command(slash_command)]
    pub async fn colors(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Color label or hex value to highlight"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: Option<String>,
    ) -> Result<()> {
        let picker = match color.as_deref() {
            Some(input) => {
                let mut picker = ColorPicker::new("");
                let value = parse_color(input)?;
                picker.select(&value, |selected| info!("Highlighting color {}", selected));
                Some(picker)
            }
            None => None,
        };

        ctx.send(poise::CreateReply::default().embed(render::color_list(picker.as_ref())))
            .await?;
        Ok(())
    }

    /// Ends the API session held by the bot.
    #[poise::command(slash_command)]
    pub async fn logout(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        match ctx.data().api.logout().await {
            Ok(()) => {
                info!("Logged out of the API on behalf of {}", ctx.author().name);
                ctx.say("✅ Logged out of the API.").await?;
            }
            Err(e) => {
                warn!("Logout failed: {}", e);
                ctx.say("❌ Logout failed. Please try again later.").await?;
            }
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
