//! Button prompt guarding every delete.
//!
//! The prompt text comes from [`DeleteConfirmation::prompt`]. Only the invoking
//! user can answer; no answer within [`CONFIRM_TIMEOUT`] counts as cancel.

use crate::{
    bot::BotData,
    core::table::{Deletable, DeleteConfirmation},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use std::time::Duration;

/// How long the buttons wait for an answer.
pub const CONFIRM_TIMEOUT: Duration = Duration::from_secs(60);

const DANGER_ACCENT: u32 = 0x00dc_2626;

/// Shows the pending record's prompt with Delete/Cancel buttons. Returns the
/// record when the user confirmed; otherwise the confirmation is cancelled and
/// `None` is returned.
pub async fn ask<T: Deletable + Send>(
    ctx: poise::Context<'_, BotData, Error>,
    confirmation: &mut DeleteConfirmation<T>,
) -> Result<Option<T>> {
    let Some(prompt) = confirmation.prompt() else {
        return Ok(None);
    };

    let ctx_id = ctx.id();
    let confirm_id = format!("{ctx_id}-confirm");
    let cancel_id = format!("{ctx_id}-cancel");
    let buttons = serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(&confirm_id)
            .label("Delete")
            .style(serenity::ButtonStyle::Danger),
        serenity::CreateButton::new(&cancel_id)
            .label("Cancel")
            .style(serenity::ButtonStyle::Secondary),
    ]);
    let embed = serenity::CreateEmbed::default()
        .title(prompt.title)
        .description(prompt.description)
        .color(DANGER_ACCENT);

    let handle = ctx
        .send(
            poise::CreateReply::default()
                .embed(embed.clone())
                .components(vec![buttons]),
        )
        .await?;

    let prefix = ctx_id.to_string();
    let press = serenity::ComponentInteractionCollector::new(ctx.serenity_context())
        .author_id(ctx.author().id)
        .filter(move |press| press.data.custom_id.starts_with(&prefix))
        .timeout(CONFIRM_TIMEOUT)
        .await;

    let confirmed = match press {
        Some(press) => {
            press
                .create_response(
                    ctx.serenity_context(),
                    serenity::CreateInteractionResponse::Acknowledge,
                )
                .await?;
            press.data.custom_id == confirm_id
        }
        None => false,
    };

    // Buttons go away whatever the answer.
    handle
        .edit(
            ctx,
            poise::CreateReply::default().embed(embed).components(vec![]),
        )
        .await?;

    if confirmed {
        Ok(confirmation.confirm())
    } else {
        confirmation.cancel();
        Ok(None)
    }
}
