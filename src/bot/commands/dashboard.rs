//! Dashboard command.

mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, render},
        core::dashboard::Dashboard,
        errors::{Error, Result},
    };

    /// Shows headcount, the weekly hours chart and employees per department.
    #[poise::command(slash_command)]
    pub async fn dashboard(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let mut dashboard = Dashboard::new(&ctx.data().api);
        let loaded = dashboard.load().await;

        let embed = render::dashboard(
            dashboard.summary(),
            dashboard.weekly_hours(),
            &dashboard.pie_data(),
            loaded,
        );
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        Ok(())
    }
}

pub use inner::*;
