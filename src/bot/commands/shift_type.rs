//! Shift type Discord commands - `/shifttype list|add|edit|delete`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            commands::{delete_confirmed, find_by_key, parse_color, submit_dialog},
            handlers::autocomplete,
            render,
        },
        core::{
            forms::{Dialog, ShiftTypeForm},
            screen::ShiftTypeScreen,
            shell::SearchBar,
            table,
        },
        errors::{Error, Result},
    };

    /// Parent command for managing shift types.
    #[poise::command(
        slash_command,
        rename = "shifttype",
        subcommands(
            "shift_type_list",
            "shift_type_add",
            "shift_type_edit",
            "shift_type_delete"
        )
    )]
    pub async fn shift_type(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Shift type management command. Available subcommands:\n\
            `/shifttype list` - List shift types, optionally filtered\n\
            `/shifttype add` - Add a new shift type\n\
            `/shifttype edit` - Change a shift type\n\
            `/shifttype delete` - Delete a shift type";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Lists shift types with description and color.
    #[poise::command(slash_command, rename = "list")]
    pub async fn shift_type_list(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Filter by name or description"] search: Option<String>,
    ) -> Result<()> {
        let mut screen = ShiftTypeScreen::new(&ctx.data().api);
        screen.refresh().await;

        let mut search_bar = SearchBar::new("Search shift types...");
        if let Some(query) = search {
            search_bar.set_value(query);
        }
        screen.set_search_query(search_bar.value());

        let rows = table::shift_type_rows(&screen.visible());
        ctx.send(
            poise::CreateReply::default().embed(render::shift_type_list(&rows, &search_bar)),
        )
        .await?;
        Ok(())
    }

    /// Adds a new shift type. The color is picked at random unless given.
    #[poise::command(slash_command, rename = "add")]
    pub async fn shift_type_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name (at least 2 characters)"] name: String,
        #[description = "Description, e.g. the working hours"] description: String,
        #[description = "Badge color"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: Option<String>,
    ) -> Result<()> {
        let mut screen = ShiftTypeScreen::new(&ctx.data().api);
        let mut dialog = Dialog::<ShiftTypeForm>::new();
        dialog.open_create();
        screen.open_create();
        {
            let values = dialog.values_mut();
            values.name = name;
            values.description = description;
            if let Some(color) = color {
                values.color = parse_color(&color)?;
            }
        }

        submit_dialog(ctx, &mut screen, &mut dialog).await
    }

    /// Changes a shift type. Options left out keep their current value.
    #[poise::command(slash_command, rename = "edit")]
    pub async fn shift_type_edit(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Shift type to change"]
        #[autocomplete = "autocomplete::autocomplete_shift_type_name"]
        shift_type: String,
        #[description = "New name (at least 2 characters)"] name: Option<String>,
        #[description = "New description"] description: Option<String>,
        #[description = "New badge color"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: Option<String>,
    ) -> Result<()> {
        let mut screen = ShiftTypeScreen::new(&ctx.data().api);
        screen.refresh().await;
        let existing = find_by_key(screen.items(), &shift_type, |s| s.name.as_str())?.clone();

        let mut dialog = Dialog::<ShiftTypeForm>::new();
        dialog.open_edit(&existing);
        screen.open_edit(existing);
        {
            let values = dialog.values_mut();
            if let Some(name) = name {
                values.name = name;
            }
            if let Some(description) = description {
                values.description = description;
            }
            if let Some(color) = color {
                values.color = parse_color(&color)?;
            }
        }

        submit_dialog(ctx, &mut screen, &mut dialog).await
    }

    /// Deletes a shift type after confirmation.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn shift_type_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Shift type to delete"]
        #[autocomplete = "autocomplete::autocomplete_shift_type_name"]
        shift_type: String,
    ) -> Result<()> {
        let mut screen = ShiftTypeScreen::new(&ctx.data().api);
        screen.refresh().await;
        let existing = find_by_key(screen.items(), &shift_type, |s| s.name.as_str())?.clone();
        let label = existing.name.clone();

        delete_confirmed(ctx, &mut screen, existing, &label).await
    }
}

// Re-export all commands
pub use inner::*;
