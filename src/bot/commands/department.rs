//! Department Discord commands - `/department list|add|edit|delete`.

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
            forms::{DepartmentForm, Dialog},
            screen::DepartmentScreen,
            shell::SearchBar,
            table,
        },
        errors::{Error, Result},
    };

    /// Parent command for managing departments.
    #[poise::command(
        slash_command,
        subcommands(
            "department_list",
            "department_add",
            "department_edit",
            "department_delete"
        )
    )]
    pub async fn department(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Department management command. Available subcommands:\n\
            `/department list` - List departments, optionally filtered\n\
            `/department add` - Add a new department\n\
            `/department edit` - Change a department\n\
            `/department delete` - Delete a department";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Lists departments with description, headcount and color.
    #[poise::command(slash_command, rename = "list")]
    pub async fn department_list(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Filter by name"] search: Option<String>,
    ) -> Result<()> {
        let mut screen = DepartmentScreen::new(&ctx.data().api);
        screen.refresh().await;

        let mut search_bar = SearchBar::new("Search departments...");
        if let Some(query) = search {
            search_bar.set_value(query);
        }
        screen.set_search_query(search_bar.value());

        let rows = table::department_rows(&screen.visible());
        ctx.send(
            poise::CreateReply::default().embed(render::department_list(&rows, &search_bar)),
        )
        .await?;
        Ok(())
    }

    /// Adds a new department. The color is picked at random unless given.
    #[poise::command(slash_command, rename = "add")]
    pub async fn department_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Name (2 to 50 characters)"] name: String,
        #[description = "Optional description"] description: Option<String>,
        #[description = "Badge color"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: Option<String>,
    ) -> Result<()> {
        let mut screen = DepartmentScreen::new(&ctx.data().api);
        let mut dialog = Dialog::<DepartmentForm>::new();
        dialog.open_create();
        screen.open_create();
        {
            let values = dialog.values_mut();
            values.name = name;
            values.description = description.unwrap_or_default();
            if let Some(color) = color {
                values.color = parse_color(&color)?;
            }
        }

        submit_dialog(ctx, &mut screen, &mut dialog).await
    }

    /// Changes a department. Options left out keep their current value.
    #[poise::command(slash_command, rename = "edit")]
    pub async fn department_edit(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Department to change"]
        #[autocomplete = "autocomplete::autocomplete_department_name"]
        department: String,
        #[description = "New name (2 to 50 characters)"] name: Option<String>,
        #[description = "New description"] description: Option<String>,
        #[description = "New badge color"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: Option<String>,
    ) -> Result<()> {
        let mut screen = DepartmentScreen::new(&ctx.data().api);
        screen.refresh().await;
        let existing = find_by_key(screen.items(), &department, |d| d.name.as_str())?.clone();

        let mut dialog = Dialog::<DepartmentForm>::new();
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

    /// Deletes a department after confirmation. Its employees are detached.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn department_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Department to delete"]
        #[autocomplete = "autocomplete::autocomplete_department_name"]
        department: String,
    ) -> Result<()> {
        let mut screen = DepartmentScreen::new(&ctx.data().api);
        screen.refresh().await;
        let existing = find_by_key(screen.items(), &department, |d| d.name.as_str())?.clone();
        let label = existing.name.clone();

        delete_confirmed(ctx, &mut screen, existing, &label).await
    }
}

// Re-export all commands
pub use inner::*;
