//! Employee Discord commands - `/employee list|add|edit|delete`.
//!
//! Employees are addressed by email. Every subcommand works on a fresh
//! [`EmployeeScreen`](crate::core::screen::EmployeeScreen), which also carries
//! the departments used to resolve department names.

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
            forms::{Dialog, EmployeeForm},
            screen::EmployeeScreen,
            shell::SearchBar,
            table,
        },
        entities::Department,
        errors::{Error, Result},
    };

    /// Parent command for managing employees.
    #[poise::command(
        slash_command,
        subcommands("employee_list", "employee_add", "employee_edit", "employee_delete")
    )]
    pub async fn employee(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Employee management command. Available subcommands:\n\
            `/employee list` - List employees, optionally filtered\n\
            `/employee add` - Add a new employee\n\
            `/employee edit` - Change an employee\n\
            `/employee delete` - Delete an employee";

        ctx.say(help_text).await?;
        Ok(())
    }

    fn department_id(departments: &[Department], name: Option<&str>) -> Result<Option<i64>> {
        name.map(|name| find_by_key(departments, name, |d| d.name.as_str()).map(|d| d.id))
            .transpose()
    }

    /// Lists employees with department, status and color.
    #[poise::command(slash_command, rename = "list")]
    pub async fn employee_list(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Filter by first name, last name or email"] search: Option<String>,
    ) -> Result<()> {
        let mut screen = EmployeeScreen::new(&ctx.data().api);
        screen.refresh().await;

        let mut search_bar = SearchBar::new("Search employees...");
        if let Some(query) = search {
            search_bar.set_value(query);
        }
        screen.set_search_query(search_bar.value());

        let rows = table::employee_rows(&screen.visible(), screen.related());
        ctx.send(poise::CreateReply::default().embed(render::employee_list(&rows, &search_bar)))
            .await?;
        Ok(())
    }

    /// Adds a new employee. The color is picked at random unless given.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command, rename = "add")]
    pub async fn employee_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "First name"] first_name: String,
        #[description = "Last name"] last_name: String,
        #[description = "Email address"] email: String,
        #[description = "Initial password (at least 6 characters)"] password: String,
        #[description = "Department the employee belongs to"]
        #[autocomplete = "autocomplete::autocomplete_department_name"]
        department: Option<String>,
        #[description = "Badge color"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: Option<String>,
        #[description = "Grant admin rights"] is_admin: Option<bool>,
    ) -> Result<()> {
        let mut screen = EmployeeScreen::new(&ctx.data().api);
        screen.refresh().await;
        let department_id = department_id(screen.related(), department.as_deref())?;

        let mut dialog = Dialog::<EmployeeForm>::new();
        dialog.open_create();
        screen.open_create();
        {
            let values = dialog.values_mut();
            values.first_name = first_name;
            values.last_name = last_name;
            values.email = email;
            values.password = password;
            values.department_id = department_id;
            values.is_admin = is_admin.unwrap_or(false);
            if let Some(color) = color {
                values.color = parse_color(&color)?;
            }
        }

        submit_dialog(ctx, &mut screen, &mut dialog).await
    }

    /// Changes an employee. Options left out keep their current value.
    #[allow(clippy::too_many_arguments)]
    #[poise::command(slash_command, rename = "edit")]
    pub async fn employee_edit(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Email of the employee to change"]
        #[autocomplete = "autocomplete::autocomplete_employee_email"]
        employee: String,
        #[description = "New first name"] first_name: Option<String>,
        #[description = "New last name"] last_name: Option<String>,
        #[description = "New email address"] email: Option<String>,
        #[description = "New password (at least 6 characters)"] password: Option<String>,
        #[description = "New department"]
        #[autocomplete = "autocomplete::autocomplete_department_name"]
        department: Option<String>,
        #[description = "New badge color"]
        #[autocomplete = "autocomplete::autocomplete_color"]
        color: Option<String>,
        #[description = "Admin rights"] is_admin: Option<bool>,
    ) -> Result<()> {
        let mut screen = EmployeeScreen::new(&ctx.data().api);
        screen.refresh().await;
        let existing = find_by_key(screen.items(), &employee, |e| e.email.as_str())?.clone();
        let department_id = department_id(screen.related(), department.as_deref())?;

        let mut dialog = Dialog::<EmployeeForm>::new();
        dialog.open_edit(&existing);
        screen.open_edit(existing);
        {
            let values = dialog.values_mut();
            if let Some(first_name) = first_name {
                values.first_name = first_name;
            }
            if let Some(last_name) = last_name {
                values.last_name = last_name;
            }
            if let Some(email) = email {
                values.email = email;
            }
            if let Some(password) = password {
                values.password = password;
            }
            if department_id.is_some() {
                values.department_id = department_id;
            }
            if let Some(color) = color {
                values.color = parse_color(&color)?;
            }
            if let Some(is_admin) = is_admin {
                values.is_admin = is_admin;
            }
        }

        submit_dialog(ctx, &mut screen, &mut dialog).await
    }

    /// Deletes an employee after confirmation.
    ///
    /// The delete is offered from the employee's edit view, which closes once the
    /// employee is gone.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn employee_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Email of the employee to delete"]
        #[autocomplete = "autocomplete::autocomplete_employee_email"]
        employee: String,
    ) -> Result<()> {
        let mut screen = EmployeeScreen::new(&ctx.data().api).closing_dialog_on_delete();
        screen.refresh().await;
        let existing = find_by_key(screen.items(), &employee, |e| e.email.as_str())?.clone();
        let label = existing.full_name();

        screen.open_edit(existing.clone());

        delete_confirmed(ctx, &mut screen, existing, &label).await
    }
}

// Re-export all commands
pub use inner::*;
