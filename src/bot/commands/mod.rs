//! Discord command implementations organized by page.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Dashboard command
pub mod dashboard;

/// Department management commands
pub mod department;

/// Employee management commands
pub mod employee;

/// General utility commands
pub mod general;

/// Shift type management commands
pub mod shift_type;

// Export commands
pub use dashboard::*;
pub use department::*;
pub use employee::*;
pub use general::*;
pub use shift_type::*;

use crate::{
    api::{Backend, RelatedList, Resource},
    bot::{BotData, handlers::confirm, render},
    core::{
        colors,
        forms::{Dialog, FormModel},
        screen::{ResourceScreen, WriteOutcome},
        table::{Deletable, DeleteConfirmation},
    },
    errors::{Error, Result},
};

/// First record whose `key` matches `wanted`, ignoring ASCII case.
pub(crate) fn find_by_key<'a, R>(
    items: &'a [R],
    wanted: &str,
    key: impl Fn(&R) -> &str,
) -> Result<&'a R>
where
    R: Resource,
{
    items
        .iter()
        .find(|item| key(*item).eq_ignore_ascii_case(wanted.trim()))
        .ok_or_else(|| Error::NotFound {
            kind: R::KIND.singular(),
            key: wanted.to_string(),
        })
}

/// Registry value for a color label or value typed by the user.
pub(crate) fn parse_color(input: &str) -> Result<String> {
    colors::resolve(input)
        .map(str::to_string)
        .ok_or_else(|| Error::NotFound {
            kind: "color",
            key: input.to_string(),
        })
}

/// Validates the dialog and hands the payload to the screen. Field errors are
/// replied to the user; nothing is sent to the API then.
pub(crate) async fn submit_dialog<F, B, L>(
    ctx: poise::Context<'_, BotData, Error>,
    screen: &mut ResourceScreen<'_, F::Entity, B, L>,
    dialog: &mut Dialog<F>,
) -> Result<()>
where
    F: FormModel,
    B: Backend,
    L: RelatedList,
{
    let kind = <F::Entity as Resource>::KIND.singular();
    let payload = match dialog.submit() {
        Ok(payload) => payload,
        Err(errors) => {
            screen.close_dialog();
            ctx.say(render::field_errors(&errors)).await?;
            return Ok(());
        }
    };

    match screen.submit(payload).await {
        WriteOutcome::Applied => {
            ctx.say(format!("✅ The {kind} has been saved.")).await?;
        }
        WriteOutcome::Failed => {
            ctx.say(format!(
                "❌ Failed to save the {kind}. Please try again later."
            ))
            .await?;
        }
    }
    Ok(())
}

/// Asks for confirmation, then deletes `item` through the screen.
pub(crate) async fn delete_confirmed<R, B, L>(
    ctx: poise::Context<'_, BotData, Error>,
    screen: &mut ResourceScreen<'_, R, B, L>,
    item: R,
    label: &str,
) -> Result<()>
where
    R: Resource + Deletable,
    B: Backend,
    L: RelatedList,
{
    let kind = R::KIND.singular();
    let mut confirmation = DeleteConfirmation::default();
    confirmation.request(item);

    let Some(item) = confirm::ask(ctx, &mut confirmation).await? else {
        ctx.say(format!("Deletion of {kind} '{label}' cancelled."))
            .await?;
        return Ok(());
    };

    match screen.delete(&item).await {
        WriteOutcome::Applied => {
            ctx.say(format!("✅ The {kind} '{label}' has been deleted."))
                .await?;
        }
        WriteOutcome::Failed => {
            ctx.say(format!("❌ Failed to delete the {kind} '{label}'."))
                .await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::department;

    #[test]
    fn test_find_by_key_ignores_case_and_whitespace() {
        let departments = vec![department(1, "HR"), department(2, "IT")];
        let found = find_by_key(&departments, " it ", |d| d.name.as_str());
        assert_eq!(found.map(|d| d.id).ok(), Some(2));

        let missing = find_by_key(&departments, "Ops", |d| d.name.as_str());
        assert!(matches!(
            missing,
            Err(Error::NotFound { kind: "department", .. })
        ));
    }

    #[test]
    fn test_parse_color_accepts_label_or_value() {
        assert_eq!(parse_color("teal").ok().as_deref(), Some("#14b8a6"));
        assert_eq!(parse_color("#3B82F6").ok().as_deref(), Some("#3b82f6"));
        assert!(parse_color("mauve").is_err());
    }
}
