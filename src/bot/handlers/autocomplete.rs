//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from a fresh read of the matching collection, filtered with
//! the same free-text search the list commands use. A failed read suggests nothing.

use crate::{
    api::Backend,
    bot::BotData,
    core::{colors::PREDEFINED_COLORS, search},
    entities::{Department, Employee, ShiftType},
    errors::Error,
};

/// Discord autocomplete limit
const AUTOCOMPLETE_LIMIT: usize = 25;

/// Provides autocomplete suggestions for department names.
pub async fn autocomplete_department_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(departments) = ctx.data().api.list::<Department>().await else {
        return Vec::new();
    };

    let mut matching: Vec<String> = search::filter(&departments, partial)
        .into_iter()
        .map(|department| department.name.clone())
        .take(AUTOCOMPLETE_LIMIT)
        .collect();
    matching.sort();
    matching
}

/// Provides autocomplete suggestions for employees, keyed by email.
///
/// Matches first name, last name and email, so typing a name finds the address.
pub async fn autocomplete_employee_email(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(employees) = ctx.data().api.list::<Employee>().await else {
        return Vec::new();
    };

    search::filter(&employees, partial)
        .into_iter()
        .map(|employee| employee.email.clone())
        .take(AUTOCOMPLETE_LIMIT)
        .collect()
}

/// Provides autocomplete suggestions for shift type names.
pub async fn autocomplete_shift_type_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(shift_types) = ctx.data().api.list::<ShiftType>().await else {
        return Vec::new();
    };

    let mut matching: Vec<String> = search::filter(&shift_types, partial)
        .into_iter()
        .map(|shift_type| shift_type.name.clone())
        .take(AUTOCOMPLETE_LIMIT)
        .collect();
    matching.sort();
    matching
}

/// Provides autocomplete suggestions for color labels, in registry order.
pub async fn autocomplete_color(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    matching_colors(partial)
}

fn matching_colors(partial: &str) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    PREDEFINED_COLORS
        .iter()
        .filter(|color| {
            color.label.to_lowercase().contains(&partial_lower) || color.value.contains(&partial_lower)
        })
        .map(|color| color.label.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_match_label_or_value() {
        assert_eq!(matching_colors("bl"), vec!["Blue"]);
        assert_eq!(matching_colors("#ef4"), vec!["Red"]);
        assert_eq!(matching_colors("").len(), PREDEFINED_COLORS.len());
        assert!(matching_colors("mauve").is_empty());
    }
}
