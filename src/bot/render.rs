//! Embed builders for tables, the dashboard and form errors.
//!
//! Discord caps an embed at 25 fields; longer lists are cut and the rest is
//! counted in the footer.

use crate::core::{
    colors::{self, Badge},
    dashboard::{DashboardSummary, DayHours, PieSlice, slice_color},
    forms::FieldErrors,
    shell::SearchBar,
    table::{DepartmentRow, EmployeeRow, ShiftTypeRow},
};
use poise::serenity_prelude as serenity;

/// Discord's per-embed field limit.
pub const EMBED_FIELD_LIMIT: usize = 25;

/// Embed accent when nothing more specific applies.
pub const DEFAULT_ACCENT: u32 = 0x0058_65F2;

/// `#rrggbb` to an embed color; anything else gives black.
#[must_use]
pub fn hex_to_color(hex: &str) -> u32 {
    hex.strip_prefix('#')
        .filter(|digits| digits.len() == 6)
        .and_then(|digits| u32::from_str_radix(digits, 16).ok())
        .unwrap_or(0)
}

/// Footer for a list cut at [`EMBED_FIELD_LIMIT`].
#[must_use]
pub fn overflow_note(total: usize) -> Option<String> {
    (total > EMBED_FIELD_LIMIT).then(|| format!("…and {} more", total - EMBED_FIELD_LIMIT))
}

fn badge_or_dash(badge: Option<&Badge>) -> String {
    match badge {
        Some(badge) if !badge.label.is_empty() => badge.to_string(),
        _ => "-".to_string(),
    }
}

fn list_embed(
    title: &str,
    search: &SearchBar,
    total: usize,
    fields: Vec<(String, String, bool)>,
) -> serenity::CreateEmbed {
    let description = if fields.is_empty() {
        "No entries found.".to_string()
    } else if search.value().is_empty() {
        format!("{total} entries")
    } else {
        format!("{total} entries matching `{}`", search.value())
    };
    let mut embed = serenity::CreateEmbed::default()
        .title(title)
        .description(description)
        .color(DEFAULT_ACCENT)
        .fields(fields);
    if let Some(note) = overflow_note(total) {
        embed = embed.footer(serenity::CreateEmbedFooter::new(note));
    }
    embed
}

#[must_use]
pub fn employee_list(rows: &[EmployeeRow], search: &SearchBar) -> serenity::CreateEmbed {
    let fields = rows
        .iter()
        .take(EMBED_FIELD_LIMIT)
        .map(|row| {
            let status = row
                .status
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let value = format!(
                "{}\nDepartment: {}\nStatus: {status}\nColor: {}",
                row.email,
                badge_or_dash(row.department.as_ref()),
                row.color
            );
            (row.name.clone(), value, false)
        })
        .collect();
    list_embed("Employees", search, rows.len(), fields)
}

#[must_use]
pub fn department_list(rows: &[DepartmentRow], search: &SearchBar) -> serenity::CreateEmbed {
    let fields = rows
        .iter()
        .take(EMBED_FIELD_LIMIT)
        .map(|row| {
            let value = format!(
                "{}\nEmployees: {}\nColor: {}",
                row.description, row.employee_count, row.color
            );
            (row.name.clone(), value, true)
        })
        .collect();
    list_embed("Departments", search, rows.len(), fields)
}

#[must_use]
pub fn shift_type_list(rows: &[ShiftTypeRow], search: &SearchBar) -> serenity::CreateEmbed {
    let fields = rows
        .iter()
        .take(EMBED_FIELD_LIMIT)
        .map(|row| {
            let value = format!("{}\nColor: {}", row.description, row.color);
            (row.name.clone(), value, true)
        })
        .collect();
    list_embed("Shift types", search, rows.len(), fields)
}

/// Weekly hours as a text bar chart.
#[must_use]
pub fn hours_chart(hours: &[DayHours]) -> String {
    hours
        .iter()
        .map(|day| {
            let bar = "█".repeat(day.hours as usize);
            format!("`{:<2}` {bar} {}h\n", day.day, day.hours)
        })
        .collect()
}

/// Employees per department, one line per slice with its fill color.
#[must_use]
pub fn pie_legend(slices: &[PieSlice]) -> String {
    if slices.is_empty() {
        return "No departments yet.".to_string();
    }
    slices
        .iter()
        .enumerate()
        .map(|(index, slice)| format!("`{}` {}: {}", slice_color(index), slice.name, slice.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn dashboard(
    summary: DashboardSummary,
    hours: &[DayHours],
    slices: &[PieSlice],
    loaded: bool,
) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::default()
        .title("Dashboard")
        .color(DEFAULT_ACCENT)
        .field("Employees", summary.employees.to_string(), true)
        .field("Departments", summary.departments.to_string(), true)
        .field(
            "Avg. per department",
            summary.average_per_department.to_string(),
            true,
        )
        .field("Weekly hours", hours_chart(hours), false)
        .field("Employees per department", pie_legend(slices), false);
    if !loaded {
        embed = embed.footer(serenity::CreateEmbedFooter::new(
            "Data could not be loaded from the API.",
        ));
    }
    embed
}

/// Registry listing, highlighting `current` when given.
#[must_use]
pub fn color_list(current: Option<&colors::ColorPicker>) -> serenity::CreateEmbed {
    let picker = current.cloned().unwrap_or_else(|| colors::ColorPicker::new(""));
    let lines = picker
        .options()
        .iter()
        .map(|option| {
            let marker = if option.value == picker.swatch() { "▶" } else { "•" };
            format!("{marker} {} `{}`", option.label, option.value)
        })
        .collect::<Vec<_>>()
        .join("\n");
    let accent = if picker.swatch().is_empty() {
        DEFAULT_ACCENT
    } else {
        hex_to_color(picker.swatch())
    };
    let current_label = match picker.current_label() {
        "" => "none",
        label => label,
    };
    serenity::CreateEmbed::default()
        .title(format!("Colors (current: {current_label})"))
        .description(lines)
        .color(accent)
}

/// One line per rejected field.
#[must_use]
pub fn field_errors(errors: &FieldErrors) -> String {
    std::iter::once("❌ Please fix the following:".to_string())
        .chain(
            errors
                .iter()
                .map(|error| format!("• `{}`: {}", error.field, error.message)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}
