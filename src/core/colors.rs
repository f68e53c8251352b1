//! Color registry, picker and badge.
//!
//! [`PREDEFINED_COLORS`] is the only source of selectable colors for employees,
//! departments and shift types. Stored values that are not in the registry are
//! still displayed, using the raw value as their label.

use rand::Rng;

/// One selectable color: the stored value and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Ordered registry of selectable colors.
pub const PREDEFINED_COLORS: &[ColorOption] = &[
    ColorOption { value: "#ef4444", label: "Red" },
    ColorOption { value: "#f97316", label: "Orange" },
    ColorOption { value: "#f59e0b", label: "Amber" },
    ColorOption { value: "#eab308", label: "Yellow" },
    ColorOption { value: "#84cc16", label: "Lime" },
    ColorOption { value: "#22c55e", label: "Green" },
    ColorOption { value: "#14b8a6", label: "Teal" },
    ColorOption { value: "#06b6d4", label: "Cyan" },
    ColorOption { value: "#3b82f6", label: "Blue" },
    ColorOption { value: "#6366f1", label: "Indigo" },
    ColorOption { value: "#a855f7", label: "Purple" },
    ColorOption { value: "#ec4899", label: "Pink" },
    ColorOption { value: "#64748b", label: "Slate" },
];

/// Badge color for a reference that no longer resolves, e.g. a deleted department.
pub const FALLBACK_COLOR: &str = "#000000";

/// Registry entry stored under `value`.
#[must_use]
pub fn find(value: &str) -> Option<&'static ColorOption> {
    PREDEFINED_COLORS.iter().find(|color| color.value == value)
}

/// Label of a stored color, or the raw value if it is not in the registry.
#[must_use]
pub fn label_for(value: &str) -> &str {
    find(value).map_or(value, |color| color.label)
}

/// Maps user input (a label, case-insensitive, or a registry value) to a
/// registry value.
#[must_use]
pub fn resolve(input: &str) -> Option<&'static str> {
    let input = input.trim();
    PREDEFINED_COLORS
        .iter()
        .find(|color| color.value.eq_ignore_ascii_case(input) || color.label.eq_ignore_ascii_case(input))
        .map(|color| color.value)
}

/// Picks a registry value at random. Only used to pre-fill new forms.
#[must_use]
pub fn random_color() -> &'static str {
    random_color_with(&mut rand::thread_rng())
}

/// [`random_color`] with a caller-supplied generator.
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PREDEFINED_COLORS[rng.gen_range(0..PREDEFINED_COLORS.len())].value
}

/// Dropdown bound to a color field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPicker {
    selected: String,
}

impl ColorPicker {
    /// Picker showing the stored `value` as is, empty included.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            selected: value.to_string(),
        }
    }

    /// Swatch color of the current selection; empty when nothing is selected.
    #[must_use]
    pub fn swatch(&self) -> &str {
        &self.selected
    }

    /// Label shown next to the swatch.
    #[must_use]
    pub fn current_label(&self) -> &str {
        label_for(&self.selected)
    }

    /// Every selectable entry, in registry order.
    #[must_use]
    pub const fn options(&self) -> &'static [ColorOption] {
        PREDEFINED_COLORS
    }

    /// Selects `value` and reports it through `on_change`.
    pub fn select(&mut self, value: &str, on_change: impl FnOnce(&str)) {
        self.selected = value.to_string();
        on_change(value);
    }
}

/// Colored tag with a label, e.g. a department name or a color label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub color: String,
}

impl Badge {
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }

    /// Badge for a stored color, labelled through the registry.
    #[must_use]
    pub fn for_color(value: &str) -> Self {
        Self::new(label_for(value), value)
    }

    /// Tinted background: the color at ~15% alpha.
    #[must_use]
    pub fn background(&self) -> String {
        format!("{}25", self.color)
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}`", self.label)
    }
}
