//! Dialog forms and their validation.
//!
//! Validation is a pure function of the form values: each form lists its fields
//! with declarative [`Rule`]s and [`validate_field`] reports the first rule a
//! value breaks. [`Dialog`] adds the modal lifecycle around a form: pre-fill on
//! edit, fresh defaults on create, reset on close and after a successful submit.

/// Department form
pub mod department;
/// Employee form
pub mod employee;
/// Shift type form
pub mod shift_type;

pub use department::DepartmentForm;
pub use employee::EmployeeForm;
pub use shift_type::ShiftTypeForm;

use crate::{api::Resource, core::colors};
use regex::Regex;

/// Whether the dialog creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// A failed rule on one field, shown inline next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All field errors of one submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }
}

/// Declarative constraint on a text field.
#[derive(Debug, Clone, Copy)]
pub enum Rule<'r> {
    /// Value must not be empty.
    Required(&'static str),
    /// At least this many characters.
    MinLength(usize, &'static str),
    /// At most this many characters.
    MaxLength(usize, &'static str),
    /// Value must match the pattern.
    Pattern(&'r Regex, &'static str),
}

impl Rule<'_> {
    /// Message if `value` breaks this rule. Only `Required` applies to empty values.
    fn check(&self, value: &str) -> Option<&'static str> {
        match *self {
            Self::Required(message) => value.is_empty().then_some(message),
            _ if value.is_empty() => None,
            Self::MinLength(min, message) => (value.chars().count() < min).then_some(message),
            Self::MaxLength(max, message) => (value.chars().count() > max).then_some(message),
            Self::Pattern(pattern, message) => (!pattern.is_match(value)).then_some(message),
        }
    }
}

/// Reports the first rule `value` breaks, if any.
pub fn validate_field(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    rules: &[Rule<'_>],
) {
    if let Some(message) = rules.iter().find_map(|rule| rule.check(value)) {
        errors.push(FieldError { field, message });
    }
}

/// Inline warning shown while no color is selected. It never blocks submission.
pub const COLOR_REQUIRED: &str = "Color is required";

/// Values bound to one entity's dialog.
pub trait FormModel: Clone {
    /// Entity edited by this form; its payload type is what gets submitted.
    type Entity: Resource;

    /// Create-mode defaults, with `color` pre-selected.
    fn defaults(color: &str) -> Self;

    /// Every field pre-populated from `entity`.
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Field errors for the current values; empty means the form may be submitted.
    fn validate(&self, mode: FormMode) -> FieldErrors;

    /// Trimmed / normalized values handed to the screen.
    fn into_payload(self) -> <Self::Entity as Resource>::Payload;

    fn color(&self) -> &str;
}

/// Modal form for creating or editing one entity.
#[derive(Debug, Clone)]
pub struct Dialog<F: FormModel> {
    open: bool,
    mode: FormMode,
    values: F,
    errors: FieldErrors,
}

impl<F: FormModel> Default for Dialog<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormModel> Dialog<F> {
    /// A closed dialog holding create-mode defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: false,
            mode: FormMode::Create,
            values: F::defaults(colors::random_color()),
            errors: FieldErrors::default(),
        }
    }

    /// Opens with empty values and a freshly picked color.
    pub fn open_create(&mut self) {
        self.reset();
        self.open = true;
    }

    /// Opens with every field taken from `entity`.
    pub fn open_edit(&mut self, entity: &F::Entity) {
        self.values = F::from_entity(entity);
        self.errors = FieldErrors::default();
        self.mode = FormMode::Edit;
        self.open = true;
    }

    /// Closes without submitting; the values go back to their defaults.
    pub fn close(&mut self) {
        self.reset();
        self.open = false;
    }

    /// Validates and, if clean, returns the normalized payload and resets the form.
    /// On errors the dialog stays open with the errors recorded and nothing is
    /// handed on.
    ///
    /// # Errors
    /// Returns the field errors when any rule fails.
    pub fn submit(&mut self) -> Result<<F::Entity as Resource>::Payload, FieldErrors> {
        let errors = self.values.validate(self.mode);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        let payload = self.values.clone().into_payload();
        self.reset();
        Ok(payload)
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    #[must_use]
    pub const fn values(&self) -> &F {
        &self.values
    }

    pub const fn values_mut(&mut self) -> &mut F {
        &mut self.values
    }

    /// Errors of the last rejected submit.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// [`COLOR_REQUIRED`] while the color field is empty.
    #[must_use]
    pub fn color_warning(&self) -> Option<&'static str> {
        self.values.color().is_empty().then_some(COLOR_REQUIRED)
    }

    /// Picker bound to the color field.
    #[must_use]
    pub fn color_picker(&self) -> colors::ColorPicker {
        colors::ColorPicker::new(self.values.color())
    }

    fn reset(&mut self) {
        self.values = F::defaults(colors::random_color());
        self.errors = FieldErrors::default();
        self.mode = FormMode::Create;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    #[allow(clippy::unwrap_used)] // literal pattern
    static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

    #[test]
    fn test_first_failing_rule_wins() {
        let rules = [
            Rule::Required("required"),
            Rule::MinLength(3, "too short"),
            Rule::MaxLength(5, "too long"),
        ];
        let mut errors = FieldErrors::default();
        validate_field(&mut errors, "a", "", &rules);
        validate_field(&mut errors, "b", "xy", &rules);
        validate_field(&mut errors, "c", "abcdef", &rules);
        validate_field(&mut errors, "d", "abcd", &rules);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("a"), Some("required"));
        assert_eq!(errors.get("b"), Some("too short"));
        assert_eq!(errors.get("c"), Some("too long"));
        assert_eq!(errors.get("d"), None);
    }

    #[test]
    fn test_optional_field_skips_length_and_pattern_when_empty() {
        let rules = [Rule::MinLength(6, "short"), Rule::Pattern(&DIGITS, "digits")];
        let mut errors = FieldErrors::default();
        validate_field(&mut errors, "pin", "", &rules);
        assert!(errors.is_empty());

        validate_field(&mut errors, "pin", "12ab56", &rules);
        assert_eq!(errors.get("pin"), Some("digits"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut errors = FieldErrors::default();
        validate_field(&mut errors, "name", "Ää", &[Rule::MinLength(2, "short")]);
        assert!(errors.is_empty());
    }
}
