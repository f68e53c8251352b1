use super::{FieldErrors, FormMode, FormModel, Rule, validate_field};
use crate::entities::Department;
use serde::Serialize;

const NAME_RULES: &[Rule<'static>] = &[
    Rule::Required("Name is required"),
    Rule::MinLength(2, "Name must be at least 2 characters"),
    Rule::MaxLength(50, "Name must be at most 50 characters"),
];

/// Editable fields of a department; also the create/update body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DepartmentForm {
    pub name: String,
    pub color: String,
    pub description: String,
}

impl FormModel for DepartmentForm {
    type Entity = Department;

    fn defaults(color: &str) -> Self {
        Self {
            color: color.to_string(),
            ..Self::default()
        }
    }

    fn from_entity(entity: &Department) -> Self {
        Self {
            name: entity.name.clone(),
            color: entity.color.clone(),
            description: entity.description.clone(),
        }
    }

    fn validate(&self, _mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::default();
        validate_field(&mut errors, "name", &self.name, NAME_RULES);
        errors
    }

    fn into_payload(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            ..self
        }
    }

    fn color(&self) -> &str {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{
        colors,
        forms::{COLOR_REQUIRED, Dialog},
    };
    use crate::test_utils::department;

    #[test]
    fn test_one_character_name_is_rejected() {
        let mut dialog = Dialog::<DepartmentForm>::new();
        dialog.open_create();
        dialog.values_mut().name = "A".to_string();

        let errors = dialog.submit().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
        assert!(dialog.is_open());
        assert_eq!(dialog.errors(), &errors);
    }

    #[test]
    fn test_name_length_bounds() {
        let mut form = DepartmentForm::defaults("#ef4444");
        assert_eq!(
            form.validate(FormMode::Create).get("name"),
            Some("Name is required")
        );

        form.name = "x".repeat(51);
        assert_eq!(
            form.validate(FormMode::Create).get("name"),
            Some("Name must be at most 50 characters")
        );

        form.name = "x".repeat(50);
        assert!(form.validate(FormMode::Create).is_empty());
    }

    #[test]
    fn test_submit_trims_name_and_resets() {
        let mut dialog = Dialog::<DepartmentForm>::new();
        dialog.open_create();
        dialog.values_mut().name = "  Kitchen ".to_string();
        dialog.values_mut().color = "#22c55e".to_string();

        let payload = dialog.submit().unwrap();
        assert_eq!(payload.name, "Kitchen");
        assert_eq!(payload.color, "#22c55e");
        assert_eq!(payload.description, "");
        assert!(dialog.values().name.is_empty());
    }

    #[test]
    fn test_edit_close_then_create_shows_defaults() {
        let mut hr = department(1, "HR");
        hr.description = "People operations".to_string();

        let mut dialog = Dialog::<DepartmentForm>::new();
        dialog.open_edit(&hr);
        assert_eq!(dialog.mode(), FormMode::Edit);
        assert_eq!(dialog.values().name, "HR");
        assert_eq!(dialog.values().description, "People operations");

        dialog.close();
        dialog.open_create();
        assert_eq!(dialog.mode(), FormMode::Create);
        assert!(dialog.values().name.is_empty());
        assert!(dialog.values().description.is_empty());
        assert!(colors::find(&dialog.values().color).is_some());
    }

    #[test]
    fn test_missing_color_warns_but_does_not_block() {
        let mut dialog = Dialog::<DepartmentForm>::new();
        dialog.open_create();
        dialog.values_mut().name = "Bar".to_string();
        dialog.values_mut().color.clear();

        assert_eq!(dialog.color_warning(), Some(COLOR_REQUIRED));
        let payload = dialog.submit().unwrap();
        assert_eq!(payload.color, "");
    }
}
