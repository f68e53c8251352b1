use super::{FieldErrors, FormMode, FormModel, Rule, validate_field};
use crate::entities::ShiftType;
use serde::Serialize;

const NAME_RULES: &[Rule<'static>] = &[
    Rule::Required("Name is required"),
    Rule::MinLength(2, "Name must be at least 2 characters"),
];
const DESCRIPTION_RULES: &[Rule<'static>] = &[Rule::Required("Description is required")];

/// Editable fields of a shift type; also the create/update body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftTypeForm {
    pub name: String,
    pub description: String,
    pub color: String,
    /// Only exists on the form; stored shift types do not carry it.
    pub is_active: bool,
}

impl FormModel for ShiftTypeForm {
    type Entity = ShiftType;

    fn defaults(color: &str) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            color: color.to_string(),
            is_active: true,
        }
    }

    fn from_entity(entity: &ShiftType) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone(),
            color: entity.color.clone(),
            is_active: true,
        }
    }

    fn validate(&self, _mode: FormMode) -> FieldErrors {
        let mut errors = FieldErrors::default();
        validate_field(&mut errors, "name", &self.name, NAME_RULES);
        validate_field(&mut errors, "description", &self.description, DESCRIPTION_RULES);
        errors
    }

    fn into_payload(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
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
    use crate::{core::forms::Dialog, test_utils::shift_type};

    #[test]
    fn test_name_and_description_required() {
        let form = ShiftTypeForm::defaults("#6366f1");
        let errors = form.validate(FormMode::Create);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
    }

    #[test]
    fn test_short_name_rejected() {
        let mut dialog = Dialog::<ShiftTypeForm>::new();
        dialog.open_create();
        dialog.values_mut().name = "N".to_string();
        dialog.values_mut().description = "Night".to_string();
        let errors = dialog.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name must be at least 2 characters"));
    }

    #[test]
    fn test_submit_trims_fields_and_keeps_active_flag() {
        let mut dialog = Dialog::<ShiftTypeForm>::new();
        dialog.open_edit(&shift_type(4, "Late", "14:00 - 22:00"));
        dialog.values_mut().description = " 14:00 - 23:00 ".to_string();

        let payload = dialog.submit().unwrap();
        assert_eq!(payload.name, "Late");
        assert_eq!(payload.description, "14:00 - 23:00");
        assert!(payload.is_active);
    }
}
