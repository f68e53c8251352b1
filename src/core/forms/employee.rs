use super::{FieldErrors, FormMode, FormModel, Rule, validate_field};
use crate::entities::Employee;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Standard email shape, case-insensitive.
#[allow(clippy::unwrap_used)] // literal pattern, covered by tests
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").unwrap());

const FIRST_NAME_RULES: &[Rule<'static>] = &[Rule::Required("First name is required")];
const LAST_NAME_RULES: &[Rule<'static>] = &[Rule::Required("Last name is required")];
const PASSWORD_REQUIRED: &str = "Password is required";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
const CREATE_PASSWORD_RULES: &[Rule<'static>] = &[
    Rule::Required(PASSWORD_REQUIRED),
    Rule::MinLength(6, PASSWORD_TOO_SHORT),
];
const EDIT_PASSWORD_RULES: &[Rule<'static>] = &[Rule::MinLength(6, PASSWORD_TOO_SHORT)];

/// Editable fields of an employee; also the create/update body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<i64>,
    pub color: String,
    /// Omitted from the body when empty, leaving the stored password untouched.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub is_admin: bool,
}

impl FormModel for EmployeeForm {
    type Entity = Employee;

    fn defaults(color: &str) -> Self {
        Self {
            color: color.to_string(),
            ..Self::default()
        }
    }

    fn from_entity(entity: &Employee) -> Self {
        Self {
            first_name: entity.first_name.clone(),
            last_name: entity.last_name.clone(),
            email: entity.email.clone(),
            department_id: entity.department_id,
            color: entity.color.clone(),
            password: entity.password.clone(),
            is_admin: entity.is_admin,
        }
    }

    fn validate(&self, mode: FormMode) -> FieldErrors {
        let email_rules = [
            Rule::Required("Email is required"),
            Rule::Pattern(&EMAIL_PATTERN, "Invalid email address"),
        ];
        let password_rules = match mode {
            FormMode::Create => CREATE_PASSWORD_RULES,
            FormMode::Edit => EDIT_PASSWORD_RULES,
        };

        let mut errors = FieldErrors::default();
        validate_field(&mut errors, "first_name", &self.first_name, FIRST_NAME_RULES);
        validate_field(&mut errors, "last_name", &self.last_name, LAST_NAME_RULES);
        validate_field(&mut errors, "email", &self.email, &email_rules);
        validate_field(&mut errors, "password", &self.password, password_rules);
        errors
    }

    fn into_payload(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            ..self
        }
    }

    fn color(&self) -> &str {
        &self.color
    }
}
