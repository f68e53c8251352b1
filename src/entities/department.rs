//! Department entity - groups employees and owns shift weeks.

use crate::{
    api::Resource,
    config::ResourceKind,
    core::forms::DepartmentForm,
    entities::{Employee, ShiftWeek, lenient},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Department as returned by `GET /departments`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department
    pub id: i64,
    /// Display name (e.g., "HR", "Kitchen")
    pub name: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub description: String,
    /// Members, when the API embeds them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Employee>>,
    #[serde(
        default,
        rename = "shiftWeeks",
        alias = "shift_weeks",
        skip_serializing_if = "Option::is_none"
    )]
    pub shift_weeks: Option<Vec<ShiftWeek>>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Department {
    /// Number of embedded employees; zero when the API did not embed them.
    #[must_use]
    pub fn employee_count(&self) -> usize {
        self.employees.as_ref().map_or(0, Vec::len)
    }
}

impl Resource for Department {
    type Payload = DepartmentForm;
    const KIND: ResourceKind = ResourceKind::Departments;
    const ACCEPTS_SINGLE_OBJECT: bool = true;

    fn id(&self) -> i64 {
        self.id
    }
}
