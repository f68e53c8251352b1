//! Employee entity - a staff member who can be scheduled.
//!
//! Employees optionally belong to a department. The password is write-only in
//! practice: the API may omit it from list responses.

use crate::{
    api::Resource,
    config::ResourceKind,
    core::forms::EmployeeForm,
    entities::{ShiftDay, lenient},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Employee as returned by `GET /employees`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Login email, unique across employees (enforced by the API)
    pub email: String,
    #[serde(
        default,
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub password: String,
    /// Registry color value used for badges
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub is_admin: bool,
    /// Department the employee belongs to, if any
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_days: Option<Vec<ShiftDay>>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// "First Last", as shown in the name column.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Resource for Employee {
    type Payload = EmployeeForm;
    const KIND: ResourceKind = ResourceKind::Employees;

    fn id(&self) -> i64 {
        self.id
    }
}
