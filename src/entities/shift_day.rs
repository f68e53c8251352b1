//! Shift day entity - one employee working one shift type on one date.

use crate::{
    api::Resource,
    config::ResourceKind,
    entities::{Employee, ShiftType, lenient},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shift day as returned by `GET /shift-days`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftDay {
    pub id: i64,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub date: DateTime<Utc>,
    pub shift_week_id: i64,
    pub shift_type_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<ShiftType>,
    pub employee_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<Employee>>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub notes: String,
    /// Free-form status string; the API does not constrain it
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update body for a shift day
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShiftDayDraft {
    pub date: DateTime<Utc>,
    pub shift_week_id: i64,
    pub shift_type_id: i64,
    pub employee_id: i64,
    pub notes: String,
    pub status: String,
}

impl Resource for ShiftDay {
    type Payload = ShiftDayDraft;
    const KIND: ResourceKind = ResourceKind::ShiftDays;

    fn id(&self) -> i64 {
        self.id
    }
}
