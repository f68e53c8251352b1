//! Shift week entity - one department's schedule for a week.
//!
//! Routable through the API, but no screen manages shift weeks yet.

use crate::{
    api::Resource,
    config::ResourceKind,
    entities::{Department, ShiftDay, lenient},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of a shift week
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftWeekStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// Shift week as returned by `GET /shift-weeks`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftWeek {
    pub id: i64,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub end_date: DateTime<Utc>,
    pub department_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Box<Department>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_days: Option<Vec<ShiftDay>>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub status: ShiftWeekStatus,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub notes: String,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update body for a shift week
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShiftWeekDraft {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub department_id: i64,
    pub status: ShiftWeekStatus,
    pub notes: String,
}

impl Resource for ShiftWeek {
    type Payload = ShiftWeekDraft;
    const KIND: ResourceKind = ResourceKind::ShiftWeeks;

    fn id(&self) -> i64 {
        self.id
    }
}
