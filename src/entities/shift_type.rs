//! Shift type entity - a named kind of shift (e.g. early, late, night).

use crate::{
    api::Resource, config::ResourceKind, core::forms::ShiftTypeForm, entities::lenient,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shift type as returned by `GET /shifttypes`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftType {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for ShiftType {
    type Payload = ShiftTypeForm;
    const KIND: ResourceKind = ResourceKind::ShiftTypes;

    fn id(&self) -> i64 {
        self.id
    }
}
