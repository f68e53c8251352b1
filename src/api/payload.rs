//! Response envelopes and request bodies exchanged with the API.

use crate::{
    api::Resource,
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ "data": ... }` wrapper around every list response. `data` is kept raw so
/// that the shape can be checked before the records are decoded.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Value,
}

/// Decodes a list response body into records.
///
/// # Errors
/// Returns [`Error::Json`] if the body has no `data` field or a record does not
/// decode as `R`, and [`Error::Payload`] if `data` is neither a list nor, for a
/// resource that accepts one, a single object.
pub fn decode_list<R: Resource>(body: &[u8]) -> Result<Vec<R>> {
    let ListEnvelope { data } = serde_json::from_slice(body)?;
    if data.is_array() {
        return Ok(serde_json::from_value(data)?);
    }
    if data.is_object() && R::ACCEPTS_SINGLE_OBJECT {
        return Ok(vec![serde_json::from_value(data)?]);
    }
    let found = if data.is_object() { "a single object" } else { "no list" };
    Err(Error::Payload {
        message: format!("expected a list of {}, got {found}", R::KIND),
    })
}

/// Update body: the form payload with the record id merged in.
#[derive(Debug, Serialize)]
pub struct WithId<'a, P> {
    pub id: i64,
    #[serde(flatten)]
    pub payload: &'a P,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::forms::DepartmentForm,
        entities::{Department, Employee, ShiftType},
    };

    #[test]
    fn test_decode_department_list() {
        let body = br##"{"data":[
            {"id":1,"name":"HR","color":"#ef4444","description":"People"},
            {"id":2,"name":"IT","color":"#3b82f6","description":""}
        ]}"##;
        let departments: Vec<Department> = decode_list(body).unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(departments[1].name, "IT");
    }

    #[test]
    fn test_single_department_is_wrapped() {
        let body = br##"{"data":{"id":4,"name":"Ops","color":"#22c55e","description":""}}"##;
        let departments: Vec<Department> = decode_list(body).unwrap();
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].id, 4);
    }

    #[test]
    fn test_single_employee_is_rejected() {
        let body = br##"{"data":{"id":1,"first_name":"Ada","last_name":"Lovelace",
            "email":"ada@example.com","color":"#3b82f6","is_admin":false,"department_id":null}}"##;
        let result = decode_list::<Employee>(body);
        assert!(matches!(result, Err(Error::Payload { .. })));
    }

    #[test]
    fn test_null_fields_do_not_drop_the_list() {
        let body = br##"{"data":[
            {"id":1,"name":"HR","color":"#ef4444","description":"People"},
            {"id":2,"name":"IT","color":null,"description":null}
        ]}"##;
        let departments: Vec<Department> = decode_list(body).unwrap();
        assert_eq!(departments.len(), 2);
        assert_eq!(departments[1].description, "");
        assert_eq!(departments[1].color, "");
    }

    #[test]
    fn test_loose_timestamps_are_accepted() {
        let body = br##"{"data":[
            {"id":1,"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com",
             "color":"#3b82f6","is_admin":null,"department_id":null,
             "created_at":"2025-01-02 10:00:00","updated_at":"not a date"}
        ]}"##;
        let employees: Vec<Employee> = decode_list(body).unwrap();
        assert_eq!(
            employees[0].created_at.map(|at| at.to_rfc3339()),
            Some("2025-01-02T10:00:00+00:00".to_string())
        );
        assert!(employees[0].updated_at.is_none());
        assert!(!employees[0].is_admin);
    }

    #[test]
    fn test_shift_type_nulls_decode() {
        let body = br#"{"data":[{"id":5,"name":"Early","description":null,"color":null}]}"#;
        let shift_types: Vec<ShiftType> = decode_list(body).unwrap();
        assert_eq!(shift_types[0].name, "Early");
        assert_eq!(shift_types[0].description, "");
    }

    #[test]
    fn test_bad_record_reports_the_field() {
        let body = br#"{"data":[{"id":"seven","name":"HR"}]}"#;
        let Err(Error::Json(error)) = decode_list::<Department>(body) else {
            panic!("expected a JSON error");
        };
        assert!(!error.to_string().contains("untagged"));
        assert!(error.to_string().contains("invalid type"));
    }

    #[test]
    fn test_scalar_data_is_a_payload_error() {
        let result = decode_list::<Department>(br#"{"data":"oops"}"#);
        assert!(matches!(result, Err(Error::Payload { .. })));
    }

    #[test]
    fn test_missing_data_is_a_json_error() {
        let result = decode_list::<Employee>(br#"{"error":"unauthorized"}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_with_id_flattens_payload() {
        let form = DepartmentForm {
            name: "HR".to_string(),
            color: "#ef4444".to_string(),
            description: String::new(),
        };
        let value = serde_json::to_value(WithId {
            id: 9,
            payload: &form,
        })
        .unwrap();
        assert_eq!(value["id"], 9);
        assert_eq!(value["name"], "HR");
        assert_eq!(value["color"], "#ef4444");
    }
}
