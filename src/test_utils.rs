//! Shared test utilities.
//!
//! [`InMemoryBackend`] stands in for the HTTP API: records live as JSON values per
//! collection, ids are assigned on create, and reads or writes can be made to fail.
//! The fixture functions build entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    api::{Backend, Resource},
    config::ResourceKind,
    entities::{Department, Employee, ShiftType},
    errors::{Error, Result},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::{
    collections::{HashMap, HashSet},
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicI64, Ordering},
    },
};

/// In-memory [`Backend`] with failure injection.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    records: Mutex<HashMap<ResourceKind, Vec<Value>>>,
    next_id: AtomicI64,
    failing_lists: Mutex<HashSet<ResourceKind>>,
    fail_writes: AtomicBool,
    list_calls: Mutex<HashMap<ResourceKind, usize>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1000),
            ..Self::default()
        }
    }

    /// Appends records to their collection as the API would store them.
    pub fn seed<R: Resource + Serialize>(&self, items: &[R]) {
        let mut records = self.records.lock().unwrap();
        let collection = records.entry(R::KIND).or_default();
        collection.extend(items.iter().map(|item| serde_json::to_value(item).unwrap()));
    }

    /// Every following read of `kind` fails.
    pub fn fail_lists(&self, kind: ResourceKind) {
        self.failing_lists.lock().unwrap().insert(kind);
    }

    /// Every following create, update and delete is rejected.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Number of reads issued against `kind`.
    pub fn list_calls(&self, kind: ResourceKind) -> usize {
        self.list_calls
            .lock()
            .unwrap()
            .get(&kind)
            .copied()
            .unwrap_or(0)
    }

    /// Raw stored records of `kind`.
    pub fn records(&self, kind: ResourceKind) -> Vec<Value> {
        self.records
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    fn check_write(&self, method: &'static str, kind: ResourceKind) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(rejected(method, kind, 500));
        }
        Ok(())
    }
}

fn rejected(method: &'static str, kind: ResourceKind, status: u16) -> Error {
    Error::Api {
        method,
        url: format!("memory://{kind}"),
        status,
    }
}

impl Backend for InMemoryBackend {
    async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        *self.list_calls.lock().unwrap().entry(R::KIND).or_default() += 1;
        if self.failing_lists.lock().unwrap().contains(&R::KIND) {
            return Err(rejected("GET", R::KIND, 500));
        }
        self.records(R::KIND)
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(Error::from))
            .collect()
    }

    async fn create<R: Resource>(&self, payload: &R::Payload) -> Result<()> {
        self.check_write("POST", R::KIND)?;
        let mut value = serde_json::to_value(payload)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if let Some(object) = value.as_object_mut() {
            object.insert("id".to_string(), json!(id));
        }
        self.records
            .lock()
            .unwrap()
            .entry(R::KIND)
            .or_default()
            .push(value);
        Ok(())
    }

    async fn update<R: Resource>(&self, id: i64, payload: &R::Payload) -> Result<()> {
        self.check_write("PUT", R::KIND)?;
        let changes = serde_json::to_value(payload)?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(&R::KIND)
            .and_then(|collection| collection.iter_mut().find(|record| record["id"] == id))
            .ok_or_else(|| rejected("PUT", R::KIND, 404))?;
        if let (Some(target), Some(source)) = (record.as_object_mut(), changes.as_object()) {
            for (key, value) in source {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }

    async fn delete<R: Resource>(&self, id: i64) -> Result<()> {
        self.check_write("DELETE", R::KIND)?;
        let mut records = self.records.lock().unwrap();
        let collection = records.entry(R::KIND).or_default();
        let before = collection.len();
        collection.retain(|record| record["id"] != id);
        if collection.len() == before {
            return Err(rejected("DELETE", R::KIND, 404));
        }
        Ok(())
    }
}

/// Employee fixture with a blue badge and no password.
pub fn employee(
    id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    department_id: Option<i64>,
) -> Employee {
    Employee {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        password: String::new(),
        color: "#3b82f6".to_string(),
        is_admin: false,
        department_id,
        shift_days: None,
        created_at: None,
        updated_at: None,
    }
}

/// Department fixture without embedded employees.
pub fn department(id: i64, name: &str) -> Department {
    Department {
        id,
        name: name.to_string(),
        color: "#ef4444".to_string(),
        description: String::new(),
        employees: None,
        shift_weeks: None,
        created_at: None,
        updated_at: None,
    }
}

/// Department fixture embedding `count` employees.
pub fn department_with_employees(id: i64, name: &str, count: usize) -> Department {
    let employees = (0..count)
        .map(|i| {
            let n = i64::try_from(i).unwrap();
            employee(
                id * 100 + n,
                "Member",
                &format!("No{n}"),
                &format!("member{n}@example.com"),
                Some(id),
            )
        })
        .collect();
    Department {
        employees: Some(employees),
        ..department(id, name)
    }
}

pub fn shift_type(id: i64, name: &str, description: &str) -> ShiftType {
    ShiftType {
        id,
        name: name.to_string(),
        description: description.to_string(),
        color: "#6366f1".to_string(),
        created_at: None,
        updated_at: None,
    }
}
