//! Free-text search over entity lists.

use crate::entities::{Department, Employee, ShiftType};

/// Entities that can be matched by a search query.
pub trait Searchable {
    /// Fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match; `query_lower` must already be lowercase.
    fn matches(&self, query_lower: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(query_lower))
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ]
    }
}

impl Searchable for Department {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for ShiftType {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}

/// Items matching `query`, in their original order. An empty query keeps all.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| query_lower.is_empty() || item.matches(&query_lower))
        .collect()
}
