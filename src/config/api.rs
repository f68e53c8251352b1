//! API endpoint map and static request options.
//!
//! Every URL the console talks to is derived from a single base URL. Resource
//! collections follow the `{base}/{collection}` and `{base}/{collection}/{id}`
//! convention; authentication lives under `{base}/auth`.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use std::fmt;

/// Base URL used when neither the environment nor `config.toml` provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// The server-owned record types the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Employees,
    Departments,
    ShiftTypes,
    ShiftWeeks,
    ShiftDays,
}

impl ResourceKind {
    /// Path segment of the resource collection.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Departments => "departments",
            Self::ShiftTypes => "shifttypes",
            Self::ShiftWeeks => "shift-weeks",
            Self::ShiftDays => "shift-days",
        }
    }

    /// Singular, human-readable name used in logs and replies.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Employees => "employee",
            Self::Departments => "department",
            Self::ShiftTypes => "shift type",
            Self::ShiftWeeks => "shift week",
            Self::ShiftDays => "shift day",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Resolved endpoint map for one API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base_url: String,
}

impl ApiRoutes {
    /// Builds the endpoint map, dropping any trailing slash from `base_url`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    #[must_use]
    pub fn logout(&self) -> String {
        format!("{}/auth/logout", self.base_url)
    }

    /// `GET`/`POST` endpoint of a collection.
    #[must_use]
    pub fn collection(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url, kind.collection())
    }

    /// `GET`/`PUT`/`DELETE` endpoint of a single record.
    #[must_use]
    pub fn item(&self, kind: ResourceKind, id: i64) -> String {
        format!("{}/{}/{id}", self.base_url, kind.collection())
    }
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Options applied to every request the client sends.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Headers sent with every request.
    pub headers: HeaderMap,
    /// Keep and resend session cookies.
    pub with_credentials: bool,
    /// Route requests through the proxies named in the environment.
    pub system_proxy: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            headers,
            with_credentials: true,
            system_proxy: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_and_item_urls() {
        let routes = ApiRoutes::default();
        assert_eq!(
            routes.collection(ResourceKind::Employees),
            "http://localhost:8080/api/v1/employees"
        );
        assert_eq!(
            routes.item(ResourceKind::ShiftTypes, 7),
            "http://localhost:8080/api/v1/shifttypes/7"
        );
        assert_eq!(
            routes.item(ResourceKind::ShiftWeeks, 3),
            "http://localhost:8080/api/v1/shift-weeks/3"
        );
        assert_eq!(
            routes.collection(ResourceKind::ShiftDays),
            "http://localhost:8080/api/v1/shift-days"
        );
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let routes = ApiRoutes::new("https://planner.example.org/api/v1/");
        assert_eq!(routes.base_url(), "https://planner.example.org/api/v1");
        assert_eq!(
            routes.login(),
            "https://planner.example.org/api/v1/auth/login"
        );
        assert_eq!(
            routes.logout(),
            "https://planner.example.org/api/v1/auth/logout"
        );
    }

    #[test]
    fn test_default_request_options_send_json_with_credentials() {
        let options = RequestOptions::default();
        assert!(options.with_credentials);
        assert_eq!(
            options.headers.get(CONTENT_TYPE).map(HeaderValue::as_bytes),
            Some("application/json".as_bytes())
        );
    }
}
