//! HTTP client for the shift planner API.

use crate::{
    api::{Backend, Resource, payload},
    config::{ApiRoutes, Credentials, RequestOptions},
    errors::{Error, Result},
};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, instrument};

/// `reqwest`-backed [`Backend`]. Cheap to clone; clones share the connection pool
/// and the session cookie.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    routes: ApiRoutes,
}

impl ApiClient {
    /// Creates a client sending `options` with every request.
    ///
    /// # Errors
    /// Returns [`Error::Http`] if the underlying client cannot be built (e.g. TLS
    /// backend initialization failure).
    pub fn new(routes: ApiRoutes, options: RequestOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .default_headers(options.headers)
            .cookie_store(options.with_credentials);
        if !options.system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(Self { http, routes })
    }

    #[must_use]
    pub const fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    /// Signs in; the session cookie is kept for subsequent requests.
    ///
    /// # Errors
    /// Returns an error if the request fails or the API rejects the credentials.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let url = self.routes.login();
        let response = self.http.post(&url).json(credentials).send().await?;
        ensure_success("POST", &url, response)?;
        Ok(())
    }

    /// Ends the session.
    ///
    /// # Errors
    /// Returns an error if the request fails or the API answers with a non-success status.
    pub async fn logout(&self) -> Result<()> {
        let url = self.routes.logout();
        let response = self.http.post(&url).send().await?;
        ensure_success("POST", &url, response)?;
        Ok(())
    }

    async fn write<P: Serialize + Sync>(
        &self,
        method: Method,
        url: String,
        body: Option<&P>,
    ) -> Result<()> {
        let method_name = method_name(&method);
        let mut request: RequestBuilder = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        ensure_success(method_name, &url, response)?;
        debug!(method = method_name, %url, "write accepted");
        Ok(())
    }
}

impl Backend for ApiClient {
    async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let url = self.routes.collection(R::KIND);
        let response = self.http.get(&url).send().await?;
        // The status is not checked for reads: an error body simply fails to decode.
        let body = response.bytes().await?;
        let items = payload::decode_list::<R>(&body)?;
        debug!(%url, count = items.len(), "list fetched");
        Ok(items)
    }

    async fn create<R: Resource>(&self, payload: &R::Payload) -> Result<()> {
        let url = self.routes.collection(R::KIND);
        self.write(Method::POST, url, Some(payload)).await
    }

    async fn update<R: Resource>(&self, id: i64, payload: &R::Payload) -> Result<()> {
        let url = self.routes.item(R::KIND, id);
        let body = payload::WithId { id, payload };
        self.write(Method::PUT, url, Some(&body)).await
    }

    async fn delete<R: Resource>(&self, id: i64) -> Result<()> {
        let url = self.routes.item(R::KIND, id);
        self.write::<()>(Method::DELETE, url, None).await
    }
}

fn method_name(method: &Method) -> &'static str {
    if *method == Method::POST {
        "POST"
    } else if *method == Method::PUT {
        "PUT"
    } else if *method == Method::DELETE {
        "DELETE"
    } else {
        "GET"
    }
}

fn ensure_success(method: &'static str, url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Api {
            method,
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        core::forms::DepartmentForm,
        entities::{Department, Employee, ShiftType},
    };
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    /// One request as received by [`serve_once`].
    struct Received {
        head: String,
        body: String,
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse().ok())
                    .flatten()
            })
            .unwrap_or(0)
    }

    /// Answers a single request with `status` and a JSON `body`. Returns the base
    /// URL to point a client at and a handle yielding the received request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Received>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut chunk = [0_u8; 4096];
            let head_end = loop {
                let read = socket.read(&mut chunk).await.unwrap();
                assert!(read > 0, "connection closed mid-request");
                received.extend_from_slice(&chunk[..read]);
                if let Some(end) = received.windows(4).position(|w| w == b"\r\n\r\n") {
                    break end;
                }
            };
            let head = String::from_utf8_lossy(&received[..head_end]).to_string();
            let body_end = head_end + 4 + content_length(&head);
            while received.len() < body_end {
                let read = socket.read(&mut chunk).await.unwrap();
                assert!(read > 0, "connection closed mid-body");
                received.extend_from_slice(&chunk[..read]);
            }
            let request_body = String::from_utf8_lossy(&received[head_end + 4..body_end]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            Received {
                head,
                body: request_body,
            }
        });
        (base_url, handle)
    }

    fn local_client(base_url: &str) -> ApiClient {
        let options = RequestOptions {
            system_proxy: false,
            ..RequestOptions::default()
        };
        ApiClient::new(ApiRoutes::new(base_url), options).unwrap()
    }

    fn hr_form() -> DepartmentForm {
        DepartmentForm {
            name: "HR".to_string(),
            color: "#ef4444".to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_rejected_create_is_an_api_error() {
        let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let client = local_client(&base_url);

        let result = client.create::<Department>(&hr_form()).await;
        match result {
            Err(Error::Api { method, url, status }) => {
                assert_eq!(method, "POST");
                assert_eq!(status, 500);
                assert_eq!(url, format!("{base_url}/departments"));
            }
            other => panic!("expected an API error, got {other:?}"),
        }

        let received = server.await.unwrap();
        assert!(received.head.starts_with("POST /api/v1/departments HTTP/1.1"));
        let body: serde_json::Value = serde_json::from_str(&received.body).unwrap();
        assert_eq!(body["name"], "HR");
        assert!(body.get("id").is_none());
    }

    #[tokio::test]
    async fn test_update_puts_id_to_item_url() {
        let (base_url, server) = serve_once("200 OK", "{}").await;
        let client = local_client(&base_url);

        client.update::<Department>(7, &hr_form()).await.unwrap();

        let received = server.await.unwrap();
        assert!(received.head.starts_with("PUT /api/v1/departments/7 HTTP/1.1"));
        assert!(
            received
                .head
                .to_ascii_lowercase()
                .contains("content-type: application/json")
        );
        let body: serde_json::Value = serde_json::from_str(&received.body).unwrap();
        assert_eq!(body["id"], 7);
        assert_eq!(body["color"], "#ef4444");
    }

    #[tokio::test]
    async fn test_delete_targets_item_url() {
        let (base_url, server) = serve_once("204 No Content", "").await;
        let client = local_client(&base_url);

        client.delete::<ShiftType>(3).await.unwrap();

        let received = server.await.unwrap();
        assert!(received.head.starts_with("DELETE /api/v1/shifttypes/3 HTTP/1.1"));
        assert!(received.body.is_empty());
    }

    #[tokio::test]
    async fn test_list_ignores_status_when_body_decodes() {
        let (base_url, server) = serve_once("401 Unauthorized", r#"{"data":[]}"#).await;
        let client = local_client(&base_url);

        let employees = client.list::<Employee>().await.unwrap();
        assert!(employees.is_empty());

        let received = server.await.unwrap();
        assert!(received.head.starts_with("GET /api/v1/employees HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_list_error_body_fails_to_decode() {
        let (base_url, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
        let client = local_client(&base_url);

        let result = client.list::<Employee>().await;
        assert!(matches!(result, Err(Error::Json(_))));
        server.await.unwrap();
    }

    #[test]
    fn test_client_keeps_routes() {
        let client = ApiClient::new(
            ApiRoutes::new("http://planner.test/api/v1/"),
            RequestOptions::default(),
        )
        .unwrap();
        assert_eq!(client.routes().base_url(), "http://planner.test/api/v1");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(method_name(&Method::POST), "POST");
        assert_eq!(method_name(&Method::PUT), "PUT");
        assert_eq!(method_name(&Method::DELETE), "DELETE");
        assert_eq!(method_name(&Method::GET), "GET");
    }
}
