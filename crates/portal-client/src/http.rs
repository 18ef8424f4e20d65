//! reqwest-backed [`PortalApi`] implementation

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use portal_core::prelude::*;
use portal_core::{SubmissionRecord, SubmitResult, ValidationResult};

use crate::api::PortalApi;
use crate::endpoints;

/// Server used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Per-request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Lower bound for the request timeout
const MIN_TIMEOUT_MS: u64 = 100;

/// Connection settings for [`HttpPortalClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = Duration::from_millis(timeout_ms.max(MIN_TIMEOUT_MS));
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP transport for the portal endpoints
#[derive(Debug, Clone)]
pub struct HttpPortalClient {
    base_url: Url,
    timeout: Duration,
    http: reqwest::Client,
}

impl HttpPortalClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(concat!("subportal/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        debug!(
            "Portal client ready: base_url={} timeout={:?}",
            base_url, config.timeout
        );

        Ok(Self {
            base_url,
            timeout: config.timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL, keeping any base path prefix
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::invalid_url(path, e.to_string()))
    }

    async fn post_content<T: DeserializeOwned>(&self, path: &str, content: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        trace!("POST {} ({} bytes of content)", url, content.len());

        let response = self
            .http
            .post(url)
            .form(&[(endpoints::CONTENT_FIELD, content)])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        decode_json_response(response).await
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::transport(format!(
                "request timed out after {} ms",
                self.timeout.as_millis()
            ))
        } else {
            Error::transport(err.to_string())
        }
    }
}

impl PortalApi for HttpPortalClient {
    async fn list_submissions(&self) -> Result<Vec<SubmissionRecord>> {
        let url = self.endpoint(endpoints::SUBMISSIONS)?;
        trace!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        decode_json_response(response).await
    }

    async fn check_submission(&self, content: &str) -> Result<ValidationResult> {
        self.post_content(endpoints::CHECK_SUBMISSION_UI, content)
            .await
    }

    async fn submit(&self, content: &str) -> Result<SubmitResult> {
        self.post_content(endpoints::SUBMIT_UI, content).await
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| Error::invalid_url(trimmed, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(trimmed, "scheme must be http or https"));
    }

    // Url::join replaces the last segment unless the path ends with a slash
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

async fn decode_json_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| Error::transport(format!("failed to read response body: {}", e)))?;

    if !status.is_success() {
        let detail = detail_from_body(status, &String::from_utf8_lossy(&body));
        warn!("Portal returned {}: {}", status.as_u16(), detail);
        return Err(Error::http(status.as_u16(), detail));
    }

    serde_json::from_slice(&body).map_err(|e| Error::decode(e.to_string()))
}

/// Extract the human-readable detail from an error response body.
///
/// The server answers errors with `{"detail": ...}`. A string detail is used
/// as-is, structured details (validation error lists) are rendered as JSON, and
/// bodies that are not JSON are used verbatim. An empty body falls back to the
/// status reason phrase.
pub fn detail_from_body(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned())
        .map(|detail| match detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        });

    match from_json {
        Some(detail) => detail,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status.canonical_reason().unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use axum::http::StatusCode as AxumStatus;
    use axum::routing::{get, post};
    use axum::{Form, Json, Router};
    use serde_json::json;

    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn portal_router() -> Router {
        Router::new()
            .route(
                "/submissions",
                get(|| async {
                    Json(json!([
                        {"time": "2025-03-01 10:00:00", "submission_name": "TeamA", "signature": "S1"},
                        {"time": "2025-03-01 11:00:00", "submission_name": "TeamB", "signature": "S2", "id": "x"}
                    ]))
                }),
            )
            .route(
                "/check-submission-ui",
                post(|Form(form): Form<HashMap<String, String>>| async move {
                    let content = form.get("content").cloned().unwrap_or_default();
                    if content == "bad" {
                        return (
                            AxumStatus::BAD_REQUEST,
                            Json(json!({"detail": "bad input"})),
                        );
                    }
                    (
                        AxumStatus::OK,
                        Json(json!({"status": "issues found", "issues": [format!("echo:{}", content)]})),
                    )
                }),
            )
            .route(
                "/submit-ui",
                post(|Form(form): Form<HashMap<String, String>>| async move {
                    Json(json!({
                        "status": "success",
                        "response": {
                            "submission_name": form.get("content").cloned().unwrap_or_default(),
                            "signature": "SIG123",
                            "tsp_verification_data": {"n": 1}
                        }
                    }))
                }),
            )
    }

    fn client_for(base_url: &str) -> HttpPortalClient {
        HttpPortalClient::new(ClientConfig::new(base_url)).unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = client_for("https://portal.example.com/rag");
        let url = client.endpoint(endpoints::SUBMIT_UI).unwrap();
        assert_eq!(url.as_str(), "https://portal.example.com/rag/submit-ui");
    }

    #[test]
    fn test_endpoint_without_prefix() {
        let client = client_for("http://127.0.0.1:8000/");
        let url = client.endpoint(endpoints::SUBMISSIONS).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/submissions");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = HttpPortalClient::new(ClientConfig::new("ftp://portal")).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_rejects_garbage_url() {
        assert!(HttpPortalClient::new(ClientConfig::new("not a url")).is_err());
    }

    #[test]
    fn test_detail_from_string_detail() {
        let detail = detail_from_body(StatusCode::BAD_REQUEST, r#"{"detail":"bad input"}"#);
        assert_eq!(detail, "bad input");
    }

    #[test]
    fn test_detail_from_structured_detail() {
        let body = r#"{"detail":[{"loc":["body","content"],"msg":"field required"}]}"#;
        let detail = detail_from_body(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert!(detail.starts_with('['));
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_detail_from_plain_text_body() {
        let detail = detail_from_body(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(detail, "upstream down");
    }

    #[test]
    fn test_detail_from_empty_body_uses_reason() {
        let detail = detail_from_body(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(detail, "Service Unavailable");
    }

    #[tokio::test]
    async fn test_list_submissions_in_response_order() {
        let base = spawn_stub(portal_router()).await;
        let records = client_for(&base).list_submissions().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].submission_name, "TeamA");
        assert_eq!(records[1].submission_name, "TeamB");
    }

    #[tokio::test]
    async fn test_check_submission_sends_form_encoded_content() {
        let base = spawn_stub(portal_router()).await;
        let result = client_for(&base)
            .check_submission("a&b=c d")
            .await
            .unwrap();

        assert!(result.has_issues());
        assert_eq!(result.issues, vec!["echo:a&b=c d"]);
    }

    #[tokio::test]
    async fn test_check_submission_http_error_carries_status_and_detail() {
        let base = spawn_stub(portal_router()).await;
        let err = client_for(&base).check_submission("bad").await.unwrap_err();

        match err {
            Error::Http { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "bad input");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_decodes_receipt() {
        let base = spawn_stub(portal_router()).await;
        let result = client_for(&base).submit("TeamX").await.unwrap();

        assert_eq!(result.response.submission_name, "TeamX");
        assert_eq!(result.response.signature, "SIG123");
        assert_eq!(result.response.verification_json(), r#"{"n":1}"#);
    }

    #[tokio::test]
    async fn test_non_json_error_body_is_detail() {
        let router = Router::new().route(
            "/submissions",
            get(|| async { (AxumStatus::BAD_GATEWAY, "upstream down") }),
        );
        let base = spawn_stub(router).await;
        let err = client_for(&base).list_submissions().await.unwrap_err();

        assert_eq!(err.to_string(), "Error: 502 upstream down");
    }

    #[tokio::test]
    async fn test_unexpected_success_body_is_decode_error() {
        let router = Router::new().route(
            "/submissions",
            get(|| async { Json(json!({"not": "an array"})) }),
        );
        let base = spawn_stub(router).await;
        let err = client_for(&base).list_submissions().await.unwrap_err();

        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let router = Router::new().route(
            "/submissions",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(1_000)).await;
                Json(json!([]))
            }),
        );
        let base = spawn_stub(router).await;
        let client =
            HttpPortalClient::new(ClientConfig::new(&base).with_timeout_ms(150)).unwrap();

        let err = client.list_submissions().await.unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{}", addr))
            .list_submissions()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
        assert_eq!(err.status(), None);
    }
}
