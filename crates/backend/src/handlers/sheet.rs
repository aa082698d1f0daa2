//! `POST /api/sheet`: same-origin relay to the sheet data service.
//!
//! The body is checked for a known action and sheet name, then forwarded
//! verbatim; the upstream JSON answer is returned unchanged.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::Dataset;
use contracts::shared::sheet_api::Action;
use serde_json::{json, Value};
use thiserror::Error;

pub struct AppState {
    pub client: reqwest::Client,
    pub upstream_url: String,
}

impl AppState {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream_url: upstream_url.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Upstream URL is not configured")]
    NotConfigured,

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned invalid JSON: {0}")]
    InvalidUpstreamBody(String),
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Upstream(_) | RelayError::InvalidUpstreamBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Action and sheet of a request body, if both are known.
pub fn validate(body: &Value) -> Result<(Action, Dataset), RelayError> {
    let object = body
        .as_object()
        .ok_or_else(|| RelayError::BadRequest("body must be a JSON object".into()))?;

    let action = object
        .get("action")
        .cloned()
        .and_then(|v| serde_json::from_value::<Action>(v).ok())
        .ok_or_else(|| RelayError::BadRequest("unknown action".into()))?;

    let sheet = object.get("sheet").and_then(Value::as_str).unwrap_or_default();
    let dataset = Dataset::from_sheet_name(sheet)
        .ok_or_else(|| RelayError::BadRequest(format!("unknown sheet '{}'", sheet)))?;

    Ok((action, dataset))
}

pub async fn relay(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let request: Value = serde_json::from_slice(&body)
        .map_err(|e| RelayError::BadRequest(format!("body is not JSON: {}", e)))?;
    let (action, dataset) = validate(&request).inspect_err(|e| tracing::warn!("{}", e))?;

    if state.upstream_url.trim().is_empty() {
        return Err(RelayError::NotConfigured);
    }

    tracing::info!(%action, sheet = dataset.sheet_name(), "relaying sheet request");

    let response = state
        .client
        .post(&state.upstream_url)
        .json(&request)
        .send()
        .await
        .inspect_err(|e| tracing::error!("upstream {} {}: {}", action, dataset.sheet_name(), e))?;

    let status = response.status();
    let answer: Value = response.json().await.map_err(|e| {
        tracing::error!("upstream answered {} with a non-JSON body: {}", status, e);
        RelayError::InvalidUpstreamBody(e.to_string())
    })?;

    if !status.is_success() {
        tracing::warn!("upstream answered {} for {} {}", status, action, dataset.sheet_name());
    }

    Ok(Json(answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::Router;
    use tokio::net::TcpListener;

    async fn spawn_upstream(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/exec", addr)
    }

    fn state(url: &str) -> State<Arc<AppState>> {
        State(Arc::new(AppState::new(url)))
    }

    #[test]
    fn test_validate() {
        let (action, dataset) =
            validate(&json!({"action": "delete", "sheet": "FamilyMembers", "id": "2"})).unwrap();
        assert_eq!(action, Action::Delete);
        assert_eq!(dataset, Dataset::Family);

        assert!(validate(&json!({"action": "drop", "sheet": "Tasks"})).is_err());
        assert!(validate(&json!({"action": "read"})).is_err());
        assert!(validate(&json!(["read", "Tasks"])).is_err());
    }

    #[tokio::test]
    async fn test_unknown_sheet_rejected() {
        let body = Bytes::from(json!({"action": "read", "sheet": "Payroll"}).to_string());
        let err = relay(state("http://127.0.0.1:9/exec"), body).await.unwrap_err();

        assert!(matches!(err, RelayError::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_json_body_rejected() {
        let err = relay(state("http://127.0.0.1:9/exec"), Bytes::from_static(b"action=read"))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_missing_upstream_url() {
        let body = Bytes::from(json!({"action": "read", "sheet": "Tasks"}).to_string());
        let err = relay(state(""), body).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_forwards_body_and_returns_answer() {
        let upstream = Router::new().route(
            "/exec",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"headers": ["ID", "Task"], "rows": [], "echo": body}))
            }),
        );
        let url = spawn_upstream(upstream).await;

        let sent = json!({"action": "read", "sheet": "Tasks"});
        let Json(answer) = relay(state(&url), Bytes::from(sent.to_string())).await.unwrap();

        assert_eq!(answer["echo"], sent);
        assert_eq!(answer["headers"], json!(["ID", "Task"]));
    }

    #[tokio::test]
    async fn test_non_json_upstream_is_bad_gateway() {
        let upstream = Router::new().route("/exec", post(|| async { "<html>Sign in</html>" }));
        let url = spawn_upstream(upstream).await;

        let body = Bytes::from(json!({"action": "read", "sheet": "Finance"}).to_string());
        let err = relay(state(&url), body).await.unwrap_err();

        assert!(matches!(err, RelayError::InvalidUpstreamBody(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
