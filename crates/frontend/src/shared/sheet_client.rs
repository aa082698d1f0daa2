//! Client of the sheet data service.

use async_trait::async_trait;
use contracts::domain::common::{Dataset, Record};
use contracts::shared::error::HubError;
use contracts::shared::sheet_api::{MutationResponse, ReadResponse, SheetRequest};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::sheet_endpoint;

/// The four sheet actions. Implementors only provide `call`: one request,
/// one round-trip, no retries.
#[async_trait(?Send)]
pub trait SheetApi {
    /// Send one action and return the parsed JSON answer.
    async fn call(&self, request: SheetRequest) -> Result<Value, HubError>;

    async fn read(&self, dataset: Dataset) -> Result<ReadResponse, HubError> {
        let value = self.call(SheetRequest::read(dataset)).await?;
        ReadResponse::from_value(value)
    }

    async fn create(&self, dataset: Dataset, record: Record) -> Result<(), HubError> {
        let value = self.call(SheetRequest::create(dataset, record)).await?;
        MutationResponse::from_value(value)?.into_result()
    }

    async fn update(&self, dataset: Dataset, id: &str, record: Record) -> Result<(), HubError> {
        let value = self.call(SheetRequest::update(dataset, id, record)).await?;
        MutationResponse::from_value(value)?.into_result()
    }

    async fn delete(&self, dataset: Dataset, id: &str) -> Result<(), HubError> {
        let value = self.call(SheetRequest::delete(dataset, id)).await?;
        MutationResponse::from_value(value)?.into_result()
    }
}

/// `POST`s every action as JSON to a single endpoint.
pub struct HttpSheetApi {
    endpoint: String,
}

impl HttpSheetApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Client for the endpoint configured for this build.
    pub fn from_env() -> Self {
        Self::new(sheet_endpoint())
    }
}

#[async_trait(?Send)]
impl SheetApi for HttpSheetApi {
    async fn call(&self, request: SheetRequest) -> Result<Value, HubError> {
        log::debug!("sheet api: {} on {}", request.action, request.sheet);

        let response = Request::post(&self.endpoint)
            .json(&request)
            .map_err(|e| HubError::NetworkFailure(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| {
                log::error!("sheet api: {} on {} failed: {}", request.action, request.sheet, e);
                HubError::NetworkFailure(format!("Failed to send request: {}", e))
            })?;

        let status = response.status();
        let body: Result<Value, _> = response.json().await;

        if !(200..300).contains(&status) {
            let detail = body
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_default();
            log::error!("sheet api: HTTP {} {}", status, detail);
            let message = format!("HTTP {} {}", status, detail);
            return Err(HubError::NetworkFailure(message.trim_end().to_string()));
        }

        body.map_err(|e| HubError::NetworkFailure(format!("Failed to parse response: {}", e)))
    }
}
