//! Shift service endpoints
//!
//! Unlike the other list endpoints, `GET /shift` returns a plain array.

use serde::Serialize;

use crate::api::client::{ApiClient, ApiError};
use crate::types::Shift;

/// Times are zero-padded "HH:MM" strings straight from the time inputs.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPayload {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
}

pub async fn list(api: &ApiClient) -> Result<Vec<Shift>, ApiError> {
    api.get("/shift", &[]).await
}

pub async fn search(api: &ApiClient, keyword: &str) -> Result<Vec<Shift>, ApiError> {
    api.get("/shift/search", &[("q", keyword.to_string())]).await
}

pub async fn create(api: &ApiClient, payload: &ShiftPayload) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.post("/shift", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &ShiftPayload,
) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.put(&format!("/shift/{}", id), payload).await
}

pub async fn toggle_status(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.patch(&format!("/shift/{}/toggle", id)).await
}
