//! Service-catalog endpoints

use serde::Serialize;

use crate::api::client::{ApiClient, ApiError};
use crate::types::{ServiceKind, ServiceList};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    pub duration: u32,
    pub price: u64,
    pub description: String,
    pub require_exam_first: bool,
}

pub async fn list(api: &ApiClient, page: u32, limit: u32) -> Result<ServiceList, ApiError> {
    api.get(
        "/service",
        &[("page", page.to_string()), ("limit", limit.to_string())],
    )
    .await
}

pub async fn search(
    api: &ApiClient,
    keyword: &str,
    page: u32,
    limit: u32,
) -> Result<ServiceList, ApiError> {
    api.get(
        "/service/search",
        &[
            ("q", keyword.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await
}

pub async fn create(
    api: &ApiClient,
    payload: &ServicePayload,
) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.post("/service", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &ServicePayload,
) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.put(&format!("/service/{}", id), payload).await
}

pub async fn toggle_status(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.patch(&format!("/service/{}/toggle", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_kind_under_type_key() {
        let payload = ServicePayload {
            name: "Tẩy trắng răng".to_string(),
            kind: ServiceKind::Treatment,
            duration: 45,
            price: 1_500_000,
            description: String::new(),
            require_exam_first: true,
        };
        let value = serde_json::to_value(&payload).expect("payload should serialize");

        assert_eq!(value["type"], "treatment");
        assert_eq!(value["requireExamFirst"], true);
        assert_eq!(value["price"], 1_500_000);
    }
}
