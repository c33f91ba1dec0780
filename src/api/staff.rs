//! Staff endpoints on the core service

use serde::Serialize;

use crate::api::client::{ApiClient, ApiError};
use crate::types::{StaffDetailResponse, UserList};

/// Editable staff fields for `PUT /user/update/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUpdatePayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub date_of_birth: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_active: bool,
}

pub async fn list(api: &ApiClient, page: u32, limit: u32) -> Result<UserList, ApiError> {
    api.get(
        "/user/all-staff",
        &[("page", page.to_string()), ("limit", limit.to_string())],
    )
    .await
}

pub async fn list_by_role(
    api: &ApiClient,
    role: &str,
    page: u32,
    limit: u32,
) -> Result<UserList, ApiError> {
    api.get(
        "/user/by-role",
        &[
            ("role", role.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await
}

/// Name or email search.
pub async fn search(
    api: &ApiClient,
    term: &str,
    page: u32,
    limit: u32,
) -> Result<UserList, ApiError> {
    api.get(
        "/user/staff/search",
        &[
            ("fullName", term.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await
}

pub async fn get_by_id(api: &ApiClient, id: &str) -> Result<StaffDetailResponse, ApiError> {
    api.get(&format!("/user/{}", id), &[]).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &StaffUpdatePayload,
) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.put(&format!("/user/update/{}", id), payload).await
}

pub async fn toggle_status(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.patch(&format!("/user/{}/toggle-status", id)).await
}
