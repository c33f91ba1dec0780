//! Auth endpoints on the core service

use serde::Serialize;

use crate::api::client::{ApiClient, ApiError};
use crate::types::{LoginResponse, MessageResponse};
use crate::validation::{normalize_vietnamese_name, RegisterValues};

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

/// Registration payload. The public form always registers patients, so
/// `role` and `kind` are fixed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub phone: String,
    pub full_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub otp: String,
}

impl RegisterPayload {
    /// Build the wire payload from validated form values: the name is
    /// normalized and the birth date zero-padded.
    pub fn from_values(values: &RegisterValues) -> Self {
        Self {
            email: values.email.clone(),
            password: values.password.clone(),
            confirm_password: values.confirm_password.clone(),
            role: "patient".to_string(),
            kind: "null".to_string(),
            phone: values.phone.clone(),
            full_name: normalize_vietnamese_name(&values.full_name),
            gender: values.gender.clone(),
            date_of_birth: birth_date_string(values.day, values.month, values.year),
            otp: values.otp.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordPayload {
    pub email: String,
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// `YYYY-MM-DD` with zero-padded day and month.
pub fn birth_date_string(day: u32, month: u32, year: i32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    api.post(
        "/auth/login",
        &LoginPayload {
            email: email.to_string(),
            password: password.to_string(),
        },
    )
    .await
}

pub async fn register(
    api: &ApiClient,
    payload: &RegisterPayload,
) -> Result<MessageResponse, ApiError> {
    api.post("/auth/register", payload).await
}

pub async fn send_register_otp(api: &ApiClient, email: &str) -> Result<MessageResponse, ApiError> {
    api.post("/auth/send-otp-register", &serde_json::json!({ "email": email }))
        .await
}

pub async fn send_reset_otp(api: &ApiClient, email: &str) -> Result<MessageResponse, ApiError> {
    api.post(
        "/auth/send-otp-reset-password",
        &serde_json::json!({ "email": email }),
    )
    .await
}

pub async fn reset_password(
    api: &ApiClient,
    payload: &ResetPasswordPayload,
) -> Result<MessageResponse, ApiError> {
    api.post("/auth/reset-password", payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_date_string_zero_pads() {
        assert_eq!(birth_date_string(5, 1, 1990), "1990-01-05");
        assert_eq!(birth_date_string(15, 11, 2004), "2004-11-15");
    }

    #[test]
    fn register_payload_normalizes_and_fixes_role() {
        let values = RegisterValues {
            full_name: "  nguyễn   văn a ".into(),
            email: "a@example.com".into(),
            phone: "0901234567".into(),
            gender: "male".into(),
            day: 5,
            month: 6,
            year: 1990,
            password: "matkhau123".into(),
            confirm_password: "matkhau123".into(),
            otp: "123456".into(),
        };
        let payload = RegisterPayload::from_values(&values);

        assert_eq!(payload.full_name, "Nguyễn Văn A");
        assert_eq!(payload.role, "patient");
        assert_eq!(payload.kind, "null");
        assert_eq!(payload.date_of_birth, "1990-06-05");
    }

    #[test]
    fn register_payload_uses_camel_case_wire_keys() {
        let payload = RegisterPayload::from_values(&RegisterValues {
            day: 1,
            month: 2,
            year: 2000,
            ..RegisterValues::default()
        });
        let value = serde_json::to_value(&payload).expect("payload should serialize");
        let object = value.as_object().expect("payload should be an object");

        assert!(object.contains_key("confirmPassword"));
        assert!(object.contains_key("fullName"));
        assert!(object.contains_key("dateOfBirth"));
        assert!(object.contains_key("type"));
        assert!(!object.contains_key("kind"));
    }
}
