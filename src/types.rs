//! Type definitions for the clinic backend REST APIs
//!
//! The backends are Mongo-based and speak camelCase JSON with `_id` keys;
//! everything here mirrors that wire format.

use serde::{Deserialize, Serialize};

// ============================================================================
// Common Types
// ============================================================================

/// Plain `{ "message": ... }` body used by the auth endpoints and as the
/// error shape of every service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Users & Auth
// ============================================================================

/// Role as the core service returns it: usually a plain string, but older
/// records carry an embedded role object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleValue {
    Name(String),
    Object { name: String },
}

impl RoleValue {
    pub fn as_str(&self) -> &str {
        match self {
            RoleValue::Name(name) => name,
            RoleValue::Object { name } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<RoleValue>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Lowercased role name; tries `role` first, then the legacy `roleName`.
    pub fn role_key(&self) -> String {
        self.role
            .as_ref()
            .map(|role| role.as_str().to_string())
            .or_else(|| self.role_name.clone())
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Name to show in headers and tables, falling back to the email.
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Paginated staff listing from `/user/all-staff` and friends.
#[derive(Debug, Clone, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffDetailResponse {
    pub user: User,
}

// ============================================================================
// Rooms
// ============================================================================

/// Treatment chair inside a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRoom {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub max_doctors: u32,
    #[serde(default)]
    pub max_nurses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sub_rooms: Vec<SubRoom>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Room {
    pub fn total_doctors(&self) -> u32 {
        self.sub_rooms.iter().map(|sub| sub.max_doctors).sum()
    }

    pub fn total_nurses(&self) -> u32 {
        self.sub_rooms.iter().map(|sub| sub.max_nurses).sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomList {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
}

// ============================================================================
// Services
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Exam,
    Treatment,
    #[default]
    #[serde(other)]
    Other,
}

impl ServiceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Exam => "Khám",
            ServiceKind::Treatment => "Điều trị",
            ServiceKind::Other => "Khác",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ServiceKind,
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub require_exam_first: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceList {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
}

// ============================================================================
// Shifts
// ============================================================================

/// Work shift; times are zero-padded "HH:MM" strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ============================================================================
// Display helpers
// ============================================================================

/// "d/m/yyyy" display for the ISO dates and timestamps the backends return.
pub fn format_display_date(value: &str) -> Option<String> {
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.format("%-d/%-m/%Y").to_string());
    }
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%-d/%-m/%Y").to_string())
}

/// VND price with dot-grouped thousands, e.g. `1500000` -> "1.500.000 ₫".
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{} ₫", grouped)
}

/// Ten-digit phone numbers get "xxx xxx xxxx" spacing; anything else passes
/// through untouched.
pub fn format_phone(phone: &str) -> String {
    static PHONE_RE: std::sync::OnceLock<Option<regex::Regex>> = std::sync::OnceLock::new();
    let pattern = PHONE_RE.get_or_init(|| regex::Regex::new(r"^(\d{3})(\d{3})(\d{4})$").ok());
    match pattern.as_ref().and_then(|re| re.captures(phone)) {
        Some(groups) => format!("{} {} {}", &groups[1], &groups[2], &groups[3]),
        None => phone.to_string(),
    }
}

/// Vietnamese display label for a role key. Unknown roles show as-is.
pub fn role_label(role: &str) -> &str {
    match role {
        "admin" => "Quản trị viên",
        "dentist" => "Bác sĩ",
        "nurse" => "Y tá",
        "receptionist" => "Lễ tân",
        "manager" => "Quản lý",
        "patient" => "Bệnh nhân",
        other => other,
    }
}

/// Vietnamese display label for a staff contract type.
pub fn staff_kind_label(kind: &str) -> &str {
    match kind {
        "fulltime" => "Toàn thời gian",
        "parttime" => "Bán thời gian",
        "normal" => "Thường",
        "null" | "" => "Không xác định",
        other => other,
    }
}

/// Vietnamese display label for a gender key.
pub fn gender_label(gender: &str) -> &str {
    match gender {
        "male" => "Nam",
        "female" => "Nữ",
        "other" => "Khác",
        unknown => unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_key_prefers_role_over_role_name() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u1","role":"Admin","roleName":"manager"}"#,
        )
        .expect("user should deserialize");
        assert_eq!(user.role_key(), "admin");
    }

    #[test]
    fn role_key_reads_embedded_role_objects() {
        let user: User = serde_json::from_str(r#"{"role":{"name":"Dentist"}}"#)
            .expect("user should deserialize");
        assert_eq!(user.role_key(), "dentist");
    }

    #[test]
    fn role_key_falls_back_to_role_name_then_empty() {
        let user: User =
            serde_json::from_str(r#"{"roleName":"Nurse"}"#).expect("user should deserialize");
        assert_eq!(user.role_key(), "nurse");

        let blank: User = serde_json::from_str(r#"{}"#).expect("user should deserialize");
        assert_eq!(blank.role_key(), "");
    }

    #[test]
    fn room_totals_sum_sub_room_capacities() {
        let room: Room = serde_json::from_str(
            r#"{
                "_id": "r1",
                "name": "Phòng 1",
                "subRooms": [
                    {"name": "Ghế 1", "maxDoctors": 2, "maxNurses": 1},
                    {"name": "Ghế 2", "maxDoctors": 1, "maxNurses": 3}
                ],
                "isActive": true
            }"#,
        )
        .expect("room should deserialize");
        assert_eq!(room.total_doctors(), 3);
        assert_eq!(room.total_nurses(), 4);
    }

    #[test]
    fn unknown_service_kind_maps_to_other() {
        let service: Service = serde_json::from_str(r#"{"_id":"s1","type":"surgery"}"#)
            .expect("service should deserialize");
        assert_eq!(service.kind, ServiceKind::Other);

        let exam: Service = serde_json::from_str(r#"{"_id":"s2","type":"exam"}"#)
            .expect("service should deserialize");
        assert_eq!(exam.kind, ServiceKind::Exam);
    }

    #[test]
    fn format_display_date_handles_timestamps_and_dates() {
        assert_eq!(
            format_display_date("2024-01-05T08:30:00.000Z").as_deref(),
            Some("5/1/2024")
        );
        assert_eq!(format_display_date("1990-06-15").as_deref(), Some("15/6/1990"));
        assert_eq!(format_display_date("not a date"), None);
    }

    #[test]
    fn format_vnd_groups_thousands_with_dots() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(500), "500 ₫");
        assert_eq!(format_vnd(50_000), "50.000 ₫");
        assert_eq!(format_vnd(1_500_000), "1.500.000 ₫");
    }

    #[test]
    fn format_phone_spaces_ten_digit_numbers() {
        assert_eq!(format_phone("0901234567"), "090 123 4567");
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn labels_fall_back_to_the_raw_key() {
        assert_eq!(role_label("dentist"), "Bác sĩ");
        assert_eq!(role_label("janitor"), "janitor");
        assert_eq!(staff_kind_label("null"), "Không xác định");
        assert_eq!(staff_kind_label(""), "Không xác định");
        assert_eq!(gender_label("female"), "Nữ");
    }
}
