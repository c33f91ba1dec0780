//! Room service endpoints

use serde::Serialize;

use crate::api::client::{ApiClient, ApiError};
use crate::types::RoomList;

/// Sub-room row as edited in the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRoomInput {
    pub name: String,
    pub max_doctors: u32,
    pub max_nurses: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomPayload {
    pub name: String,
    pub sub_rooms: Vec<SubRoomInput>,
}

/// Clean up the editable sub-room rows before submit: blank names default to
/// "Ghế N" (1-based row number), rows without both capacities positive are
/// dropped.
pub fn prepare_sub_rooms(rows: &[SubRoomInput]) -> Vec<SubRoomInput> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let trimmed = row.name.trim();
            SubRoomInput {
                name: if trimmed.is_empty() {
                    format!("Ghế {}", index + 1)
                } else {
                    trimmed.to_string()
                },
                max_doctors: row.max_doctors,
                max_nurses: row.max_nurses,
            }
        })
        .filter(|row| row.max_doctors > 0 && row.max_nurses > 0)
        .collect()
}

pub async fn list(api: &ApiClient, page: u32, limit: u32) -> Result<RoomList, ApiError> {
    api.get(
        "/room",
        &[("page", page.to_string()), ("limit", limit.to_string())],
    )
    .await
}

pub async fn search(
    api: &ApiClient,
    keyword: &str,
    page: u32,
    limit: u32,
) -> Result<RoomList, ApiError> {
    api.get(
        "/room/search",
        &[
            ("q", keyword.to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await
}

pub async fn create(api: &ApiClient, payload: &RoomPayload) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.post("/room", payload).await
}

pub async fn update(
    api: &ApiClient,
    id: &str,
    payload: &RoomPayload,
) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.put(&format!("/room/{}", id), payload).await
}

pub async fn toggle_status(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.ensure_authenticated()?;
    api.patch(&format!("/room/{}/toggle", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, doctors: u32, nurses: u32) -> SubRoomInput {
        SubRoomInput {
            name: name.to_string(),
            max_doctors: doctors,
            max_nurses: nurses,
        }
    }

    #[test]
    fn blank_names_default_to_row_number() {
        let prepared = prepare_sub_rooms(&[row("  ", 2, 1), row("Ghế VIP", 1, 1)]);
        assert_eq!(prepared.len(), 2);
        assert_eq!(prepared[0].name, "Ghế 1");
        assert_eq!(prepared[1].name, "Ghế VIP");
    }

    #[test]
    fn rows_without_positive_capacities_are_dropped() {
        let prepared = prepare_sub_rooms(&[row("A", 0, 1), row("B", 1, 0), row("C", 1, 1)]);
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].name, "C");
    }

    #[test]
    fn row_numbers_count_before_filtering() {
        // The dropped first row still advances the numbering.
        let prepared = prepare_sub_rooms(&[row("", 0, 0), row("", 1, 1)]);
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].name, "Ghế 2");
    }

    #[test]
    fn names_are_trimmed() {
        let prepared = prepare_sub_rooms(&[row("  Ghế 1  ", 1, 1)]);
        assert_eq!(prepared[0].name, "Ghế 1");
    }
}
