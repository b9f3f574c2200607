use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/whitelist`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWhitelistDto {
    /// The applicant's answers, keyed by question id.
    pub form_data: serde_json::Value,
}

/// Response of a successful submission.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistSubmittedDto {
    pub message: String,
    pub total_attempts: u32,
    pub remaining_attempts: u32,
    pub max_attempts: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistRequestDto {
    pub id: i32,
    pub user_id: u64,
    pub form_data: serde_json::Value,
    pub status: String,
    pub serial_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `PATCH /api/whitelist/{id}/status`.
#[derive(Serialize, Deserialize)]
pub struct UpdateStatusDto {
    pub status: String,
}

/// Response of a status update.
///
/// `discord_error` carries the failure detail when either Discord side
/// effect did not go through; the local status change already committed.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdatedDto {
    pub discord_notified: bool,
    pub role_updated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_error: Option<String>,
}

/// Response of `GET /api/whitelist/me`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyWhitelistStatusDto {
    pub requests: Vec<WhitelistRequestDto>,
    pub total_attempts: u32,
    pub remaining_attempts: u32,
    pub max_attempts: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedWhitelistRequestsDto {
    pub requests: Vec<WhitelistRequestDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
