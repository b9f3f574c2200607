//! Whitelist request domain models and parameters.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    dto::whitelist::{
        PaginatedWhitelistRequestsDto, StatusUpdatedDto, WhitelistRequestDto, WhitelistSubmittedDto,
    },
    error::{internal::InternalError, whitelist::WhitelistError, AppError},
    util::parse::parse_u64_from_string,
};

/// Message returned to the applicant on a successful submission.
const SUBMITTED_MESSAGE: &str = "Žádost o whitelist byla úspěšně odeslána.";

/// Lifecycle state of a whitelist request.
///
/// All three states are mutually reachable through administrative status
/// updates; `Pending` is the only state a request is created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitelistStatus {
    Pending,
    Approved,
    Rejected,
}

impl WhitelistStatus {
    /// Storage and wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for WhitelistStatus {
    type Err = WhitelistError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(WhitelistError::InvalidStatus(other.to_string())),
        }
    }
}

/// Whitelist request with applicant identity and adjudication state.
#[derive(Debug, Clone, PartialEq)]
pub struct WhitelistRequest {
    pub id: i32,
    /// Discord id of the applicant.
    pub user_id: u64,
    /// The submitted answers, opaque to the core.
    pub form_data: serde_json::Value,
    pub status: WhitelistStatus,
    /// Year-scoped display identifier, e.g. `WL-2026-0042`.
    pub serial_number: String,
    pub created_at: DateTime<Utc>,
    /// Changes on every status update.
    pub updated_at: DateTime<Utc>,
}

impl WhitelistRequest {
    /// Converts an entity row into the domain model at the repository
    /// boundary.
    ///
    /// # Returns
    /// - `Ok(WhitelistRequest)` - The converted domain model
    /// - `Err(AppError::InternalErr(_))` - The stored user id, status, or
    ///   form document is corrupt
    pub fn from_entity(entity: entity::whitelist_request::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;

        let status = WhitelistStatus::from_str(&entity.status)
            .map_err(|_| InternalError::UnknownStoredStatus(entity.status.clone()))?;

        let form_data =
            serde_json::from_str(&entity.form_data).map_err(|e| InternalError::CorruptFormData {
                id: entity.id,
                reason: e.to_string(),
            })?;

        Ok(Self {
            id: entity.id,
            user_id,
            form_data,
            status,
            serial_number: entity.serial_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> WhitelistRequestDto {
        WhitelistRequestDto {
            id: self.id,
            user_id: self.user_id,
            form_data: self.form_data,
            status: self.status.as_str().to_string(),
            serial_number: self.serial_number,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for persisting a new whitelist request.
#[derive(Debug, Clone)]
pub struct CreateWhitelistRequestParam {
    pub user_id: u64,
    pub form_data: serde_json::Value,
    /// Serial assigned by the submission workflow, unique per year.
    pub serial_number: String,
}

/// Parameters for the submission operation.
#[derive(Debug, Clone)]
pub struct SubmitWhitelistParam {
    pub user_id: u64,
    pub form_data: serde_json::Value,
}

/// Parameters for an administrative status update.
#[derive(Debug, Clone, Copy)]
pub struct UpdateStatusParam {
    pub id: i32,
    pub status: WhitelistStatus,
}

/// Parameters for the paginated admin listing.
#[derive(Debug, Clone, Copy)]
pub struct GetAllWhitelistParam {
    pub page: u64,
    pub per_page: u64,
    pub status: Option<WhitelistStatus>,
}

/// Outcome of a successful submission, including attempt accounting.
#[derive(Debug, Clone)]
pub struct WhitelistSubmission {
    pub request: WhitelistRequest,
    pub total_attempts: u32,
    pub remaining_attempts: u32,
    pub max_attempts: u32,
}

impl WhitelistSubmission {
    pub fn into_dto(self) -> WhitelistSubmittedDto {
        WhitelistSubmittedDto {
            message: SUBMITTED_MESSAGE.to_string(),
            total_attempts: self.total_attempts,
            remaining_attempts: self.remaining_attempts,
            max_attempts: self.max_attempts,
        }
    }
}

/// A user's own requests together with attempt accounting.
#[derive(Debug, Clone)]
pub struct UserWhitelistStatus {
    pub requests: Vec<WhitelistRequest>,
    pub total_attempts: u32,
    pub remaining_attempts: u32,
    pub max_attempts: u32,
}

/// Outcome of an administrative status update.
///
/// The local status change always committed when this value exists; the
/// flags report how the Discord side effects went. An external failure is
/// information for the admin, not a reason to roll anything back.
#[derive(Debug, Clone)]
pub struct StatusUpdate {
    pub request: WhitelistRequest,
    pub discord_notified: bool,
    pub role_updated: bool,
    pub discord_error: Option<String>,
}

impl StatusUpdate {
    /// Assembles the outcome from the results of the two Discord side
    /// effects. `None` means the effect succeeded.
    pub fn from_effects(
        request: WhitelistRequest,
        role_error: Option<String>,
        notify_error: Option<String>,
    ) -> Self {
        let discord_error = match (&role_error, &notify_error) {
            (Some(role), Some(notify)) => Some(format!("{}; {}", role, notify)),
            (Some(role), None) => Some(role.clone()),
            (None, Some(notify)) => Some(notify.clone()),
            (None, None) => None,
        };

        Self {
            discord_notified: notify_error.is_none(),
            role_updated: role_error.is_none(),
            discord_error,
            request,
        }
    }

    pub fn into_dto(self) -> StatusUpdatedDto {
        StatusUpdatedDto {
            discord_notified: self.discord_notified,
            role_updated: self.role_updated,
            discord_id: Some(self.request.user_id.to_string()),
            discord_error: self.discord_error,
        }
    }
}

/// Paginated collection of whitelist requests for the admin dashboard.
#[derive(Debug, Clone)]
pub struct PaginatedWhitelistRequests {
    pub requests: Vec<WhitelistRequest>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedWhitelistRequests {
    pub fn into_dto(self) -> PaginatedWhitelistRequestsDto {
        PaginatedWhitelistRequestsDto {
            requests: self.requests.into_iter().map(|r| r.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
