//! Whitelist application lifecycle.
//!
//! Orchestrates the submission workflow (eligibility, answer validation,
//! serial assignment, persistence) and the administrative adjudication
//! workflow (local status change, Discord role mutation, applicant
//! notification).

pub mod attempts;
pub mod serial;
pub mod transition;


use chrono::{Datelike, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::{
        whitelist_question::WhitelistQuestionRepository,
        whitelist_request::WhitelistRequestRepository,
    },
    error::{whitelist::WhitelistError, AppError},
    model::{
        question::WhitelistQuestion,
        whitelist::{
            CreateWhitelistRequestParam, GetAllWhitelistParam, PaginatedWhitelistRequests,
            StatusUpdate, SubmitWhitelistParam, UpdateStatusParam, UserWhitelistStatus,
            WhitelistRequest, WhitelistSubmission,
        },
    },
    service::discord::{notify::WhitelistNotifyService, role::DiscordRoleService},
};

/// Retry budget for serial allocation when inserts collide on the unique
/// serial constraint.
const SERIAL_RETRY_ATTEMPTS: u32 = 3;

/// Service providing business logic for the whitelist lifecycle.
pub struct WhitelistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WhitelistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new whitelist application.
    ///
    /// Checks run in order: the form document must be a non-empty object,
    /// every required question must be answered, the lifetime attempt cap
    /// must not be spent, and no request may be pending. Only then is a
    /// serial assigned and the request persisted; a refused submission
    /// writes nothing.
    ///
    /// # Arguments
    /// - `param` - Applicant id and submitted answer document
    ///
    /// # Returns
    /// - `Ok(WhitelistSubmission)` - The stored request with attempt
    ///   accounting
    /// - `Err(AppError::WhitelistErr(_))` - A validation or business rule
    ///   refused the submission
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn submit(&self, param: SubmitWhitelistParam) -> Result<WhitelistSubmission, AppError> {
        if !param
            .form_data
            .as_object()
            .is_some_and(|answers| !answers.is_empty())
        {
            return Err(WhitelistError::EmptyForm.into());
        }

        let question_repo = WhitelistQuestionRepository::new(self.db);
        let questions = question_repo.get_all().await?;
        validate_answers(&questions, &param.form_data)?;

        let request_repo = WhitelistRequestRepository::new(self.db);
        let existing = request_repo.get_by_user(param.user_id).await?;
        let budget = attempts::check_eligibility(&existing)?;

        let request = self.create_with_serial(&request_repo, &param).await?;

        tracing::info!(
            "User {} submitted whitelist request {}",
            param.user_id,
            request.serial_number
        );

        Ok(WhitelistSubmission {
            request,
            total_attempts: budget.used + 1,
            remaining_attempts: budget.remaining() - 1,
            max_attempts: attempts::MAX_ATTEMPTS,
        })
    }

    /// Inserts the request under a freshly derived serial number.
    ///
    /// The sequence comes from a count of rows created this year, so two
    /// racing submissions can derive the same serial. The unique
    /// constraint rejects the loser, which recounts and tries again. The
    /// attempt index is added on top of the recount so the proposal also
    /// steps past serials the year count does not cover.
    async fn create_with_serial(
        &self,
        repo: &WhitelistRequestRepository<'_>,
        param: &SubmitWhitelistParam,
    ) -> Result<WhitelistRequest, AppError> {
        let year = Utc::now().year();

        for attempt in 0..SERIAL_RETRY_ATTEMPTS {
            let taken = repo.count_created_in_year(year).await?;
            let serial = serial::serial_number(year, taken + attempt as u64);

            match repo
                .create(CreateWhitelistRequestParam {
                    user_id: param.user_id,
                    form_data: param.form_data.clone(),
                    serial_number: serial,
                })
                .await
            {
                Ok(request) => return Ok(request),
                Err(AppError::DbErr(err))
                    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    tracing::warn!(
                        "Serial collision for user {} on attempt {}, retrying",
                        param.user_id,
                        attempt + 1
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Err(WhitelistError::SerialAllocation(SERIAL_RETRY_ATTEMPTS).into())
    }

    /// Applies an administrative status change.
    ///
    /// The local update commits first and is the authoritative record.
    /// The Discord role mutation and the applicant DM are attempted
    /// afterwards; either may fail without affecting the stored status,
    /// and neither is retried automatically. Failures are folded into the
    /// returned outcome for the admin to act on.
    ///
    /// # Arguments
    /// - `param` - Request id and target status
    /// - `roles` - Role gateway for the configured guild
    /// - `notifier` - DM notification service
    ///
    /// # Returns
    /// - `Ok(StatusUpdate)` - Committed change with side-effect outcome
    /// - `Err(AppError::NotFound(_))` - No request with that id
    /// - `Err(AppError::DbErr(_))` - Database error during update
    pub async fn update_status(
        &self,
        param: UpdateStatusParam,
        roles: &DiscordRoleService,
        notifier: &WhitelistNotifyService,
    ) -> Result<StatusUpdate, AppError> {
        let repo = WhitelistRequestRepository::new(self.db);

        let previous = repo
            .find_by_id(param.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Whitelist request not found".to_string()))?;

        let updated = repo
            .update_status(param.id, param.status)
            .await?
            .ok_or_else(|| AppError::NotFound("Whitelist request not found".to_string()))?;

        tracing::info!(
            "Request {} moved from {} to {}",
            updated.serial_number,
            previous.status.as_str(),
            updated.status.as_str()
        );

        let actions = transition::role_actions(previous.status, updated.status);

        let role_error = match roles.apply(updated.user_id, actions).await {
            Ok(()) => None,
            Err(err) => {
                tracing::error!(
                    "Failed to update Discord roles for user {}: {}",
                    updated.user_id,
                    err
                );
                Some(err.to_string())
            }
        };

        let notify_error = match notifier.notify_status_change(&updated).await {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(
                    "Failed to notify user {} about request {}: {}",
                    updated.user_id,
                    updated.serial_number,
                    err
                );
                Some(err.to_string())
            }
        };

        Ok(StatusUpdate::from_effects(updated, role_error, notify_error))
    }

    /// Returns a user's own requests with attempt accounting.
    pub async fn get_user_status(&self, user_id: u64) -> Result<UserWhitelistStatus, AppError> {
        let repo = WhitelistRequestRepository::new(self.db);
        let requests = repo.get_by_user(user_id).await?;

        let total_attempts = requests.len() as u32;

        Ok(UserWhitelistStatus {
            total_attempts,
            remaining_attempts: attempts::MAX_ATTEMPTS.saturating_sub(total_attempts),
            max_attempts: attempts::MAX_ATTEMPTS,
            requests,
        })
    }

    /// Returns requests for the admin dashboard.
    pub async fn get_all(
        &self,
        param: GetAllWhitelistParam,
    ) -> Result<PaginatedWhitelistRequests, AppError> {
        let repo = WhitelistRequestRepository::new(self.db);

        let (requests, total, total_pages) = repo
            .get_all_paginated(param.page, param.per_page, param.status)
            .await?;

        Ok(PaginatedWhitelistRequests {
            requests,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Returns a single request for the admin detail view.
    ///
    /// # Returns
    /// - `Ok(WhitelistRequest)` - The request
    /// - `Err(AppError::NotFound(_))` - No request with that id
    pub async fn get_by_id(&self, id: i32) -> Result<WhitelistRequest, AppError> {
        let repo = WhitelistRequestRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Whitelist request not found".to_string()))
    }
}

/// Checks the submitted document against the active question set.
///
/// Every required question must have a non-empty answer under its id key.
/// Extra keys are left alone; the document stays opaque beyond this check.
fn validate_answers(
    questions: &[WhitelistQuestion],
    form_data: &serde_json::Value,
) -> Result<(), WhitelistError> {
    let Some(answers) = form_data.as_object() else {
        return Err(WhitelistError::EmptyForm);
    };

    for question in questions.iter().filter(|q| q.required) {
        let missing = match answers.get(&question.id.to_string()) {
            None | Some(serde_json::Value::Null) => true,
            Some(serde_json::Value::String(answer)) => answer.trim().is_empty(),
            Some(_) => false,
        };

        if missing {
            return Err(WhitelistError::MissingAnswer(question.question.clone()));
        }
    }

    Ok(())
}
