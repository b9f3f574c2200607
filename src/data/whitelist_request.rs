//! Whitelist request repository.
//!
//! Handles creation, lookup, year counting, status updates, and paginated
//! listing of whitelist requests. The serial number uniqueness constraint
//! lives in the schema; callers that insert must be prepared for a
//! uniqueness violation when two submissions race.

use chrono::{TimeZone, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::whitelist::{CreateWhitelistRequestParam, WhitelistRequest, WhitelistStatus},
};

/// Repository providing database operations for whitelist requests.
pub struct WhitelistRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WhitelistRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new request in `pending` status.
    ///
    /// Both timestamps are set to the current time. The serial number
    /// comes from the submission workflow and must be unique; a colliding
    /// insert fails with a uniqueness violation that the caller inspects
    /// via `DbErr::sql_err`.
    ///
    /// # Arguments
    /// - `param` - Applicant id, answer document, and assigned serial
    ///
    /// # Returns
    /// - `Ok(WhitelistRequest)` - The stored request
    /// - `Err(AppError::DbErr(_))` - Insert failed, including serial
    ///   collisions
    pub async fn create(
        &self,
        param: CreateWhitelistRequestParam,
    ) -> Result<WhitelistRequest, AppError> {
        let now = Utc::now();

        let entity = entity::whitelist_request::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            form_data: ActiveValue::Set(param.form_data.to_string()),
            status: ActiveValue::Set(WhitelistStatus::Pending.as_str().to_string()),
            serial_number: ActiveValue::Set(param.serial_number),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        WhitelistRequest::from_entity(entity)
    }

    /// Finds a request by its id.
    ///
    /// # Returns
    /// - `Ok(Some(WhitelistRequest))` - Request found
    /// - `Ok(None)` - No request with that id
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<WhitelistRequest>, AppError> {
        let entity = entity::prelude::WhitelistRequest::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(WhitelistRequest::from_entity).transpose()
    }

    /// Returns all requests a user has ever submitted, oldest first.
    ///
    /// This is the full per-user history the attempt rules are evaluated
    /// over, so it must never filter by status or time.
    ///
    /// # Arguments
    /// - `user_id` - Discord id of the applicant
    ///
    /// # Returns
    /// - `Ok(Vec<WhitelistRequest>)` - All requests, possibly empty
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn get_by_user(&self, user_id: u64) -> Result<Vec<WhitelistRequest>, AppError> {
        let entities = entity::prelude::WhitelistRequest::find()
            .filter(entity::whitelist_request::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::whitelist_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(WhitelistRequest::from_entity)
            .collect()
    }

    /// Counts requests created within the given calendar year.
    ///
    /// The range runs from January 1st 00:00 of the year (inclusive) to
    /// January 1st of the following year (exclusive). Feeds the serial
    /// number sequence.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of requests created in that year
    /// - `Err(AppError)` - Database error, or a year outside chrono's range
    pub async fn count_created_in_year(&self, year: i32) -> Result<u64, AppError> {
        let start = Utc
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| AppError::InternalError(format!("Invalid year bound: {}", year)))?;
        let end = Utc
            .with_ymd_and_hms(year + 1, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| AppError::InternalError(format!("Invalid year bound: {}", year + 1)))?;

        let count = entity::prelude::WhitelistRequest::find()
            .filter(entity::whitelist_request::Column::CreatedAt.gte(start))
            .filter(entity::whitelist_request::Column::CreatedAt.lt(end))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Sets the status of a request and bumps `updated_at`.
    ///
    /// The write happens even when the status equals the stored value, so
    /// `updated_at` still records that an admin re-asserted the state.
    ///
    /// # Arguments
    /// - `id` - Id of the request
    /// - `status` - Target status
    ///
    /// # Returns
    /// - `Ok(Some(WhitelistRequest))` - The updated request
    /// - `Ok(None)` - No request with that id
    /// - `Err(AppError::DbErr(_))` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        status: WhitelistStatus,
    ) -> Result<Option<WhitelistRequest>, AppError> {
        let Some(existing) = entity::prelude::WhitelistRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::whitelist_request::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status.as_str().to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(WhitelistRequest::from_entity(updated)?))
    }

    /// Returns requests for the admin dashboard, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Requests per page
    /// - `status` - Optional status filter
    ///
    /// # Returns
    /// - `Ok((requests, total, total_pages))` - Requests for the page,
    ///   the matching row count, and the page count
    /// - `Err(AppError::DbErr(_))` - Database error during query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
        status: Option<WhitelistStatus>,
    ) -> Result<(Vec<WhitelistRequest>, u64, u64), AppError> {
        let mut query = entity::prelude::WhitelistRequest::find()
            .order_by_desc(entity::whitelist_request::Column::CreatedAt);

        if let Some(status) = status {
            query = query.filter(entity::whitelist_request::Column::Status.eq(status.as_str()));
        }

        let paginator = query.paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let entities = paginator.fetch_page(page).await?;
        let requests = entities
            .into_iter()
            .map(WhitelistRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((requests, counts.number_of_items, counts.number_of_pages))
    }
}
