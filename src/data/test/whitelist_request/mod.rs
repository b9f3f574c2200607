use crate::{
    data::whitelist_request::WhitelistRequestRepository,
    error::AppError,
    model::whitelist::{CreateWhitelistRequestParam, WhitelistStatus},
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        user::create_user_with_id,
        whitelist_request::{create_request_with_status, WhitelistRequestFactory},
    },
};

mod count_created_in_year;
mod create;
mod find_by_id;
mod get_all_paginated;
mod get_by_user;
mod update_status;
