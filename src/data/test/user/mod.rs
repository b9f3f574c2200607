use crate::{data::user::UserRepository, model::user::UpsertUserParam};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod admin_exists;
mod find_by_discord_id;
mod get_all_admins;
mod get_all_paginated;
mod set_admin;
mod upsert;
