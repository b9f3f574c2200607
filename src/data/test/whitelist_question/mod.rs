use crate::{
    data::whitelist_question::WhitelistQuestionRepository,
    model::question::{CreateQuestionParam, QuestionFieldType, UpdateQuestionParam},
};
use test_utils::{builder::TestBuilder, factory::whitelist_question::WhitelistQuestionFactory};

mod create;
mod delete;
mod get_all;
mod reorder;
mod update;
