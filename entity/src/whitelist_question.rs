use sea_orm::entity::prelude::*;

/// Admin-configurable question shown on the whitelist application form.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "whitelist_question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    /// One of `text`, `textarea`, `select`.
    pub field_type: String,
    /// JSON array of choices, only used by `select` questions.
    #[sea_orm(column_type = "Text", nullable)]
    pub options: Option<String>,
    pub required: bool,
    /// Display position, rewritten by the reorder operation.
    pub sort_order: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
