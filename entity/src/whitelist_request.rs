use sea_orm::entity::prelude::*;

/// One whitelist application.
///
/// The submitted answers are kept as an opaque serialized JSON document;
/// their shape is defined by the question set active at submission time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "whitelist_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord snowflake of the applicant, stored as text.
    pub user_id: String,
    #[sea_orm(column_type = "Text")]
    pub form_data: String,
    /// One of `pending`, `approved`, `rejected`.
    pub status: String,
    /// Year-scoped display identifier, assigned once at creation.
    #[sea_orm(unique)]
    pub serial_number: String,
    pub created_at: DateTimeUtc,
    /// Bumped on every status change.
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::DiscordId"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
