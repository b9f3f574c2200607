use sea_orm::entity::prelude::*;

/// Portal account, created on first Discord login.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    /// Discord snowflake of the account, stored as text.
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    /// Display name, refreshed on every login.
    pub name: String,
    /// Portal admin flag.
    pub admin: bool,
    pub created_at: DateTimeUtc,
    pub last_login_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::whitelist_request::Entity")]
    WhitelistRequest,
}

impl Related<super::whitelist_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WhitelistRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
