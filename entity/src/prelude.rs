pub use super::user::Entity as User;
pub use super::whitelist_question::Entity as WhitelistQuestion;
pub use super::whitelist_request::Entity as WhitelistRequest;
