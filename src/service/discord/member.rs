//! Guild membership lookups.

use serenity::{
    all::{GuildId, RoleId, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::config::Config;

/// Looks up guild members and their roles.
pub struct DiscordMemberService {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordMemberService {
    pub fn new(http: Arc<Http>, config: &Config) -> Self {
        Self {
            http,
            guild_id: GuildId::new(config.discord_guild_id),
        }
    }

    /// Whether the member currently holds the given guild role.
    ///
    /// # Returns
    /// - `Ok(true)` - Member holds the role
    /// - `Ok(false)` - Member lacks the role
    /// - `Err(serenity::Error)` - Member not in the guild, or the lookup
    ///   failed
    pub async fn has_role(&self, user_id: u64, role_id: u64) -> Result<bool, serenity::Error> {
        let member = self
            .http
            .get_member(self.guild_id, UserId::new(user_id))
            .await?;

        Ok(member.roles.contains(&RoleId::new(role_id)))
    }
}
