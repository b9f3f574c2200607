//! Whitelist role mutations against the Discord guild.

use serenity::{
    all::{GuildId, RoleId, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::{config::Config, service::whitelist::transition::RoleAction};

/// Applies whitelist role changes to guild members.
///
/// Grants and revokes are idempotent on Discord's side: adding a role a
/// member already holds, or removing one they lack, succeeds without
/// effect.
pub struct DiscordRoleService {
    http: Arc<Http>,
    guild_id: GuildId,
    whitelisted_role: RoleId,
    waiting_role: RoleId,
}

impl DiscordRoleService {
    pub fn new(http: Arc<Http>, config: &Config) -> Self {
        Self {
            http,
            guild_id: GuildId::new(config.discord_guild_id),
            whitelisted_role: RoleId::new(config.discord_whitelisted_role_id),
            waiting_role: RoleId::new(config.discord_waiting_role_id),
        }
    }

    /// Applies the role actions for one member in order.
    ///
    /// Stops at the first failure so the caller gets the error of the
    /// action that did not go through; earlier actions stay applied.
    ///
    /// # Arguments
    /// - `user_id` - Discord id of the member
    /// - `actions` - Role mutations from the transition table
    ///
    /// # Returns
    /// - `Ok(())` - Every action applied
    /// - `Err(serenity::Error)` - An action failed (member left the
    ///   guild, missing bot permission, Discord outage)
    pub async fn apply(
        &self,
        user_id: u64,
        actions: &[RoleAction],
    ) -> Result<(), serenity::Error> {
        let member = UserId::new(user_id);

        for action in actions {
            match action {
                RoleAction::GrantWhitelisted => {
                    self.add_role(member, self.whitelisted_role, "Whitelist approved")
                        .await?
                }
                RoleAction::RevokeWhitelisted => {
                    self.remove_role(member, self.whitelisted_role, "Whitelist revoked")
                        .await?
                }
                RoleAction::GrantWaiting => {
                    self.add_role(member, self.waiting_role, "Whitelist under review")
                        .await?
                }
                RoleAction::RemoveWaiting => {
                    self.remove_role(member, self.waiting_role, "Whitelist review finished")
                        .await?
                }
            }
        }

        Ok(())
    }

    async fn add_role(
        &self,
        user: UserId,
        role: RoleId,
        reason: &str,
    ) -> Result<(), serenity::Error> {
        self.http
            .add_member_role(self.guild_id, user, role, Some(reason))
            .await
    }

    async fn remove_role(
        &self,
        user: UserId,
        role: RoleId,
        reason: &str,
    ) -> Result<(), serenity::Error> {
        self.http
            .remove_member_role(self.guild_id, user, role, Some(reason))
            .await
    }
}
