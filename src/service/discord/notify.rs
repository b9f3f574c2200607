//! Direct-message notifications for whitelist adjudication.

use serenity::{
    all::{CreateEmbed, CreateMessage, Timestamp, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::model::whitelist::{WhitelistRequest, WhitelistStatus};

/// Sends applicants a DM when their request changes state.
pub struct WhitelistNotifyService {
    http: Arc<Http>,
}

impl WhitelistNotifyService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// DMs the applicant about the current state of their request.
    ///
    /// Fails when the member has DMs disabled or shares no guild with the
    /// bot anymore; the caller reports that back instead of retrying.
    pub async fn notify_status_change(
        &self,
        request: &WhitelistRequest,
    ) -> Result<(), serenity::Error> {
        let (summary, color) = match request.status {
            WhitelistStatus::Pending => ("Vaše žádost o whitelist čeká na vyřízení.", 0xf39c12),
            WhitelistStatus::Approved => (
                "Vaše žádost o whitelist byla schválena. Vítejte na serveru!",
                0x2ecc71,
            ),
            WhitelistStatus::Rejected => ("Vaše žádost o whitelist byla zamítnuta.", 0xe74c3c),
        };

        let embed = CreateEmbed::new()
            .title(format!("Žádost {}", request.serial_number))
            .description(summary)
            .color(color)
            .timestamp(
                Timestamp::from_unix_timestamp(request.updated_at.timestamp())
                    .unwrap_or_else(|_| Timestamp::now()),
            );

        let channel = UserId::new(request.user_id)
            .create_dm_channel(&self.http)
            .await?;

        channel
            .id
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }
}
