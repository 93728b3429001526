//! Reply delivery to Telegram.

use log::info;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tokio::time::{Duration, sleep};

use crate::error::Result;

/// Pause between consecutive outbound messages of one reply.
const SEND_PAUSE: Duration = Duration::from_secs(1);

/// Send each segment of a reply as its own MarkdownV2 message, paced so a
/// multi-part reply does not hit Telegram's flood limits.
pub async fn send_segments(bot: &Bot, chat_id: ChatId, segments: &[String]) -> Result<()> {
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            sleep(SEND_PAUSE).await;
        }

        bot.send_message(chat_id, segment)
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
        info!(
            "Sent segment {}/{} to chat {chat_id}",
            index + 1,
            segments.len()
        );
    }

    Ok(())
}
