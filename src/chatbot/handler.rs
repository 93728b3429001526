//! Main handler for incoming Telegram messages.

use std::error::Error as StdError;
use std::sync::Arc;

use log::{debug, error, info};
use teloxide::prelude::*;
use teloxide::types::ChatAction;

use crate::bot::AppState;
use crate::formatter::{MAX_MESSAGE_LEN, split_message};
use crate::prompts;

use super::response::send_segments;

type HandlerResult = std::result::Result<(), Box<dyn StdError + Send + Sync>>;

/// Entry point for every incoming message.
///
/// Slash commands are resolved through the static topic table; anything else
/// is relayed to the model verbatim.
pub async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    info!("Received message in chat {}: {}", msg.chat.id, text);

    match parse_command(text) {
        Some("start" | "help") => {
            bot.send_message(msg.chat.id, prompts::START_MESSAGE).await?;
        }
        Some(command) => {
            let Some(prompt) = prompts::prompt_for(command) else {
                debug!("Ignoring unknown command /{command}");
                return Ok(());
            };
            relay(&bot, &msg, &state, prompt).await?;
        }
        None => relay(&bot, &msg, &state, text).await?,
    }

    Ok(())
}

/// Forward `prompt` through the shared chat session and deliver the reply.
async fn relay(bot: &Bot, msg: &Message, state: &AppState, prompt: &str) -> HandlerResult {
    if let Err(e) = bot.send_chat_action(msg.chat.id, ChatAction::Typing).await {
        debug!("Failed to send typing action: {e}");
    }

    let reply = {
        let mut session = state.session.lock().await;
        state.gemini.send_message(&mut session, prompt).await
    };

    match reply {
        Ok(text) => {
            let segments = split_message(&text, MAX_MESSAGE_LEN);
            debug!("Reply split into {} segments", segments.len());
            send_segments(bot, msg.chat.id, &segments).await?;
        }
        Err(e) => {
            error!("Error generating reply for chat {}: {e}", msg.chat.id);
            bot.send_message(msg.chat.id, e.user_message()).await?;
        }
    }

    Ok(())
}

/// Extract the bare command name from a `/command` message, stripping any
/// `@BotName` mention suffix. Returns `None` for plain text.
fn parse_command(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    let command = rest.split_whitespace().next()?.split('@').next()?;
    (!command.is_empty()).then_some(command)
}

#[cfg(test)]
mod tests {
    use super::parse_command;

    #[test]
    fn plain_text_is_not_a_command() {
        assert_eq!(parse_command("hello there"), None);
    }

    #[test]
    fn bare_command_parses() {
        assert_eq!(parse_command("/statistics"), Some("statistics"));
    }

    #[test]
    fn mention_suffix_is_stripped() {
        assert_eq!(parse_command("/nlp@DataGuruBot"), Some("nlp"));
    }

    #[test]
    fn trailing_arguments_are_ignored() {
        assert_eq!(parse_command("/help me please"), Some("help"));
    }

    #[test]
    fn lone_slash_is_not_a_command() {
        assert_eq!(parse_command("/"), None);
    }
}
