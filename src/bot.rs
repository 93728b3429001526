//! Bot bootstrap: configuration, command registration, dispatcher wiring.

use std::sync::Arc;

use log::{debug, error, info};
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tokio::sync::Mutex;

use crate::chatbot::handle_message;
use crate::config::Config;
use crate::error::Result;
use crate::gemini::{ChatSession, GeminiClient};
use crate::prompts;

/// Shared state injected into every handler invocation.
pub struct AppState {
    pub gemini: GeminiClient,
    pub session: Mutex<ChatSession>,
}

/// Run the Telegram bot until shutdown.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Initializing Gemini client");
    let gemini = GeminiClient::new(config.google_api_key, config.gemini_model);

    let bot = Bot::new(config.bot_token);

    register_command_menu(&bot).await;

    let state = Arc::new(AppState {
        gemini,
        session: Mutex::new(ChatSession::new()),
    });

    let handler = Update::filter_message().endpoint(handle_message);

    info!("Starting dispatcher with long polling");
    Dispatcher::builder(bot, handler)
        .default_handler(|_| async {})
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Register the coaching commands so they show up in the Telegram menu.
/// Registration failure is logged but not fatal.
async fn register_command_menu(bot: &Bot) {
    let mut commands = vec![BotCommand::new(
        "start",
        "Show the welcome message and topic list",
    )];
    commands.extend(
        prompts::TOPICS
            .iter()
            .map(|topic| BotCommand::new(topic.command, topic.description)),
    );

    if let Err(e) = bot.set_my_commands(commands).await {
        error!("Failed to set Telegram bot commands: {e}");
    }
}
