use std::env;

use log::{debug, error, info};

use crate::error::Result;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub google_api_key: String,
    pub gemini_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let bot_token = env::var("BOT_TOKEN").map_err(|e| {
            error!("Failed to load BOT_TOKEN from environment: {e}");
            e
        })?;

        let google_api_key = env::var("GOOGLE_API_KEY").map_err(|e| {
            error!("Failed to load GOOGLE_API_KEY from environment: {e}");
            e
        })?;

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        info!("Configuration loaded successfully");
        debug!("Bot token length: {} characters", bot_token.len());
        debug!("Google API key length: {} characters", google_api_key.len());
        debug!("Gemini model: {gemini_model}");

        Ok(Self {
            bot_token,
            google_api_key,
            gemini_model,
        })
    }
}
