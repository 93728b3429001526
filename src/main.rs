#[tokio::main]
async fn main() -> dataguru::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("dataguru=info,teloxide=warn"),
    )
    .init();
    log::info!("Starting dataguru Telegram bot");

    match dataguru::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {e}");
            Err(e)
        }
    }
}
