use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use strum::IntoEnumIterator;
use teloxide::prelude::*;
use teloxide::update_listeners::{webhooks, Polling};

use hangeulbot::cli::{Cli, Commands};
use hangeulbot::core::{config, init_logger, log_bot_configuration, AppError};
use hangeulbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use hangeulcore::{BookCode, CollectionId, ContentStore, Router};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics from handler tasks instead of losing them on stderr
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));

    // Load environment variables from .env if present, before any config is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH, *config::LOG_LEVEL)?;

    match cli.command {
        Some(Commands::Run { webhook }) => {
            log::info!("Running bot (webhook: {})", webhook);
            run_bot(webhook).await
        }
        Some(Commands::CheckContent) => check_content(),
        None => {
            let webhook = config::webhook::WEBHOOK_URL.is_some();
            log::info!("No command specified, running bot (webhook: {})", webhook);
            run_bot(webhook).await
        }
    }
}

/// Validates the embedded content and logs the size of every collection.
fn check_content() -> Result<()> {
    let store = ContentStore::builtin()?;

    let ids = std::iter::once(CollectionId::Letters).chain(BookCode::iter().map(CollectionId::Grammar));
    for id in ids {
        log::info!("{}: {} entries", id, store.collection(id).len());
    }
    log::info!("✅ Content is valid");
    Ok(())
}

async fn run_bot(use_webhook: bool) -> Result<()> {
    log::info!("Starting bot...");
    log_bot_configuration();

    let store = Arc::new(ContentStore::builtin()?);
    let router = Arc::new(Router::new(store, config::links::current()));

    let bot = create_bot()?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let deps = HandlerDeps::new(router, ChatId(*config::admin::ADMIN_ID));
    let handler = schema(deps);

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .enable_ctrlc_handler()
        .build();

    if use_webhook {
        let url = config::webhook::WEBHOOK_URL.clone().ok_or_else(|| {
            AppError::Config("webhook mode needs WEBHOOK_URL or RENDER_EXTERNAL_HOSTNAME".to_string())
        })?;
        let url = url::Url::parse(&url)?;
        let address: SocketAddr = format!("{}:{}", *config::webhook::WEBAPP_HOST, *config::webhook::PORT)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid webhook bind address: {}", e)))?;

        log::info!("Starting bot in webhook mode at {} (listening on {})", url, address);
        let listener = webhooks::axum(bot, webhooks::Options::new(address, url).drop_pending_updates()).await?;
        log::info!("✅ Webhook set");

        dispatcher
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the webhook listener"),
            )
            .await;
    } else {
        log::info!("Starting bot in long polling mode");
        let listener = Polling::builder(bot).drop_pending_updates().build();

        dispatcher
            .dispatch_with_listener(
                listener,
                LoggingErrorHandler::with_custom_text("An error from the update listener"),
            )
            .await;
    }

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
