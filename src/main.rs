//! TaxonBuddy Telegram Bot
//!
//! Main application entry point

use std::net::SocketAddr;
use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands as TeloxideBotCommands;
use teloxide::{prelude::*, types::Update};
use tracing::{error, info, warn};

use TaxonBuddy::{
    config::Settings,
    handlers::{
        commands::{help, start},
        inline::handle_inline_query,
    },
    services::ServiceFactory,
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive until shutdown
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting TaxonBuddy Telegram Bot...");

    // Initialize bot and services
    let bot = Bot::new(&settings.bot.token);
    let services = Arc::new(ServiceFactory::new(settings.clone())?);

    if let Err(e) = bot.set_my_commands(BotCommands::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    // Create the handler
    let handler = create_handler();

    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![services])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("TaxonBuddy bot is ready!");

    match (settings.webhook_url(), settings.bot.port) {
        (Some(webhook_url), Some(port)) => {
            info!(url = %webhook_url, port = port, "Starting bot in webhook mode...");
            let address = SocketAddr::from(([0, 0, 0, 0], port));
            let listener =
                webhooks::axum(bot, webhooks::Options::new(address, webhook_url.parse()?)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        _ => {
            info!("Webhook not configured, starting bot in polling mode...");
            dispatcher.dispatch().await;
        }
    }

    info!("TaxonBuddy bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry()
        .branch(
            // Handle commands
            Update::filter_message()
                .filter_command::<BotCommands>()
                .endpoint(handle_commands),
        )
        .branch(
            // Handle inline taxonomy searches
            Update::filter_inline_query().endpoint(handle_inline),
        )
}

#[derive(TeloxideBotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "TaxonBuddy Bot Commands")]
enum BotCommands {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show help information")]
    Help,
}

/// Handle bot commands
async fn handle_commands(bot: Bot, msg: Message, cmd: BotCommands) -> HandlerResult {
    let result = match cmd {
        BotCommands::Start => start::handle_start(bot, msg).await,
        BotCommands::Help => help::handle_help(bot, msg).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle inline queries
async fn handle_inline(
    bot: Bot,
    query: teloxide::types::InlineQuery,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let services = (*services).clone();
    let update_context = format!(
        "inline query {} from user {}: {:?}",
        query.id, query.from.id, query.query
    );

    if let Err(e) = handle_inline_query(bot, query, services).await {
        warn!(update = %update_context, error = %e, "Update caused error");
        return Err(e.into());
    }

    Ok(())
}
