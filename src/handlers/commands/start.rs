//! Start command handler
//!
//! Handles the /start command with a static greeting.

use teloxide::{prelude::*, types::Message, Bot};
use tracing::debug;

use crate::utils::errors::Result;

/// Greeting sent in reply to /start
const GREETING: &str = "Hello! I'm TaxonBuddy 🌿\n\n\
    I search the iNaturalist species taxonomy in inline mode: \
    type my username followed by a species name in any chat \
    and pick a result from the list.";

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message) -> Result<()> {
    debug!(chat_id = ?msg.chat.id, "Processing /start command");

    bot.send_message(msg.chat.id, GREETING).await?;
    Ok(())
}
