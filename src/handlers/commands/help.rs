//! Help command handler

use teloxide::{prelude::*, types::Message, Bot};

use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message) -> Result<()> {
    let help_text = "🌿 TaxonBuddy Help\n\n\
        /start - Start the bot\n\
        /help - Show this help message\n\n\
        Inline search: type my username followed by a species name \
        in any chat, e.g. \"@TaxonBuddyBot oak\". Results page as you \
        scroll; pick one to send it.";

    bot.send_message(msg.chat.id, help_text).await?;
    Ok(())
}
