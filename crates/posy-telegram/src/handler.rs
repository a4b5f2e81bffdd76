// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command and callback routing.
//!
//! Commands always answer with a new message. Button presses are decoded
//! into an [`Intent`] and answered by editing or replacing the pressed
//! message, as the storefront's [`Reply`] asks.

use std::str::FromStr;
use std::sync::Arc;

use posy_catalog::Storefront;
use posy_core::{Intent, Reply, SessionId, View};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, info, warn};

use crate::delivery;

/// Bot commands.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "open the main menu")]
    Start,
    #[command(description = "browse all bouquets")]
    Products,
    #[command(description = "see our Instagram gallery")]
    Instagram,
    #[command(description = "chat with the florist")]
    Contact,
}

/// One catalog session per chat.
pub fn session_of(chat_id: ChatId) -> SessionId {
    SessionId(chat_id.0.to_string())
}

/// The view answering a command.
pub async fn command_view(
    storefront: &Storefront,
    command: &Command,
    session: &SessionId,
    first_name: &str,
) -> View {
    match command {
        Command::Start => storefront.main_menu(first_name, false),
        Command::Products => storefront.product_list(session).await,
        Command::Instagram => storefront.instagram_view(),
        Command::Contact => storefront.contact_view(),
    }
}

/// The reply to a button press carrying `data`.
pub async fn callback_reply(
    storefront: &Storefront,
    data: &str,
    session: &SessionId,
    first_name: &str,
) -> Reply {
    match Intent::from_str(data) {
        Ok(intent) => storefront.handle(session, &intent, first_name).await,
        Err(e) => {
            warn!(error = %e, "unrecognized callback data");
            Reply::edit(storefront.invalid_request())
        }
    }
}

pub async fn on_command(
    bot: Bot,
    msg: Message,
    command: Command,
    storefront: Arc<Storefront>,
) -> ResponseResult<()> {
    let session = session_of(msg.chat.id);
    let first_name = msg
        .from
        .as_ref()
        .map(|user| user.first_name.as_str())
        .unwrap_or("there");
    info!(chat_id = msg.chat.id.0, command = ?command, "command received");

    let view = command_view(&storefront, &command, &session, first_name).await;
    if let Err(e) = delivery::send_view(&bot, msg.chat.id, &view).await {
        error!(error = %e, chat_id = msg.chat.id.0, "failed to answer command");
    }
    Ok(())
}

pub async fn on_callback(
    bot: Bot,
    query: CallbackQuery,
    storefront: Arc<Storefront>,
) -> ResponseResult<()> {
    // Stops the client-side spinner; failures are harmless.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        debug!(error = %e, "failed to answer callback query");
    }

    let (Some(data), Some(message)) = (query.data.as_deref(), query.message.as_ref()) else {
        debug!("ignoring callback without data or message");
        return Ok(());
    };
    let chat_id = message.chat().id;
    let session = session_of(chat_id);
    debug!(chat_id = chat_id.0, data, "callback received");

    let reply = callback_reply(&storefront, data, &session, &query.from.first_name).await;
    if let Err(e) = delivery::deliver(&bot, chat_id, Some(message.id()), &reply).await {
        error!(error = %e, chat_id = chat_id.0, "failed to deliver reply");
    }
    Ok(())
}
