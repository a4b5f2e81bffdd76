// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sending, editing, and replacing chat messages from views.

use posy_core::{Delivery, PosyError, Reply, View};
use teloxide::prelude::*;
use teloxide::types::{InputFile, LinkPreviewOptions, MessageId, ParseMode};
use teloxide::RequestError;
use tracing::{debug, warn};
use url::Url;

use crate::{keyboard, markdown};

/// Delivers a reply to the chat.
///
/// `pressed` is the message whose button triggered the reply, if any. An
/// edit that Telegram refuses (photo messages, deleted messages) degrades
/// to sending fresh messages and deleting the pressed one.
pub async fn deliver(
    bot: &Bot,
    chat_id: ChatId,
    pressed: Option<MessageId>,
    reply: &Reply,
) -> Result<(), PosyError> {
    if let (Delivery::Edit, Some(message_id), [view]) =
        (reply.delivery, pressed, reply.views.as_slice())
        && view.photo.is_none()
    {
        match edit_view(bot, chat_id, message_id, view).await {
            Ok(()) => return Ok(()),
            Err(e) => warn!(error = %e, "edit failed, replacing the message"),
        }
    }

    for view in &reply.views {
        send_view(bot, chat_id, view).await?;
    }

    if let Some(message_id) = pressed
        && let Err(e) = bot.delete_message(chat_id, message_id).await
    {
        warn!(error = %e, "couldn't delete replaced message");
    }
    Ok(())
}

/// Sends a view as a new message, as a captioned photo when it has one.
///
/// Falls back to a text message when the photo is rejected, and to plain
/// text when MarkdownV2 parsing fails.
pub async fn send_view(bot: &Bot, chat_id: ChatId, view: &View) -> Result<(), PosyError> {
    let text = markdown::render(&view.body);
    let markup = keyboard::to_markup(view);

    if let Some(photo) = &view.photo {
        match Url::parse(photo) {
            Ok(url) => {
                let mut request = bot
                    .send_photo(chat_id, InputFile::url(url))
                    .caption(text.clone())
                    .parse_mode(ParseMode::MarkdownV2);
                if let Some(markup) = markup.clone() {
                    request = request.reply_markup(markup);
                }
                match request.await {
                    Ok(_) => return Ok(()),
                    Err(e) => warn!(error = %e, "sending photo failed, sending text instead"),
                }
            }
            Err(e) => warn!(error = %e, photo = %photo, "invalid photo URL"),
        }
    }

    let mut request = bot
        .send_message(chat_id, text)
        .parse_mode(ParseMode::MarkdownV2);
    if !view.link_preview {
        request = request.link_preview_options(disabled_preview());
    }
    if let Some(markup) = markup.clone() {
        request = request.reply_markup(markup);
    }

    match request.await {
        Ok(_) => Ok(()),
        Err(e) => {
            warn!(error = %e, "MarkdownV2 failed, sending as plain text");
            let mut plain = bot.send_message(chat_id, view.plain_text());
            if let Some(markup) = markup {
                plain = plain.reply_markup(markup);
            }
            plain
                .await
                .map(|_| ())
                .map_err(|e| channel_error("failed to send message", e))
        }
    }
}

/// Replaces the text and keyboard of an existing message.
pub async fn edit_view(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    view: &View,
) -> Result<(), PosyError> {
    let mut request = bot
        .edit_message_text(chat_id, message_id, markdown::render(&view.body))
        .parse_mode(ParseMode::MarkdownV2);
    if !view.link_preview {
        request = request.link_preview_options(disabled_preview());
    }
    if let Some(markup) = keyboard::to_markup(view) {
        request = request.reply_markup(markup);
    }

    match request.await {
        Ok(_) => Ok(()),
        Err(e) if e.to_string().contains("message is not modified") => {
            debug!("message unchanged, nothing to edit");
            Ok(())
        }
        Err(e) => Err(channel_error("failed to edit message", e)),
    }
}

fn disabled_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

fn channel_error(context: &str, e: RequestError) -> PosyError {
    PosyError::Channel {
        message: format!("{context}: {e}"),
        source: Some(Box::new(e)),
    }
}
