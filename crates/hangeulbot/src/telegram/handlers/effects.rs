//! Application of router effects through the Bot API

use hangeulcore::{Keyboard, PlainReply, RouterEffect, Screen};
use teloxide::prelude::*;
use teloxide::types::{LinkPreviewOptions, MessageId, ReplyParameters};
use teloxide::{ApiError, RequestError};

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::keyboard::{inline_markup, reply_markup};
use crate::telegram::notifications::notify_admin_premium;

/// Where an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub chat_id: ChatId,
    /// The user's message, or the message hosting the pressed button.
    /// `None` when Telegram no longer gives access to it.
    pub message_id: Option<MessageId>,
}

/// Performs the effects in order. Stops at the first failed user-facing send;
/// admin forwarding failures are only logged.
pub async fn apply_effects(
    bot: &Bot,
    deps: &HandlerDeps,
    origin: Origin,
    effects: Vec<RouterEffect>,
) -> Result<(), HandlerError> {
    for effect in effects {
        match effect {
            RouterEffect::RenderNewScreen(screen) => send_screen(bot, origin.chat_id, &screen).await?,
            RouterEffect::EditCurrentScreen(screen) => edit_screen(bot, origin, &screen).await?,
            RouterEffect::SendPlainReply(reply) => send_plain(bot, origin, reply).await?,
            RouterEffect::DeleteAndSendMain(screen) => {
                send_screen(bot, origin.chat_id, &screen).await?;
                if let Some(message_id) = origin.message_id {
                    if let Err(e) = bot.delete_message(origin.chat_id, message_id).await {
                        log::warn!("Failed to delete message {} in chat {}: {}", message_id.0, origin.chat_id, e);
                    }
                }
            }
            RouterEffect::ForwardToAdmin(record) => notify_admin_premium(bot, deps.admin_chat, &record).await,
        }
    }
    Ok(())
}

async fn send_screen(bot: &Bot, chat_id: ChatId, screen: &Screen) -> Result<(), RequestError> {
    bot.send_message(chat_id, screen.text.clone())
        .reply_markup(reply_markup(&screen.keyboard))
        .await?;
    Ok(())
}

async fn edit_screen(bot: &Bot, origin: Origin, screen: &Screen) -> Result<(), RequestError> {
    // Reply keyboards cannot be attached by an edit.
    let message_id = match (origin.message_id, &screen.keyboard) {
        (Some(message_id), Keyboard::Inline { .. }) => message_id,
        _ => return send_screen(bot, origin.chat_id, screen).await,
    };

    match bot
        .edit_message_text(origin.chat_id, message_id, screen.text.clone())
        .reply_markup(inline_markup(&screen.keyboard))
        .await
    {
        Ok(_) => Ok(()),
        // Pressing the same button twice
        Err(RequestError::Api(ApiError::MessageNotModified)) => {
            log::debug!("Message {} not modified", message_id.0);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

async fn send_plain(bot: &Bot, origin: Origin, reply: PlainReply) -> Result<(), RequestError> {
    let mut request = bot.send_message(origin.chat_id, reply.text);
    if reply.quote {
        if let Some(message_id) = origin.message_id {
            request = request.reply_parameters(ReplyParameters::new(message_id));
        }
    }
    if !reply.link_preview {
        request = request.link_preview_options(LinkPreviewOptions {
            is_disabled: true,
            url: None,
            prefer_small_media: false,
            prefer_large_media: false,
            show_above_text: false,
        });
    }
    request.await?;
    Ok(())
}
