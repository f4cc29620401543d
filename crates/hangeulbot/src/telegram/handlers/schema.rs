//! Dispatcher schema and update handlers

use hangeulcore::Event;
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, MaybeInaccessibleMessage, Message};

use super::effects::{apply_effects, Origin};
use super::types::{event_from_message, HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and can be used in integration tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(message_handler(deps_messages))
        .branch(callback_handler(deps_callback))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                match cmd {
                    Command::Start => handle_start(&bot, &deps, &msg).await,
                }
            }
        })
}

fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let deps = deps.clone();
        async move { handle_message(&bot, &deps, &msg).await }
    })
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move { handle_callback(&bot, &deps, &q).await }
    })
}

fn message_origin(msg: &Message) -> Origin {
    Origin {
        chat_id: msg.chat.id,
        message_id: Some(msg.id),
    }
}

/// `/start`: main menu as a new message
pub async fn handle_start(bot: &Bot, deps: &HandlerDeps, msg: &Message) -> Result<(), HandlerError> {
    log::info!("/start in chat {}", msg.chat.id);
    let effects = deps.router.handle(Event::Start);
    apply_effects(bot, deps, message_origin(msg), effects).await
}

/// Text and photo messages
pub async fn handle_message(bot: &Bot, deps: &HandlerDeps, msg: &Message) -> Result<(), HandlerError> {
    let Some(event) = event_from_message(msg) else {
        return Ok(());
    };
    let effects = deps.router.handle(event);
    apply_effects(bot, deps, message_origin(msg), effects).await
}

/// Inline button presses. The callback query is always answered, even when
/// applying the effects failed, so the client stops showing a spinner.
pub async fn handle_callback(bot: &Bot, deps: &HandlerDeps, q: &CallbackQuery) -> Result<(), HandlerError> {
    let data = q.data.clone().unwrap_or_default();
    let origin = match q.message.as_ref() {
        Some(MaybeInaccessibleMessage::Regular(message)) => Origin {
            chat_id: message.chat.id,
            message_id: Some(message.id),
        },
        // Too old to edit or delete; screens go out as new messages.
        Some(message) => Origin {
            chat_id: message.chat().id,
            message_id: None,
        },
        None => Origin {
            chat_id: q.from.id.into(),
            message_id: None,
        },
    };

    log::debug!("Callback {:?} in chat {}", data, origin.chat_id);
    let effects = deps.router.handle(Event::Action(data));
    let result = apply_effects(bot, deps, origin, effects).await;

    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        log::warn!("Failed to answer callback query: {}", e);
    }

    result
}
