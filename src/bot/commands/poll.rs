use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::handlers::HandlerResult;
use crate::database::models::MessageLocation;
use crate::database::PollStore;
use crate::poll::{render_markup, render_text};
use crate::utils::logging::{log_command_error, log_command_start, log_validation_error};
use crate::utils::validation::validate_poll_text;

const USAGE: &str = "Usage: /poll <text>\nOr fill a draft with /plan, /place, /date and /time, then send /poll alone.";

/// Creates a poll, posts it into the chat and remembers the message.
pub async fn handle_poll(bot: Bot, msg: Message, text: String, store: Arc<PollStore>) -> HandlerResult {
    let chat_id = msg.chat.id.0;
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;
    let username = user.full_name();
    log_command_start("poll", &username, user_id, chat_id, Some(&text));

    // Without text the poll comes from the user's draft
    let text = if text.trim().is_empty() {
        match store.get_session(user_id).await {
            Ok(draft) => match draft.poll_text() {
                Some(text) => text,
                None => {
                    bot.send_message(msg.chat.id, "Your draft is incomplete. Check it with /draft.")
                        .await?;
                    return Ok(());
                }
            },
            Err(e) if e.is_not_found() => {
                bot.send_message(msg.chat.id, USAGE).await?;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        text
    };

    let text = match validate_poll_text(&text) {
        Ok(text) => text,
        Err(e) => {
            log_validation_error("poll", &text, &e.to_string(), user_id);
            bot.send_message(msg.chat.id, format!("❌ {e}")).await?;
            return Ok(());
        }
    };

    let poll_id = store.create_poll(&text).await?;
    let view = store.get_poll(poll_id).await?;

    let sent = bot
        .send_message(msg.chat.id, render_text(&view))
        .parse_mode(ParseMode::MarkdownV2)
        .reply_markup(render_markup(poll_id))
        .await;

    match sent {
        Ok(sent) => {
            store
                .bind_message(poll_id, &MessageLocation::chat(sent.chat.id.0, sent.id.0))
                .await?;
        }
        Err(e) => {
            log_command_error("poll", &username, user_id, chat_id, &e.to_string());
            return Err(e.into());
        }
    }

    Ok(())
}
