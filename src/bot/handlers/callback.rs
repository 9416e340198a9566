use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode};

use super::HandlerResult;
use crate::database::models::MessageLocation;
use crate::database::{PollStore, StoreError};
use crate::poll::{render_markup, render_text, split_callback, PollId, Voter};
use crate::utils::logging::{log_render_failure, log_store_error};

/// The message the pressed button belongs to.
fn pressed_location(q: &CallbackQuery) -> Option<MessageLocation> {
    q.message
        .as_ref()
        .map(|m| MessageLocation::chat(m.chat.id.0, m.id.0))
        .or_else(|| q.inline_message_id.clone().map(MessageLocation::inline))
}

pub async fn callback_handler(bot: Bot, q: CallbackQuery, store: Arc<PollStore>) -> HandlerResult {
    let voter = Voter::from(&q.from);
    let Some(data) = q.data.clone() else {
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    tracing::info!(
        "Callback received: '{}' from user {} ({})",
        data, voter.display_name, voter.uid
    );

    let Some((poll_id, option_id)) = split_callback(&data) else {
        tracing::warn!("Malformed callback data '{}'", data);
        bot.answer_callback_query(q.id).text("Unknown button").await?;
        return Ok(());
    };

    match store.record_vote_by_id(poll_id, &voter, option_id).await {
        Ok(_) => {}
        Err(StoreError::NotFound { .. }) => {
            bot.answer_callback_query(q.id)
                .text("This poll no longer exists")
                .await?;
            return Ok(());
        }
        Err(StoreError::InvalidOption(_)) => {
            bot.answer_callback_query(q.id).text("Unknown button").await?;
            return Ok(());
        }
        Err(e) => {
            log_store_error("record_vote", &e.to_string(), Some(&data));
            bot.answer_callback_query(q.id)
                .text("Failed to save your vote")
                .await?;
            return Ok(());
        }
    }

    // Messages posted before their binding was stored still get refreshed
    if let Some(location) = pressed_location(&q) {
        store.bind_message(poll_id, &location).await?;
    }

    bot.answer_callback_query(q.id).await?;
    refresh_poll_messages(&bot, &store, poll_id).await
}

/// Re-renders the poll into every message it was posted to.
pub async fn refresh_poll_messages(bot: &Bot, store: &PollStore, poll_id: PollId) -> HandlerResult {
    let view = store.get_poll(poll_id).await?;
    let text = render_text(&view);
    let markup = render_markup(poll_id);

    for location in store.list_bindings(poll_id).await? {
        let result = match &location {
            MessageLocation::Chat {
                chat_id,
                message_id,
            } => bot
                .edit_message_text(ChatId(*chat_id), MessageId(*message_id), text.clone())
                .parse_mode(ParseMode::MarkdownV2)
                .reply_markup(markup.clone())
                .await
                .map(|_| ()),
            MessageLocation::Inline { inline_message_id } => bot
                .edit_message_text_inline(inline_message_id.clone(), text.clone())
                .parse_mode(ParseMode::MarkdownV2)
                .reply_markup(markup.clone())
                .await
                .map(|_| ()),
        };

        // "message is not modified" lands here too and is harmless
        if let Err(e) = result {
            log_render_failure(poll_id, &location.to_string(), &e.to_string());
        }
    }

    Ok(())
}
