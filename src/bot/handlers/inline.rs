use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InputMessageContent, InputMessageContentText, ParseMode,
};

use super::HandlerResult;
use crate::database::models::MessageLocation;
use crate::database::PollStore;
use crate::poll::{render_markup, render_text, PollId};

/// Answers a share request. The query text is the poll id put there by the
/// Share button.
pub async fn inline_query_handler(bot: Bot, q: InlineQuery, store: Arc<PollStore>) -> HandlerResult {
    let mut results = Vec::new();

    if let Ok(poll_id) = q.query.trim().parse::<PollId>() {
        match store.get_poll(poll_id).await {
            Ok(view) => {
                let content = InputMessageContent::Text(
                    InputMessageContentText::new(render_text(&view))
                        .parse_mode(ParseMode::MarkdownV2),
                );
                let article =
                    InlineQueryResultArticle::new(poll_id.to_string(), view.poll.text.clone(), content)
                        .description(format!(
                            "{} coming, {} not",
                            view.votes.attending.len(),
                            view.votes.not_attending.len()
                        ))
                        .reply_markup(render_markup(poll_id));
                results.push(InlineQueryResult::Article(article));
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!("Inline query for unknown poll {}", poll_id);
            }
            Err(e) => return Err(e.into()),
        }
    }

    // Vote counts change, so answers must not be cached
    bot.answer_inline_query(q.id, results).cache_time(0).await?;
    Ok(())
}

/// Remembers where an inline result landed so votes can refresh it.
pub async fn chosen_inline_handler(r: ChosenInlineResult, store: Arc<PollStore>) -> HandlerResult {
    let Ok(poll_id) = r.result_id.parse::<PollId>() else {
        tracing::warn!("Chosen inline result with foreign id '{}'", r.result_id);
        return Ok(());
    };

    match r.inline_message_id {
        Some(inline_message_id) => {
            store
                .bind_message(poll_id, &MessageLocation::inline(inline_message_id))
                .await?;
        }
        None => tracing::warn!(
            "Chosen inline result for poll {} without inline_message_id",
            poll_id
        ),
    }
    Ok(())
}
