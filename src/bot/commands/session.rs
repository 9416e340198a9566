use std::sync::Arc;
use teloxide::prelude::*;

use crate::bot::handlers::HandlerResult;
use crate::database::models::SessionDraft;
use crate::database::{PollStore, StoreResult};
use crate::utils::datetime::{parse_session_date, parse_session_time};
use crate::utils::logging::{log_command_start, log_validation_error};
use crate::utils::validation::validate_place_name;

const NO_DRAFT: &str = "You have no draft yet. Start one with /plan.";

fn sender_id(msg: &Message) -> Option<i64> {
    msg.from().map(|u| u.id.0 as i64)
}

fn sender_name(msg: &Message) -> String {
    msg.from().map(|u| u.full_name()).unwrap_or_default()
}

/// Confirms a draft update, or hints at /plan when there is no draft.
async fn confirm(bot: &Bot, msg: &Message, result: StoreResult<()>, confirmation: String) -> HandlerResult {
    match result {
        Ok(()) => {
            bot.send_message(msg.chat.id, confirmation).await?;
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            bot.send_message(msg.chat.id, NO_DRAFT).await?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn describe(draft: &SessionDraft) -> String {
    let place = draft.place.as_deref().unwrap_or("not set");
    let date = draft
        .date
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "not set".to_string());
    let time = draft
        .time
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "not set".to_string());
    format!("Place: {place}\nDate: {date}\nTime: {time}")
}

pub async fn handle_plan(bot: Bot, msg: Message, store: Arc<PollStore>) -> HandlerResult {
    let Some(user_id) = sender_id(&msg) else {
        return Ok(());
    };
    log_command_start("plan", &sender_name(&msg), user_id, msg.chat.id.0, None);

    store.start_session(user_id).await?;

    let places = store.list_places().await?;
    let mut reply = "New draft started. Set it with /place, /date and /time.".to_string();
    if !places.is_empty() {
        reply.push_str("\n\nKnown places:");
        for (id, name) in &places {
            reply.push_str(&format!("\n{id}. {name}"));
        }
    }
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// Accepts either a free-form name or the id of a known place.
pub async fn handle_place(bot: Bot, msg: Message, input: String, store: Arc<PollStore>) -> HandlerResult {
    let Some(user_id) = sender_id(&msg) else {
        return Ok(());
    };

    let known = match input.trim().parse::<i64>() {
        Ok(id) => store.list_places().await?.remove(&id),
        Err(_) => None,
    };
    let place = match known {
        Some(name) => name,
        None => match validate_place_name(&input) {
            Ok(name) => name,
            Err(e) => {
                log_validation_error("place", &input, &e.to_string(), user_id);
                bot.send_message(msg.chat.id, format!("❌ {e}")).await?;
                return Ok(());
            }
        },
    };

    let result = store.set_session_place(user_id, &place).await;
    confirm(&bot, &msg, result, format!("Place set to {place}")).await
}

pub async fn handle_date(bot: Bot, msg: Message, input: String, store: Arc<PollStore>) -> HandlerResult {
    let Some(user_id) = sender_id(&msg) else {
        return Ok(());
    };

    let date = match parse_session_date(&input) {
        Ok(date) => date,
        Err(e) => {
            log_validation_error("date", &input, &e.to_string(), user_id);
            bot.send_message(msg.chat.id, format!("❌ {e}")).await?;
            return Ok(());
        }
    };

    let result = store.set_session_date(user_id, date).await;
    confirm(&bot, &msg, result, format!("Date set to {}", date.format("%d.%m.%Y"))).await
}

pub async fn handle_time(bot: Bot, msg: Message, input: String, store: Arc<PollStore>) -> HandlerResult {
    let Some(user_id) = sender_id(&msg) else {
        return Ok(());
    };

    let time = match parse_session_time(&input) {
        Ok(time) => time,
        Err(e) => {
            log_validation_error("time", &input, &e.to_string(), user_id);
            bot.send_message(msg.chat.id, format!("❌ {e}")).await?;
            return Ok(());
        }
    };

    let result = store.set_session_time(user_id, time).await;
    confirm(&bot, &msg, result, format!("Time set to {}", time.format("%H:%M"))).await
}

pub async fn handle_draft(bot: Bot, msg: Message, store: Arc<PollStore>) -> HandlerResult {
    let Some(user_id) = sender_id(&msg) else {
        return Ok(());
    };

    match store.get_session(user_id).await {
        Ok(draft) => {
            let mut reply = describe(&draft);
            if draft.is_complete() {
                reply.push_str("\n\nReady: send /poll to post it.");
            }
            bot.send_message(msg.chat.id, reply).await?;
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            bot.send_message(msg.chat.id, NO_DRAFT).await?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
