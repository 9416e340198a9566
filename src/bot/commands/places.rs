use std::sync::Arc;
use teloxide::prelude::*;

use crate::bot::handlers::{HandlerError, HandlerResult};
use crate::database::{PollStore, StoreError};
use crate::utils::logging::{log_command_start, log_validation_error};
use crate::utils::validation::validate_place_name;

/// Unknown users are simply not admins.
async fn is_admin(store: &PollStore, user_id: i64) -> Result<bool, StoreError> {
    match store.get_user(user_id).await {
        Ok(user) => Ok(user.is_admin),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Returns the sender when they may manage places, replying otherwise.
async fn require_admin(bot: &Bot, msg: &Message, store: &PollStore) -> Result<Option<(i64, String)>, HandlerError> {
    let Some(user) = msg.from() else {
        return Ok(None);
    };
    let user_id = user.id.0 as i64;
    if is_admin(store, user_id).await? {
        Ok(Some((user_id, user.full_name())))
    } else {
        bot.send_message(msg.chat.id, "❌ Only admins can manage places.").await?;
        Ok(None)
    }
}

pub async fn handle_add_place(bot: Bot, msg: Message, name: String, store: Arc<PollStore>) -> HandlerResult {
    let Some((user_id, username)) = require_admin(&bot, &msg, &store).await? else {
        return Ok(());
    };
    log_command_start("addplace", &username, user_id, msg.chat.id.0, Some(&name));

    let name = match validate_place_name(&name) {
        Ok(name) => name,
        Err(e) => {
            log_validation_error("addplace", &name, &e.to_string(), user_id);
            bot.send_message(msg.chat.id, format!("❌ {e}")).await?;
            return Ok(());
        }
    };

    let reply = if store.add_place(&name).await? {
        format!("✅ Added place {name}")
    } else {
        format!("Place {name} already exists")
    };
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

pub async fn handle_places(bot: Bot, msg: Message, store: Arc<PollStore>) -> HandlerResult {
    let places = store.list_places().await?;
    let reply = if places.is_empty() {
        "No places yet.".to_string()
    } else {
        places
            .iter()
            .map(|(id, name)| format!("{id}. {name}"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

pub async fn handle_remove_place(bot: Bot, msg: Message, id: i64, store: Arc<PollStore>) -> HandlerResult {
    let Some((user_id, username)) = require_admin(&bot, &msg, &store).await? else {
        return Ok(());
    };
    log_command_start("removeplace", &username, user_id, msg.chat.id.0, Some(&id.to_string()));

    let reply = if store.remove_place(id).await? {
        format!("✅ Removed place {id}")
    } else {
        format!("No place with id {id}")
    };
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}
