use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use super::HandlerResult;
use crate::bot::commands::{places, poll, session, Command};
use crate::database::PollStore;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    store: Arc<PollStore>,
) -> HandlerResult {
    // Keep display names current for mentions in poll messages
    if let Some(user) = msg.from() {
        store.upsert_user(user.id.0 as i64, &user.full_name()).await?;
    }

    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "👋 Welcome to the attendance poll bot!\n\nUse /poll <text> to ask who is coming.\nUse /help to see all commands.",
            ).await?;
        }
        Command::Poll(text) => poll::handle_poll(bot, msg, text, store).await?,
        Command::Plan => session::handle_plan(bot, msg, store).await?,
        Command::Place(place) => session::handle_place(bot, msg, place, store).await?,
        Command::Date(date) => session::handle_date(bot, msg, date, store).await?,
        Command::Time(time) => session::handle_time(bot, msg, time, store).await?,
        Command::Draft => session::handle_draft(bot, msg, store).await?,
        Command::AddPlace(name) => places::handle_add_place(bot, msg, name, store).await?,
        Command::Places => places::handle_places(bot, msg, store).await?,
        Command::RemovePlace(id) => places::handle_remove_place(bot, msg, id, store).await?,
    }
    Ok(())
}
