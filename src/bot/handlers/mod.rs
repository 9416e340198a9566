pub mod callback;
pub mod inline;
pub mod message;

use std::sync::Arc;
use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
    types::{ChosenInlineResult, InlineQuery},
};

use crate::bot::commands::Command;
use crate::database::PollStore;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

pub struct BotHandler {
    pub store: Arc<PollStore>,
}

impl BotHandler {
    pub fn new(store: Arc<PollStore>) -> Self {
        Self { store }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let store_cmd = self.store.clone();
        let store_callback = self.store.clone();
        let store_inline = self.store.clone();
        let store_chosen = self.store.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let store = store_cmd.clone();
                        async move { message::command_handler(bot, msg, cmd, store).await }
                    }),
            )
            .branch(Update::filter_callback_query().endpoint(
                move |bot: Bot, q: CallbackQuery| {
                    let store = store_callback.clone();
                    async move { callback::callback_handler(bot, q, store).await }
                },
            ))
            .branch(Update::filter_inline_query().endpoint(
                move |bot: Bot, q: InlineQuery| {
                    let store = store_inline.clone();
                    async move { inline::inline_query_handler(bot, q, store).await }
                },
            ))
            .branch(Update::filter_chosen_inline_result().endpoint(
                move |r: ChosenInlineResult| {
                    let store = store_chosen.clone();
                    async move { inline::chosen_inline_handler(r, store).await }
                },
            ))
    }
}
