//! Telegram glue: commands, callback buttons and inline sharing.

pub mod commands;
pub mod handlers;
