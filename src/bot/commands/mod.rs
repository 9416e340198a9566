pub mod places;
pub mod poll;
pub mod session;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Attendance poll bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Create a poll: /poll <text>, or just /poll to use your /plan draft")]
    Poll(String),
    #[command(description = "Start a new place/date/time draft")]
    Plan,
    #[command(description = "Set the draft place (name or place id)")]
    Place(String),
    #[command(description = "Set the draft date (YYYY-MM-DD or DD.MM.YYYY)")]
    Date(String),
    #[command(description = "Set the draft time (HH:MM)")]
    Time(String),
    #[command(description = "Show your current draft")]
    Draft,
    #[command(description = "Add a known place (admins only)")]
    AddPlace(String),
    #[command(description = "List known places")]
    Places,
    #[command(description = "Remove a known place by id (admins only)")]
    RemovePlace(i64),
}
