use attendance_poll_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_help_command_parsing() {
        let result = Command::parse("/help", "testbot");
        assert_eq!(result.unwrap(), Command::Help);
    }

    #[test]
    fn test_start_command_parsing() {
        let result = Command::parse("/start", "testbot");
        assert_eq!(result.unwrap(), Command::Start);
    }

    #[test]
    fn test_poll_command_parsing() {
        let result = Command::parse("/poll Volleyball, Sunday 10:00", "testbot");
        assert_eq!(
            result.unwrap(),
            Command::Poll("Volleyball, Sunday 10:00".to_string())
        );
    }

    #[test]
    fn test_poll_without_text_parses_empty() {
        let result = Command::parse("/poll", "testbot");
        assert_eq!(result.unwrap(), Command::Poll(String::new()));
    }

    #[test]
    fn test_draft_commands_parsing() {
        assert_eq!(Command::parse("/plan", "testbot").unwrap(), Command::Plan);
        assert_eq!(
            Command::parse("/place Stadium", "testbot").unwrap(),
            Command::Place("Stadium".to_string())
        );
        assert_eq!(
            Command::parse("/date 24.05.2025", "testbot").unwrap(),
            Command::Date("24.05.2025".to_string())
        );
        assert_eq!(
            Command::parse("/time 19:30", "testbot").unwrap(),
            Command::Time("19:30".to_string())
        );
        assert_eq!(Command::parse("/draft", "testbot").unwrap(), Command::Draft);
    }

    #[test]
    fn test_places_command_parsing() {
        assert_eq!(Command::parse("/places", "testbot").unwrap(), Command::Places);
        assert_eq!(
            Command::parse("/removeplace 12", "testbot").unwrap(),
            Command::RemovePlace(12)
        );
    }

    #[test]
    fn test_command_with_bot_mention() {
        let result = Command::parse("/poll@testbot Tennis", "testbot");
        assert_eq!(result.unwrap(), Command::Poll("Tennis".to_string()));
    }

    #[test]
    fn test_invalid_command_parsing() {
        assert!(Command::parse("/invalid", "testbot").is_err());
        assert!(Command::parse("just text", "testbot").is_err());
    }

    #[test]
    fn test_command_for_other_bot() {
        // Addressed to someone else's bot
        assert!(Command::parse("/poll@otherbot Tennis", "testbot").is_err());
    }
}
