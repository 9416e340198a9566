use attendance_poll_bot::utils::datetime::{parse_session_date, parse_session_time};
use attendance_poll_bot::utils::validation::*;
use chrono::{NaiveDate, NaiveTime};

#[cfg(test)]
mod validation_tests {
    use super::*;

    // Poll text validation tests
    #[test]
    fn test_valid_poll_texts() {
        let valid_texts = vec![
            "Football".to_string(),
            "Stadium, 24.05.2025 19:30".to_string(),
            "⚽ Friday game (5x5)!".to_string(),
            "Line one\nLine two".to_string(),
            "A".repeat(MAX_POLL_TEXT_CHARS),
        ];

        for text in valid_texts {
            assert!(validate_poll_text(&text).is_ok(), "Should accept text: {}", text);
        }
    }

    #[test]
    fn test_invalid_poll_texts() {
        let invalid_texts = vec![
            "".to_string(),
            "   ".to_string(),
            "A".repeat(MAX_POLL_TEXT_CHARS + 1),
        ];

        for text in invalid_texts {
            assert!(validate_poll_text(&text).is_err(), "Should reject text: {}", text);
        }
    }

    #[test]
    fn test_poll_text_is_trimmed() {
        assert_eq!(validate_poll_text("  Trip  ").unwrap(), "Trip");
    }

    // Place name validation tests
    #[test]
    fn test_place_names() {
        assert_eq!(validate_place_name(" Central Park ").unwrap(), "Central Park");
        assert!(validate_place_name("").is_err());
        assert!(validate_place_name("Park\nGate 2").is_err());
        assert!(validate_place_name(&"P".repeat(MAX_PLACE_NAME_CHARS + 1)).is_err());
        assert!(validate_place_name(&"P".repeat(MAX_PLACE_NAME_CHARS)).is_ok());
    }

    // Date and time parsing tests
    #[test]
    fn test_session_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(parse_session_date("2025-12-31").unwrap(), expected);
        assert_eq!(parse_session_date("31.12.2025").unwrap(), expected);

        for invalid in ["", "tomorrow", "31/12/2025", "2025-02-30"] {
            assert!(parse_session_date(invalid).is_err(), "Should reject date: {}", invalid);
        }
    }

    #[test]
    fn test_session_times() {
        assert_eq!(
            parse_session_time("07:05").unwrap(),
            NaiveTime::from_hms_opt(7, 5, 0).unwrap()
        );

        for invalid in ["", "25:00", "7pm", "19.30"] {
            assert!(parse_session_time(invalid).is_err(), "Should reject time: {}", invalid);
        }
    }
}
