use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveTime};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Parses a session date given as `2025-05-24` or `24.05.2025`.
pub fn parse_session_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .ok_or_else(|| anyhow!("Unrecognized date '{}', use YYYY-MM-DD or DD.MM.YYYY", input))
}

/// Parses a session time given as `19:30`.
pub fn parse_session_time(input: &str) -> Result<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M")
        .map_err(|_| anyhow!("Unrecognized time '{}', use HH:MM", input))
}
