//! Helpers for building Telegram MarkdownV2 text.
//!
//! Everything that is not markup must go through [`escape_markdown`], or
//! Telegram rejects the whole message.

/// Escapes markdown special characters for MarkdownV2 parsing mode
///
/// # Example
/// ```
/// use attendance_poll_bot::utils::markdown::escape_markdown;
///
/// let escaped = escape_markdown("Football (5x5) at 19:00!");
/// assert_eq!(escaped, "Football \\(5x5\\) at 19:00\\!");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '='
                | '|' | '{' | '}' | '.' | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Wraps text in an inline code span. Only backtick and backslash need
/// escaping inside it.
pub fn code(text: &str) -> String {
    format!("`{}`", text.replace('\\', "\\\\").replace('`', "\\`"))
}

/// A clickable mention that opens the user's profile.
pub fn user_mention(uid: i64, name: &str) -> String {
    format!("[{}](tg://user?id={})", escape_markdown(name), uid)
}
