use tracing::{debug, error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_START: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_START: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, user_id: i64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Logs rejected user input
pub fn log_validation_error(command: &str, value: &str, error: &str, user_id: i64) {
    warn!(
        "VALIDATION_ERROR: {} - '{}' invalid: {} - user {}",
        command, value, error, user_id
    );
}

/// Logs a committed vote
pub fn log_vote(poll_id: i64, user_id: i64, user: &str, option: &str, outcome: &str) {
    info!(
        "VOTE: poll {} {} by {}({}) - {}",
        poll_id, option, user, user_id, outcome
    );
}

/// Logs a committed store write other than a vote
pub fn log_store_write(operation: &str, details: &str) {
    debug!("STORE: {} - {}", operation, details);
}

/// Logs a failed store call made on behalf of a bot update
pub fn log_store_error(operation: &str, error: &str, details: Option<&str>) {
    match details {
        Some(d) => error!("STORE_ERROR: {} failed: {} - {}", operation, error, d),
        None => error!("STORE_ERROR: {} failed: {}", operation, error),
    }
}

/// Logs a message re-render that Telegram refused
pub fn log_render_failure(poll_id: i64, location: &str, error: &str) {
    warn!(
        "RENDER_FAILED: poll {} at {} - {}",
        poll_id, location, error
    );
}
