use anyhow::{anyhow, Result};

/// Telegram caps message text at 4096 characters; the rendered vote list
/// needs most of that.
pub const MAX_POLL_TEXT_CHARS: usize = 1024;
pub const MAX_PLACE_NAME_CHARS: usize = 64;

/// Checks a poll prompt and returns it trimmed.
pub fn validate_poll_text(text: &str) -> Result<String> {
    let text = text.trim();

    if text.is_empty() {
        return Err(anyhow!("Poll text cannot be empty"));
    }

    if text.chars().count() > MAX_POLL_TEXT_CHARS {
        return Err(anyhow!(
            "Poll text cannot be longer than {} characters",
            MAX_POLL_TEXT_CHARS
        ));
    }

    Ok(text.to_string())
}

/// Checks a place name and returns it trimmed.
pub fn validate_place_name(name: &str) -> Result<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(anyhow!("Place name cannot be empty"));
    }

    if name.chars().count() > MAX_PLACE_NAME_CHARS {
        return Err(anyhow!(
            "Place name cannot be longer than {} characters",
            MAX_PLACE_NAME_CHARS
        ));
    }

    if name.contains('\n') || name.contains('\r') {
        return Err(anyhow!("Place name cannot contain line breaks"));
    }

    Ok(name.to_string())
}
