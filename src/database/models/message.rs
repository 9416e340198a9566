use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use std::fmt;

use crate::database::error::{StoreError, StoreResult};
use crate::poll::PollId;

/// Where a poll message lives: a regular chat message or an inline
/// placement that only Telegram knows the chat of.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageLocation {
    Chat { chat_id: i64, message_id: i32 },
    Inline { inline_message_id: String },
}

impl MessageLocation {
    pub fn chat(chat_id: i64, message_id: i32) -> Self {
        MessageLocation::Chat {
            chat_id,
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        MessageLocation::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }

    /// Builds a location from nullable columns. Exactly one form must be
    /// complete: a chat/message pair, or an inline message id.
    pub fn from_parts(
        chat_id: Option<i64>,
        message_id: Option<i32>,
        inline_message_id: Option<String>,
    ) -> StoreResult<Self> {
        match (chat_id, message_id, inline_message_id) {
            (Some(chat_id), Some(message_id), None) => Ok(Self::chat(chat_id, message_id)),
            (None, None, Some(inline)) => Ok(Self::inline(inline)),
            (chat_id, message_id, inline) => Err(StoreError::ConstraintViolation(format!(
                "message location needs either chat+message or inline id, got chat={chat_id:?} msg={message_id:?} inline={inline:?}"
            ))),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, MessageLocation::Inline { .. })
    }
}

impl fmt::Display for MessageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageLocation::Chat {
                chat_id,
                message_id,
            } => write!(f, "chat={chat_id} msg={message_id}"),
            MessageLocation::Inline { inline_message_id } => {
                write!(f, "inline={inline_message_id}")
            }
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct MessageRow {
    chat_id: Option<i64>,
    msg_id: Option<i32>,
    inline_message_id: Option<String>,
}

/// A poll rendered into one physical message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBinding {
    pub poll_id: PollId,
    pub location: MessageLocation,
}

impl MessageBinding {
    /// Stores the binding, replacing whatever was bound to the same location.
    pub async fn replace(
        conn: &mut SqliteConnection,
        poll_id: PollId,
        location: &MessageLocation,
    ) -> Result<(), sqlx::Error> {
        let (chat_id, msg_id, inline_message_id) = match location {
            MessageLocation::Chat {
                chat_id,
                message_id,
            } => (Some(*chat_id), Some(*message_id), None),
            MessageLocation::Inline { inline_message_id } => {
                (None, None, Some(inline_message_id.as_str()))
            }
        };

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO messages (poll_id, chat_id, msg_id, inline_message_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(poll_id)
        .bind(chat_id)
        .bind(msg_id)
        .bind(inline_message_id)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    pub async fn find_by_poll(pool: &SqlitePool, poll_id: PollId) -> StoreResult<Vec<Self>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            "SELECT chat_id, msg_id, inline_message_id FROM messages WHERE poll_id = ? ORDER BY rowid",
        )
        .bind(poll_id)
        .fetch_all(pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                MessageLocation::from_parts(row.chat_id, row.msg_id, row.inline_message_id)
                    .map(|location| MessageBinding { poll_id, location })
            })
            .collect()
    }
}
