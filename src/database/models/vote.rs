use sqlx::{FromRow, SqliteConnection, SqlitePool};

use crate::poll::{PollId, VoteKind};

/// Layout of vote timestamps. Fixed width, so text order is time order.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// What an own-vote write did to the stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnVoteChange {
    Inserted,
    Changed,
    Unchanged,
}

/// One line of a poll's vote list, own and proxy votes alike.
#[derive(Debug, Clone, FromRow)]
pub struct VoteRow {
    pub vote_kind: i64,
    pub uid: i64,
    pub name: String,
}

/// Sets the user's own vote. The timestamp moves only when the kind changes,
/// so repeating the same vote keeps its place in the list.
pub async fn upsert_own_vote(
    conn: &mut SqliteConnection,
    poll_id: PollId,
    uid: i64,
    kind: VoteKind,
    stamp: &str,
) -> Result<OwnVoteChange, sqlx::Error> {
    let current = sqlx::query_scalar::<_, i64>(
        "SELECT vote_kind FROM own_votes WHERE poll_id = ? AND uid = ?",
    )
    .bind(poll_id)
    .bind(uid)
    .fetch_optional(&mut *conn)
    .await?;

    match current {
        None => {
            sqlx::query(
                r#"
                INSERT INTO own_votes (poll_id, uid, vote_kind, updated_at)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(poll_id)
            .bind(uid)
            .bind(kind.code())
            .bind(stamp)
            .execute(&mut *conn)
            .await?;
            Ok(OwnVoteChange::Inserted)
        }
        Some(code) if code == kind.code() => Ok(OwnVoteChange::Unchanged),
        Some(_) => {
            sqlx::query(
                r#"
                UPDATE own_votes
                SET vote_kind = ?, updated_at = ?
                WHERE poll_id = ? AND uid = ?
                "#,
            )
            .bind(kind.code())
            .bind(stamp)
            .bind(poll_id)
            .bind(uid)
            .execute(&mut *conn)
            .await?;
            Ok(OwnVoteChange::Changed)
        }
    }
}

/// Appends a "+1" on behalf of `uid`.
pub async fn push_proxy_vote(
    conn: &mut SqliteConnection,
    poll_id: PollId,
    uid: i64,
    stamp: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO proxy_votes (poll_id, uid, vote_kind, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(poll_id)
    .bind(uid)
    .bind(VoteKind::PlusOne.code())
    .bind(stamp)
    .execute(&mut *conn)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Removes the newest "+1" of `uid` on the poll. Returns whether one existed.
pub async fn pop_proxy_vote(
    conn: &mut SqliteConnection,
    poll_id: PollId,
    uid: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM proxy_votes
        WHERE id = (SELECT MAX(id) FROM proxy_votes WHERE poll_id = ? AND uid = ?)
        "#,
    )
    .bind(poll_id)
    .bind(uid)
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Own and proxy votes of a poll in the order they were last written.
pub async fn select_votes(pool: &SqlitePool, poll_id: PollId) -> Result<Vec<VoteRow>, sqlx::Error> {
    sqlx::query_as::<_, VoteRow>(
        r#"
        SELECT vote_kind, uid, name FROM (
            SELECT own_votes.vote_kind AS vote_kind, users.uid AS uid, users.name AS name,
                   own_votes.updated_at AS t
                FROM own_votes
                JOIN users ON own_votes.uid = users.uid
                WHERE own_votes.poll_id = ?
            UNION ALL
            SELECT proxy_votes.vote_kind AS vote_kind, users.uid AS uid, users.name AS name,
                   proxy_votes.created_at AS t
                FROM proxy_votes
                JOIN users ON proxy_votes.uid = users.uid
                WHERE proxy_votes.poll_id = ?
        ) ORDER BY t
        "#,
    )
    .bind(poll_id)
    .bind(poll_id)
    .fetch_all(pool)
    .await
}

/// Newest timestamp written to either vote table.
pub async fn latest_stamp(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<String>>(
        r#"
        SELECT MAX(t) FROM (
            SELECT updated_at AS t FROM own_votes
            UNION ALL
            SELECT created_at AS t FROM proxy_votes
        )
        "#,
    )
    .fetch_one(pool)
    .await
}
