use sqlx::{SqliteConnection, SqlitePool};

use crate::poll::{Poll, PollId};

pub async fn insert(conn: &mut SqliteConnection, text: &str) -> Result<PollId, sqlx::Error> {
    let result = sqlx::query("INSERT INTO polls (text) VALUES (?)")
        .bind(text)
        .execute(&mut *conn)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_by_id(pool: &SqlitePool, poll_id: PollId) -> Result<Option<Poll>, sqlx::Error> {
    let row = sqlx::query_as::<_, (i64, String)>("SELECT id, text FROM polls WHERE id = ?")
        .bind(poll_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(id, text)| Poll { id, text }))
}

pub async fn exists(conn: &mut SqliteConnection, poll_id: PollId) -> Result<bool, sqlx::Error> {
    let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM polls WHERE id = ?")
        .bind(poll_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(found.is_some())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM polls")
        .fetch_one(pool)
        .await
}
