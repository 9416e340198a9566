use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub uid: i64,
    pub display_name: String,
    pub is_admin: bool,
}

impl User {
    /// Inserts the user or refreshes their name. `is_admin` is left alone.
    pub async fn upsert(
        conn: &mut SqliteConnection,
        uid: i64,
        display_name: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (uid, name)
            VALUES (?, ?)
            ON CONFLICT (uid) DO UPDATE SET name = excluded.name
            "#,
        )
        .bind(uid)
        .bind(display_name)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Makes sure the configured admin exists and is flagged as such.
    pub async fn seed_admin(
        conn: &mut SqliteConnection,
        uid: i64,
        display_name: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (uid, name, is_admin)
            VALUES (?, ?, 1)
            ON CONFLICT (uid) DO UPDATE SET is_admin = 1
            "#,
        )
        .bind(uid)
        .bind(display_name)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    pub async fn find_by_uid(pool: &SqlitePool, uid: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT uid, name AS display_name, is_admin FROM users WHERE uid = ?",
        )
        .bind(uid)
        .fetch_optional(pool)
        .await
    }

    pub async fn count_admins(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE is_admin = 1")
            .fetch_one(pool)
            .await
    }
}
