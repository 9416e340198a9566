use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection, SqlitePool};
use std::collections::BTreeMap;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub name: String,
}

impl Place {
    /// Inserts the place unless one with the same name exists.
    /// Returns whether a row was added.
    pub async fn insert(conn: &mut SqliteConnection, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("INSERT OR IGNORE INTO places (name) VALUES (?)")
            .bind(name)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_all(pool: &SqlitePool) -> Result<BTreeMap<i64, String>, sqlx::Error> {
        let places = sqlx::query_as::<_, Place>("SELECT id, name FROM places ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(places.into_iter().map(|p| (p.id, p.name)).collect())
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM places WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
