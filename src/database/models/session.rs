use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection, SqlitePool};

/// A user's half-filled place/date/time answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDraft {
    pub place: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

#[derive(Debug, Clone, FromRow)]
struct SessionRow {
    place: Option<String>,
    d: Option<NaiveDateTime>,
    t: Option<NaiveDateTime>,
}

/// The `d` column holds a full timestamp; the time half is filler.
pub fn encode_date(date: NaiveDate, now: NaiveDateTime) -> NaiveDateTime {
    date.and_time(now.time())
}

/// The `t` column holds a full timestamp; the date half is filler.
pub fn encode_time(time: NaiveTime, now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(time)
}

impl SessionDraft {
    /// `true` once place, date and time have all been answered.
    pub fn is_complete(&self) -> bool {
        self.place.is_some() && self.date.is_some() && self.time.is_some()
    }

    /// Poll text built from a complete draft, e.g. `Stadium, 24.05.2025 19:30`.
    pub fn poll_text(&self) -> Option<String> {
        match (&self.place, self.date, self.time) {
            (Some(place), Some(date), Some(time)) => Some(format!(
                "{}, {} {}",
                place,
                date.format("%d.%m.%Y"),
                time.format("%H:%M")
            )),
            _ => None,
        }
    }

    /// Creates an empty session, dropping any previous one.
    pub async fn start(conn: &mut SqliteConnection, uid: i64) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT OR REPLACE INTO sessions (uid) VALUES (?)")
            .bind(uid)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Returns `false` when the user has no session.
    pub async fn set_place(
        conn: &mut SqliteConnection,
        uid: i64,
        place: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE sessions SET place = ? WHERE uid = ?")
            .bind(place)
            .bind(uid)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn set_date(
        conn: &mut SqliteConnection,
        uid: i64,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE sessions SET d = ? WHERE uid = ?")
            .bind(encode_date(date, now))
            .bind(uid)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn set_time(
        conn: &mut SqliteConnection,
        uid: i64,
        time: NaiveTime,
        now: NaiveDateTime,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE sessions SET t = ? WHERE uid = ?")
            .bind(encode_time(time, now))
            .bind(uid)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_uid(pool: &SqlitePool, uid: i64) -> Result<Option<Self>, sqlx::Error> {
        let row = sqlx::query_as::<_, SessionRow>("SELECT place, d, t FROM sessions WHERE uid = ?")
            .bind(uid)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|row| SessionDraft {
            place: row.place,
            date: row.d.map(|d| d.date()),
            time: row.t.map(|t| t.time()),
        }))
    }
}
