use anyhow::Result;
use attendance_poll_bot::database::{
    connection::DatabaseManager,
    models::{self, vote, OwnVoteChange, User},
};
use attendance_poll_bot::poll::VoteKind;
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db_manager = DatabaseManager::new(&database_url).await?;
    db_manager.run_migrations().await?;

    Ok((db_manager, temp_dir))
}

#[tokio::test]
async fn test_schema_tables() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let tables = db.table_names().await?;
    for expected in [
        "messages",
        "own_votes",
        "places",
        "polls",
        "proxy_votes",
        "sessions",
        "users",
    ] {
        assert!(tables.iter().any(|t| t == expected), "missing table {expected}");
    }

    Ok(())
}

#[tokio::test]
async fn test_migrations_are_rerunnable() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    db.run_migrations().await?;
    Ok(())
}

#[tokio::test]
async fn test_own_vote_changes() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let mut conn = db.pool.acquire().await?;

    let poll_id = models::poll::insert(&mut conn, "Football").await?;
    User::upsert(&mut conn, 100, "Alice").await?;

    let change =
        vote::upsert_own_vote(&mut conn, poll_id, 100, VoteKind::Pro, "2025-01-01 10:00:00.000001")
            .await?;
    assert_eq!(change, OwnVoteChange::Inserted);

    let change =
        vote::upsert_own_vote(&mut conn, poll_id, 100, VoteKind::Pro, "2025-01-01 10:00:00.000002")
            .await?;
    assert_eq!(change, OwnVoteChange::Unchanged);
    assert_eq!(
        vote::latest_stamp(&db.pool).await?.as_deref(),
        Some("2025-01-01 10:00:00.000001")
    );

    let change =
        vote::upsert_own_vote(&mut conn, poll_id, 100, VoteKind::Cons, "2025-01-01 10:00:00.000003")
            .await?;
    assert_eq!(change, OwnVoteChange::Changed);
    assert_eq!(
        vote::latest_stamp(&db.pool).await?.as_deref(),
        Some("2025-01-01 10:00:00.000003")
    );

    Ok(())
}

#[tokio::test]
async fn test_pop_proxy_vote_removes_newest() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let mut conn = db.pool.acquire().await?;

    let poll_id = models::poll::insert(&mut conn, "Football").await?;
    User::upsert(&mut conn, 100, "Alice").await?;

    let first = vote::push_proxy_vote(&mut conn, poll_id, 100, "2025-01-01 10:00:00.000001").await?;
    let second = vote::push_proxy_vote(&mut conn, poll_id, 100, "2025-01-01 10:00:00.000002").await?;
    assert!(second > first);

    assert!(vote::pop_proxy_vote(&mut conn, poll_id, 100).await?);
    let remaining: Vec<i64> = sqlx::query_scalar("SELECT id FROM proxy_votes")
        .fetch_all(&db.pool)
        .await?;
    assert_eq!(remaining, vec![first]);

    assert!(vote::pop_proxy_vote(&mut conn, poll_id, 100).await?);
    assert!(!vote::pop_proxy_vote(&mut conn, poll_id, 100).await?);

    Ok(())
}

#[tokio::test]
async fn test_votes_need_existing_poll() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let mut conn = db.pool.acquire().await?;
    User::upsert(&mut conn, 100, "Alice").await?;

    let result =
        vote::upsert_own_vote(&mut conn, 999, 100, VoteKind::Pro, "2025-01-01 10:00:00.000001")
            .await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn test_message_location_check_constraint() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let mut conn = db.pool.acquire().await?;
    let poll_id = models::poll::insert(&mut conn, "Football").await?;

    let both = sqlx::query(
        "INSERT INTO messages (poll_id, chat_id, msg_id, inline_message_id) VALUES (?, 1, 2, 'x')",
    )
    .bind(poll_id)
    .execute(&db.pool)
    .await;
    assert!(both.is_err());

    let neither = sqlx::query("INSERT INTO messages (poll_id) VALUES (?)")
        .bind(poll_id)
        .execute(&db.pool)
        .await;
    assert!(neither.is_err());

    Ok(())
}

#[tokio::test]
async fn test_seed_admin_promotes_existing_user() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let mut conn = db.pool.acquire().await?;

    User::upsert(&mut conn, 7, "Boss").await?;
    assert_eq!(User::count_admins(&db.pool).await?, 0);

    User::seed_admin(&mut conn, 7, "Ignored").await?;
    User::seed_admin(&mut conn, 7, "Ignored").await?;

    let user = User::find_by_uid(&db.pool, 7).await?.unwrap();
    assert!(user.is_admin);
    assert_eq!(user.display_name, "Boss");
    assert_eq!(User::count_admins(&db.pool).await?, 1);

    Ok(())
}
