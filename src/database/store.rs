use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Utc};
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use super::connection::DatabaseManager;
use super::error::{StoreError, StoreResult};
use super::models::vote::{self, STAMP_FORMAT};
use super::models::{self, MessageBinding, MessageLocation, Place, SessionDraft, User};
use crate::poll::{Poll, PollId, PollView, PollVotes, Vote, VoteKind, VoteOption, Voter};
use crate::utils::logging::{log_store_write, log_vote};

/// Hands out vote timestamps. Lives behind the write lock, so stamps are
/// strictly increasing even when the wall clock is not.
#[derive(Debug, Default)]
struct WriteClock {
    last: Option<NaiveDateTime>,
}

impl WriteClock {
    fn resume_from(stamp: Option<&str>) -> Self {
        let last = stamp.and_then(|s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").ok());
        Self { last }
    }

    fn tick(&mut self) -> String {
        let now = Utc::now().naive_utc().trunc_subsecs(6);
        let stamp = match self.last {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last = Some(stamp);
        stamp.format(STAMP_FORMAT).to_string()
    }
}

/// Owner of all persisted bot state.
///
/// Every write runs in a single transaction while holding one store-wide
/// lock. Reads go straight to the pool and never wait for the lock.
pub struct PollStore {
    db: DatabaseManager,
    clock: Mutex<WriteClock>,
}

impl PollStore {
    /// Wraps a migrated database and seeds the admin user.
    pub async fn open(db: DatabaseManager, admin: &Voter) -> StoreResult<Self> {
        let mut tx = db.pool.begin().await?;
        User::seed_admin(&mut tx, admin.uid, &admin.display_name).await?;
        tx.commit().await?;
        info!("Seeded admin user {} ({})", admin.display_name, admin.uid);

        let latest = vote::latest_stamp(&db.pool).await?;
        let clock = WriteClock::resume_from(latest.as_deref());

        Ok(Self {
            db,
            clock: Mutex::new(clock),
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub async fn create_poll(&self, text: &str) -> StoreResult<PollId> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        let poll_id = models::poll::insert(&mut tx, text).await?;
        tx.commit().await?;

        log_store_write("create_poll", &format!("poll {poll_id}: '{text}'"));
        Ok(poll_id)
    }

    /// The poll with its votes split into attending and not attending,
    /// each side in write order.
    pub async fn get_poll(&self, poll_id: PollId) -> StoreResult<PollView> {
        debug!("Selecting poll {}", poll_id);
        let poll = models::poll::find_by_id(&self.db.pool, poll_id)
            .await?
            .ok_or_else(|| StoreError::not_found("poll", poll_id))?;
        let votes = self.select_votes(&poll).await?;
        Ok(PollView { poll, votes })
    }

    async fn select_votes(&self, poll: &Poll) -> StoreResult<PollVotes> {
        let rows = vote::select_votes(&self.db.pool, poll.id).await?;
        let votes = rows
            .into_iter()
            .map(|row| {
                let kind = VoteKind::from_code(row.vote_kind)
                    .ok_or(StoreError::InvalidVoteKind(row.vote_kind))?;
                Ok(Vote {
                    uid: row.uid,
                    display_name: row.name,
                    kind,
                })
            })
            .collect::<StoreResult<Vec<_>>>()?;
        Ok(PollVotes::from_ordered(votes))
    }

    /// Applies one button press. The voter's name is refreshed in the same
    /// transaction so the rendered mention stays current.
    pub async fn record_vote(
        &self,
        poll_id: PollId,
        voter: &Voter,
        option: VoteOption,
    ) -> StoreResult<()> {
        let mut clock = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;

        if !models::poll::exists(&mut tx, poll_id).await? {
            return Err(StoreError::not_found("poll", poll_id));
        }
        User::upsert(&mut tx, voter.uid, &voter.display_name).await?;

        let stamp = clock.tick();
        let outcome = match option {
            VoteOption::MeToo => {
                let change =
                    vote::upsert_own_vote(&mut tx, poll_id, voter.uid, VoteKind::Pro, &stamp).await?;
                format!("{change:?}")
            }
            VoteOption::MeNot => {
                let change =
                    vote::upsert_own_vote(&mut tx, poll_id, voter.uid, VoteKind::Cons, &stamp).await?;
                format!("{change:?}")
            }
            VoteOption::PlusOne => {
                let id = vote::push_proxy_vote(&mut tx, poll_id, voter.uid, &stamp).await?;
                format!("proxy vote {id} added")
            }
            VoteOption::MinusOne => {
                if vote::pop_proxy_vote(&mut tx, poll_id, voter.uid).await? {
                    "proxy vote removed".to_string()
                } else {
                    "no proxy vote to remove".to_string()
                }
            }
        };

        tx.commit().await?;
        log_vote(poll_id, voter.uid, &voter.display_name, option.id(), &outcome);
        Ok(())
    }

    /// Same as [`PollStore::record_vote`] for a raw option id taken from
    /// callback data.
    pub async fn record_vote_by_id(
        &self,
        poll_id: PollId,
        voter: &Voter,
        option_id: &str,
    ) -> StoreResult<VoteOption> {
        let option: VoteOption = option_id.parse().map_err(|e| {
            error!(
                "Unknown option '{}' for poll {} from user {} ({})",
                option_id, poll_id, voter.display_name, voter.uid
            );
            StoreError::from(e)
        })?;
        self.record_vote(poll_id, voter, option).await?;
        Ok(option)
    }

    pub async fn bind_message(&self, poll_id: PollId, location: &MessageLocation) -> StoreResult<()> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        MessageBinding::replace(&mut tx, poll_id, location).await?;
        tx.commit().await?;

        log_store_write("bind_message", &format!("poll {poll_id} -> {location}"));
        Ok(())
    }

    pub async fn list_bindings(&self, poll_id: PollId) -> StoreResult<Vec<MessageLocation>> {
        debug!("Selecting messages for poll {}", poll_id);
        let bindings = MessageBinding::find_by_poll(&self.db.pool, poll_id).await?;
        Ok(bindings.into_iter().map(|b| b.location).collect())
    }

    pub async fn upsert_user(&self, uid: i64, display_name: &str) -> StoreResult<()> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        User::upsert(&mut tx, uid, display_name).await?;
        tx.commit().await?;

        log_store_write("upsert_user", &format!("{display_name} ({uid})"));
        Ok(())
    }

    pub async fn get_user(&self, uid: i64) -> StoreResult<User> {
        User::find_by_uid(&self.db.pool, uid)
            .await?
            .ok_or_else(|| StoreError::not_found("user", uid))
    }

    pub async fn start_session(&self, uid: i64) -> StoreResult<()> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        SessionDraft::start(&mut tx, uid).await?;
        tx.commit().await?;

        log_store_write("start_session", &format!("user {uid}"));
        Ok(())
    }

    pub async fn set_session_place(&self, uid: i64, place: &str) -> StoreResult<()> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        let updated = SessionDraft::set_place(&mut tx, uid, place).await?;
        Self::session_updated(updated, uid)?;
        tx.commit().await?;
        Ok(())
    }

    /// Stored next to the current time of day; only the date is read back.
    pub async fn set_session_date(&self, uid: i64, date: NaiveDate) -> StoreResult<()> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        let updated = SessionDraft::set_date(&mut tx, uid, date, Local::now().naive_local()).await?;
        Self::session_updated(updated, uid)?;
        tx.commit().await?;
        Ok(())
    }

    /// Stored next to today's date; only the time is read back.
    pub async fn set_session_time(&self, uid: i64, time: NaiveTime) -> StoreResult<()> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        let updated = SessionDraft::set_time(&mut tx, uid, time, Local::now().naive_local()).await?;
        Self::session_updated(updated, uid)?;
        tx.commit().await?;
        Ok(())
    }

    fn session_updated(updated: bool, uid: i64) -> StoreResult<()> {
        if updated {
            Ok(())
        } else {
            Err(StoreError::not_found("session", uid))
        }
    }

    pub async fn get_session(&self, uid: i64) -> StoreResult<SessionDraft> {
        SessionDraft::find_by_uid(&self.db.pool, uid)
            .await?
            .ok_or_else(|| StoreError::not_found("session", uid))
    }

    /// Returns `false` when a place with that name already exists.
    pub async fn add_place(&self, name: &str) -> StoreResult<bool> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        let added = Place::insert(&mut tx, name).await?;
        tx.commit().await?;

        log_store_write("add_place", &format!("'{name}' added={added}"));
        Ok(added)
    }

    pub async fn list_places(&self) -> StoreResult<BTreeMap<i64, String>> {
        Ok(Place::find_all(&self.db.pool).await?)
    }

    /// Returns `false` when no place had that id.
    pub async fn remove_place(&self, id: i64) -> StoreResult<bool> {
        let _guard = self.clock.lock().await;
        let mut tx = self.db.pool.begin().await?;
        let removed = Place::delete(&mut tx, id).await?;
        tx.commit().await?;

        log_store_write("remove_place", &format!("id {id} removed={removed}"));
        Ok(removed)
    }

    pub async fn count_polls(&self) -> StoreResult<i64> {
        Ok(models::poll::count(&self.db.pool).await?)
    }
}
