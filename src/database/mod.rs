//! Persistence: connection management, table models and the transactional
//! [`store::PollStore`] the bot talks to.

pub mod connection;
pub mod error;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::PollStore;
