pub mod message;
pub mod place;
pub mod poll;
pub mod session;
pub mod user;
pub mod vote;

pub use message::*;
pub use place::*;
pub use session::*;
pub use user::*;
pub use vote::{OwnVoteChange, VoteRow};
