//! Poll and vote domain types.
//!
//! Everything here is plain data plus pure rendering; persistence lives in
//! [`crate::database`].

pub mod option;
pub mod render;

pub use option::{UnknownVoteOption, VoteOption};
pub use render::{callback_data, render_markup, render_text, split_callback};

use serde::{Deserialize, Serialize};

/// Database identifier of a poll.
pub type PollId = i64;

/// A poll as stored: immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub text: String,
}

/// What a single vote row means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteKind {
    /// The voter attends.
    Pro,
    /// The voter does not attend.
    Cons,
    /// The voter brings someone along.
    PlusOne,
}

impl VoteKind {
    /// Integer code stored in the `vote_kind` columns.
    pub fn code(self) -> i64 {
        match self {
            VoteKind::Pro => 1,
            VoteKind::Cons => 2,
            VoteKind::PlusOne => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(VoteKind::Pro),
            2 => Some(VoteKind::Cons),
            3 => Some(VoteKind::PlusOne),
            _ => None,
        }
    }

    /// `Pro` and `PlusOne` both count toward the attending side.
    pub fn is_attending(self) -> bool {
        matches!(self, VoteKind::Pro | VoteKind::PlusOne)
    }
}

/// A vote as displayed, with the voter's current name joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub uid: i64,
    pub display_name: String,
    pub kind: VoteKind,
}

impl Vote {
    /// Proxy votes are attributed to whoever added them.
    pub fn is_proxy(&self) -> bool {
        self.kind == VoteKind::PlusOne
    }
}

/// Votes of one poll split by side, each side in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollVotes {
    pub attending: Vec<Vote>,
    pub not_attending: Vec<Vote>,
}

impl PollVotes {
    /// Splits an already ordered vote list, keeping relative order per side.
    pub fn from_ordered(votes: Vec<Vote>) -> Self {
        let (attending, not_attending) = votes.into_iter().partition(|v| v.kind.is_attending());
        Self {
            attending,
            not_attending,
        }
    }

    pub fn total(&self) -> usize {
        self.attending.len() + self.not_attending.len()
    }
}

/// A poll together with its current votes, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollView {
    pub poll: Poll,
    pub votes: PollVotes,
}

/// The identity the chat platform hands us on every interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub uid: i64,
    pub display_name: String,
}

impl Voter {
    pub fn new(uid: i64, display_name: impl Into<String>) -> Self {
        Self {
            uid,
            display_name: display_name.into(),
        }
    }
}

impl From<&teloxide::types::User> for Voter {
    fn from(user: &teloxide::types::User) -> Self {
        Self {
            uid: user.id.0 as i64,
            display_name: user.full_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vote(uid: i64, kind: VoteKind) -> Vote {
        Vote {
            uid,
            display_name: format!("user{uid}"),
            kind,
        }
    }

    #[test]
    fn test_vote_kind_codes() {
        for kind in [VoteKind::Pro, VoteKind::Cons, VoteKind::PlusOne] {
            assert_eq!(VoteKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(VoteKind::from_code(0), None);
        assert_eq!(VoteKind::from_code(4), None);
    }

    #[test]
    fn test_attending_sides() {
        assert!(VoteKind::Pro.is_attending());
        assert!(VoteKind::PlusOne.is_attending());
        assert!(!VoteKind::Cons.is_attending());
    }

    #[test]
    fn test_partition_keeps_order() {
        let votes = vec![
            vote(1, VoteKind::Pro),
            vote(2, VoteKind::Cons),
            vote(1, VoteKind::PlusOne),
            vote(3, VoteKind::Pro),
            vote(4, VoteKind::Cons),
        ];
        let split = PollVotes::from_ordered(votes);

        let attending: Vec<_> = split.attending.iter().map(|v| (v.uid, v.kind)).collect();
        assert_eq!(
            attending,
            vec![(1, VoteKind::Pro), (1, VoteKind::PlusOne), (3, VoteKind::Pro)]
        );
        let not_attending: Vec<_> = split.not_attending.iter().map(|v| v.uid).collect();
        assert_eq!(not_attending, vec![2, 4]);
        assert_eq!(split.total(), 5);
    }
}
