use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four buttons a voter can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteOption {
    /// I'm in.
    MeToo,
    /// I'm out.
    MeNot,
    /// Someone comes with me.
    PlusOne,
    /// Drop the last person I added.
    MinusOne,
}

/// Routing id and button label for every option, in button order.
const OPTION_TABLE: [(VoteOption, &str, &str); 4] = [
    (VoteOption::MeToo, "me_too", "\u{2795}"),
    (VoteOption::MeNot, "me_not", "\u{2796}"),
    (VoteOption::PlusOne, "plus_one", "\u{1F417} +1 person"),
    (VoteOption::MinusOne, "minus_one", "\u{1F6BD} -1 person"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vote option '{0}'")]
pub struct UnknownVoteOption(pub String);

impl VoteOption {
    pub const ALL: [VoteOption; 4] = [
        VoteOption::MeToo,
        VoteOption::MeNot,
        VoteOption::PlusOne,
        VoteOption::MinusOne,
    ];

    fn entry(self) -> &'static (VoteOption, &'static str, &'static str) {
        // The table holds one row per variant, in declaration order.
        &OPTION_TABLE[self as usize]
    }

    /// Stable id used as the callback routing key.
    pub fn id(self) -> &'static str {
        self.entry().1
    }

    /// Button text.
    pub fn label(self) -> &'static str {
        self.entry().2
    }
}

impl FromStr for VoteOption {
    type Err = UnknownVoteOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OPTION_TABLE
            .iter()
            .find(|(_, id, _)| *id == s)
            .map(|(option, _, _)| *option)
            .ok_or_else(|| UnknownVoteOption(s.to_string()))
    }
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
