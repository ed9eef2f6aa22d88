//! Per-aspect vote counters and their transient animation flags.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};

/// Which counter a vote targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Prefix used for element identifiers and CLI output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "upvote",
            Self::Down => "downvote",
        }
    }
}

/// Counters and animation flags for one aspect.
///
/// Counts only ever grow. Each flag is an independent `idle -> active -> idle`
/// machine driven by votes and their deferred resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub upvotes: u32,
    pub downvotes: u32,
    pub animate_up: bool,
    pub animate_down: bool,
}

impl VoteRecord {
    #[must_use]
    pub fn count(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Up => self.upvotes,
            Direction::Down => self.downvotes,
        }
    }

    #[must_use]
    pub fn is_animating(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.animate_up,
            Direction::Down => self.animate_down,
        }
    }

    /// Count one vote and raise the matching flag.
    pub(crate) fn bump(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                self.upvotes = self.upvotes.saturating_add(1);
                self.animate_up = true;
            }
            Direction::Down => {
                self.downvotes = self.downvotes.saturating_add(1);
                self.animate_down = true;
            }
        }
    }

    /// Lower the flag for `direction`, leaving everything else untouched.
    pub(crate) fn settle(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.animate_up = false,
            Direction::Down => self.animate_down = false,
        }
    }
}
