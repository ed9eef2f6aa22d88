//! The vote board: counters, actions, and deferred flag resets.
//!
//! DESIGN
//! ======
//! A vote mutates the record immediately and hands back a [`PendingReset`].
//! The host schedules it however its platform does timers and later calls
//! [`VoteBoard::expire`]. Every vote bumps a generation for its
//! `(aspect, direction)` key, and only the reset carrying the latest
//! generation clears the flag, so a burst of votes keeps the emphasis on
//! until `delay` after the last one.
//!
//! After [`VoteBoard::teardown`] the board is inert: votes are rejected and
//! resets that were already in flight are ignored.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use serde::{Deserialize, Serialize};

use crate::aspect::{ASPECT_COUNT, Aspect};
use crate::consts::ANIMATION_DELAY_MS;
use crate::error::VoteError;
use crate::record::{Direction, VoteRecord};

/// One record per aspect, indexed by position in [`Aspect::ALL`].
pub type VoteBoardState = [VoteRecord; ASPECT_COUNT];

/// Identifies one animation flag on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResetKey {
    pub aspect: Aspect,
    pub direction: Direction,
}

/// A flag reset the host must fire `delay_ms` after the vote that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReset {
    pub key: ResetKey,
    pub generation: u64,
    pub delay_ms: u32,
}

/// Vote tallies for every aspect plus reset bookkeeping.
#[derive(Clone, Debug)]
pub struct VoteBoard {
    records: VoteBoardState,
    generations: [[u64; 2]; ASPECT_COUNT],
    delay_ms: u32,
    live: bool,
}

impl Default for VoteBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteBoard {
    /// Fresh board: all counts zero, all flags idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: [VoteRecord::default(); ASPECT_COUNT],
            generations: [[0; 2]; ASPECT_COUNT],
            delay_ms: ANIMATION_DELAY_MS,
            live: true,
        }
    }

    /// Increment the upvote count for the aspect at `index`.
    ///
    /// # Errors
    ///
    /// See [`VoteBoard::vote`].
    pub fn upvote(&mut self, index: usize) -> Result<PendingReset, VoteError> {
        self.vote(index, Direction::Up)
    }

    /// Increment the downvote count for the aspect at `index`.
    ///
    /// # Errors
    ///
    /// See [`VoteBoard::vote`].
    pub fn downvote(&mut self, index: usize) -> Result<PendingReset, VoteError> {
        self.vote(index, Direction::Down)
    }

    /// Count a vote, raise its flag, and return the reset that will lower it.
    ///
    /// # Errors
    ///
    /// Returns [`VoteError::AspectOutOfRange`] for an index outside the
    /// aspect list and [`VoteError::TornDown`] once the board was torn down.
    pub fn vote(&mut self, index: usize, direction: Direction) -> Result<PendingReset, VoteError> {
        if !self.live {
            tracing::warn!(index, ?direction, "vote on torn down board");
            return Err(VoteError::TornDown);
        }
        let aspect = Aspect::from_index(index).inspect_err(|e| {
            tracing::warn!(error = %e, ?direction, "vote rejected");
        })?;

        self.records[index].bump(direction);
        let latest = &mut self.generations[index][slot(direction)];
        *latest = latest.wrapping_add(1);
        let generation = *latest;

        tracing::debug!(
            %aspect,
            ?direction,
            count = self.records[index].count(direction),
            generation,
            "vote counted"
        );

        Ok(PendingReset { key: ResetKey { aspect, direction }, generation, delay_ms: self.delay_ms })
    }

    /// Fire a previously returned reset.
    ///
    /// Clears the flag only when `reset` is the most recent one for its key and
    /// the board is still live. Returns whether a flag was lowered.
    pub fn expire(&mut self, reset: PendingReset) -> bool {
        if !self.live {
            tracing::trace!(key = ?reset.key, "reset after teardown ignored");
            return false;
        }
        let index = reset.key.aspect.index();
        let current = self.generations[index][slot(reset.key.direction)];
        if current != reset.generation {
            tracing::trace!(key = ?reset.key, generation = reset.generation, current, "stale reset ignored");
            return false;
        }

        self.records[index].settle(reset.key.direction);
        tracing::debug!(aspect = %reset.key.aspect, direction = ?reset.key.direction, "animation settled");
        true
    }

    /// Retire the board. Further votes fail and in-flight resets are ignored.
    pub fn teardown(&mut self) {
        if self.live {
            tracing::debug!("vote board torn down");
        }
        self.live = false;
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Delay attached to every [`PendingReset`] this board hands out.
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    #[must_use]
    pub fn record(&self, aspect: Aspect) -> &VoteRecord {
        &self.records[aspect.index()]
    }

    #[must_use]
    pub fn records(&self) -> &VoteBoardState {
        &self.records
    }

    /// Owned copy of the current state for observers.
    #[must_use]
    pub fn snapshot(&self) -> VoteBoardState {
        self.records
    }
}

fn slot(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
    }
}
