//! Deterministic virtual clock for firing [`PendingReset`]s.
//!
//! Browser hosts use real timers. The headless CLI and the tests drive the
//! same reset flow through a [`Timeline`] so behavior over time can be
//! checked without sleeping.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use std::collections::BTreeMap;

use crate::board::{PendingReset, ResetKey, VoteBoard};

/// Pending resets ordered by due time, ties broken by scheduling order.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    now_ms: u64,
    seq: u64,
    queue: BTreeMap<(u64, u64), PendingReset>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Number of resets not yet fired or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue `reset` to fire `reset.delay_ms` from now.
    pub fn schedule(&mut self, reset: PendingReset) {
        let due = self.now_ms.saturating_add(u64::from(reset.delay_ms));
        self.queue.insert((due, self.seq), reset);
        self.seq = self.seq.wrapping_add(1);
    }

    /// Move the clock forward and fire every reset now due.
    ///
    /// Returns the keys whose flags were actually lowered, in firing order.
    pub fn advance(&mut self, ms: u64, board: &mut VoteBoard) -> Vec<ResetKey> {
        self.now_ms = self.now_ms.saturating_add(ms);
        let mut settled = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            if entry.key().0 > self.now_ms {
                break;
            }
            let reset = entry.remove();
            if board.expire(reset) {
                settled.push(reset.key);
            }
        }
        settled
    }

    /// Drop all outstanding resets.
    pub fn cancel_all(&mut self) {
        if !self.queue.is_empty() {
            tracing::debug!(cancelled = self.queue.len(), "pending resets cancelled");
        }
        self.queue.clear();
    }
}
