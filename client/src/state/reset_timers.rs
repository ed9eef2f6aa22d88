#[cfg(test)]
#[path = "reset_timers_test.rs"]
mod reset_timers_test;

use std::collections::HashMap;

use votes::ResetKey;

/// Live timer handles for pending animation resets, one per flag.
///
/// `H` is a handle that cancels its timer when dropped (in the browser,
/// `gloo_timers::callback::Timeout`). Scheduling a key that already has a
/// handle drops the old one, so at most one timer per flag is ever armed.
#[derive(Debug)]
pub struct ResetTimers<H> {
    handles: HashMap<ResetKey, H>,
}

impl<H> Default for ResetTimers<H> {
    fn default() -> Self {
        Self { handles: HashMap::new() }
    }
}

impl<H> ResetTimers<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle` for `key`, cancelling any timer already armed for it.
    ///
    /// Returns `true` when an earlier timer was replaced.
    pub fn replace(&mut self, key: ResetKey, handle: H) -> bool {
        self.handles.insert(key, handle).is_some()
    }

    /// Cancel every armed timer. Called when the board unmounts.
    pub fn cancel_all(&mut self) {
        self.handles.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
