//! Errors returned by vote board operations.

/// Contract violations on [`crate::board::VoteBoard`].
///
/// Neither variant is reachable through the rendered widget, which only
/// ever supplies indices derived from [`crate::Aspect::ALL`] while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VoteError {
    /// The aspect index is not in `0..count`.
    #[error("aspect index {index} out of range (expected < {count})")]
    AspectOutOfRange { index: usize, count: usize },
    /// The board was torn down and no longer accepts votes.
    #[error("vote board has been torn down")]
    TornDown,
}
