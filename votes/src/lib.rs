//! Vote tallies for the code-review feedback board.
//!
//! This crate is platform-free: it owns the per-aspect counters, the
//! transient "just changed" flags, and the bookkeeping for the deferred
//! resets that clear those flags. Hosts (the Leptos `client` crate, the
//! headless `cli`) decide how a [`board::PendingReset`] is actually timed
//! and feed it back through [`board::VoteBoard::expire`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`aspect`] | The fixed, ordered list of review aspects |
//! | [`record`] | Per-aspect counters and animation flags |
//! | [`board`] | [`board::VoteBoard`] actions, expiry, and teardown |
//! | [`timeline`] | Virtual clock that fires pending resets deterministically |
//! | [`view`] | Renderable description with stable element identifiers |
//! | [`consts`] | Shared constants (animation delay, CSS classes) |
//! | [`error`] | [`error::VoteError`] |

pub mod aspect;
pub mod board;
pub mod consts;
pub mod error;
pub mod record;
pub mod timeline;
pub mod view;

pub use aspect::{ASPECT_COUNT, Aspect};
pub use board::{PendingReset, ResetKey, VoteBoard, VoteBoardState};
pub use error::VoteError;
pub use record::{Direction, VoteRecord};
