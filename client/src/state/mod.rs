//! Client-side state helpers.
//!
//! DESIGN
//! ======
//! Vote counts live in a `RwSignal<votes::VoteBoard>` owned by the
//! `FeedbackBoard` component. This module holds the browser-facing pieces
//! around it that can be exercised without a DOM.

pub mod reset_timers;
