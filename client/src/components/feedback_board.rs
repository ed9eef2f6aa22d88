//! The voting board: one card per review aspect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board state lives in a component-local `RwSignal`, so each mounted
//! board has its own tallies and nothing survives an unmount. A vote updates
//! the signal immediately; the returned reset is armed as a browser timeout
//! that settles the animation flag later. On cleanup every armed timeout is
//! cancelled and the board is torn down, so a late timer can never touch a
//! discarded board.

use leptos::prelude::*;
use votes::{Aspect, Direction, PendingReset, VoteBoard};

use crate::components::aspect_card::AspectCard;
#[cfg(feature = "hydrate")]
use crate::state::reset_timers::ResetTimers;

/// Emphasis applied to a count while its animation flag is raised.
const ANIMATE_CSS: &str = "
.vote-animate {
  transition: color 0.2s, transform 0.2s;
  color: #1976d2;
  transform: scale(1.15);
}
";

#[component]
pub fn FeedbackBoard() -> impl IntoView {
    let board = RwSignal::new(VoteBoard::new());

    #[cfg(feature = "hydrate")]
    let timers = StoredValue::new_local(ResetTimers::<gloo_timers::callback::Timeout>::new());

    let on_vote = Callback::new(move |(index, direction): (usize, Direction)| {
        match board.try_update(|b| b.vote(index, direction)) {
            Some(Ok(reset)) => {
                #[cfg(feature = "hydrate")]
                arm_reset(board, timers, reset);
                #[cfg(not(feature = "hydrate"))]
                skip_reset(reset);
            }
            Some(Err(e)) => leptos::logging::warn!("vote on aspect {index} rejected: {e}"),
            None => {}
        }
    });

    on_cleanup(move || {
        #[cfg(feature = "hydrate")]
        timers.try_update_value(ResetTimers::cancel_all);
        board.try_update(VoteBoard::teardown);
    });

    view! {
        <div class="vote-board">
            <div class="vote-board__cards">
                {Aspect::ALL
                    .into_iter()
                    .map(|aspect| view! { <AspectCard aspect=aspect board=board on_vote=on_vote/> })
                    .collect_view()}
            </div>
            <style>{ANIMATE_CSS}</style>
        </div>
    }
}

/// Arm a browser timeout that settles `reset` once its delay has passed.
#[cfg(feature = "hydrate")]
fn arm_reset(
    board: RwSignal<VoteBoard>,
    timers: StoredValue<ResetTimers<gloo_timers::callback::Timeout>, LocalStorage>,
    reset: PendingReset,
) {
    let timeout = gloo_timers::callback::Timeout::new(reset.delay_ms, move || {
        board.try_update(|b| b.expire(reset));
    });
    timers.update_value(|t| {
        t.replace(reset.key, timeout);
    });
}

/// Server renders never receive clicks, so there is nothing to arm.
#[cfg(not(feature = "hydrate"))]
fn skip_reset(reset: PendingReset) {
    let _ = reset;
}
