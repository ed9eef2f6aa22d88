//! Replays a parsed script against a fresh board on a virtual clock.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt::Write as _;

use votes::timeline::Timeline;
use votes::view::{BoardView, CountView};
use votes::{VoteBoard, VoteError};

use crate::script::{Line, Step};

/// A live board plus the clock that settles its animations.
#[derive(Debug, Default)]
pub struct Session {
    board: VoteBoard,
    timeline: Timeline,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn board(&self) -> &VoteBoard {
        &self.board
    }

    #[must_use]
    pub fn now(&self) -> u64 {
        self.timeline.now()
    }

    /// Run every step, collecting the text of each `show` into the result.
    pub fn run(&mut self, lines: &[Line]) -> Result<String, (usize, VoteError)> {
        let mut out = String::new();
        for line in lines {
            match line.step {
                Step::Vote { aspect, direction } => {
                    let reset = self
                        .board
                        .vote(aspect.index(), direction)
                        .map_err(|e| (line.number, e))?;
                    self.timeline.schedule(reset);
                }
                Step::Wait(ms) => {
                    let settled = self.timeline.advance(ms, &mut self.board);
                    tracing::debug!(now = self.timeline.now(), settled = settled.len(), "clock advanced");
                }
                Step::Show => out.push_str(&self.render()),
            }
        }
        Ok(out)
    }

    /// Text rendering of the board at the current virtual time.
    #[must_use]
    pub fn render(&self) -> String {
        render_text(&BoardView::from_board(&self.board), self.timeline.now())
    }

    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_board(&self.board)
    }

    /// Cancel outstanding resets and retire the board.
    pub fn close(&mut self) {
        self.timeline.cancel_all();
        self.board.teardown();
    }
}

/// One line per aspect; animating counts are marked with `*`.
#[must_use]
pub fn render_text(view: &BoardView, now_ms: u64) -> String {
    let mut out = format!("t={now_ms}ms\n");
    for card in &view.cards {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "  [{}] {:<13} up {:<6} down {}",
            card.index,
            card.label,
            count_cell(&card.upvote),
            count_cell(&card.downvote),
        );
    }
    out
}

fn count_cell(count: &CountView) -> String {
    if count.animating { format!("{}*", count.count) } else { count.count.to_string() }
}
