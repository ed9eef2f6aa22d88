//! Renderable description of the board.
//!
//! The view is plain data: one [`AspectCard`] per aspect in list order, each
//! carrying the stable element identifiers automated UI tests target
//! (`upvote-btn-2`, `downvote-count-0`, ...) and the CSS class for each
//! count, which includes [`ANIMATE_CLASS`] exactly while its flag is raised.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::Serialize;

use crate::aspect::Aspect;
use crate::board::VoteBoard;
use crate::consts::{ANIMATE_CLASS, COUNT_CLASS};
use crate::record::Direction;

/// Interactive or display element on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    Count,
}

/// Stable identifier for the element playing `role` for `direction` on the
/// card at `index`.
#[must_use]
pub fn test_id(direction: Direction, role: Role, index: usize) -> String {
    let suffix = match role {
        Role::Button => "btn",
        Role::Count => "count",
    };
    format!("{}-{suffix}-{index}", direction.as_str())
}

/// Class string for a count display.
#[must_use]
pub fn count_class(animating: bool) -> String {
    if animating { format!("{COUNT_CLASS} {ANIMATE_CLASS}") } else { COUNT_CLASS.to_owned() }
}

/// Label on the vote button for `direction`.
#[must_use]
pub fn button_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "\u{1F44D} Upvote",
        Direction::Down => "\u{1F44E} Downvote",
    }
}

/// Caption in front of the count for `direction`.
#[must_use]
pub fn count_caption(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "Upvotes:",
        Direction::Down => "Downvotes:",
    }
}

/// One counter with its button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountView {
    pub direction: Direction,
    pub count: u32,
    pub animating: bool,
    pub button_id: String,
    pub count_id: String,
    pub class: String,
}

/// Everything rendered for a single aspect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AspectCard {
    pub index: usize,
    pub aspect: Aspect,
    pub label: &'static str,
    pub upvote: CountView,
    pub downvote: CountView,
}

impl AspectCard {
    #[must_use]
    pub fn new(board: &VoteBoard, aspect: Aspect) -> Self {
        let index = aspect.index();
        let count_view = |direction: Direction| {
            let record = board.record(aspect);
            let animating = record.is_animating(direction);
            CountView {
                direction,
                count: record.count(direction),
                animating,
                button_id: test_id(direction, Role::Button, index),
                count_id: test_id(direction, Role::Count, index),
                class: count_class(animating),
            }
        };
        Self {
            index,
            aspect,
            label: aspect.label(),
            upvote: count_view(Direction::Up),
            downvote: count_view(Direction::Down),
        }
    }

    #[must_use]
    pub fn count(&self, direction: Direction) -> &CountView {
        match direction {
            Direction::Up => &self.upvote,
            Direction::Down => &self.downvote,
        }
    }
}

/// The whole board, cards in aspect order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub cards: Vec<AspectCard>,
}

impl BoardView {
    #[must_use]
    pub fn from_board(board: &VoteBoard) -> Self {
        Self { cards: Aspect::ALL.into_iter().map(|aspect| AspectCard::new(board, aspect)).collect() }
    }
}
