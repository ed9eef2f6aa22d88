//! Reusable UI components.

pub mod aspect_card;
pub mod feedback_board;
