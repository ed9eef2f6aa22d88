//! Shared constants for the vote board.

/// How long a count stays emphasized after a vote, in milliseconds.
pub const ANIMATION_DELAY_MS: u32 = 300;

/// Base CSS class applied to every count display.
pub const COUNT_CLASS: &str = "vote-count";

/// CSS class applied to a count while its animation flag is raised.
pub const ANIMATE_CLASS: &str = "vote-animate";
