//! The fixed list of code-review aspects voters can rate.

#[cfg(test)]
#[path = "aspect_test.rs"]
mod aspect_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::VoteError;

/// Number of aspects on the board, derived from [`Aspect::ALL`].
pub const ASPECT_COUNT: usize = Aspect::ALL.len();

/// A code-review quality dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Readability,
    Performance,
    Security,
    Documentation,
    Testing,
}

impl Aspect {
    /// Every aspect in display order. Board indices are positions in this list.
    pub const ALL: [Aspect; 5] = [
        Aspect::Readability,
        Aspect::Performance,
        Aspect::Security,
        Aspect::Documentation,
        Aspect::Testing,
    ];

    /// Position of this aspect in [`Aspect::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Readability => 0,
            Self::Performance => 1,
            Self::Security => 2,
            Self::Documentation => 3,
            Self::Testing => 4,
        }
    }

    /// Human-readable name shown as the card heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Readability => "Readability",
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::Documentation => "Documentation",
            Self::Testing => "Testing",
        }
    }

    /// Look up an aspect by board index.
    ///
    /// # Errors
    ///
    /// Returns [`VoteError::AspectOutOfRange`] when `index >= ASPECT_COUNT`.
    pub fn from_index(index: usize) -> Result<Self, VoteError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(VoteError::AspectOutOfRange { index, count: ASPECT_COUNT })
    }

    /// Case-insensitive lookup by label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|aspect| aspect.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
