//! Vote scripts: one step per line.
//!
//! ```text
//! # comment
//! up 0            # upvote by index
//! down security   # downvote by name
//! wait 300        # advance the virtual clock (ms)
//! show            # print the board
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use votes::{Aspect, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Vote { aspect: Aspect, direction: Direction },
    Wait(u64),
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unexpected argument `{0}`")]
    TrailingArgument(String),
    #[error("unknown aspect `{0}`")]
    UnknownAspect(String),
    #[error("invalid duration `{0}`")]
    InvalidDuration(String),
}

/// A step tagged with its 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub step: Step,
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse(source: &str) -> Result<Vec<Line>, (usize, ScriptError)> {
    let mut lines = Vec::new();
    for (i, raw) in source.lines().enumerate() {
        let number = i + 1;
        if let Some(step) = parse_line(raw).map_err(|e| (number, e))? {
            lines.push(Line { number, step });
        }
    }
    Ok(lines)
}

/// Parse one line; `Ok(None)` for blank lines and comments.
pub fn parse_line(raw: &str) -> Result<Option<Step>, ScriptError> {
    let content = raw.split_once('#').map_or(raw, |(code, _)| code);
    let mut words = content.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let step = match command.to_ascii_lowercase().as_str() {
        "up" => Step::Vote { aspect: parse_aspect(words.next(), "up")?, direction: Direction::Up },
        "down" => Step::Vote { aspect: parse_aspect(words.next(), "down")?, direction: Direction::Down },
        "wait" => {
            let raw_ms = words.next().ok_or(ScriptError::MissingArgument("wait"))?;
            let ms = raw_ms
                .parse::<u64>()
                .map_err(|_| ScriptError::InvalidDuration(raw_ms.to_owned()))?;
            Step::Wait(ms)
        }
        "show" => Step::Show,
        other => return Err(ScriptError::UnknownCommand(other.to_owned())),
    };

    if let Some(extra) = words.next() {
        return Err(ScriptError::TrailingArgument(extra.to_owned()));
    }
    Ok(Some(step))
}

/// Accepts a board index or a case-insensitive aspect name.
fn parse_aspect(word: Option<&str>, command: &'static str) -> Result<Aspect, ScriptError> {
    let word = word.ok_or(ScriptError::MissingArgument(command))?;
    let by_index = word.parse::<usize>().ok().and_then(|i| Aspect::from_index(i).ok());
    by_index
        .or_else(|| Aspect::from_label(word))
        .ok_or_else(|| ScriptError::UnknownAspect(word.to_owned()))
}
