//! Player turn actions.

extern crate alloc;

use alloc::borrow::ToOwned;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseActionError;

/// A decision on a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// End the turn without drawing.
    Stand,
    /// Raise the wager, draw exactly one card and end the turn.
    DoubleDown,
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses `h`/`hit`, `s`/`stand` or `d`/`double` (case-insensitive,
    /// surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("h") || trimmed.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if trimmed.eq_ignore_ascii_case("s") || trimmed.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else if trimmed.eq_ignore_ascii_case("d")
            || trimmed.eq_ignore_ascii_case("double")
            || trimmed.eq_ignore_ascii_case("double down")
        {
            Ok(Self::DoubleDown)
        } else {
            Err(ParseActionError(trimmed.to_owned()))
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::DoubleDown => "double down",
        })
    }
}
