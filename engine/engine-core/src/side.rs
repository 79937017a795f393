//! Sides and terminal outcomes for two-player zero-sum games.
//!
//! Every game in the engine values positions from the maximizing side's point
//! of view:
//!
//! | Side         | Turn flag | Winning value |
//! |--------------|-----------|---------------|
//! | `Maximizing` | `false`   | `+1`          |
//! | `Minimizing` | `true`    | `-1`          |
//!
//! A draw is `0` and is kept distinct from both win signs even for games,
//! such as Nim, that can never reach it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two players of a zero-sum game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The side whose wins are worth `+1` (the computer in the bundled games).
    Maximizing,
    /// The side whose wins are worth `-1` (the human in the bundled games).
    Minimizing,
}

impl Side {
    /// Convert the boolean turn flag (`true` = minimizing side to move).
    #[inline]
    pub fn from_turn_flag(player_turn: bool) -> Self {
        if player_turn {
            Side::Minimizing
        } else {
            Side::Maximizing
        }
    }

    /// The boolean turn flag for this side.
    #[inline]
    pub fn is_player_turn(self) -> bool {
        self == Side::Minimizing
    }

    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Side::Maximizing => Side::Minimizing,
            Side::Minimizing => Side::Maximizing,
        }
    }

    /// Sign of a win for this side: `+1` for maximizing, `-1` for minimizing.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Side::Maximizing => 1,
            Side::Minimizing => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Maximizing => f.write_str("maximizing"),
            Side::Minimizing => f.write_str("minimizing"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maximizing" | "max" | "computer" => Ok(Side::Maximizing),
            "minimizing" | "min" | "player" | "human" => Ok(Side::Minimizing),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// Error returned when a side name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown side '{0}', expected 'maximizing' or 'minimizing'")]
pub struct ParseSideError(pub String);

/// Game-theoretic value of a position, from the maximizing side's perspective.
///
/// Variants are declared in ascending score order so the derived `Ord` agrees
/// with the numeric value; `max`/`min` over outcomes is the minimax backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    MinimizerWins,
    Draw,
    MaximizerWins,
}

impl Outcome {
    /// The outcome in which `side` wins.
    #[inline]
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Maximizing => Outcome::MaximizerWins,
            Side::Minimizing => Outcome::MinimizerWins,
        }
    }

    /// Numeric value in `{-1, 0, +1}`.
    #[inline]
    pub fn score(self) -> i8 {
        match self {
            Outcome::MinimizerWins => -1,
            Outcome::Draw => 0,
            Outcome::MaximizerWins => 1,
        }
    }

    /// The winning side, or `None` for a draw.
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::MinimizerWins => Some(Side::Minimizing),
            Outcome::Draw => None,
            Outcome::MaximizerWins => Some(Side::Maximizing),
        }
    }

    /// Returns `true` if `self` is strictly better for `side` than `current`.
    #[inline]
    pub fn improves_on(self, current: Outcome, side: Side) -> bool {
        match side {
            Side::Maximizing => self > current,
            Side::Minimizing => self < current,
        }
    }
}

impl TryFrom<i8> for Outcome {
    type Error = InvalidScore;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Outcome::MinimizerWins),
            0 => Ok(Outcome::Draw),
            1 => Ok(Outcome::MaximizerWins),
            other => Err(InvalidScore(other)),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::MinimizerWins => f.write_str("-1"),
            Outcome::Draw => f.write_str("0"),
            Outcome::MaximizerWins => f.write_str("+1"),
        }
    }
}

/// A score outside `{-1, 0, +1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("score {0} is not a valid outcome (expected -1, 0 or +1)")]
pub struct InvalidScore(pub i8);
