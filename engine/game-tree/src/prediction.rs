//! Human-readable forecasts derived from node values.

use std::fmt;

use engine_core::{GameMetadata, Outcome, Side};
use serde::Serialize;

/// Who wins from a position under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    MaximizerWins,
    MinimizerWins,
    NoOne,
}

impl Prediction {
    /// Predicted winner, `None` when the game is a forced draw.
    pub fn winner(self) -> Option<Side> {
        match self {
            Prediction::MaximizerWins => Some(Side::Maximizing),
            Prediction::MinimizerWins => Some(Side::Minimizing),
            Prediction::NoOne => None,
        }
    }

    /// Forecast using the game's own side labels (e.g. "computer", "player").
    pub fn label(self, metadata: &GameMetadata) -> String {
        match self.winner() {
            Some(side) => metadata.side_label(side).to_string(),
            None => "no one".to_string(),
        }
    }
}

impl From<Outcome> for Prediction {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::MaximizerWins => Prediction::MaximizerWins,
            Outcome::MinimizerWins => Prediction::MinimizerWins,
            Outcome::Draw => Prediction::NoOne,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prediction::MaximizerWins => f.write_str("maximizing side wins"),
            Prediction::MinimizerWins => f.write_str("minimizing side wins"),
            Prediction::NoOne => f.write_str("no one"),
        }
    }
}
