//! Game metadata for presentation and configuration
//!
//! This module provides display-oriented metadata about games. None of it
//! influences search; drivers use it to label sides and describe variants.

use serde::{Deserialize, Serialize};

use crate::side::Side;

/// Metadata about a game variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    /// Game identifier used by the registry (e.g., "nim", "tictactoe")
    pub env_id: String,

    /// Human-readable display name (e.g., "Nim", "Tic-Tac-Toe")
    pub display_name: String,

    /// Label for the maximizing side (e.g., "computer")
    pub maximizing_label: String,

    /// Label for the minimizing side (e.g., "player")
    pub minimizing_label: String,

    /// Whether a drawn outcome is reachable in this game
    pub draws_possible: bool,

    /// Brief description of the rules
    pub description: String,
}

impl GameMetadata {
    /// Create a new GameMetadata with required fields
    pub fn new(env_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            env_id: env_id.into(),
            display_name: display_name.into(),
            maximizing_label: "computer".to_string(),
            minimizing_label: "player".to_string(),
            draws_possible: true,
            description: String::new(),
        }
    }

    /// Builder method for side labels
    pub fn with_side_labels(
        mut self,
        maximizing: impl Into<String>,
        minimizing: impl Into<String>,
    ) -> Self {
        self.maximizing_label = maximizing.into();
        self.minimizing_label = minimizing.into();
        self
    }

    /// Builder method for draw reachability
    pub fn with_draws(mut self, draws_possible: bool) -> Self {
        self.draws_possible = draws_possible;
        self
    }

    /// Builder method for description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Label for the given side
    pub fn side_label(&self, side: Side) -> &str {
        match side {
            Side::Maximizing => &self.maximizing_label,
            Side::Minimizing => &self.minimizing_label,
        }
    }
}
