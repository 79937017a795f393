//! Adapter layer converting typed states to the erased interface
//!
//! [`GameAdapter`] owns a starting position of any [`State`] and implements
//! [`ErasedGame`] by building a [`GameTree`] from a copy of it. The copy is
//! taken once per analysis; construction itself shares that single position.

use std::fmt::{self, Debug, Display};
use std::time::Instant;

use engine_core::{GameMetadata, State};
use game_tree::GameTree;
use tracing::{debug, error, info};

use crate::erased::{Analysis, ErasedGame, GameError};

/// Adapter that wraps a typed starting position
pub struct GameAdapter<S> {
    start: S,
    metadata: GameMetadata,
}

impl<S> GameAdapter<S>
where
    S: State + Clone,
{
    /// Create a new adapter around a starting position
    pub fn new(start: S, metadata: GameMetadata) -> Self {
        Self { start, metadata }
    }

    /// Get a reference to the starting position
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Build the full tree from a copy of the starting position.
    pub fn build_tree(&self) -> Result<GameTree<S::Move>, GameError> {
        Ok(GameTree::from_start(&self.start)?)
    }
}

impl<S: Debug> Debug for GameAdapter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameAdapter")
            .field("game", &self.metadata.env_id)
            .field("start", &self.start)
            .finish()
    }
}

impl<S> ErasedGame for GameAdapter<S>
where
    S: State + Clone + Display + Debug + Send + Sync + 'static,
{
    fn metadata(&self) -> GameMetadata {
        self.metadata.clone()
    }

    fn describe_start(&self) -> String {
        self.start.to_string()
    }

    fn analyze(&self, verify: bool) -> Result<Analysis, GameError> {
        let started = Instant::now();
        let tree = self.build_tree().map_err(|e| {
            error!(game = %self.metadata.env_id, error = %e, "Tree construction failed");
            e
        })?;
        info!(
            game = %self.metadata.env_id,
            size = tree.size(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Tree built"
        );

        if verify {
            let mut replay = self.start.clone();
            tree.verify_against(&mut replay)?;
            debug!(game = %self.metadata.env_id, "Tree verified against the game");
        }

        let root = tree.root();
        let prediction = tree.prediction(root);

        Ok(Analysis {
            game: self.metadata.env_id.clone(),
            display_name: self.metadata.display_name.clone(),
            first: self.start.side_to_move(),
            root_value: tree.root_value(),
            prediction,
            predicted_winner: prediction.label(&self.metadata),
            best_move: tree.best_move(root).map(ToString::to_string),
            principal_variation: tree
                .principal_variation(root)
                .into_iter()
                .map(ToString::to_string)
                .collect(),
            size: tree.size(),
            stats: tree.stats(),
            verified: verify,
        })
    }
}
