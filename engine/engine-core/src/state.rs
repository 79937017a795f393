//! The State capability contract consumed by the game-tree builder.
//!
//! A `State` is one mutable game position plus the side to move. The tree
//! builder never copies it: it walks the whole game by applying a move,
//! recursing, and undoing the move on the same instance. Implementations must
//! therefore make `do_move`/`undo_move` exact inverses.

use std::fmt::{Debug, Display};

use crate::side::{Outcome, Side};

/// Main trait for game positions searched by the engine.
///
/// # Contract
///
/// * `find_all_moves` returns only moves legal in the current position, in a
///   deterministic order, and an empty list when the position is terminal.
/// * `do_move` applies a legal move, hands the turn to the opponent and returns
///   `true`. An illegal move returns `false` and leaves the position untouched.
/// * `undo_move` reverts the most recently applied move. Callers undo in strict
///   LIFO order; anything else is a caller bug and is not detected.
/// * `value` is defined only when `game_over` is true.
///
/// # Example
///
/// ```rust
/// use engine_core::{Outcome, Side, State, StateError};
///
/// /// Players alternately take one coin; whoever takes the last coin wins.
/// #[derive(Debug, Clone)]
/// struct Coins {
///     left: u32,
///     to_move: Side,
/// }
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Take;
///
/// impl std::fmt::Display for Take {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("take")
///     }
/// }
///
/// impl State for Coins {
///     type Move = Take;
///
///     fn find_all_moves(&self) -> Vec<Take> {
///         if self.left > 0 { vec![Take] } else { Vec::new() }
///     }
///     fn game_over(&self) -> bool {
///         self.left == 0
///     }
///     fn value(&self) -> Result<Outcome, StateError> {
///         if !self.game_over() {
///             return Err(StateError::NotTerminal);
///         }
///         Ok(Outcome::win_for(self.to_move.opponent()))
///     }
///     fn do_move(&mut self, _m: &Take) -> bool {
///         if self.left == 0 {
///             return false;
///         }
///         self.left -= 1;
///         self.to_move = self.to_move.opponent();
///         true
///     }
///     fn undo_move(&mut self, _m: &Take) {
///         self.left += 1;
///         self.to_move = self.to_move.opponent();
///     }
///     fn side_to_move(&self) -> Side {
///         self.to_move
///     }
/// }
///
/// let mut coins = Coins { left: 1, to_move: Side::Maximizing };
/// assert!(coins.do_move(&Take));
/// assert_eq!(coins.value().unwrap(), Outcome::MaximizerWins);
/// ```
pub trait State {
    /// A single legal transition. Compared only for equality by the engine.
    type Move: Clone + PartialEq + Debug + Display;

    /// Enumerate every legal move from the current position.
    fn find_all_moves(&self) -> Vec<Self::Move>;

    /// Whether no further move can change the outcome.
    fn game_over(&self) -> bool;

    /// Terminal value of the position.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotTerminal`] if the game is not over. A sentinel
    /// would be indistinguishable from a real draw.
    fn value(&self) -> Result<Outcome, StateError>;

    /// Apply `m` if it is legal here. Returns whether the move was applied.
    fn do_move(&mut self, m: &Self::Move) -> bool;

    /// Revert a move previously applied with [`State::do_move`].
    fn undo_move(&mut self, m: &Self::Move);

    /// Side whose turn it is.
    fn side_to_move(&self) -> Side;

    /// Boolean turn flag: `true` when the minimizing side is to move.
    #[inline]
    fn is_player_turn(&self) -> bool {
        self.side_to_move().is_player_turn()
    }
}

/// Contract violations raised by a [`State`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("value requested for a position that is not game over")]
    NotTerminal,
}
