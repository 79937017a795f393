//! Nim implementation for the game-tree engine
//!
//! Players alternately remove between one and `max_take` objects from a
//! single stack. The player who takes the last object wins, so the side left
//! to move with every stack empty has lost. Draws are impossible.
//!
//! # Stack Layout
//!
//! `NimState::new(n, side)` builds the classic staircase of stacks:
//! ```text
//! 1: X
//! 2: XX
//! 3: XXX
//! ```
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Outcome, Side, State};
//! use games_nim::{NimMove, NimState};
//!
//! let mut state = NimState::new(2, Side::Maximizing);
//! assert_eq!(state.stacks(), &[1, 2]);
//!
//! let take = NimMove::new(1, 2);
//! assert!(state.do_move(&take));
//! assert_eq!(state.stacks(), &[1, 0]);
//! state.undo_move(&take);
//! assert_eq!(state.stacks(), &[1, 2]);
//! ```

use std::fmt;

use engine_core::{GameMetadata, Outcome, Side, State, StateError};
use serde::{Deserialize, Serialize};

/// Default cap on how many objects a single move may remove
pub const DEFAULT_MAX_TAKE: u32 = 3;

/// Game metadata for Nim
pub fn metadata() -> GameMetadata {
    GameMetadata::new("nim", "Nim")
        .with_side_labels("computer", "player")
        .with_draws(false)
        .with_description("Take 1-3 objects from one stack; whoever takes the last object wins")
}

/// Nim position
///
/// Holds the stack sizes, the removal cap and the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimState {
    stacks: Vec<u32>,
    max_take: u32,
    to_move: Side,
}

impl NimState {
    /// Create `n` stacks holding `1, 2, ..., n` objects
    pub fn new(n: usize, first: Side) -> Self {
        Self::with_stacks((1..=n as u32).collect(), first)
    }

    /// Create a position from explicit stack sizes
    pub fn with_stacks(stacks: Vec<u32>, first: Side) -> Self {
        Self {
            stacks,
            max_take: DEFAULT_MAX_TAKE,
            to_move: first,
        }
    }

    /// Builder method for the per-move removal cap (at least 1)
    pub fn with_max_take(mut self, max_take: u32) -> Self {
        self.max_take = max_take.max(1);
        self
    }

    pub fn stacks(&self) -> &[u32] {
        &self.stacks
    }

    pub fn max_take(&self) -> u32 {
        self.max_take
    }

    /// Total objects left across all stacks
    pub fn remaining(&self) -> u32 {
        self.stacks.iter().sum()
    }

    fn is_legal(&self, m: &NimMove) -> bool {
        match self.stacks.get(m.stack) {
            Some(&size) => (1..=self.max_take).contains(&m.count) && m.count <= size,
            None => false,
        }
    }
}

impl State for NimState {
    type Move = NimMove;

    fn find_all_moves(&self) -> Vec<NimMove> {
        self.stacks
            .iter()
            .enumerate()
            .flat_map(|(stack, &size)| {
                (1..=self.max_take.min(size)).map(move |count| NimMove { stack, count })
            })
            .collect()
    }

    fn game_over(&self) -> bool {
        self.stacks.iter().all(|&size| size == 0)
    }

    fn value(&self) -> Result<Outcome, StateError> {
        if !self.game_over() {
            return Err(StateError::NotTerminal);
        }
        // The side to move faces empty stacks: its opponent took the last object.
        Ok(Outcome::win_for(self.to_move.opponent()))
    }

    fn do_move(&mut self, m: &NimMove) -> bool {
        if !self.is_legal(m) {
            return false;
        }
        self.stacks[m.stack] -= m.count;
        self.to_move = self.to_move.opponent();
        true
    }

    fn undo_move(&mut self, m: &NimMove) {
        if let Some(size) = self.stacks.get_mut(m.stack) {
            *size += m.count;
            self.to_move = self.to_move.opponent();
        }
    }

    fn side_to_move(&self) -> Side {
        self.to_move
    }
}

impl fmt::Display for NimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &size) in self.stacks.iter().enumerate() {
            writeln!(f, "{}: {}", i + 1, "X".repeat(size as usize))?;
        }
        Ok(())
    }
}

/// Nim move: remove `count` objects from the stack at index `stack` (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimMove {
    pub stack: usize,
    pub count: u32,
}

impl NimMove {
    pub fn new(stack: usize, count: u32) -> Self {
        Self { stack, count }
    }
}

impl fmt::Display for NimMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "take {} from stack {}", self.count, self.stack + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_initial_state() {
        let state = NimState::new(3, Side::Minimizing);
        assert_eq!(state.stacks(), &[1, 2, 3]);
        assert_eq!(state.max_take(), DEFAULT_MAX_TAKE);
        assert_eq!(state.side_to_move(), Side::Minimizing);
        assert!(state.is_player_turn());
        assert!(!state.game_over());
        assert_eq!(state.remaining(), 6);
    }

    #[test]
    fn test_move_enumeration_order() {
        let state = NimState::with_stacks(vec![1, 4], Side::Maximizing);
        let moves = state.find_all_moves();
        assert_eq!(
            moves,
            vec![
                NimMove::new(0, 1),
                NimMove::new(1, 1),
                NimMove::new(1, 2),
                NimMove::new(1, 3),
            ]
        );
    }

    #[test]
    fn test_max_take_limits_moves() {
        let state = NimState::with_stacks(vec![5], Side::Maximizing).with_max_take(2);
        assert_eq!(state.find_all_moves().len(), 2);

        let clamped = NimState::with_stacks(vec![5], Side::Maximizing).with_max_take(0);
        assert_eq!(clamped.max_take(), 1);
    }

    #[test]
    fn test_terminal_has_no_moves() {
        let state = NimState::with_stacks(vec![0, 0], Side::Maximizing);
        assert!(state.game_over());
        assert!(state.find_all_moves().is_empty());
    }

    #[test]
    fn test_do_move_flips_turn() {
        let mut state = NimState::new(2, Side::Maximizing);
        assert!(state.do_move(&NimMove::new(1, 1)));
        assert_eq!(state.stacks(), &[1, 1]);
        assert_eq!(state.side_to_move(), Side::Minimizing);
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let mut state = NimState::new(2, Side::Maximizing);
        let before = state.clone();

        for bad in [
            NimMove::new(2, 1), // no such stack
            NimMove::new(0, 0), // must take something
            NimMove::new(0, 2), // more than the stack holds
            NimMove::new(1, 4), // above the cap
        ] {
            assert!(!state.do_move(&bad), "{bad} should be rejected");
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_value_requires_terminal() {
        let state = NimState::new(1, Side::Maximizing);
        assert_eq!(state.value(), Err(StateError::NotTerminal));
    }

    #[test]
    fn test_last_taker_wins() {
        // Maximizing side takes the last object; minimizing side is left to move.
        let mut state = NimState::with_stacks(vec![1], Side::Maximizing);
        assert!(state.do_move(&NimMove::new(0, 1)));
        assert_eq!(state.value(), Ok(Outcome::MaximizerWins));

        let mut state = NimState::with_stacks(vec![1], Side::Minimizing);
        assert!(state.do_move(&NimMove::new(0, 1)));
        assert_eq!(state.value(), Ok(Outcome::MinimizerWins));
    }

    #[test]
    fn test_never_draws() {
        for side in [Side::Maximizing, Side::Minimizing] {
            let state = NimState::with_stacks(vec![0], side);
            assert_ne!(state.value(), Ok(Outcome::Draw));
        }
    }

    #[test]
    fn test_do_undo_round_trip_random_playouts() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);

        for _ in 0..200 {
            let mut state = NimState::with_stacks(vec![3, 4, 5], Side::Maximizing);
            let mut history = Vec::new();

            while let Some(m) = state.find_all_moves().choose(&mut rng).copied() {
                let before = state.clone();
                assert!(state.do_move(&m));
                state.undo_move(&m);
                assert_eq!(state, before, "round trip failed for {m}");

                assert!(state.do_move(&m));
                history.push((m, before));
            }

            // Unwind the whole game back to the start
            while let Some((m, before)) = history.pop() {
                state.undo_move(&m);
                assert_eq!(state, before);
            }
            assert_eq!(state.stacks(), &[3, 4, 5]);
        }
    }

    #[test]
    fn test_display() {
        let state = NimState::new(3, Side::Maximizing);
        assert_eq!(state.to_string(), "1: X\n2: XX\n3: XXX\n");
        assert_eq!(NimMove::new(1, 2).to_string(), "take 2 from stack 2");
    }

    #[test]
    fn test_metadata() {
        let meta = metadata();
        assert_eq!(meta.env_id, "nim");
        assert!(!meta.draws_possible);
    }
}
