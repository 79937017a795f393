//! Table-driven game for exercising the builder on hand-made trees.

use engine_core::{Outcome, Side, State, StateError};

/// One position of a scripted game.
#[derive(Debug, Clone)]
pub struct Position {
    /// `(move label, target position)` pairs in enumeration order
    pub edges: Vec<(u8, usize)>,
    /// Labels enumerated by `find_all_moves` that `do_move` refuses
    pub bogus: Vec<u8>,
    pub terminal: Option<Outcome>,
}

impl Position {
    pub fn interior(edges: &[(u8, usize)]) -> Self {
        Self {
            edges: edges.to_vec(),
            bogus: Vec::new(),
            terminal: None,
        }
    }

    pub fn terminal(outcome: Outcome) -> Self {
        Self {
            edges: Vec::new(),
            bogus: Vec::new(),
            terminal: Some(outcome),
        }
    }

    pub fn with_bogus(mut self, label: u8) -> Self {
        self.bogus.push(label);
        self
    }
}

/// A game whose positions and values come from a table.
#[derive(Debug, Clone)]
pub struct ScriptedState {
    positions: Vec<Position>,
    current: usize,
    history: Vec<usize>,
    to_move: Side,
}

impl ScriptedState {
    /// Start at position 0 with `first` to move.
    pub fn new(first: Side, positions: Vec<Position>) -> Self {
        Self {
            positions,
            current: 0,
            history: Vec::new(),
            to_move: first,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl State for ScriptedState {
    type Move = u8;

    fn find_all_moves(&self) -> Vec<u8> {
        let position = &self.positions[self.current];
        position
            .edges
            .iter()
            .map(|&(label, _)| label)
            .chain(position.bogus.iter().copied())
            .collect()
    }

    fn game_over(&self) -> bool {
        self.positions[self.current].terminal.is_some()
    }

    fn value(&self) -> Result<Outcome, StateError> {
        self.positions[self.current]
            .terminal
            .ok_or(StateError::NotTerminal)
    }

    fn do_move(&mut self, m: &u8) -> bool {
        let target = self.positions[self.current]
            .edges
            .iter()
            .find(|&&(label, _)| label == *m)
            .map(|&(_, target)| target);

        match target {
            Some(target) => {
                self.history.push(self.current);
                self.current = target;
                self.to_move = self.to_move.opponent();
                true
            }
            None => false,
        }
    }

    fn undo_move(&mut self, _m: &u8) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
            self.to_move = self.to_move.opponent();
        }
    }

    fn side_to_move(&self) -> Side {
        self.to_move
    }
}
