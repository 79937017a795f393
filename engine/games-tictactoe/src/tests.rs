use super::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Build a board from three row strings using `X`, `O` and `.`
fn board_from(rows: [&str; 3]) -> Board {
    let mut board = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            board[r][c] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
    }
    board
}

#[test]
fn test_initial_state() {
    let state = TicTacToeState::new(Side::Minimizing);
    assert_eq!(state.moves_played(), 0);
    assert_eq!(state.side_to_move(), Side::Minimizing);
    assert!(state.is_player_turn());
    assert!(!state.game_over());
    assert_eq!(state.winner(), None);
}

#[test]
fn test_legal_moves_row_major() {
    let state = TicTacToeState::new(Side::Maximizing);
    let moves = state.find_all_moves();
    assert_eq!(moves.len(), 9);
    assert_eq!(moves[0], TicTacToeMove::new(0, 0));
    assert_eq!(moves[1], TicTacToeMove::new(0, 1));
    assert_eq!(moves[3], TicTacToeMove::new(1, 0));
    assert_eq!(moves[8], TicTacToeMove::new(2, 2));

    // After one move
    let mut state = state;
    assert!(state.do_move(&TicTacToeMove::new(1, 1)));
    let moves = state.find_all_moves();
    assert_eq!(moves.len(), 8);
    assert!(!moves.contains(&TicTacToeMove::new(1, 1)));
}

#[test]
fn test_mark_follows_side() {
    let mut state = TicTacToeState::new(Side::Maximizing);
    assert!(state.do_move(&TicTacToeMove::new(0, 0)));
    assert_eq!(state.cell(0, 0), Some(Mark::X));
    assert_eq!(state.side_to_move(), Side::Minimizing);

    assert!(state.do_move(&TicTacToeMove::new(0, 1)));
    assert_eq!(state.cell(0, 1), Some(Mark::O));
    assert_eq!(state.side_to_move(), Side::Maximizing);
}

#[test]
fn test_invalid_move() {
    let mut state = TicTacToeState::new(Side::Maximizing);
    assert!(state.do_move(&TicTacToeMove::new(1, 1)));
    let before = state;

    // Occupied cell
    assert!(!state.do_move(&TicTacToeMove::new(1, 1)));
    // Out of range
    assert!(!state.do_move(&TicTacToeMove::new(3, 0)));
    assert!(!state.do_move(&TicTacToeMove::new(0, 3)));

    assert_eq!(state, before);
}

#[test]
fn test_undo_restores_turn() {
    let mut state = TicTacToeState::new(Side::Minimizing);
    let before = state;
    let m = TicTacToeMove::new(2, 0);

    assert!(state.do_move(&m));
    state.undo_move(&m);

    assert_eq!(state, before);
    assert_eq!(state.side_to_move(), Side::Minimizing);
}

#[test]
fn test_winning_game() {
    let mut state = TicTacToeState::new(Side::Maximizing);

    // X wins with top row
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        assert!(state.do_move(&TicTacToeMove::new(row, col)));
    }

    assert_eq!(state.winner(), Some(Mark::X));
    assert!(state.game_over());
    assert!(state.find_all_moves().is_empty());
    assert_eq!(state.value(), Ok(Outcome::MaximizerWins));
}

#[test]
fn test_o_line_is_minimizer_win() {
    let state = TicTacToeState::from_board(board_from(["XX.", "OOO", "X.."]), Side::Maximizing);
    assert!(state.game_over());
    assert_eq!(state.value(), Ok(Outcome::MinimizerWins));
}

#[test]
fn test_no_moves_after_a_win() {
    let mut state = TicTacToeState::from_board(board_from(["XX.", "OOO", "X.."]), Side::Maximizing);
    let before = state;

    assert!(state.find_all_moves().is_empty());
    assert!(!state.do_move(&TicTacToeMove::new(0, 2)));
    assert_eq!(state, before);
    assert_eq!(state.side_to_move(), Side::Maximizing);
    assert_eq!(state.value(), Ok(Outcome::MinimizerWins));
}

#[test]
fn test_draw_game() {
    // X O X / O X O / O X O
    let state = TicTacToeState::from_board(board_from(["XOX", "OXO", "OXO"]), Side::Maximizing);
    assert_eq!(state.winner(), None);
    assert!(state.game_over());
    assert_eq!(state.value(), Ok(Outcome::Draw));
}

#[test]
fn test_win_on_full_board_beats_draw() {
    let state = TicTacToeState::from_board(board_from(["XOX", "OXO", "OOX"]), Side::Minimizing);
    assert_eq!(state.value(), Ok(Outcome::MaximizerWins));
}

#[test]
fn test_value_requires_terminal() {
    let state = TicTacToeState::new(Side::Maximizing);
    assert_eq!(state.value(), Err(StateError::NotTerminal));
}

#[test]
fn test_do_undo_round_trip_random_playouts() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for game in 0..300 {
        let first = if game % 2 == 0 {
            Side::Maximizing
        } else {
            Side::Minimizing
        };
        let start = TicTacToeState::new(first);
        let mut state = start;
        let mut history = Vec::new();

        while let Some(m) = state.find_all_moves().choose(&mut rng).copied() {
            let before = state;
            assert!(state.do_move(&m));
            state.undo_move(&m);
            assert_eq!(state, before, "round trip failed for {m}");

            assert!(state.do_move(&m));
            history.push(m);
        }

        let outcome = state.value().unwrap();
        assert!([-1, 0, 1].contains(&outcome.score()));

        while let Some(m) = history.pop() {
            state.undo_move(&m);
        }
        assert_eq!(state, start);
    }
}

#[test]
fn test_display() {
    let mut state = TicTacToeState::new(Side::Maximizing);
    assert!(state.do_move(&TicTacToeMove::new(0, 0)));
    assert!(state.do_move(&TicTacToeMove::new(1, 1)));

    let expected = " -------------\n | X |   |   |\n -------------\n |   | O |   |\n -------------\n |   |   |   |\n -------------\n";
    assert_eq!(state.to_string(), expected);
    assert_eq!(TicTacToeMove::new(2, 1).to_string(), "row 2 column 1");
}

#[test]
fn test_metadata() {
    let meta = metadata();
    assert_eq!(meta.env_id, "tictactoe");
    assert!(meta.draws_possible);
    assert_eq!(meta.side_label(Mark::X.side()), "computer");
}
