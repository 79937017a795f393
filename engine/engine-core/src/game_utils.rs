//! Shared utilities for grid game implementations
//!
//! Games played on a 3x3 grid share the same eight winning lines. Keeping the
//! table here means every grid game agrees on what "three in a row" means.

/// Side length of the classic 3x3 grid.
pub const GRID_SIZE: usize = 3;

/// Every winning line on a 3x3 grid as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Find the owner of a completed line on a 3x3 grid, if any.
///
/// # Example
/// ```
/// use engine_core::game_utils::line_winner;
///
/// let grid = [
///     [Some('X'), Some('X'), Some('X')],
///     [None, Some('O'), None],
///     [Some('O'), None, None],
/// ];
/// assert_eq!(line_winner(&grid), Some('X'));
///
/// let empty: [[Option<char>; 3]; 3] = [[None; 3]; 3];
/// assert_eq!(line_winner(&empty), None);
/// ```
pub fn line_winner<T: Copy + PartialEq>(grid: &[[Option<T>; GRID_SIZE]; GRID_SIZE]) -> Option<T> {
    LINES.iter().find_map(|line| {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        match grid[r0][c0] {
            Some(mark) if grid[r1][c1] == Some(mark) && grid[r2][c2] == Some(mark) => Some(mark),
            _ => None,
        }
    })
}

/// Whether every cell of the grid is occupied.
#[inline]
pub fn grid_full<T>(grid: &[[Option<T>; GRID_SIZE]; GRID_SIZE]) -> bool {
    grid.iter().flatten().all(Option::is_some)
}
