use log::trace;

use crate::error::GameError;
use crate::types::{Cell, Color, PieceCount, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const EARLY_GAME_MAX_OCCUPIED: usize = 20;
const MIDDLE_GAME_MAX_OCCUPIED: usize = 50;

/// Stage of the game, derived from how many squares are occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Early,
    Middle,
    Late,
}

/// Reversi board state as 64 cells in row-major order.
///
/// The board is `Copy`; every move produces a new value and leaves the
/// previous one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        cells[idx(3, 3)] = Cell::White;
        cells[idx(3, 4)] = Cell::Black;
        cells[idx(4, 3)] = Cell::Black;
        cells[idx(4, 4)] = Cell::White;
        Self { cells }
    }

    pub fn from_cells(cells: [Cell; NUM_SQUARES]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Returns a copy with one square overwritten, without flipping anything.
    pub fn with_cell(mut self, pos: Position, cell: Cell) -> Self {
        self.cells[pos.index()] = cell;
        self
    }

    /// Returns the legal moves for `color` in row-major scan order.
    /// A square that brackets in several directions is listed once.
    pub fn valid_moves(&self, color: Color) -> Vec<Position> {
        (0..NUM_SQUARES)
            .map(Position::from_index)
            .filter(|&pos| self.brackets_any(pos, color))
            .collect()
    }

    pub fn has_valid_move(&self, color: Color) -> bool {
        (0..NUM_SQUARES)
            .map(Position::from_index)
            .any(|pos| self.brackets_any(pos, color))
    }

    pub fn is_valid_move(&self, pos: Position, color: Color) -> bool {
        in_bounds(pos) && self.brackets_any(pos, color)
    }

    /// Places one stone and flips captured stones, returning the new board.
    /// The move is validated first; `self` is never modified.
    pub fn apply_move(&self, pos: Position, color: Color) -> Result<Board, GameError> {
        if !in_bounds(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row.into(),
                col: pos.col.into(),
            });
        }
        if !self.brackets_any(pos, color) {
            return Err(GameError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }

        let flips = self.flips(pos, color);
        let mut next = *self;
        next.cells[pos.index()] = color.to_cell();
        for flipped in &flips {
            next.cells[flipped.index()] = color.to_cell();
        }

        trace!(
            "{color:?} plays ({}, {}) flipping {} stone(s)",
            pos.row,
            pos.col,
            flips.len()
        );
        Ok(next)
    }

    /// Squares that placing `color` at `pos` would flip, grouped by direction.
    pub fn flips(&self, pos: Position, color: Color) -> Vec<Position> {
        let mut flips = Vec::new();
        for dir in DIRECTIONS {
            if let Some(len) = self.bracketed_run(pos, dir, color) {
                flips.extend(ray(pos, dir).take(len));
            }
        }
        flips
    }

    /// Number of opponent stones a stone of `color` at `pos` would capture.
    /// Runs that end on an empty square or the edge count for nothing.
    pub fn capture_count(&self, pos: Position, color: Color) -> usize {
        DIRECTIONS
            .iter()
            .filter_map(|&dir| self.bracketed_run(pos, dir, color))
            .sum()
    }

    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount::default();
        for cell in self.cells {
            match cell {
                Cell::Black => count.black += 1,
                Cell::White => count.white += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> usize {
        NUM_SQUARES - self.occupied_count()
    }

    pub fn phase(&self) -> GamePhase {
        match self.occupied_count() {
            n if n <= EARLY_GAME_MAX_OCCUPIED => GamePhase::Early,
            n if n <= MIDDLE_GAME_MAX_OCCUPIED => GamePhase::Middle,
            _ => GamePhase::Late,
        }
    }

    /// True when neither side has a legal move. A side that is merely blocked
    /// passes; the game only ends once both are.
    pub fn is_terminal(&self) -> bool {
        !self.has_valid_move(Color::Black) && !self.has_valid_move(Color::White)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        self.cells.map(Cell::to_u8)
    }

    fn brackets_any(&self, pos: Position, color: Color) -> bool {
        self.cell(pos).is_empty()
            && DIRECTIONS
                .iter()
                .any(|&dir| matches!(self.bracketed_run(pos, dir, color), Some(len) if len > 0))
    }

    /// Walks from `pos` along `dir` over opponent stones. Returns the run
    /// length if the walk ends on a `color` stone, `None` on empty or edge.
    fn bracketed_run(&self, pos: Position, dir: (i32, i32), color: Color) -> Option<usize> {
        let own = color.to_cell();
        let opp = color.opponent().to_cell();
        let mut len = 0;

        for square in ray(pos, dir) {
            match self.cell(square) {
                cell if cell == opp => len += 1,
                cell if cell == own => return Some(len),
                _ => return None,
            }
        }

        None
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut cells = [Cell::Empty; NUM_SQUARES];
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), BOARD_SIZE, "row {row} must have 8 squares");
            for (col, ch) in line.chars().enumerate() {
                cells[idx(row, col)] = match ch {
                    'B' => Cell::Black,
                    'W' => Cell::White,
                    '.' => Cell::Empty,
                    other => panic!("unexpected square {other:?}"),
                };
            }
        }
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Squares strictly beyond `pos` along `dir`, up to the edge.
fn ray(pos: Position, (dr, dc): (i32, i32)) -> impl Iterator<Item = Position> {
    let (row, col) = (pos.row as i32, pos.col as i32);
    (1..BOARD_SIZE as i32)
        .map(move |step| (row + dr * step, col + dc * step))
        .take_while(|&(r, c)| in_bounds_rc(r, c))
        .map(|(r, c)| Position::new(r as u8, c as u8))
}

fn idx(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

fn in_bounds(pos: Position) -> bool {
    (pos.row as usize) < BOARD_SIZE && (pos.col as usize) < BOARD_SIZE
}

fn in_bounds_rc(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
