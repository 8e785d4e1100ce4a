use serde::{Deserialize, Serialize};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Self::Black => Cell::Black,
            Self::White => Cell::White,
        }
    }
}

/// Contents of one square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Wire encoding used by the UI: 0=empty, 1=black, 2=white.
    pub fn to_u8(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

/// A board coordinate. Also the representation of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PieceCount {
    pub black: u8,
    pub white: u8,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Vec<u8>,
    pub current_player: Color,
    pub computer_color: Color,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: flipped positions as `row * 8 + col`.
    /// - Pass: must be an empty list.
    pub flipped: Vec<u8>,
    pub last_move: Option<Position>,
}

/// Final result after game over. `winner` is `None` on a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub winner: Option<Color>,
    pub black_count: u8,
    pub white_count: u8,
}
