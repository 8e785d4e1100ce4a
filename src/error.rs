use thiserror::Error;

use crate::types::Color;

/// Errors raised by board and session operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    #[error("row/col out of range: ({row}, {col})")]
    OutOfBounds { row: u32, col: u32 },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {0:?}'s turn")]
    NotYourTurn(Color),

    #[error("{0:?} has a legal move and cannot pass")]
    MustPlay(Color),

    #[error("strategy could not select a move")]
    NoMoveSelected,
}
