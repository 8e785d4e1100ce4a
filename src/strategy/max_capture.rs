use log::debug;

use super::{Strategy, first_best_by_score};
use crate::board::Board;
use crate::types::{Color, Position};

/// Greedy player: takes the move that flips the most stones right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxCaptureStrategy {
    color: Color,
}

impl MaxCaptureStrategy {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for MaxCaptureStrategy {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl Strategy for MaxCaptureStrategy {
    fn select_move(&mut self, board: &Board, valid_moves: &[Position]) -> Option<Position> {
        let best = first_best_by_score(valid_moves, |mv| {
            board.capture_count(mv, self.color) as i64
        })?;
        debug!(
            "max-capture: ({}, {}) captures {}",
            best.row,
            best.col,
            board.capture_count(best, self.color)
        );
        Some(best)
    }

    fn name(&self) -> &'static str {
        "max-capture"
    }
}
