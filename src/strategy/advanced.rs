use log::{debug, trace};
use web_time::Instant;

use super::{Strategy, first_best_by_score};
use crate::board::{BOARD_SIZE, Board, DIRECTIONS, GamePhase};
use crate::types::{Color, Position};

/// Static square values, mirrored across both axes.
pub const POSITION_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// Squares touching a corner, excluding the corners themselves.
pub const NEAR_CORNERS: [Position; 12] = [
    Position::new(0, 1),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(0, 6),
    Position::new(1, 6),
    Position::new(1, 7),
    Position::new(6, 0),
    Position::new(6, 1),
    Position::new(7, 1),
    Position::new(6, 6),
    Position::new(6, 7),
    Position::new(7, 6),
];

const CAPTURE_WEIGHT: i32 = 2;
const NEAR_CORNER_PENALTY: i32 = -30;
const EARLY_MOBILITY_WEIGHT: i32 = 3;
const MIDDLE_STABILITY_WEIGHT: i32 = 2;
const LATE_CAPTURE_WEIGHT: i32 = 2;
const PARITY_BONUS: i32 = 10;

/// One-ply evaluator combining square weights, captures, corner danger and a
/// phase-dependent term (mobility early, stability mid-game, captures late).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedStrategy {
    color: Color,
}

impl AdvancedStrategy {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Heuristic score of playing `pos` on `board`. Higher is better.
    pub fn evaluate(&self, board: &Board, pos: Position) -> i32 {
        let captures = board.capture_count(pos, self.color) as i32;

        let mut score = POSITION_WEIGHTS[pos.row as usize][pos.col as usize];
        score += CAPTURE_WEIGHT * captures;
        if NEAR_CORNERS.contains(&pos) {
            score += NEAR_CORNER_PENALTY;
        }
        score += match board.phase() {
            GamePhase::Early => EARLY_MOBILITY_WEIGHT * self.mobility(board, pos),
            GamePhase::Middle => MIDDLE_STABILITY_WEIGHT * self.stability(board, pos),
            GamePhase::Late => LATE_CAPTURE_WEIGHT * captures,
        };
        if board.empty_count() % 2 == 0 {
            score += PARITY_BONUS;
        }

        trace!("advanced: ({}, {}) scores {score}", pos.row, pos.col);
        score
    }

    /// Negated opponent move count after dropping our stone on `pos`.
    /// Only the placement is simulated; nothing is flipped.
    fn mobility(&self, board: &Board, pos: Position) -> i32 {
        let placed = board.with_cell(pos, self.color.to_cell());
        -(placed.valid_moves(self.color.opponent()).len() as i32)
    }

    /// Number of adjacent squares already holding our color.
    fn stability(&self, board: &Board, pos: Position) -> i32 {
        let own = self.color.to_cell();
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = pos.row as i32 + dr;
                let col = pos.col as i32 + dc;
                let on_board = (0..BOARD_SIZE as i32).contains(&row)
                    && (0..BOARD_SIZE as i32).contains(&col);
                on_board.then(|| board.cell(Position::new(row as u8, col as u8)))
            })
            .filter(|&cell| cell == own)
            .count() as i32
    }
}

impl Default for AdvancedStrategy {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl Strategy for AdvancedStrategy {
    fn select_move(&mut self, board: &Board, valid_moves: &[Position]) -> Option<Position> {
        let started = Instant::now();
        let best = first_best_by_score(valid_moves, |mv| self.evaluate(board, mv) as i64)?;
        debug!(
            "advanced: ({}, {}) chosen from {} moves in {:?} ({:?})",
            best.row,
            best.col,
            valid_moves.len(),
            started.elapsed(),
            board.phase()
        );
        Some(best)
    }

    fn name(&self) -> &'static str {
        "advanced"
    }
}
