//! Computer players.
//!
//! Every strategy answers one question: given a board and the legal moves the
//! caller already computed for the side to move, which move to play. An empty
//! move list yields `None`, which the caller treats as a pass.

mod advanced;
mod max_capture;
mod random;

pub use advanced::{AdvancedStrategy, NEAR_CORNERS, POSITION_WEIGHTS};
pub use max_capture::MaxCaptureStrategy;
pub use random::RandomStrategy;

use crate::board::Board;
use crate::types::Position;

pub trait Strategy: Send {
    /// Picks one of `valid_moves`, or `None` when there is nothing to play.
    fn select_move(&mut self, board: &Board, valid_moves: &[Position]) -> Option<Position>;

    fn name(&self) -> &'static str;
}

/// Returns the first candidate with the strictly greatest score.
pub(crate) fn first_best_by_score<F>(valid_moves: &[Position], mut score: F) -> Option<Position>
where
    F: FnMut(Position) -> i64,
{
    let mut best: Option<(Position, i64)> = None;
    for &mv in valid_moves {
        let value = score(mv);
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((mv, value));
        }
    }
    best.map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn all_strategies() -> Vec<Box<dyn Strategy>> {
        vec![
            Box::new(RandomStrategy::from_seed(7)),
            Box::new(MaxCaptureStrategy::new(Color::Black)),
            Box::new(AdvancedStrategy::new(Color::Black)),
        ]
    }

    #[test]
    fn empty_move_set_yields_none_from_every_strategy() {
        let board = Board::new();
        for mut strategy in all_strategies() {
            assert_eq!(strategy.select_move(&board, &[]), None, "{}", strategy.name());
        }
    }

    #[test]
    fn every_strategy_answers_with_one_of_the_candidates() {
        let board = Board::new();
        let moves = board.valid_moves(Color::Black);
        for mut strategy in all_strategies() {
            let mv = strategy.select_move(&board, &moves).unwrap();
            assert!(moves.contains(&mv), "{} picked {mv:?}", strategy.name());
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn first_best_keeps_earliest_on_ties() {
        let moves = [
            Position::new(0, 0),
            Position::new(1, 1),
            Position::new(2, 2),
            Position::new(3, 3),
        ];
        let scores = [1, 5, 5, 2];
        let mut it = scores.iter();

        let best = first_best_by_score(&moves, |_| *it.next().unwrap());

        assert_eq!(best, Some(Position::new(1, 1)));
        assert_eq!(first_best_by_score(&[], |_| 0), None);
    }
}
