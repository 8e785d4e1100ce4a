use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Strategy;
use crate::board::Board;
use crate::types::Position;

/// Picks a legal move uniformly at random from an injected generator.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl RandomStrategy<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> Strategy for RandomStrategy<R> {
    fn select_move(&mut self, _board: &Board, valid_moves: &[Position]) -> Option<Position> {
        if valid_moves.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..valid_moves.len());
        debug!("random: picked #{index} of {} moves", valid_moves.len());
        Some(valid_moves[index])
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
