use serde::Deserialize;
use web_time::{SystemTime, UNIX_EPOCH};

use crate::strategy::{AdvancedStrategy, MaxCaptureStrategy, RandomStrategy, Strategy};
use crate::types::Color;

/// Which computer player to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Random,
    MaxCapture,
    #[default]
    Advanced,
}

/// Session options, as passed in from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub strategy: StrategyKind,
    pub computer_color: Color,
    /// Seed for the random strategy. Taken from the clock when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            computer_color: Color::White,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn build_strategy(&self) -> Box<dyn Strategy> {
        match self.strategy {
            StrategyKind::Random => {
                Box::new(RandomStrategy::from_seed(self.seed.unwrap_or_else(clock_seed)))
            }
            StrategyKind::MaxCapture => Box::new(MaxCaptureStrategy::new(self.computer_color)),
            StrategyKind::Advanced => Box::new(AdvancedStrategy::new(self.computer_color)),
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
