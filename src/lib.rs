//! Reversi rules on a fixed 8×8 board plus interchangeable computer players.
//!
//! [`Board`] owns the rules: legal moves, flipping, piece counts and the end
//! of the game. A [`Strategy`] picks one move from the legal moves the caller
//! hands it. [`Game`] strings the two together for a human-versus-computer
//! session, and [`wasm::ReversiGame`] exposes that session to JavaScript.

use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod strategy;
pub mod types;
pub mod wasm;

pub use board::{Board, GamePhase};
pub use config::{GameConfig, StrategyKind};
pub use error::GameError;
pub use game::Game;
pub use strategy::{AdvancedStrategy, MaxCaptureStrategy, RandomStrategy, Strategy};
pub use types::{Cell, Color, GameResult, GameState, PieceCount, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
