//! JavaScript bindings for the UI.

use wasm_bindgen::prelude::*;

use crate::board::BOARD_SIZE;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;

#[wasm_bindgen]
pub struct ReversiGame {
    inner: Game,
}

#[wasm_bindgen]
impl ReversiGame {
    /// Accepts `undefined` or an object such as
    /// `{ strategy: "max-capture", computerColor: "white", seed: 7 }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ReversiGame, JsError> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            inner: Game::new(config),
        })
    }

    pub fn place(&mut self, row: u32, col: u32) -> Result<(), JsError> {
        let (row, col) = board_coords(row, col)?;
        Ok(self.inner.place(row, col)?)
    }

    /// Returns the computer's move, or `undefined` when it had to pass.
    #[wasm_bindgen(js_name = computerMove)]
    pub fn computer_move(&mut self) -> Result<JsValue, JsError> {
        let mv = self.inner.do_computer_move()?;
        Ok(serde_wasm_bindgen::to_value(&mv)?)
    }

    pub fn pass(&mut self) -> Result<(), JsError> {
        Ok(self.inner.pass()?)
    }

    #[wasm_bindgen(js_name = isComputerTurn)]
    pub fn is_computer_turn(&self) -> bool {
        self.inner.is_computer_turn()
    }

    #[wasm_bindgen(js_name = hasLegalMoves)]
    pub fn has_legal_moves(&self) -> bool {
        self.inner.has_legal_moves_for_current()
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.legal_moves())?)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.state())?)
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.result())?)
    }
}

/// JS numbers arrive as `u32`; reject anything off the board before narrowing.
fn board_coords(row: u32, col: u32) -> Result<(u8, u8), GameError> {
    let size = BOARD_SIZE as u32;
    if row >= size || col >= size {
        return Err(GameError::OutOfBounds { row, col });
    }
    Ok((row as u8, col as u8))
}
