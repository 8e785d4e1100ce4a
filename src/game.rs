use log::debug;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::strategy::Strategy;
use crate::types::{Color, GameResult, GameState, Position};

/// A human-versus-computer session. Black always moves first.
pub struct Game {
    board: Board,
    current_player: Color,
    computer_color: Color,
    is_game_over: bool,
    is_pass: bool,
    flipped: Vec<u8>,
    last_move: Option<Position>,
    strategy: Box<dyn Strategy>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_strategy(config.computer_color, config.build_strategy())
    }

    pub fn with_strategy(computer_color: Color, strategy: Box<dyn Strategy>) -> Self {
        Self {
            board: Board::new(),
            current_player: Color::Black,
            computer_color,
            is_game_over: false,
            is_pass: false,
            flipped: Vec::new(),
            last_move: None,
            strategy,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Whether the previous action was a pass.
    pub fn is_pass(&self) -> bool {
        self.is_pass
    }

    /// Stones flipped by the previous move, as `row * 8 + col`.
    pub fn flipped(&self) -> &[u8] {
        &self.flipped
    }

    pub fn human_color(&self) -> Color {
        self.computer_color.opponent()
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_game_over && self.current_player == self.computer_color
    }

    pub fn place(&mut self, row: u8, col: u8) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        let human = self.human_color();
        if self.current_player != human {
            return Err(GameError::NotYourTurn(human));
        }

        self.apply_move(Position::new(row, col), human)
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.has_valid_move(self.current_player)
    }

    /// Hands the turn over. Only allowed when the side to move is stuck.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.has_legal_moves_for_current() {
            return Err(GameError::MustPlay(self.current_player));
        }

        debug!("{:?} passes", self.current_player);
        self.is_pass = true;
        self.flipped.clear();
        self.last_move = None;
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Lets the configured strategy choose and play the computer's move.
    /// When the computer has nothing to play it passes and returns `None`.
    pub fn do_computer_move(&mut self) -> Result<Option<Position>, GameError> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.current_player != self.computer_color {
            return Err(GameError::NotYourTurn(self.computer_color));
        }

        let legal = self.board.valid_moves(self.computer_color);
        if legal.is_empty() {
            self.pass()?;
            return Ok(None);
        }

        let selected = self
            .strategy
            .select_move(&self.board, &legal)
            .ok_or(GameError::NoMoveSelected)?;
        debug!(
            "{} strategy plays ({}, {}) for {:?}",
            self.strategy.name(),
            selected.row,
            selected.col,
            self.computer_color
        );

        self.apply_move(selected, self.computer_color)?;
        Ok(Some(selected))
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_game_over {
            return Vec::new();
        }
        self.board.valid_moves(self.current_player)
    }

    pub fn state(&self) -> GameState {
        let count = self.board.count_pieces();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            computer_color: self.computer_color,
            black_count: count.black,
            white_count: count.white,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            last_move: self.last_move,
        }
    }

    pub fn result(&self) -> GameResult {
        let count = self.board.count_pieces();
        GameResult {
            winner: if count.black > count.white {
                Some(Color::Black)
            } else if count.white > count.black {
                Some(Color::White)
            } else {
                None
            },
            black_count: count.black,
            white_count: count.white,
        }
    }

    fn apply_move(&mut self, pos: Position, color: Color) -> Result<(), GameError> {
        let next = self.board.apply_move(pos, color)?;
        let flips = self.board.flips(pos, color);

        self.board = next;
        self.is_pass = false;
        self.flipped = flips.into_iter().map(|p| p.index() as u8).collect();
        self.last_move = Some(pos);
        self.current_player = color.opponent();

        if self.board.is_terminal() {
            self.is_game_over = true;
            debug!("game over: {:?}", self.result());
        }

        Ok(())
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Color) {
        self.board = board;
        self.current_player = current_player;
        self.is_game_over = false;
        self.is_pass = false;
        self.flipped.clear();
        self.last_move = None;
    }
}
