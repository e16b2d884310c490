use crate::debug;

use super::board::Board;
use super::types::{GameStatus, Label, Move, Outcome, Player, Position};
use super::win_detector::{WinningCombination, check_win_with_line, winning_combinations};

/// Authoritative tic-tac-toe state.
///
/// Moves come in through [`GameEngine::process_move`]; turns only advance
/// when the caller asks via [`GameEngine::toggle_active_player`], so a
/// winning or drawing move leaves the winner as the active player.
#[derive(Debug, Clone)]
pub struct GameEngine {
    players: Vec<Player>,
    current: usize,
    board: Board,
    combos: Vec<WinningCombination>,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameEngine {
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, String> {
        if players.len() != 2 {
            return Err(format!(
                "TicTacToe requires exactly 2 players, got {}",
                players.len()
            ));
        }
        if players[0].label == players[1].label {
            return Err(format!("Players must have distinct labels, both use {}", players[0].label));
        }
        if board_size < 3 {
            return Err(format!("Board size must be at least 3, got {}", board_size));
        }

        Ok(Self {
            players,
            current: 0,
            board: Board::new(board_size),
            combos: winning_combinations(board_size),
            status: GameStatus::AwaitingMove,
            history: Vec::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn winning_combinations(&self) -> &[WinningCombination] {
        &self.combos
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn labels(&self) -> [Label; 2] {
        [self.players[0].label, self.players[1].label]
    }

    /// The first configured player; search scores are taken from its side.
    pub fn maximizer(&self) -> Label {
        self.players[0].label
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn has_winner(&self) -> bool {
        matches!(self.status, GameStatus::Won { .. })
    }

    pub fn is_tied(&self) -> bool {
        self.status == GameStatus::Drawn
    }

    pub fn winning_combination(&self) -> Option<&[Position]> {
        match &self.status {
            GameStatus::Won { combination, .. } => Some(combination.as_slice()),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match &self.status {
            GameStatus::AwaitingMove => Outcome::InProgress,
            GameStatus::Won { winner, .. } => Outcome::Win(*winner),
            GameStatus::Drawn => Outcome::Draw,
        }
    }

    pub fn is_valid_move(&self, mv: &Move) -> bool {
        !self.has_winner() && self.board.is_empty_at(mv.position())
    }

    /// Applies a move and re-evaluates the outcome. A rejected move leaves
    /// the engine untouched.
    pub fn process_move(&mut self, mv: Move) -> Result<GameStatus, String> {
        let Some(label) = mv.label else {
            return Err(format!("Move at {} has no label", mv.position()));
        };
        if !self.players.iter().any(|p| p.label == label) {
            return Err(format!("Label {} does not belong to this game", label));
        }
        if !self.is_valid_move(&mv) {
            return Err(match self.status {
                GameStatus::Won { .. } => "Game is already over".to_string(),
                _ if !self.board.contains(mv.position()) => {
                    format!("Position {} is out of bounds", mv.position())
                }
                _ => format!("Cell {} is already marked", mv.position()),
            });
        }

        self.board.apply(&mv);
        self.history.push(mv);

        if let Some((winner, combination)) = check_win_with_line(&self.board, &self.combos) {
            debug!("{} wins along {:?}", winner, combination);
            self.status = GameStatus::Won {
                winner,
                combination: combination.clone(),
            };
        } else if self.board.is_full() {
            debug!("Board full after {} moves, game drawn", self.history.len());
            self.status = GameStatus::Drawn;
        }

        Ok(self.status.clone())
    }

    pub fn toggle_active_player(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Clears the board and outcome but keeps whoever is active.
    pub fn reset(&mut self) {
        self.board.clear_all();
        self.status = GameStatus::AwaitingMove;
        self.history.clear();
        debug!("Game reset, {} to move", self.current_player().label);
    }

    /// Hands the turn back to the first configured player.
    pub fn restore_first_player(&mut self) {
        self.current = 0;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self {
            players: Player::default_players(),
            current: 0,
            board: Board::new(super::types::BOARD_SIZE),
            combos: winning_combinations(super::types::BOARD_SIZE),
            status: GameStatus::AwaitingMove,
            history: Vec::new(),
        }
    }
}
