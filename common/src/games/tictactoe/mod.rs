mod board;
mod bot_controller;
mod engine;
mod evaluator;
mod search;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, BotType, calculate_minimax_move, calculate_move};
pub use engine::GameEngine;
pub use evaluator::{Evaluator, Scoring};
pub use search::{Direction, Minimax, SearchResult, search};
pub use types::{BOARD_SIZE, GameStatus, Label, Move, Outcome, Player, Position};
pub use win_detector::{
    WinningCombination, check_win, check_win_with_line, detect_outcome, winning_combinations,
};
