use std::fmt;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::engine::GameEngine;
use super::evaluator::Scoring;
use super::search::{Direction, Minimax};
use super::types::{Label, Move};
use super::win_detector::WinningCombination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Minimax,
    MinimaxWithLength,
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotType::Random => "Random",
            BotType::Minimax => "Minimax",
            BotType::MinimaxWithLength => "Minimax with length",
        };
        write!(f, "{}", name)
    }
}

/// Snapshot of the engine the bot works on; search mutates this copy only.
pub struct BotInput<'a> {
    pub board: Board,
    pub combos: &'a [WinningCombination],
    pub players: [Label; 2],
    pub current_label: Label,
}

impl<'a> BotInput<'a> {
    pub fn from_engine(engine: &'a GameEngine) -> Self {
        Self {
            board: engine.board().clone(),
            combos: engine.winning_combinations(),
            players: engine.labels(),
            current_label: engine.current_player().label,
        }
    }

    fn direction(&self) -> Direction {
        if self.current_label == self.players[0] {
            Direction::Maximize
        } else {
            Direction::Minimize
        }
    }
}

/// Picks the active player's move. The result still goes through
/// [`GameEngine::process_move`] like any human move.
pub fn calculate_move(
    bot_type: BotType,
    engine: &GameEngine,
    rng: &mut SessionRng,
) -> Result<Move, String> {
    if engine.status().is_over() {
        return Err("Game is already over".to_string());
    }

    let input = BotInput::from_engine(engine);
    match bot_type {
        BotType::Random => calculate_random_move(&input, rng),
        BotType::Minimax => calculate_minimax_move(input, Scoring::Plain),
        BotType::MinimaxWithLength => calculate_minimax_move(input, Scoring::DepthWeighted),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<Move, String> {
    let available_moves = input.board.get_available_moves();
    let position = rng
        .choose(&available_moves)
        .ok_or_else(|| "No empty cells left".to_string())?;
    log!("Random move row: {} col: {}", position.row, position.col);
    Ok(Move::at(*position, input.current_label))
}

pub fn calculate_minimax_move(mut input: BotInput, scoring: Scoring) -> Result<Move, String> {
    let direction = input.direction();
    let mut minimax = Minimax::new(input.combos, input.players, scoring);
    let result = minimax.search(&mut input.board, input.current_label, direction)?;

    let position = result
        .best_move
        .ok_or_else(|| "Search found no move on a finished board".to_string())?;
    log!(
        "{:?} move row: {} col: {} score: {} nodes: {}",
        scoring,
        position.row,
        position.col,
        result.score,
        result.nodes
    );
    Ok(Move::at(position, input.current_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{Outcome, Position};

    fn engine_with(moves: &[(usize, usize)]) -> GameEngine {
        let mut engine = GameEngine::default();
        for &(row, col) in moves {
            let mv = Move::new(row, col, engine.current_player().label);
            engine.process_move(mv).unwrap();
            engine.toggle_active_player();
        }
        engine
    }

    #[test]
    fn test_random_move_is_valid_for_active_player() {
        let engine = engine_with(&[(1, 1), (0, 0), (2, 2)]);
        let mut rng = SessionRng::new(5);
        for _ in 0..30 {
            let mv = calculate_move(BotType::Random, &engine, &mut rng).unwrap();
            assert!(engine.is_valid_move(&mv));
            assert_eq!(mv.label, Some(Label::O));
        }
    }

    #[test]
    fn test_random_move_with_one_empty_cell() {
        let engine = engine_with(&[(0, 0), (1, 1), (2, 2), (0, 1), (2, 1), (2, 0), (0, 2), (1, 2)]);
        let mut rng = SessionRng::new(9);
        let mv = calculate_move(BotType::Random, &engine, &mut rng).unwrap();
        assert_eq!(mv.position(), Position::new(1, 0));
    }

    #[test]
    fn test_minimax_answers_center_with_corner() {
        let engine = engine_with(&[(1, 1)]);
        let mut rng = SessionRng::new(0);
        let mv = calculate_move(BotType::Minimax, &engine, &mut rng).unwrap();
        assert_eq!(mv.label, Some(Label::O));
        assert!(mv.row != 1 && mv.col != 1);
    }

    #[test]
    fn test_minimax_plays_row_one_column_two() {
        // XX_ / OO_ / ___ with O to move.
        let engine = engine_with(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let mut input = BotInput::from_engine(&engine);
        input.current_label = Label::O;
        let mv = calculate_minimax_move(input, Scoring::Plain).unwrap();
        assert_eq!(mv, Move::new(1, 2, Label::O));
    }

    #[test]
    fn test_minimax_with_length_wins_immediately() {
        let engine = engine_with(&[(0, 0), (1, 0), (0, 1), (2, 0)]);
        let mut rng = SessionRng::new(0);
        let mv = calculate_move(BotType::MinimaxWithLength, &engine, &mut rng).unwrap();
        assert_eq!(mv, Move::new(0, 2, Label::X));
    }

    #[test]
    fn test_search_does_not_touch_engine_board() {
        let engine = engine_with(&[(1, 1)]);
        let before = engine.board().clone();
        let mut rng = SessionRng::new(0);
        calculate_move(BotType::MinimaxWithLength, &engine, &mut rng).unwrap();
        assert_eq!(engine.board(), &before);
    }

    #[test]
    fn test_finished_game_has_no_bot_move() {
        let mut engine = GameEngine::default();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            let mv = Move::new(row, col, engine.current_player().label);
            if !engine.process_move(mv).unwrap().is_over() {
                engine.toggle_active_player();
            }
        }
        assert_eq!(engine.outcome(), Outcome::Win(Label::X));
        let mut rng = SessionRng::new(0);
        assert!(calculate_move(BotType::Minimax, &engine, &mut rng).is_err());
    }

    #[test]
    fn test_bot_against_bot_ends_in_draw() {
        let mut engine = GameEngine::default();
        let mut rng = SessionRng::new(0);
        while !engine.status().is_over() {
            let mv = calculate_move(BotType::MinimaxWithLength, &engine, &mut rng).unwrap();
            assert!(engine.is_valid_move(&mv));
            if !engine.process_move(mv).unwrap().is_over() {
                engine.toggle_active_player();
            }
        }
        assert_eq!(engine.outcome(), Outcome::Draw);
    }
}
