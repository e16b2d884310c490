use super::board::Board;
use super::evaluator::{Evaluator, Scoring};
use super::types::{Label, Position};
use super::win_detector::{WinningCombination, detect_outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Maximize => Direction::Minimize,
            Direction::Minimize => Direction::Maximize,
        }
    }

    /// Strict comparison: equal scores never displace the earlier cell.
    fn prefers(self, candidate: i32, current: i32) -> bool {
        match self {
            Direction::Maximize => candidate > current,
            Direction::Minimize => candidate < current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    /// `None` when the searched position was already terminal.
    pub best_move: Option<Position>,
    pub nodes: u64,
}

/// Exhaustive minimax over a single board buffer.
///
/// Every branch places a label, recurses for the opponent and clears the
/// cell again, so the board handed to [`Minimax::search`] is identical
/// before and after the call. Empty cells are tried in keypad order and the
/// first cell reaching the best score is kept.
pub struct Minimax<'a> {
    combos: &'a [WinningCombination],
    players: [Label; 2],
    evaluator: Evaluator,
    nodes: u64,
}

impl<'a> Minimax<'a> {
    /// `players[0]` is the maximizer.
    pub fn new(combos: &'a [WinningCombination], players: [Label; 2], scoring: Scoring) -> Self {
        Self {
            combos,
            players,
            evaluator: Evaluator::new(players[0], scoring),
            nodes: 0,
        }
    }

    pub fn search(
        &mut self,
        board: &mut Board,
        active: Label,
        direction: Direction,
    ) -> Result<SearchResult, String> {
        if !self.players.contains(&active) {
            return Err(format!(
                "Illegal search invocation: {} is not one of {} and {}",
                active, self.players[0], self.players[1]
            ));
        }
        if let Some(foreign) = board
            .rows()
            .flatten()
            .flatten()
            .find(|label| !self.players.contains(label))
        {
            return Err(format!(
                "Illegal search invocation: board holds unknown label {}",
                foreign
            ));
        }

        self.nodes = 0;
        let (score, best_move) = self.explore(board, active, direction);

        Ok(SearchResult {
            score,
            best_move,
            nodes: self.nodes,
        })
    }

    fn opponent(&self, label: Label) -> Label {
        if label == self.players[0] {
            self.players[1]
        } else {
            self.players[0]
        }
    }

    fn explore(
        &mut self,
        board: &mut Board,
        active: Label,
        direction: Direction,
    ) -> (i32, Option<Position>) {
        self.nodes += 1;

        let outcome = detect_outcome(board, self.combos);
        if let Some(score) = self.evaluator.score(outcome, board.occupied_count()) {
            return (score, None);
        }

        let size = board.size();
        let opponent = self.opponent(active);
        let mut best: Option<(i32, Position)> = None;

        for pos in (1..=size * size).filter_map(|n| Position::from_keypad(n, size)) {
            if !board.is_empty_at(pos) {
                continue;
            }

            board.set(pos, active);
            let (score, _) = self.explore(board, opponent, direction.opposite());
            board.clear(pos);

            let replace = match best {
                None => true,
                Some((best_score, _)) => direction.prefers(score, best_score),
            };
            if replace {
                best = Some((score, pos));
            }
        }

        match best {
            Some((score, pos)) => (score, Some(pos)),
            // A board without empty cells is always a win or a draw.
            None => unreachable!("non-terminal board without empty cells"),
        }
    }
}

pub fn search(
    board: &mut Board,
    combos: &[WinningCombination],
    players: [Label; 2],
    active: Label,
    direction: Direction,
    scoring: Scoring,
) -> Result<SearchResult, String> {
    Minimax::new(combos, players, scoring).search(board, active, direction)
}
