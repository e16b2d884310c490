use serde::{Deserialize, Serialize};

use super::types::{Label, Outcome};

const WIN_SCORE: i32 = 1;
const WEIGHTED_SCALE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scoring {
    /// Win +1, loss -1, draw 0.
    Plain,
    /// Win +10 minus occupied cells, loss -10 plus occupied cells, draw 0.
    DepthWeighted,
}

/// Scores terminal positions from the maximizer's point of view.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    maximizer: Label,
    scoring: Scoring,
}

impl Evaluator {
    pub fn new(maximizer: Label, scoring: Scoring) -> Self {
        Self { maximizer, scoring }
    }

    pub fn maximizer(&self) -> Label {
        self.maximizer
    }

    /// `None` while the game is still in progress.
    pub fn score(&self, outcome: Outcome, occupied: usize) -> Option<i32> {
        let base = match outcome {
            Outcome::InProgress => return None,
            Outcome::Draw => return Some(0),
            Outcome::Win(label) if label == self.maximizer => WIN_SCORE,
            Outcome::Win(_) => -WIN_SCORE,
        };

        let score = match self.scoring {
            Scoring::Plain => base,
            Scoring::DepthWeighted => {
                let occupied = occupied as i32;
                if base > 0 {
                    base * WEIGHTED_SCALE - occupied
                } else {
                    base * WEIGHTED_SCALE + occupied
                }
            }
        };
        Some(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scores() {
        let evaluator = Evaluator::new(Label::X, Scoring::Plain);
        assert_eq!(evaluator.score(Outcome::Win(Label::X), 5), Some(1));
        assert_eq!(evaluator.score(Outcome::Win(Label::O), 6), Some(-1));
        assert_eq!(evaluator.score(Outcome::Draw, 9), Some(0));
        assert_eq!(evaluator.score(Outcome::InProgress, 4), None);
    }

    #[test]
    fn test_depth_weighted_scores_shrink_with_occupied_cells() {
        let evaluator = Evaluator::new(Label::X, Scoring::DepthWeighted);
        assert_eq!(evaluator.score(Outcome::Win(Label::X), 5), Some(5));
        assert_eq!(evaluator.score(Outcome::Win(Label::X), 7), Some(3));
        assert_eq!(evaluator.score(Outcome::Win(Label::O), 6), Some(-4));
        assert_eq!(evaluator.score(Outcome::Draw, 9), Some(0));
    }

    #[test]
    fn test_maximizer_follows_configured_label() {
        let evaluator = Evaluator::new(Label::O, Scoring::Plain);
        assert_eq!(evaluator.score(Outcome::Win(Label::O), 5), Some(1));
        assert_eq!(evaluator.maximizer(), Label::O);
    }
}
