use super::board::Board;
use super::types::{Label, Outcome, Position};

pub type WinningCombination = Vec<Position>;

/// Rows, then columns, then the main and anti diagonal. The order decides
/// which combination gets highlighted.
pub fn winning_combinations(size: usize) -> Vec<WinningCombination> {
    let mut combos = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        combos.push((0..size).map(|col| Position::new(row, col)).collect());
    }
    for col in 0..size {
        combos.push((0..size).map(|row| Position::new(row, col)).collect());
    }
    combos.push((0..size).map(|i| Position::new(i, i)).collect());
    combos.push((0..size).map(|i| Position::new(i, size - 1 - i)).collect());

    combos
}

pub fn check_win_with_line<'a>(
    board: &Board,
    combos: &'a [WinningCombination],
) -> Option<(Label, &'a WinningCombination)> {
    combos.iter().find_map(|combo| {
        let first = board.get(*combo.first()?)?;
        combo
            .iter()
            .all(|&pos| board.get(pos) == Some(first))
            .then_some((first, combo))
    })
}

pub fn check_win(board: &Board, combos: &[WinningCombination]) -> Option<Label> {
    check_win_with_line(board, combos).map(|(label, _)| label)
}

pub fn detect_outcome(board: &Board, combos: &[WinningCombination]) -> Outcome {
    if let Some(label) = check_win(board, combos) {
        return Outcome::Win(label);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
