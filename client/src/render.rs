use tictactoe_common::games::tictactoe::{GameEngine, Position};

/// Text grid with row/column indices; cells of the winning combination are
/// bracketed.
pub fn render_board(engine: &GameEngine) -> String {
    let board = engine.board();
    let size = board.size();
    let winning = engine.winning_combination().unwrap_or(&[]);

    let mut out = String::new();
    out.push_str("   ");
    for col in 0..size {
        out.push_str(&format!(" {}  ", col));
    }
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{}  ", row));
        let cells: Vec<String> = (0..size)
            .map(|col| {
                let pos = Position::new(row, col);
                let mark = board.get(pos).map_or(' ', |label| label.as_char());
                if winning.contains(&pos) {
                    format!("[{}]", mark)
                } else {
                    format!(" {} ", mark)
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');

        if row + 1 < size {
            out.push_str("   ");
            out.push_str(&vec!["---"; size].join("+"));
            out.push('\n');
        }
    }
    out
}
