use super::types::{Label, Move, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Label>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Builds a board from rows of text, `_` or space marking an empty cell.
    pub fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut board = Self::new(size);
        for (row, text) in rows.iter().enumerate() {
            for (col, ch) in text.chars().take(size).enumerate() {
                if ch != '_' && ch != ' ' {
                    board.set(Position::new(row, col), Label::new(ch));
                }
            }
        }
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    pub fn get(&self, pos: Position) -> Option<Label> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[self.index(pos)].is_none()
    }

    pub fn set(&mut self, pos: Position, label: Label) {
        let index = self.index(pos);
        self.cells[index] = Some(label);
    }

    pub fn clear(&mut self, pos: Position) {
        let index = self.index(pos);
        self.cells[index] = None;
    }

    pub fn clear_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Writes a played move; unplayed moves clear the cell.
    pub fn apply(&mut self, mv: &Move) {
        match mv.label {
            Some(label) => self.set(mv.position(), label),
            None => self.clear(mv.position()),
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Cells in keypad order: bottom row first, left to right within a row.
    pub fn keypad_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (1..=self.size * self.size).filter_map(|n| Position::from_keypad(n, self.size))
    }

    pub fn get_available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Position::new(row, col);
                if self.is_empty_at(pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Label>]> {
        self.cells.chunks(self.size)
    }
}
