use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// Single-character identifier a player marks cells with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(char);

impl Label {
    pub const X: Label = Label('X');
    pub const O: Label = Label('O');

    pub fn new(ch: char) -> Self {
        Self(ch)
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl From<char> for Label {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub label: Label,
    pub color: String,
}

impl Player {
    pub fn new(label: Label, color: &str) -> Self {
        Self {
            label,
            color: color.to_string(),
        }
    }

    pub fn default_players() -> Vec<Player> {
        vec![Player::new(Label::X, "black"), Player::new(Label::O, "green")]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Keypad numbering: 1 is the bottom-left cell, `size * size` the top-right.
    pub fn from_keypad(number: usize, size: usize) -> Option<Self> {
        if number == 0 || number > size * size {
            return None;
        }
        let index = number - 1;
        Some(Self::new(size - 1 - index / size, index % size))
    }

    pub fn to_keypad(&self, size: usize) -> usize {
        (size - 1 - self.row) * size + self.col + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A request to mark `(row, col)`; `label` is `None` for an unplayed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub label: Option<Label>,
}

impl Move {
    pub fn new(row: usize, col: usize, label: Label) -> Self {
        Self {
            row,
            col,
            label: Some(label),
        }
    }

    pub fn unplayed(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            label: None,
        }
    }

    pub fn at(position: Position, label: Label) -> Self {
        Self::new(position.row, position.col, label)
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Label),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove,
    Won {
        winner: Label,
        combination: Vec<Position>,
    },
    Drawn,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove)
    }
}
