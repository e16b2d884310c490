use std::io::{self, BufRead, Write};

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{BotType, GameEngine, Label, Move, calculate_move};
use tictactoe_common::{log, warn};

use crate::render::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Place { row: usize, col: usize },
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "r" | "reset" | "again" => return Ok(Command::Reset),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err("Enter a move as \"row col\", r to play again or q to exit".to_string());
    };
    let row = row.parse().map_err(|_| format!("Invalid row: {}", row))?;
    let col = col.parse().map_err(|_| format!("Invalid column: {}", col))?;
    Ok(Command::Place { row, col })
}

pub struct Opponent {
    pub label: Label,
    pub bot_type: BotType,
    pub rng: SessionRng,
}

/// Terminal front end. It only talks to the engine through its public
/// operations, so human and computer moves take the same path.
pub struct GameShell {
    engine: GameEngine,
    opponent: Option<Opponent>,
    reset_restores_first_player: bool,
    message: String,
}

impl GameShell {
    pub fn new(engine: GameEngine, opponent: Option<Opponent>, reset_restores_first_player: bool) -> Self {
        Self {
            engine,
            opponent,
            reset_restores_first_player,
            message: "Ready?".to_string(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        self.computer_turn();

        let mut lines = input.lines();
        loop {
            write!(output, "\n{}\n{}\n> ", render_board(&self.engine), self.message)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            match parse_command(&line?) {
                Ok(Command::Quit) => break,
                Ok(Command::Reset) => self.reset(),
                Ok(Command::Place { row, col }) => self.human_turn(row, col),
                Err(e) => self.message = e,
            }
        }

        writeln!(output)?;
        Ok(())
    }

    fn is_computer_to_move(&self) -> bool {
        !self.engine.status().is_over()
            && self
                .opponent
                .as_ref()
                .is_some_and(|o| o.label == self.engine.current_player().label)
    }

    fn human_turn(&mut self, row: usize, col: usize) {
        if self.engine.status().is_over() {
            self.message = "Game over, press r to play again".to_string();
            return;
        }
        let mv = Move::new(row, col, self.engine.current_player().label);
        if !self.engine.is_valid_move(&mv) {
            self.message = format!("Cell ({}, {}) is not available", row, col);
            return;
        }
        self.play(mv);
        self.computer_turn();
    }

    fn computer_turn(&mut self) {
        while self.is_computer_to_move() {
            let Some(opponent) = self.opponent.as_mut() else {
                return;
            };
            match calculate_move(opponent.bot_type, &self.engine, &mut opponent.rng) {
                Ok(mv) if self.engine.is_valid_move(&mv) => self.play(mv),
                Ok(mv) => {
                    warn!("Computer proposed unavailable move {:?}", mv);
                    self.message = "Computer could not find a move".to_string();
                    return;
                }
                Err(e) => {
                    warn!("Computer move failed: {}", e);
                    self.message = e;
                    return;
                }
            }
        }
    }

    fn play(&mut self, mv: Move) {
        if let Err(e) = self.engine.process_move(mv) {
            self.message = e;
            return;
        }

        if self.engine.is_tied() {
            self.message = "Tied game!".to_string();
            log!("Tied game after {} moves", self.engine.history().len());
        } else if self.engine.has_winner() {
            let label = self.engine.current_player().label;
            self.message = format!("Player \"{}\" won!", label);
            log!("{} won after {} moves", label, self.engine.history().len());
        } else {
            self.engine.toggle_active_player();
            self.message = format!("{}'s turn", self.engine.current_player().label);
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        if self.reset_restores_first_player {
            self.engine.restore_first_player();
        }
        self.message = "Ready?".to_string();
        self.computer_turn();
    }
}
