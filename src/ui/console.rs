//! Line-oriented front end: reads 1-based column numbers, prints the board.

use std::io::{self, BufRead, Write};

use super::status;
use crate::error::MoveError;
use crate::game::{BoardEngine, Player};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based column, already checked to be non-negative
    Drop(usize),
    /// A number that cannot name a column (zero or negative)
    OffBoard,
    Reset,
    Quit,
    Unknown,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let token = line.trim();
        match token.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "r" | "reset" | "restart" => return Command::Reset,
            _ => {}
        }
        match token.parse::<i64>() {
            Ok(n) if n >= 1 => usize::try_from(n - 1).map_or(Command::OffBoard, Command::Drop),
            Ok(_) => Command::OffBoard,
            Err(_) => Command::Unknown,
        }
    }
}

/// Play on `engine` until `input` ends or the player quits.
pub fn run<R: BufRead, W: Write>(engine: &mut BoardEngine, input: R, mut out: W) -> io::Result<()> {
    write!(out, "{engine}")?;
    writeln!(out, "{}", status::ready())?;
    prompt(engine, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let message = match Command::parse(&line) {
            Command::Quit => break,
            Command::Reset => {
                engine.reset();
                status::restarted()
            }
            Command::Unknown => "Oops! Please enter a column number".to_string(),
            Command::OffBoard | Command::Drop(_) if engine.is_game_over() => {
                status::GAME_OVER_HINT.to_string()
            }
            Command::OffBoard => status::rejected(MoveError::OutOfBounds),
            Command::Drop(column) => {
                let player = Player::for_turn(engine.turn_count());
                match engine.apply_move(column) {
                    Ok(_) => status::after_move(engine, player, column),
                    Err(err) => status::rejected(err),
                }
            }
        };

        write!(out, "{engine}")?;
        writeln!(out, "{message}")?;
        prompt(engine, &mut out)?;
    }

    out.flush()
}

fn prompt<W: Write>(engine: &BoardEngine, out: &mut W) -> io::Result<()> {
    match engine.current_player() {
        Some(player) => {
            let open: Vec<String> = engine
                .legal_columns()
                .iter()
                .map(|col| (col + 1).to_string())
                .collect();
            write!(out, "{player}, column [{}]> ", open.join(" "))?
        }
        None => write!(out, "(r to restart, q to quit)> ")?,
    }
    out.flush()
}
