//! Core Connect Four game logic: board representation, player types, and the
//! engine that enforces turns and decides the outcome.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, CONNECT};
pub use engine::{BoardEngine, GameOutcome};
pub use player::Player;
