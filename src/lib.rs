//! # Connect Four
//!
//! A two-player Connect Four game. The rules live in [`game::BoardEngine`];
//! the terminal UI (Ratatui) and the line-oriented console only drive it.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, engine
//! - [`ui`]: Terminal UI and console front ends
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
