//! Front ends: an interactive terminal UI and a line-oriented console, both
//! driving a [`BoardEngine`](crate::game::BoardEngine).

mod app;
pub mod board_widget;
pub mod console;
mod game_view;
pub mod status;

pub use app::App;
