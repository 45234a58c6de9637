//! Status-line wording shared by the terminal UI and the console.

use crate::error::MoveError;
use crate::game::{BoardEngine, GameOutcome, Player};

pub const GAME_OVER_HINT: &str = "Game over! Press 'r' to restart.";

/// Message after `player` dropped a piece into zero-based `column`.
pub fn after_move(engine: &BoardEngine, player: Player, column: usize) -> String {
    match engine.outcome() {
        Some(outcome) => outcome_message(outcome),
        None => format!(
            "{} moved to Column {}! Now {}'s turn ...",
            player,
            column + 1,
            Player::for_turn(engine.turn_count())
        ),
    }
}

pub fn outcome_message(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Winner(player) => format!("{player} Won!"),
        GameOutcome::Draw => "Tie!".to_string(),
    }
}

pub fn rejected(err: MoveError) -> String {
    format!("Oops! {err}")
}

/// Greeting shown before the first move of a session.
pub fn ready() -> String {
    format!("Ready? Go! {}'s turn!", Player::Red)
}

pub fn restarted() -> String {
    format!("Game Restarted! {}'s turn ...", Player::Red)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_after_move_names_next_player() {
        let mut engine = BoardEngine::new(6, 7).unwrap();
        engine.apply_move(3).unwrap();
        assert_eq!(
            after_move(&engine, Player::Red, 3),
            "RED moved to Column 4! Now YELLOW's turn ..."
        );
    }

    #[test]
    fn test_after_winning_move() {
        let mut engine = BoardEngine::new(6, 7).unwrap();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.apply_move(col).unwrap();
        }
        assert_eq!(after_move(&engine, Player::Red, 0), "RED Won!");
    }

    #[test]
    fn test_after_filling_move_is_a_tie() {
        let mut engine = BoardEngine::new(4, 4).unwrap();
        let moves = [2, 0, 0, 1, 2, 3, 2, 3, 1, 0, 0, 1, 3, 3, 1, 2];
        for col in moves {
            engine.apply_move(col).unwrap();
        }
        assert_eq!(after_move(&engine, Player::Yellow, 2), "Tie!");
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(outcome_message(GameOutcome::Draw), "Tie!");
        assert_eq!(rejected(MoveError::ColumnFull), "Oops! The column is full");
        assert_eq!(restarted(), "Game Restarted! RED's turn ...");
        assert_eq!(ready(), "Ready? Go! RED's turn!");
    }
}
