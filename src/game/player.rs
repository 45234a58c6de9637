use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Player whose turn it is after `turn` successful moves
    pub fn for_turn(turn: usize) -> Player {
        if turn % 2 == 0 {
            Player::Red
        } else {
            Player::Yellow
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "RED",
            Player::Yellow => "YELLOW",
        }
    }

    /// Single-letter mark used by the text board
    pub fn symbol(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
