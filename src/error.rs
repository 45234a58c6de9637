use std::path::PathBuf;

/// Smallest board edge the engine accepts.
pub const MIN_DIMENSION: usize = 4;

/// Errors raised when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("Board must be at least {min}x{min} (got {rows}x{columns})", min = MIN_DIMENSION)]
    InvalidDimensions { rows: usize, columns: usize },
}

/// A rejected move. The message is shown to the player verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("The column is out of bounds")]
    OutOfBounds,

    #[error("The column is full")]
    ColumnFull,

    #[error("The game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
