//! Centralized error types for the game.

use std::io;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Board parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Error type for board parsing operations.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),

    #[error("Row {row} has {len} cells, expected {expected}")]
    BadRowLength { row: usize, len: usize, expected: usize },

    #[error("Board has no player starting position")]
    MissingPlayerStart,

    #[error("Board has no starting position for ghost {0}")]
    MissingGhostStart(u8),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
