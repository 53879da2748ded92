// Error types for Sumo Duel

use std::io;

use thiserror::Error;

/// Everything that can stop the game loop.
///
/// Elimination is not in here: a combatant leaving the ring is a game
/// state, reported through `RoundOutcome`.
#[derive(Debug, Error)]
pub enum SumoError {
    #[error("sprite must be {expected}x{expected} cells, got {rows} rows with {cols} columns")]
    InvalidSpriteDimension {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("sprite cell ({row}, {col}) must be '0' or '1', found {found:?}")]
    InvalidSpriteCell { row: usize, col: usize, found: char },

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The quit key was pressed. Unwinds the endless match loop.
    #[error("quit requested")]
    QuitRequested,
}

pub type Result<T> = std::result::Result<T, SumoError>;
