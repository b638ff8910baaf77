use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration")]
    InvalidConfiguration,
    #[error("Not enough room for {requested} mines outside the safety zone, only {available} cells left")]
    InsufficientSpace {
        available: CellCount,
        requested: CellCount,
    },
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Board was already populated")]
    AlreadyPopulated,
    /// Returned by moves on a board that is already won or lost.
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Game is paused")]
    Paused,
}

pub type Result<T> = core::result::Result<T, GameError>;
