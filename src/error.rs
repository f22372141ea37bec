//! Error type for board and game operations

use thiserror::Error;

/// Errors raised when committing moves or parsing boards.
/// Search never fails; these only surface at the driver boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cell index out of range: {0}")]
    CellOutOfRange(usize),

    #[error("Cell already occupied: {0}")]
    CellOccupied(usize),

    #[error("Only X or O can be placed")]
    EmptyMark,

    #[error("Side to move must be X or O")]
    InvalidTurn,

    #[error("Invalid board string: {0}")]
    ParseBoard(String),

    #[error("Game is already over")]
    GameOver,
}

/// Convenience Result type
pub type Result<T> = std::result::Result<T, Error>;
