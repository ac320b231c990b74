//! Engine error taxonomy

/// Errors reported by the board and the turn machine.
///
/// Every variant leaves the game untouched: a rejected call never flips a
/// tile, switches the turn or notifies listeners.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReversiError {
    #[error("board size must be at least 3, got {size}")]
    InvalidSize { size: usize },

    #[error("coordinate ({q}, {r}) is outside the board")]
    OutOfRange { q: i32, r: i32 },

    #[error("move to ({q}, {r}) is not legal")]
    IllegalMove { q: i32, r: i32 },

    #[error("board has no cell at ({q}, {r})")]
    UnknownCoordinate { q: i32, r: i32 },
}

pub type Result<T> = std::result::Result<T, ReversiError>;
