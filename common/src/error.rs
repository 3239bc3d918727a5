use thiserror::Error;

/// Precondition violations raised by the board, the evaluator and the bots.
///
/// "No legal move" is never an error: the search returns `Ok(None)` for a
/// full board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("invalid symbol: expected X or O")]
    InvalidSymbol,

    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    InvalidCoordinate { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },

    #[error("game is already over")]
    GameOver,
}

impl EngineError {
    pub(crate) fn invalid_board(reason: impl Into<String>) -> Self {
        Self::InvalidBoard {
            reason: reason.into(),
        }
    }
}
