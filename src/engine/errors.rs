use thiserror::Error;

use crate::domain::card::GameType;

/// Ошибки движка колод.
///
/// Тексты совпадают с тем, что видит клиент, поэтому их не переводим.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("too few cards provided")]
    TooFewCards {
        game_type: GameType,
        requested: usize,
        min: usize,
    },

    #[error("too many cards provided")]
    TooManyCards {
        game_type: GameType,
        requested: usize,
        max: usize,
    },

    #[error("too many cards requested")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("draw count must be positive, got {0}")]
    InvalidDrawCount(usize),
}
