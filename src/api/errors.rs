use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::EngineError;
use crate::infra::persistence::StorageError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    #[error("{0}")]
    BadRequest(String),

    /// Коды, которых нет среди эталонных карт (в порядке запроса).
    #[error("invalid cards: {0:?}")]
    InvalidCards(Vec<String>),

    #[error("Deck not found")]
    DeckNotFound(String),

    /// Просят больше карт, чем осталось в колоде.
    #[error("Not enough cards in the deck")]
    NotEnoughCards { requested: usize, remaining: usize },

    /// Ошибка движка (размер колоды и т.п.) — текст как есть.
    #[error("{0}")]
    Engine(String),

    /// Внутренняя ошибка (хранилище, кодек).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP-код для транспорта, который встраивает сервис.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_)
            | ApiError::InvalidCards(_)
            | ApiError::NotEnoughCards { .. }
            | ApiError::Engine(_) => 400,
            ApiError::DeckNotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        ApiError::Engine(err.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DeckNotFound(id) => ApiError::DeckNotFound(id.into_inner()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
