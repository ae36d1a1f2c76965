//! Кодек карт: упорядоченный `Vec<Card>` <-> один непрозрачный атрибут записи.
//!
//! Кодек вызывает только слой хранения: перед каждым сохранением (encode) и
//! после каждой загрузки (decode). Сам по себе при создании объектов он не
//! срабатывает.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, GameType};

/// Ошибки кодека.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("stored cards are malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to encode cards: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Контракт кодека.
pub trait CardCodec {
    /// Сериализовать упорядоченный список. Пустой список — пустой результат.
    fn encode(&self, cards: &[Card]) -> Result<Vec<u8>, CodecError>;

    /// Обратная операция. Пустой вход — пустой список, не ошибка.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Card>, CodecError>;
}

/// Элемент сериализованного массива: ровно три поля, в этом порядке.
#[derive(Serialize, Deserialize)]
struct StoredCard<'a> {
    value: std::borrow::Cow<'a, str>,
    suit: std::borrow::Cow<'a, str>,
    code: std::borrow::Cow<'a, str>,
}

/// JSON-кодек (формат совместим со старой колонкой `cards`).
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCardCodec {
    game_type: GameType,
}

impl JsonCardCodec {
    pub fn new(game_type: GameType) -> Self {
        Self { game_type }
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }
}

impl CardCodec for JsonCardCodec {
    fn encode(&self, cards: &[Card]) -> Result<Vec<u8>, CodecError> {
        if cards.is_empty() {
            return Ok(Vec::new());
        }

        let stored: Vec<StoredCard<'_>> = cards
            .iter()
            .map(|c| StoredCard {
                value: c.value().into(),
                suit: c.suit().into(),
                code: c.code().into(),
            })
            .collect();

        serde_json::to_vec(&stored).map_err(CodecError::Encode)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<Card>, CodecError> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let stored: Vec<StoredCard<'_>> =
            serde_json::from_slice(bytes).map_err(CodecError::Malformed)?;

        Ok(stored
            .into_iter()
            .map(|s| Card::new(s.value, s.suit, s.code, self.game_type))
            .collect())
    }
}
