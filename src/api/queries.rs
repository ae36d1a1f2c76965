use serde::{Deserialize, Serialize};

use super::dto::OpenDeckDto;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Открыть колоду: метаданные и все оставшиеся карты.
    OpenDeck(OpenDeckQuery),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpenDeckQuery {
    pub deck_id: String,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Deck(OpenDeckDto),
}
