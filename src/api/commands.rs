use serde::{Deserialize, Serialize};

/// Команды, которые меняют состояние.
///
/// Поля повторяют сырые query-параметры: строки как есть, разбор — в сервисе.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать колоду.
    CreateDeck(CreateDeckCommand),

    /// Снять карты с колоды.
    DrawCards(DrawCardsCommand),

    /// Перемешать существующую колоду.
    ShuffleDeck(ShuffleDeckCommand),
}

/// Создание колоды.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateDeckCommand {
    /// Коды через запятую: "AS,KD,10H". Пусто — полная колода.
    pub cards: Option<String>,
    /// Флаг перемешивания ("true", "1", ...). Непонятное значение — false.
    pub shuffle: Option<String>,
}

/// Снять карты.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrawCardsCommand {
    pub deck_id: String,
    /// Сколько карт; пусто, ноль или мусор — одна карта.
    pub count: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShuffleDeckCommand {
    pub deck_id: String,
}
