use core::fmt;

use serde::{Deserialize, Serialize};

/// Тип игры: определяет, каким каталогом собрана карта и какие лимиты
/// по размеру колоды действуют.
///
/// Пока поддерживается только стандартная французская колода (52 карты).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    #[default]
    French,
}

impl GameType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            GameType::French => "FRENCH",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FRENCH" => Ok(GameType::French),
            other => Err(format!("Unknown game type: {other}")),
        }
    }
}

/// Одна физическая карта.
///
/// `value` / `suit` — канонические имена из каталога ("ACE", "SPADES"),
/// `code` — короткий токен, который прислал клиент ("AS", "10S").
/// `game_type` внутренний и наружу не сериализуется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    value: String,
    suit: String,
    code: String,
    #[serde(skip)]
    game_type: GameType,
}

impl Card {
    pub fn new(
        value: impl Into<String>,
        suit: impl Into<String>,
        code: impl Into<String>,
        game_type: GameType,
    ) -> Self {
        Self {
            value: value.into(),
            suit: suit.into(),
            code: code.into(),
            game_type,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn suit(&self) -> &str {
        &self.suit
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    /// Карта, которую каталог не смог распознать (пустые value/suit).
    pub fn is_blank(&self) -> bool {
        self.value.is_empty() || self.suit.is_empty()
    }
}

impl fmt::Display for Card {
    /// Печатаем код карты: `AS`, `10H`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
