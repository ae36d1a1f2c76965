//! Каталог карт: справочные таблицы имён и лимиты размера колоды.
//!
//! Каталог — неизменяемый объект конфигурации. Создаётся один раз при старте
//! (`CardCatalog::standard()`) и передаётся по ссылке в фабрику колод,
//! request-слой и seeder. Никакого глобального состояния.

use std::collections::HashMap;

use crate::domain::card::{Card, GameType};

/// Ранги французской колоды в каноническом порядке: (токен, имя).
const FRENCH_VALUES: [(&str, &str); 13] = [
    ("A", "ACE"),
    ("2", "2"),
    ("3", "3"),
    ("4", "4"),
    ("5", "5"),
    ("6", "6"),
    ("7", "7"),
    ("8", "8"),
    ("9", "9"),
    ("10", "10"),
    ("J", "JACK"),
    ("Q", "QUEEN"),
    ("K", "KING"),
];

/// Масти: (однобуквенный токен, имя).
const FRENCH_SUITS: [(&str, &str); 4] = [
    ("C", "CLUBS"),
    ("D", "DIAMONDS"),
    ("H", "HEARTS"),
    ("S", "SPADES"),
];

/// Таблицы одного типа игры.
#[derive(Clone, Debug)]
pub struct CatalogTable {
    value_order: Vec<String>,
    suit_order: Vec<String>,
    value_names: HashMap<String, String>,
    suit_names: HashMap<String, String>,
    min_cards: usize,
    max_cards: usize,
}

impl CatalogTable {
    fn new(
        values: &[(&str, &str)],
        suits: &[(&str, &str)],
        min_cards: usize,
        max_cards: usize,
    ) -> Self {
        Self {
            value_order: values.iter().map(|(t, _)| t.to_string()).collect(),
            suit_order: suits.iter().map(|(t, _)| t.to_string()).collect(),
            value_names: values
                .iter()
                .map(|(t, n)| (t.to_string(), n.to_string()))
                .collect(),
            suit_names: suits
                .iter()
                .map(|(t, n)| (t.to_string(), n.to_string()))
                .collect(),
            min_cards,
            max_cards,
        }
    }

    pub fn min_cards(&self) -> usize {
        self.min_cards
    }

    pub fn max_cards(&self) -> usize {
        self.max_cards
    }

    pub fn value_name(&self, token: &str) -> Option<&str> {
        self.value_names.get(token).map(String::as_str)
    }

    pub fn suit_name(&self, token: &str) -> Option<&str> {
        self.suit_names.get(token).map(String::as_str)
    }
}

/// Справочник карт по типам игры.
#[derive(Clone, Debug)]
pub struct CardCatalog {
    tables: HashMap<GameType, CatalogTable>,
}

impl CardCatalog {
    /// Каталог с единственным эталонным типом игры: FRENCH, 1..=52 карт.
    pub fn standard() -> Self {
        let mut tables = HashMap::new();
        tables.insert(
            GameType::French,
            CatalogTable::new(&FRENCH_VALUES, &FRENCH_SUITS, 1, 52),
        );
        Self { tables }
    }

    pub fn table(&self, game_type: GameType) -> Option<&CatalogTable> {
        self.tables.get(&game_type)
    }

    /// Минимальный размер колоды. Для неизвестного типа игры — 0.
    pub fn min_cards(&self, game_type: GameType) -> usize {
        self.table(game_type).map(|t| t.min_cards).unwrap_or(0)
    }

    /// Максимальный размер колоды. Для неизвестного типа игры — 0.
    pub fn max_cards(&self, game_type: GameType) -> usize {
        self.table(game_type).map(|t| t.max_cards).unwrap_or(0)
    }

    /// Разобрать код карты в пару (value, suit).
    ///
    /// Правило: код длиной до двух символов — ранг в первом символе, масть во
    /// втором; иначе ранг в первых двух символах ("10"), масть в третьем.
    /// Битые коды не отвергаются: нераспознанные токены дают пустые строки.
    pub fn resolve_code(&self, game_type: GameType, code: &str) -> (String, String) {
        let (rank_token, suit_token) = split_code(code);

        let Some(table) = self.table(game_type) else {
            return (String::new(), String::new());
        };

        let value = table.value_name(&rank_token).unwrap_or_default().to_string();
        let suit = table.suit_name(&suit_token).unwrap_or_default().to_string();
        (value, suit)
    }

    /// Собрать карту по коду (порядок полей и game_type проставляются здесь).
    pub fn resolve_card(&self, game_type: GameType, code: &str) -> Card {
        let (value, suit) = self.resolve_code(game_type, code);
        Card::new(value, suit, code, game_type)
    }

    /// Все канонические коды типа игры: масти C, D, H, S, внутри — A, 2..10, J, Q, K.
    pub fn sweep(&self, game_type: GameType) -> Vec<String> {
        let Some(table) = self.table(game_type) else {
            return Vec::new();
        };

        let mut codes = Vec::with_capacity(table.suit_order.len() * table.value_order.len());
        for suit in &table.suit_order {
            for value in &table.value_order {
                codes.push(format!("{value}{suit}"));
            }
        }
        codes
    }

    /// Полный набор эталонных карт (для seeder).
    pub fn sweep_cards(&self, game_type: GameType) -> Vec<Card> {
        self.sweep(game_type)
            .iter()
            .map(|code| self.resolve_card(game_type, code))
            .collect()
    }

    /// Есть ли код среди канонических (без хранилища: только по таблицам).
    ///
    /// Сервис сверяет коды с эталонными картами из хранилища; этот метод —
    /// для вызывающих, у которых хранилища под рукой нет.
    pub fn is_known_code(&self, game_type: GameType, code: &str) -> bool {
        let Some(table) = self.table(game_type) else {
            return false;
        };

        let len = code.chars().count();
        let (rank_token, suit_token) = split_code(code);

        // Ранг и масть должны занять код целиком: "10SX" не канонический.
        (len == 2 || len == 3)
            && rank_token.chars().count() + 1 == len
            && table.value_name(&rank_token).is_some()
            && table.suit_name(&suit_token).is_some()
    }
}

/// Разрезать код на токены ранга и масти.
///
/// До двух символов — ранг в первом, масть во втором; иначе ранг в первых
/// двух, масть в третьем. Лишние символы отбрасываются.
fn split_code(code: &str) -> (String, String) {
    let chars: Vec<char> = code.chars().collect();

    if chars.len() <= 2 {
        (
            chars.iter().take(1).collect(),
            chars.iter().skip(1).take(1).collect(),
        )
    } else {
        (
            chars.iter().take(2).collect(),
            chars.iter().skip(2).take(1).collect(),
        )
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
