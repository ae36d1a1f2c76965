//! Конфигурация сервиса колод из переменных окружения.

use crate::domain::card::GameType;

/// Настройки процесса.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Тип игры для колод по умолчанию (`DECK_GAME_TYPE`).
    pub game_type: GameType,
    /// Фиксированный seed для shuffle (`DECK_RNG_SEED`). `None` — seed от часов.
    pub rng_seed: Option<u64>,
    /// Засеивать ли эталонные карты при старте (`DECK_SEED_REFERENCE_CARDS`).
    pub seed_reference_cards: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            game_type: GameType::French,
            rng_seed: None,
            seed_reference_cards: true,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            game_type: read_game_type("DECK_GAME_TYPE", defaults.game_type),
            rng_seed: read_opt_u64("DECK_RNG_SEED"),
            seed_reference_cards: read_bool(
                "DECK_SEED_REFERENCE_CARDS",
                defaults.seed_reference_cards,
            ),
        }
    }
}

fn read_game_type(key: &str, fallback: GameType) -> GameType {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<GameType>().ok())
        .unwrap_or(fallback)
}

fn read_opt_u64(key: &str) -> Option<u64> {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
}

fn read_bool(key: &str, fallback: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|raw| parse_bool_flag(&raw))
        .unwrap_or(fallback)
}

/// Разбор булевого флага в привычном для query-параметров виде:
/// `1 t T TRUE true True` / `0 f F FALSE false False`.
pub fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
