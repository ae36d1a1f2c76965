//! Движок колод карт.
//!
//! Колода — сохраняемая изменяемая сущность: проверяем запрошенный состав,
//! строим упорядоченный список карт, снимаем карты с верха и перемешиваем.
//! Упорядоченный список хранится в одном непрозрачном атрибуте через кодек.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{ApiError, DeckService};
pub use config::ServiceConfig;
pub use domain::{Card, CardCatalog, Deck, DeckId, GameType};
pub use engine::{DeckFactory, EngineError, RandomSource};
