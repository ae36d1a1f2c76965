//! Доменная модель: карты, каталог, колоды.

pub mod card;
pub mod catalog;
pub mod deck;

pub use crate::infra::ids::DeckId;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use catalog::*;
pub use deck::*;
