//! Движок колод: создание, draw, shuffle.
//!
//! Основные операции:
//!   - `DeckFactory::create` – проверить размер и собрать колоду
//!   - `draw` – снять N карт с верха
//!   - `shuffle` – перемешать на месте

pub mod draw;
pub mod errors;
pub mod factory;
pub mod shuffle;

pub use draw::draw;
pub use errors::EngineError;
pub use factory::DeckFactory;
pub use shuffle::shuffle;

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
