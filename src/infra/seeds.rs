use tracing::info;

use crate::domain::card::GameType;
use crate::domain::catalog::CardCatalog;
use crate::infra::persistence::DeckStorage;

/// Заполнить хранилище эталонными картами типа игры (полный проход каталога).
///
/// Идемпотентно: если карты уже есть, ничего не делает.
/// Возвращает количество вставленных карт.
pub fn seed_reference_cards<S: DeckStorage>(
    storage: &mut S,
    catalog: &CardCatalog,
    game_type: GameType,
) -> usize {
    if storage.has_reference_cards(game_type) {
        return 0;
    }

    let cards = catalog.sweep_cards(game_type);
    storage.insert_reference_cards(&cards);
    info!(%game_type, inserted = cards.len(), "reference cards seeded");
    cards.len()
}
