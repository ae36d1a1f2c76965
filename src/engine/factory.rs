// src/engine/factory.rs

use tracing::debug;

use crate::domain::card::GameType;
use crate::domain::catalog::CardCatalog;
use crate::domain::deck::Deck;
use crate::domain::DeckId;
use crate::engine::EngineError;

/// Фабрика колод поверх каталога.
///
/// Проверяет только количество карт. Неизвестные коды не отвергаются:
/// они превращаются в карты с пустыми value/suit. Отсев неизвестных кодов
/// делает request-слой до вызова фабрики.
#[derive(Clone, Copy, Debug)]
pub struct DeckFactory<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> DeckFactory<'a> {
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a CardCatalog {
        self.catalog
    }

    /// Создать колоду со свежим ID.
    pub fn create<S: AsRef<str>>(
        &self,
        codes: &[S],
        game_type: GameType,
    ) -> Result<Deck, EngineError> {
        self.create_with_id(DeckId::generate(), codes, game_type)
    }

    /// То же, но с заранее выбранным ID.
    pub fn create_with_id<S: AsRef<str>>(
        &self,
        id: DeckId,
        codes: &[S],
        game_type: GameType,
    ) -> Result<Deck, EngineError> {
        let min = self.catalog.min_cards(game_type);
        let max = self.catalog.max_cards(game_type);

        if codes.len() < min {
            return Err(EngineError::TooFewCards {
                game_type,
                requested: codes.len(),
                min,
            });
        }
        if codes.len() > max {
            return Err(EngineError::TooManyCards {
                game_type,
                requested: codes.len(),
                max,
            });
        }

        let cards = codes
            .iter()
            .map(|code| self.catalog.resolve_card(game_type, code.as_ref()))
            .collect();

        let deck = Deck::new(id, cards);
        debug!(deck_id = %deck.id(), remaining = deck.remaining(), "deck created");
        Ok(deck)
    }
}
