use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;

/// DTO карты: ровно то, что уходит клиенту.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub value: String,
    pub suit: String,
    pub code: String,
}

impl From<&Card> for CardDto {
    fn from(card: &Card) -> Self {
        Self {
            value: card.value().to_string(),
            suit: card.suit().to_string(),
            code: card.code().to_string(),
        }
    }
}

/// Ответ на создание колоды (и на shuffle): без карт.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedDeckDto {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
}

impl From<&Deck> for CreatedDeckDto {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id().to_string(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
        }
    }
}

/// Открытая колода: метаданные плюс оставшиеся карты снизу вверх.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenDeckDto {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<CardDto>,
}

impl From<&Deck> for OpenDeckDto {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id().to_string(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining(),
            cards: map_cards(deck.cards()),
        }
    }
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    DeckCreated(CreatedDeckDto),
    CardsDrawn(Vec<CardDto>),
    DeckShuffled(CreatedDeckDto),
}

pub fn map_cards(cards: &[Card]) -> Vec<CardDto> {
    cards.iter().map(CardDto::from).collect()
}
