use crate::domain::card::Card;
use crate::domain::DeckId;

/// Колода: упорядоченный список карт плюс метаданные.
///
/// Хвост `cards` — верх колоды, оттуда тянет draw.
/// Поля закрыты: `remaining` всегда равен `cards.len()`, а `shuffled`
/// выставляет только shuffle-движок.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    id: DeckId,
    shuffled: bool,
    remaining: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// Новая, ещё не перемешанная колода. Валидация размера — в фабрике.
    pub(crate) fn new(id: DeckId, cards: Vec<Card>) -> Self {
        let remaining = cards.len();
        Self {
            id,
            shuffled: false,
            remaining,
            cards,
        }
    }

    /// Восстановить колоду из хранилища (после decode).
    pub(crate) fn restore(id: DeckId, shuffled: bool, cards: Vec<Card>) -> Self {
        let remaining = cards.len();
        Self {
            id,
            shuffled,
            remaining,
            cards,
        }
    }

    pub fn id(&self) -> &DeckId {
        &self.id
    }

    pub fn shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn codes(&self) -> Vec<&str> {
        self.cards.iter().map(Card::code).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Отрезать `count` карт с верха. Проверки — в engine::draw.
    pub(crate) fn split_top(&mut self, count: usize) -> Vec<Card> {
        let at = self.cards.len() - count;
        let drawn = self.cards.split_off(at);
        self.remaining = self.cards.len();
        drawn
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub(crate) fn mark_shuffled(&mut self) {
        self.shuffled = true;
    }
}
