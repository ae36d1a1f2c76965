use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::card::{Card, GameType};
use crate::domain::deck::Deck;
use crate::domain::DeckId;
use crate::infra::codec::{CardCodec, CodecError};

/// Ошибки слоя хранения.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("deck {0} not found")]
    DeckNotFound(DeckId),

    #[error("deck {0} already exists")]
    DuplicateDeck(DeckId),

    #[error("deck {id} was modified concurrently (expected version {expected}, found {found})")]
    VersionConflict {
        id: DeckId,
        expected: u64,
        found: u64,
    },

    #[error("deck {id} is corrupted: remaining={remaining}, decoded {decoded} cards")]
    RemainingMismatch {
        id: DeckId,
        remaining: u32,
        decoded: usize,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Плоская запись колоды в хранилище.
///
/// `cards` — результат `CardCodec::encode`, больше ничем не читается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckRecord {
    pub id: String,
    pub shuffled: bool,
    pub remaining: u32,
    pub cards: Vec<u8>,
    /// Оптимистичная версия: растёт на каждый save.
    pub version: u64,
}

/// Колода, загруженная из хранилища, вместе с версией записи.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredDeck {
    pub deck: Deck,
    pub version: u64,
}

/// Абстракция хранилища колод и эталонных карт.
///
/// Реализация обязана звать кодек перед каждой записью и после каждого чтения.
/// Конкурентные изменения одной колоды сериализуются через `version`.
pub trait DeckStorage {
    /// Сохранить новую колоду. Возвращает версию записи.
    fn create(&mut self, deck: &Deck) -> Result<u64, StorageError>;

    /// Загрузить колоду по ID (`None`, если её нет).
    fn find_by_id(&self, id: &DeckId) -> Result<Option<StoredDeck>, StorageError>;

    /// Перезаписать колоду. `expected_version` — версия, с которой колода
    /// была загружена. Возвращает новую версию.
    fn save(&mut self, deck: &Deck, expected_version: u64) -> Result<u64, StorageError>;

    /// Есть ли эталонные карты для типа игры.
    fn has_reference_cards(&self, game_type: GameType) -> bool;

    /// Добавить эталонные карты.
    fn insert_reference_cards(&mut self, cards: &[Card]);

    /// Коды эталонных карт в порядке вставки.
    fn reference_codes(&self, game_type: GameType) -> Vec<String>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryDeckStorage<C> {
    codec: C,
    decks: BTreeMap<DeckId, DeckRecord>,
    reference_cards: HashMap<GameType, Vec<Card>>,
}

impl<C: CardCodec> InMemoryDeckStorage<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            decks: BTreeMap::new(),
            reference_cards: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Сырая запись (для отладки и тестов кодека).
    pub fn record(&self, id: &DeckId) -> Option<&DeckRecord> {
        self.decks.get(id)
    }

    /// Подменить сырую запись (имитация ручной правки базы).
    pub fn put_record(&mut self, record: DeckRecord) {
        self.decks.insert(DeckId::from(record.id.clone()), record);
    }

    fn encode_record(&self, deck: &Deck, version: u64) -> Result<DeckRecord, StorageError> {
        let cards = self.codec.encode(deck.cards())?;
        Ok(DeckRecord {
            id: deck.id().to_string(),
            shuffled: deck.shuffled(),
            remaining: deck.remaining() as u32,
            cards,
            version,
        })
    }

    fn decode_record(&self, record: &DeckRecord) -> Result<Deck, StorageError> {
        let id = DeckId::from(record.id.clone());
        let cards = self.codec.decode(&record.cards)?;

        if cards.len() != record.remaining as usize {
            return Err(StorageError::RemainingMismatch {
                id,
                remaining: record.remaining,
                decoded: cards.len(),
            });
        }

        Ok(Deck::restore(id, record.shuffled, cards))
    }
}

impl<C: CardCodec> DeckStorage for InMemoryDeckStorage<C> {
    fn create(&mut self, deck: &Deck) -> Result<u64, StorageError> {
        if self.decks.contains_key(deck.id()) {
            return Err(StorageError::DuplicateDeck(deck.id().clone()));
        }

        let record = self.encode_record(deck, 1)?;
        trace!(deck_id = %deck.id(), bytes = record.cards.len(), "deck record encoded");
        self.decks.insert(deck.id().clone(), record);
        Ok(1)
    }

    fn find_by_id(&self, id: &DeckId) -> Result<Option<StoredDeck>, StorageError> {
        let Some(record) = self.decks.get(id) else {
            return Ok(None);
        };

        let deck = self.decode_record(record)?;
        Ok(Some(StoredDeck {
            deck,
            version: record.version,
        }))
    }

    fn save(&mut self, deck: &Deck, expected_version: u64) -> Result<u64, StorageError> {
        let found = match self.decks.get(deck.id()) {
            Some(r) => r.version,
            None => return Err(StorageError::DeckNotFound(deck.id().clone())),
        };

        if found != expected_version {
            return Err(StorageError::VersionConflict {
                id: deck.id().clone(),
                expected: expected_version,
                found,
            });
        }

        let version = found + 1;
        let record = self.encode_record(deck, version)?;
        debug!(deck_id = %deck.id(), remaining = record.remaining, version, "deck saved");
        self.decks.insert(deck.id().clone(), record);
        Ok(version)
    }

    fn has_reference_cards(&self, game_type: GameType) -> bool {
        self.reference_cards
            .get(&game_type)
            .map(|cards| !cards.is_empty())
            .unwrap_or(false)
    }

    fn insert_reference_cards(&mut self, cards: &[Card]) {
        for card in cards {
            self.reference_cards
                .entry(card.game_type())
                .or_default()
                .push(card.clone());
        }
    }

    fn reference_codes(&self, game_type: GameType) -> Vec<String> {
        self.reference_cards
            .get(&game_type)
            .map(|cards| cards.iter().map(|c| c.code().to_string()).collect())
            .unwrap_or_default()
    }
}
