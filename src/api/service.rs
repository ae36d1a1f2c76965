// src/api/service.rs

use std::num::IntErrorKind;

use tracing::{debug, info, warn};

use crate::config::{parse_bool_flag, ServiceConfig};
use crate::domain::card::GameType;
use crate::domain::catalog::CardCatalog;
use crate::domain::DeckId;
use crate::engine::{self, DeckFactory, RandomSource};
use crate::infra::persistence::{DeckStorage, StoredDeck};
use crate::infra::seeds::seed_reference_cards;

use super::commands::{Command, CreateDeckCommand, DrawCardsCommand, ShuffleDeckCommand};
use super::dto::{map_cards, CardDto, CommandResponse, CreatedDeckDto, OpenDeckDto};
use super::errors::ApiError;
use super::queries::{OpenDeckQuery, Query, QueryResponse};

/// Сервис колод: request-слой поверх движка и хранилища.
///
/// - разбирает сырые параметры (коды через запятую, флаги, count);
/// - отсеивает неизвестные коды по эталонным картам из хранилища;
/// - вызывает движок и сохраняет результат только после успешной операции.
pub struct DeckService<S, R> {
    catalog: CardCatalog,
    storage: S,
    rng: R,
    game_type: GameType,
}

impl<S: DeckStorage, R: RandomSource> DeckService<S, R> {
    /// Собрать сервис. Если в конфиге включено, засеивает эталонные карты.
    pub fn new(config: &ServiceConfig, catalog: CardCatalog, mut storage: S, rng: R) -> Self {
        if config.seed_reference_cards {
            seed_reference_cards(&mut storage, &catalog, config.game_type);
        }

        Self {
            catalog,
            storage,
            rng,
            game_type: config.game_type,
        }
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    /// Выполнить команду.
    pub fn handle(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::CreateDeck(cmd) => self.create_deck(cmd).map(CommandResponse::DeckCreated),
            Command::DrawCards(cmd) => self.draw_cards(cmd).map(CommandResponse::CardsDrawn),
            Command::ShuffleDeck(cmd) => {
                self.shuffle_deck(cmd).map(CommandResponse::DeckShuffled)
            }
        }
    }

    /// Выполнить запрос.
    pub fn query(&self, query: Query) -> Result<QueryResponse, ApiError> {
        match query {
            Query::OpenDeck(q) => self.open_deck(q).map(QueryResponse::Deck),
        }
    }

    /// Создать колоду из списка кодов или полную колоду.
    pub fn create_deck(&mut self, cmd: CreateDeckCommand) -> Result<CreatedDeckDto, ApiError> {
        let reference = self.storage.reference_codes(self.game_type);

        let codes: Vec<String> = match cmd.cards.as_deref() {
            Some(raw) if !raw.is_empty() => {
                let codes: Vec<String> = raw.split(',').map(str::to_string).collect();
                let invalid = invalid_codes(&codes, &reference);
                if !invalid.is_empty() {
                    warn!(?invalid, "deck requested with unknown card codes");
                    return Err(ApiError::InvalidCards(invalid));
                }
                codes
            }
            _ => reference,
        };

        let shuffle = cmd
            .shuffle
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .and_then(parse_bool_flag)
            .unwrap_or(false);

        let mut deck = DeckFactory::new(&self.catalog).create(&codes, self.game_type)?;
        if shuffle {
            engine::shuffle(&mut deck, &mut self.rng);
        }

        self.storage.create(&deck)?;
        info!(
            deck_id = %deck.id(),
            remaining = deck.remaining(),
            shuffled = deck.shuffled(),
            "deck created"
        );

        Ok(CreatedDeckDto::from(&deck))
    }

    /// Открыть колоду по ID.
    pub fn open_deck(&self, query: OpenDeckQuery) -> Result<OpenDeckDto, ApiError> {
        let stored = self.load(&query.deck_id)?;
        Ok(OpenDeckDto::from(&stored.deck))
    }

    /// Снять карты. `count` по умолчанию — 1.
    pub fn draw_cards(&mut self, cmd: DrawCardsCommand) -> Result<Vec<CardDto>, ApiError> {
        let StoredDeck { mut deck, version } = self.load(&cmd.deck_id)?;
        let count = normalize_draw_count(cmd.count.as_deref())?;

        if count > deck.remaining() {
            debug!(deck_id = %deck.id(), count, remaining = deck.remaining(), "draw rejected");
            return Err(ApiError::NotEnoughCards {
                requested: count,
                remaining: deck.remaining(),
            });
        }

        let drawn = engine::draw(&mut deck, count)?;
        self.storage.save(&deck, version)?;
        info!(deck_id = %deck.id(), count, remaining = deck.remaining(), "cards drawn");

        Ok(map_cards(&drawn))
    }

    /// Перемешать сохранённую колоду на месте.
    pub fn shuffle_deck(&mut self, cmd: ShuffleDeckCommand) -> Result<CreatedDeckDto, ApiError> {
        let StoredDeck { mut deck, version } = self.load(&cmd.deck_id)?;

        engine::shuffle(&mut deck, &mut self.rng);
        self.storage.save(&deck, version)?;
        info!(deck_id = %deck.id(), remaining = deck.remaining(), "deck shuffled");

        Ok(CreatedDeckDto::from(&deck))
    }

    fn load(&self, raw_id: &str) -> Result<StoredDeck, ApiError> {
        let id = DeckId::from(raw_id);
        self.storage
            .find_by_id(&id)?
            .ok_or_else(|| ApiError::DeckNotFound(id.into_inner()))
    }
}

/// Коды из запроса, которых нет среди эталонных (с повторами, в порядке запроса).
pub fn invalid_codes(codes: &[String], reference: &[String]) -> Vec<String> {
    codes
        .iter()
        .filter(|code| !reference.contains(*code))
        .cloned()
        .collect()
}

/// Нормализовать `count`: пусто, мусор или ноль — 1; отрицательное — ошибка.
///
/// Переполнение сверху зажимается в `usize::MAX` и дальше отваливается как
/// `NotEnoughCards`; пробелы не срезаются, " 5" считается мусором.
pub fn normalize_draw_count(raw: Option<&str>) -> Result<usize, ApiError> {
    let parsed = match raw.map(str::parse::<i64>) {
        None => 0,
        Some(Ok(n)) => n,
        Some(Err(err)) => match err.kind() {
            IntErrorKind::PosOverflow => return Ok(usize::MAX),
            IntErrorKind::NegOverflow => {
                return Err(ApiError::BadRequest(format!(
                    "count must be positive, got {}",
                    raw.unwrap_or_default()
                )))
            }
            _ => 0,
        },
    };

    match parsed {
        0 => Ok(1),
        n if n < 0 => Err(ApiError::BadRequest(format!(
            "count must be positive, got {n}"
        ))),
        n => Ok(usize::try_from(n).unwrap_or(usize::MAX)),
    }
}
