// src/bin/deck_dev_cli.rs

use deck_engine::api::{
    ApiError, CreateDeckCommand, DeckService, DrawCardsCommand, OpenDeckQuery,
    ShuffleDeckCommand,
};
use deck_engine::config::ServiceConfig;
use deck_engine::domain::CardCatalog;
use deck_engine::infra::{DeterministicRng, InMemoryDeckStorage, JsonCardCodec};
use serde::Serialize;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::from_env();
    let rng = match config.rng_seed {
        Some(seed) => DeterministicRng::from_seed(seed),
        None => DeterministicRng::from_clock(),
    };
    info!(game_type = %config.game_type, seed = rng.seed(), "deck_dev_cli starting");

    let storage = InMemoryDeckStorage::new(JsonCardCodec::new(config.game_type));
    let mut service = DeckService::new(&config, CardCatalog::standard(), storage, rng);

    if let Err(err) = run(&mut service) {
        error!(%err, status = err.status_code(), "scenario failed");
        std::process::exit(1);
    }
}

fn run(
    service: &mut DeckService<InMemoryDeckStorage<JsonCardCodec>, DeterministicRng>,
) -> Result<(), ApiError> {
    println!("================ FULL SHUFFLED DECK =================");
    let full = service.create_deck(CreateDeckCommand {
        cards: None,
        shuffle: Some("true".to_string()),
    })?;
    print_json(&full);

    let drawn = service.draw_cards(DrawCardsCommand {
        deck_id: full.deck_id.clone(),
        count: Some("5".to_string()),
    })?;
    print_json(&drawn);

    let opened = service.open_deck(OpenDeckQuery {
        deck_id: full.deck_id.clone(),
    })?;
    println!("[CLI] remaining after draw: {}", opened.remaining);

    println!("================ PARTIAL DECK =================");
    let partial = service.create_deck(CreateDeckCommand {
        cards: Some("AS,KD,AC,2C,KH".to_string()),
        shuffle: None,
    })?;
    print_json(&partial);

    let top = service.draw_cards(DrawCardsCommand {
        deck_id: partial.deck_id.clone(),
        count: None,
    })?;
    print_json(&top);

    let reshuffled = service.shuffle_deck(ShuffleDeckCommand {
        deck_id: partial.deck_id.clone(),
    })?;
    print_json(&reshuffled);

    print_json(&service.open_deck(OpenDeckQuery {
        deck_id: partial.deck_id,
    })?);

    println!("================ REJECTED REQUESTS =================");
    match service.create_deck(CreateDeckCommand {
        cards: Some("AS,1S,ZZ".to_string()),
        shuffle: None,
    }) {
        Ok(dto) => println!("[CLI] unexpected success: {}", dto.deck_id),
        Err(err) => println!("[CLI] {} -> {}", err.status_code(), err),
    }

    match service.draw_cards(DrawCardsCommand {
        deck_id: full.deck_id,
        count: Some("100".to_string()),
    }) {
        Ok(cards) => println!("[CLI] unexpected success: {} cards", cards.len()),
        Err(err) => println!("[CLI] {} -> {}", err.status_code(), err),
    }

    println!("[CLI] Завершение работы dev-CLI.");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(err) => error!(%err, "failed to render json"),
    }
}
