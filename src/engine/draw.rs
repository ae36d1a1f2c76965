use tracing::trace;

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::EngineError;

/// Снять `count` карт с верха колоды (с конца `cards`).
///
/// Снятые карты возвращаются в том же относительном порядке, в каком лежали.
/// При ошибке колода не меняется.
pub fn draw(deck: &mut Deck, count: usize) -> Result<Vec<Card>, EngineError> {
    if count == 0 {
        return Err(EngineError::InvalidDrawCount(count));
    }
    if count > deck.remaining() {
        return Err(EngineError::InsufficientCards {
            requested: count,
            remaining: deck.remaining(),
        });
    }

    let drawn = deck.split_top(count);
    trace!(deck_id = %deck.id(), count, remaining = deck.remaining(), "cards drawn");
    Ok(drawn)
}
