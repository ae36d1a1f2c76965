use tracing::trace;

use crate::domain::deck::Deck;
use crate::engine::RandomSource;

/// Перемешать колоду на месте и пометить её как перемешанную.
///
/// Меняется только порядок: `remaining` и сами карты остаются прежними.
pub fn shuffle<R: RandomSource>(deck: &mut Deck, rng: &mut R) {
    rng.shuffle(deck.cards_mut());
    deck.mark_shuffled();
    trace!(deck_id = %deck.id(), remaining = deck.remaining(), "deck shuffled");
}
