//! Scoundrel deck factory.

use crate::core::{Card, GameRng, Suit, MAX_VALUE, MIN_VALUE};

/// Cards in a standard Scoundrel deck.
pub const DECK_SIZE: usize = 44;

/// Highest value for Diamonds and Hearts (no red face cards or aces).
const MAX_TREASURE_VALUE: u8 = 10;

/// Build the 44-card deck in a fixed order.
///
/// Diamonds 2-10, Hearts 2-10, then Clubs 2-14, Spades 2-14.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let treasure = [Suit::Diamond, Suit::Heart]
        .into_iter()
        .flat_map(|suit| (MIN_VALUE..=MAX_TREASURE_VALUE).map(move |v| (suit, v)));
    let monsters = [Suit::Club, Suit::Spade]
        .into_iter()
        .flat_map(|suit| (MIN_VALUE..=MAX_VALUE).map(move |v| (suit, v)));

    treasure
        .chain(monsters)
        .filter_map(|(suit, value)| Card::new(suit, value).ok())
        .collect()
}

/// Build the 44-card deck and shuffle it.
#[must_use]
pub fn create_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}
