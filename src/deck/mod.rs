//! Deck construction.
//!
//! The Scoundrel deck is a standard deck with the red face cards, red aces
//! and jokers removed: 44 cards in total.

pub mod factory;

pub use factory::{create_deck, standard_deck, DECK_SIZE};
