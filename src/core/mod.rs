//! Core types: cards, RNG, ruleset configuration.
//!
//! Everything here is independent of turn structure. The engine builds on
//! these without modifying them.

pub mod card;
pub mod rng;
pub mod config;

pub use card::{Card, CardError, Suit, MAX_VALUE, MIN_VALUE};
pub use rng::GameRng;
pub use config::Ruleset;
