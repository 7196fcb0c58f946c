//! # scoundrel
//!
//! Rules engine for Scoundrel, a single-player dungeon crawl played with a
//! 44-card deck.
//!
//! ## Rules in brief
//!
//! - Clubs and Spades are monsters, Diamonds are weapons, Hearts are potions.
//! - Each turn the player enters a room of four cards and either skips it
//!   (never twice in a row) or resolves three of them in a chosen order. The
//!   fourth carries over into the next room.
//! - A weapon can only be used against monsters weaker than the last monster
//!   it killed.
//! - Only the first potion of a room heals.
//! - The game is won by slaying every monster and lost when life hits zero.
//!
//! ## Usage
//!
//! ```
//! use scoundrel::Scoundrel;
//!
//! let mut game = Scoundrel::new(42);
//! let room = game.enter_room().unwrap().to_vec();
//! assert_eq!(room.len(), 4);
//!
//! game.resolve_room(&[0, 1, 2], &[false, false, false]).unwrap();
//! assert!(game.is_game_over() || game.room().len() == 1);
//! ```
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, ruleset constants
//! - `deck`: Deck construction
//! - `engine`: Game state machine and card resolution
//! - `play`: Policies and a runner for automated games

pub mod core;
pub mod deck;
pub mod engine;
pub mod play;

// Re-export commonly used types
pub use crate::core::{Card, CardError, GameRng, Ruleset, Suit};

pub use crate::deck::{create_deck, standard_deck, DECK_SIZE};

pub use crate::engine::{
    Action, EventRecord, GameEvent, GameOutcome, GameSnapshot, Phase, ResolveRoomError,
    Scoundrel, ScoundrelBuilder, ScoundrelError,
};

pub use crate::play::{play_game, play_many, BatchStats, GameReport, GreedyPolicy, Policy, RandomPolicy};
