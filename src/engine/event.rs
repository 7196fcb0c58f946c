//! Game event history.
//!
//! The engine appends a record for every state change so a game can be
//! replayed, displayed or debugged after the fact.

use serde::{Deserialize, Serialize};

use crate::core::Card;

use super::game::GameOutcome;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A room was entered. `cards` is the full room, carry-over card first.
    RoomEntered { cards: Vec<Card> },

    /// The room was skipped and its cards went under the deck in this order.
    RoomSkipped { cards: Vec<Card> },

    /// A monster was slain.
    MonsterSlain {
        card: Card,
        damage: i32,
        with_weapon: bool,
    },

    /// A weapon was equipped, possibly replacing another.
    WeaponEquipped { card: Card, replaced: Option<Card> },

    /// A potion was drunk. `healed` is the life actually gained,
    /// `wasted` the value lost to overhealing or a second potion.
    PotionUsed { card: Card, healed: i32, wasted: i32 },

    /// The game ended.
    GameEnded { outcome: GameOutcome, score: i32 },
}

/// A recorded event with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Number of rooms entered when the event happened.
    pub room: u32,

    /// Position in the whole game's history.
    pub sequence: u32,

    pub event: GameEvent,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(room: u32, sequence: u32, event: GameEvent) -> Self {
        Self { room, sequence, event }
    }
}
