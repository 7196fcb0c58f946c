//! Ruleset configuration.
//!
//! The numbers that drive a game of Scoundrel. Base score and monster count
//! are properties of the deck, so a `Ruleset` for a non-standard deck is
//! derived from its cards with [`Ruleset::for_deck`] rather than edited by
//! hand.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Game constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ruleset {
    /// Life at game start, also the healing cap.
    pub starting_life: i32,

    /// Durability of a freshly equipped weapon. Above the highest card value,
    /// so a new weapon can be used against anything.
    pub base_durability: u8,

    /// Score at game start: starting life + all potions - all monsters.
    pub base_score: i32,

    /// Monsters in the deck. Slaying all of them wins the game.
    pub monster_count: u32,

    /// Cards in a full room.
    pub room_size: usize,

    /// Cards resolved out of a full room. The rest carries over.
    pub cards_to_resolve: usize,
}

impl Ruleset {
    /// The standard 44-card game.
    pub const STANDARD: Ruleset = Ruleset {
        starting_life: 20,
        base_durability: 15,
        base_score: -134,
        monster_count: 26,
        room_size: 4,
        cards_to_resolve: 3,
    };

    /// Derive the deck-dependent constants from a deck's composition.
    #[must_use]
    pub fn for_deck(deck: &[Card]) -> Self {
        let standard = Self::STANDARD;
        let potions: i32 = deck.iter().filter(|c| c.is_potion()).map(|c| i32::from(c.value())).sum();
        let monsters: i32 = deck.iter().filter(|c| c.is_monster()).map(|c| i32::from(c.value())).sum();
        let monster_count = deck.iter().filter(|c| c.is_monster()).count() as u32;

        Self {
            base_score: standard.starting_life + potions - monsters,
            monster_count,
            ..standard
        }
    }

    /// Number of cards `resolve_room` expects for a room of `room_len` cards.
    #[must_use]
    pub fn required_resolutions(&self, room_len: usize) -> usize {
        if room_len >= self.room_size {
            self.cards_to_resolve
        } else {
            room_len
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::STANDARD
    }
}
