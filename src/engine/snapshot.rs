//! Serializable view of a game for display layers and test harnesses.

use serde::{Deserialize, Serialize};

use crate::core::Card;

use super::game::{GameOutcome, Phase, Scoundrel};

/// Public game state at one moment. The deck's order is not exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub outcome: Option<GameOutcome>,
    pub life: i32,
    pub score: i32,
    pub weapon: Option<Card>,
    pub weapon_durability: u8,
    pub room: Vec<Card>,
    pub deck_len: usize,
    pub discard_pile: Vec<Card>,
    pub monsters_remaining: u32,
    pub can_skip: bool,
    pub can_heal_this_turn: bool,
    pub rooms_entered: u32,
}

impl GameSnapshot {
    pub(super) fn from_game(game: &Scoundrel) -> Self {
        Self {
            phase: game.phase(),
            outcome: game.outcome(),
            life: game.life,
            score: game.score,
            weapon: game.weapon,
            weapon_durability: game.weapon_durability,
            room: game.room.to_vec(),
            deck_len: game.deck.len(),
            discard_pile: game.discard.iter().copied().collect(),
            monsters_remaining: game.monsters_remaining,
            can_skip: game.can_skip,
            can_heal_this_turn: game.can_heal_this_turn,
            rooms_entered: game.rooms_entered,
        }
    }
}
