//! Cards and suits.
//!
//! A Scoundrel card is an immutable `(suit, value)` pair. Values run from
//! 2 to 14, where 11-14 are Jack, Queen, King and Ace. The suit decides
//! what a card does when it is resolved:
//! - Clubs and Spades are monsters
//! - Diamonds are weapons
//! - Hearts are health potions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest legal card value.
pub const MIN_VALUE: u8 = 2;

/// Highest legal card value (Ace).
pub const MAX_VALUE: u8 = 14;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Clubs and Spades are monsters.
    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self, Suit::Club | Suit::Spade)
    }

    /// Plural display name ("Clubs").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Club => "Clubs",
            Suit::Diamond => "Diamonds",
            Suit::Heart => "Hearts",
            Suit::Spade => "Spades",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error building a card.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    #[error("card value {value} is outside 2..=14")]
    ValueOutOfRange { value: u8 },
}

/// An immutable playing card.
///
/// Fields are private so every card in play went through [`Card::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardParts")]
pub struct Card {
    suit: Suit,
    value: u8,
}

#[derive(Deserialize)]
struct CardParts {
    suit: Suit,
    value: u8,
}

impl TryFrom<CardParts> for Card {
    type Error = CardError;

    fn try_from(parts: CardParts) -> Result<Self, Self::Error> {
        Card::new(parts.suit, parts.value)
    }
}

impl Card {
    /// Create a card, rejecting values outside 2..=14.
    pub fn new(suit: Suit, value: u8) -> Result<Self, CardError> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return Err(CardError::ValueOutOfRange { value });
        }
        Ok(Self { suit, value })
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn is_monster(self) -> bool {
        self.suit.is_monster()
    }

    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(self.suit, Suit::Diamond)
    }

    #[must_use]
    pub const fn is_potion(self) -> bool {
        matches!(self.suit, Suit::Heart)
    }

    /// Face name for the value ("Jack", "7").
    #[must_use]
    pub fn rank_name(self) -> String {
        match self.value {
            11 => "Jack".to_string(),
            12 => "Queen".to_string(),
            13 => "King".to_string(),
            14 => "Ace".to_string(),
            v => v.to_string(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)
    }
}
