//! The Scoundrel game engine.
//!
//! A game loops through two phases until it ends:
//!
//! ```text
//! AwaitingRoom --enter_room--> RoomInProgress --resolve_room/skip_room--> AwaitingRoom
//!                                     |
//!                                     +--> GameOver (life <= 0, no monsters left, room emptied)
//! ```
//!
//! All state is private to the `engine` module; the public operations are
//! the only mutators.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Card, GameRng, Ruleset};
use crate::deck::create_deck;

use super::error::{Result, ScoundrelError};
use super::event::{EventRecord, GameEvent};
use super::order::{self, ResolutionPlan};
use super::snapshot::GameSnapshot;

/// Cards currently in play.
pub type Room = SmallVec<[Card; 4]>;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Won => f.write_str("you win"),
            GameOutcome::Lost => f.write_str("you lose"),
        }
    }
}

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The previous room is resolved (or skipped); enter the next one.
    AwaitingRoom,
    /// A room is in play; resolve or skip it.
    RoomInProgress,
    /// Terminal.
    GameOver,
}

/// A single game of Scoundrel.
///
/// Deck and discard pile are persistent vectors, so cloning a game is cheap.
/// `resolve_room` relies on that to resolve a room on a staged copy and
/// commit it in one step.
#[derive(Clone, Debug)]
pub struct Scoundrel {
    pub(super) rules: Ruleset,
    pub(super) rng: GameRng,
    pub(super) deck: Vector<Card>,
    pub(super) room: Room,
    pub(super) weapon: Option<Card>,
    pub(super) weapon_durability: u8,
    pub(super) discard: Vector<Card>,
    pub(super) life: i32,
    pub(super) score: i32,
    pub(super) monsters_remaining: u32,
    pub(super) can_skip: bool,
    pub(super) can_heal_this_turn: bool,
    pub(super) turn_resolved: bool,
    pub(super) game_over: bool,
    pub(super) rooms_entered: u32,
    pub(super) history: Vector<EventRecord>,
}

/// Builder for creating a game.
#[derive(Clone, Debug, Default)]
pub struct ScoundrelBuilder {
    seed: u64,
    deck: Option<Vec<Card>>,
}

impl ScoundrelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed for the deck shuffle and skipped-room shuffles.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Play with this deck in this order instead of a shuffled standard deck.
    ///
    /// The front of the vector is the top of the deck. Base score and
    /// monster count are derived from the cards.
    pub fn deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the game.
    pub fn build(self) -> Scoundrel {
        let mut rng = GameRng::new(self.seed);
        let (deck, rules) = match self.deck {
            Some(deck) => {
                let rules = Ruleset::for_deck(&deck);
                (deck, rules)
            }
            None => (create_deck(&mut rng), Ruleset::STANDARD),
        };

        Scoundrel {
            rules,
            rng,
            deck: deck.into_iter().collect(),
            room: Room::new(),
            weapon: None,
            weapon_durability: 0,
            discard: Vector::new(),
            life: rules.starting_life,
            score: rules.base_score,
            monsters_remaining: rules.monster_count,
            can_skip: true,
            can_heal_this_turn: true,
            turn_resolved: true,
            game_over: false,
            rooms_entered: 0,
            history: Vector::new(),
        }
    }
}

impl Scoundrel {
    /// Start a standard game with a deck shuffled from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        ScoundrelBuilder::new().seed(seed).build()
    }

    // === Turn operations ===

    /// Enter the next room, topping it up to four cards from the deck.
    ///
    /// When the deck runs out the room keeps whatever it holds.
    pub fn enter_room(&mut self) -> Result<&[Card]> {
        self.ensure_running()?;
        if !self.turn_resolved {
            return Err(ScoundrelError::InRoom);
        }

        while self.room.len() < self.rules.room_size {
            match self.deck.pop_front() {
                Some(card) => self.room.push(card),
                None => break,
            }
        }

        self.turn_resolved = false;
        self.rooms_entered += 1;
        self.record(GameEvent::RoomEntered {
            cards: self.room.to_vec(),
        });

        Ok(self.room.as_slice())
    }

    /// Skip the current room. Its cards go under the deck in random order.
    ///
    /// Two rooms can not be skipped in a row.
    pub fn skip_room(&mut self) -> Result<()> {
        self.ensure_running()?;
        if self.turn_resolved {
            return Err(ScoundrelError::NotInRoom);
        }
        if !self.can_skip {
            return Err(ScoundrelError::CanNotSkipRoom);
        }

        let mut skipped: Vec<Card> = self.room.drain(..).collect();
        self.rng.shuffle(&mut skipped);
        self.deck.extend(skipped.iter().copied());

        self.can_skip = false;
        self.turn_resolved = true;
        self.record(GameEvent::RoomSkipped { cards: skipped });

        Ok(())
    }

    /// Resolve the current room.
    ///
    /// `card_order` lists room slots in the order to resolve them: three for a
    /// full room, every card for a partial one at the end of the deck.
    /// `slay_by_hand[i]` makes the i-th card, if it is a monster, be fought
    /// without the weapon.
    ///
    /// Resolution stops as soon as the game ends. Otherwise at most one card
    /// may remain and carries over into the next room; none remaining wins
    /// the game.
    pub fn resolve_room(&mut self, card_order: &[usize], slay_by_hand: &[bool]) -> Result<()> {
        self.ensure_running()?;
        if self.turn_resolved {
            return Err(ScoundrelError::NotInRoom);
        }

        let plan = order::validate(card_order, slay_by_hand, self.room.len(), &self.rules)?;

        let mut staged = self.clone();
        staged.run_plan(&plan);
        *self = staged;

        Ok(())
    }

    fn run_plan(&mut self, plan: &ResolutionPlan) {
        self.can_heal_this_turn = true;

        let mut slots: SmallVec<[Option<Card>; 4]> = self.room.drain(..).map(Some).collect();
        for step in plan {
            if let Some(card) = slots[step.slot].take() {
                self.resolve_card(card, step.slay_by_hand);
            }
            if self.game_over {
                break;
            }
        }

        self.room = slots.into_iter().flatten().collect();
        if self.game_over {
            return;
        }

        assert!(
            self.room.len() <= 1,
            "room holds {} cards after resolution",
            self.room.len()
        );
        if self.room.is_empty() {
            self.end_game();
        }

        self.turn_resolved = true;
        self.can_skip = true;
    }

    fn ensure_running(&self) -> Result<()> {
        match self.outcome() {
            Some(outcome) => Err(ScoundrelError::GameOver {
                outcome,
                score: self.score,
            }),
            None => Ok(()),
        }
    }

    pub(super) fn record(&mut self, event: GameEvent) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(EventRecord::new(self.rooms_entered, sequence, event));
    }

    // === Accessors ===

    #[must_use]
    pub fn ruleset(&self) -> &Ruleset {
        &self.rules
    }

    #[must_use]
    pub fn life(&self) -> i32 {
        self.life
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The equipped weapon, if any.
    #[must_use]
    pub fn weapon(&self) -> Option<Card> {
        self.weapon
    }

    /// Monsters at or above this value can not be fought with the weapon.
    /// Zero when unarmed.
    #[must_use]
    pub fn weapon_durability(&self) -> u8 {
        self.weapon_durability
    }

    #[must_use]
    pub fn room(&self) -> &[Card] {
        &self.room
    }

    /// Remaining deck, top first.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard
    }

    #[must_use]
    pub fn monsters_remaining(&self) -> u32 {
        self.monsters_remaining
    }

    #[must_use]
    pub fn can_skip(&self) -> bool {
        self.can_skip
    }

    #[must_use]
    pub fn can_heal_this_turn(&self) -> bool {
        self.can_heal_this_turn
    }

    #[must_use]
    pub fn rooms_entered(&self) -> u32 {
        self.rooms_entered
    }

    #[must_use]
    pub fn is_room_in_progress(&self) -> bool {
        !self.game_over && !self.turn_resolved
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// `None` while the game is running.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.game_over {
            None
        } else if self.life > 0 {
            Some(GameOutcome::Won)
        } else {
            Some(GameOutcome::Lost)
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.turn_resolved {
            Phase::AwaitingRoom
        } else {
            Phase::RoomInProgress
        }
    }

    /// Everything that happened so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Serializable view of the public state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_game(self)
    }
}
