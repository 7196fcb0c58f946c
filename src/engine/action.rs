//! Player actions.
//!
//! `Action` packages the three turn operations as values so players, replays
//! and policies can enumerate, store and apply them uniformly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::Result;
use super::game::{Phase, Scoundrel};

/// A complete player decision.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    EnterRoom,
    SkipRoom,
    ResolveRoom {
        order: SmallVec<[usize; 4]>,
        slay_by_hand: SmallVec<[bool; 4]>,
    },
}

impl Action {
    /// Build a resolve action from slices.
    #[must_use]
    pub fn resolve(order: &[usize], slay_by_hand: &[bool]) -> Self {
        Action::ResolveRoom {
            order: SmallVec::from_slice(order),
            slay_by_hand: SmallVec::from_slice(slay_by_hand),
        }
    }
}

impl Scoundrel {
    /// One action per distinct outcome the engine accepts right now.
    ///
    /// Resolve actions cover every ordering of the required number of slots.
    /// Slay-by-hand is only varied for monsters that could meet a weapon:
    /// one already equipped, or a Diamond resolved earlier in the same order.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.phase() {
            Phase::GameOver => Vec::new(),
            Phase::AwaitingRoom => vec![Action::EnterRoom],
            Phase::RoomInProgress => {
                let mut actions = Vec::new();
                if self.can_skip {
                    actions.push(Action::SkipRoom);
                }

                let room = self.room();
                let count = self.rules.required_resolutions(room.len());
                for order in ordered_selections(room.len(), count) {
                    let mut armed = self.weapon.is_some();
                    let mut choice_points: SmallVec<[usize; 4]> = SmallVec::new();
                    for (pos, &slot) in order.iter().enumerate() {
                        let card = room[slot];
                        if card.is_weapon() {
                            armed = true;
                        } else if card.is_monster() && armed {
                            choice_points.push(pos);
                        }
                    }

                    for mask in 0..(1u32 << choice_points.len()) {
                        let mut slay_by_hand: SmallVec<[bool; 4]> = SmallVec::from_elem(false, count);
                        for (bit, &pos) in choice_points.iter().enumerate() {
                            slay_by_hand[pos] = mask & (1 << bit) != 0;
                        }
                        actions.push(Action::ResolveRoom {
                            order: order.clone(),
                            slay_by_hand,
                        });
                    }
                }

                actions
            }
        }
    }

    /// Apply an action through the matching turn operation.
    pub fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::EnterRoom => self.enter_room().map(|_| ()),
            Action::SkipRoom => self.skip_room(),
            Action::ResolveRoom { order, slay_by_hand } => self.resolve_room(order, slay_by_hand),
        }
    }
}

/// All ordered selections of `k` distinct indices out of `0..n`.
fn ordered_selections(n: usize, k: usize) -> Vec<SmallVec<[usize; 4]>> {
    fn extend(n: usize, k: usize, prefix: &mut SmallVec<[usize; 4]>, out: &mut Vec<SmallVec<[usize; 4]>>) {
        if prefix.len() == k {
            out.push(prefix.clone());
            return;
        }
        for i in 0..n {
            if !prefix.contains(&i) {
                prefix.push(i);
                extend(n, k, prefix, out);
                prefix.pop();
            }
        }
    }

    let mut out = Vec::new();
    extend(n, k, &mut SmallVec::new(), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Suit};
    use crate::engine::game::ScoundrelBuilder;

    fn card(suit: Suit, value: u8) -> Card {
        Card::new(suit, value).unwrap()
    }

    #[test]
    fn test_ordered_selections() {
        assert_eq!(ordered_selections(4, 3).len(), 24);
        assert_eq!(ordered_selections(2, 2).len(), 2);
        assert_eq!(ordered_selections(1, 1).len(), 1);
    }

    #[test]
    fn test_awaiting_room_only_enters() {
        let game = Scoundrel::new(1);
        assert_eq!(game.legal_actions(), vec![Action::EnterRoom]);
    }

    #[test]
    fn test_unarmed_room_actions() {
        let mut game = ScoundrelBuilder::new()
            .deck(vec![
                card(Suit::Club, 4),
                card(Suit::Heart, 3),
                card(Suit::Spade, 9),
                card(Suit::Heart, 7),
                card(Suit::Club, 2),
            ])
            .build();
        game.enter_room().unwrap();

        let actions = game.legal_actions();

        // Skip plus 24 orders, no weapon so no slay-by-hand choices
        assert_eq!(actions.len(), 25);
        assert_eq!(actions[0], Action::SkipRoom);
    }

    #[test]
    fn test_weapon_in_room_adds_choices() {
        let mut game = ScoundrelBuilder::new()
            .deck(vec![
                card(Suit::Diamond, 4),
                card(Suit::Club, 3),
                card(Suit::Heart, 5),
                card(Suit::Heart, 6),
                card(Suit::Club, 2),
            ])
            .build();
        game.enter_room().unwrap();

        let actions = game.legal_actions();
        let with_choice = actions
            .iter()
            .filter(|a| matches!(a, Action::ResolveRoom { slay_by_hand, .. } if slay_by_hand.contains(&true)))
            .count();

        // The club can meet the weapon only when the diamond comes first:
        // orders (0, 1, x) and (0, x, 1) for x in {2, 3}, plus (x, 0, 1).
        assert_eq!(with_choice, 6);
    }

    #[test]
    fn test_every_legal_action_applies() {
        let mut game = Scoundrel::new(77);
        game.enter_room().unwrap();

        for action in game.legal_actions() {
            let mut copy = game.clone();
            assert!(copy.apply(&action).is_ok(), "{action:?} was rejected");
        }
    }

    #[test]
    fn test_unarmed_slay_by_hand_is_accepted_but_not_listed() {
        let deck = vec![
            card(Suit::Club, 4),
            card(Suit::Heart, 3),
            card(Suit::Spade, 9),
            card(Suit::Heart, 7),
            card(Suit::Club, 2),
        ];
        let mut game = ScoundrelBuilder::new().deck(deck).build();
        game.enter_room().unwrap();

        let by_hand = Action::resolve(&[0, 1, 2], &[true, false, true]);
        let listed = Action::resolve(&[0, 1, 2], &[false, false, false]);
        let actions = game.legal_actions();
        assert!(!actions.contains(&by_hand));
        assert!(actions.contains(&listed));

        // Without a weapon both choices lead to the same game
        let mut a = game.clone();
        let mut b = game.clone();
        a.apply(&by_hand).unwrap();
        b.apply(&listed).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_skip_not_offered_after_skip() {
        let mut game = Scoundrel::new(2);
        game.apply(&Action::EnterRoom).unwrap();
        game.apply(&Action::SkipRoom).unwrap();
        game.apply(&Action::EnterRoom).unwrap();

        assert!(!game.legal_actions().contains(&Action::SkipRoom));
    }

    #[test]
    fn test_game_over_has_no_actions() {
        let mut game = ScoundrelBuilder::new()
            .deck(vec![card(Suit::Heart, 2)])
            .build();
        game.apply(&Action::EnterRoom).unwrap();
        game.apply(&Action::resolve(&[0], &[false])).unwrap();

        assert!(game.is_game_over());
        assert!(game.legal_actions().is_empty());
    }
}
