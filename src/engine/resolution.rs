//! Card resolution: monsters, weapons and potions.
//!
//! `change_life` is the only place life changes and the only place a game
//! can be lost.

use crate::core::{Card, Suit};

use super::event::GameEvent;
use super::game::Scoundrel;

impl Scoundrel {
    pub(super) fn resolve_card(&mut self, card: Card, slay_by_hand: bool) {
        match card.suit() {
            Suit::Club | Suit::Spade => self.resolve_monster(card, slay_by_hand),
            Suit::Diamond => self.resolve_weapon(card),
            Suit::Heart => self.resolve_potion(card),
        }
    }

    /// Fight a monster.
    ///
    /// The weapon only helps against monsters weaker than its durability, and
    /// each such fight lowers durability to the monster's value.
    fn resolve_monster(&mut self, card: Card, slay_by_hand: bool) {
        let monster_val = card.value();
        let use_weapon = !slay_by_hand && monster_val < self.weapon_durability;

        let damage = match self.weapon {
            Some(weapon) if use_weapon => {
                self.weapon_durability = monster_val;
                i32::from(monster_val.saturating_sub(weapon.value()))
            }
            _ => i32::from(monster_val),
        };

        // Settle the kill before life changes, so a lethal fight ends the
        // game with its final score
        self.monsters_remaining = self.monsters_remaining.saturating_sub(1);
        self.score += i32::from(monster_val) - damage;
        self.discard.push_back(card);
        self.record(GameEvent::MonsterSlain {
            card,
            damage,
            with_weapon: use_weapon,
        });

        self.change_life(-damage);
        if self.monsters_remaining == 0 {
            self.end_game();
        }
    }

    /// Equip a weapon, discarding the old one.
    fn resolve_weapon(&mut self, card: Card) {
        let replaced = self.weapon.replace(card);
        if let Some(old) = replaced {
            self.discard.push_back(old);
        }
        self.weapon_durability = self.rules.base_durability;
        self.record(GameEvent::WeaponEquipped { card, replaced });
    }

    /// Drink a potion. Only the first potion of a room heals; anything that
    /// does not turn into life comes off the score.
    fn resolve_potion(&mut self, card: Card) {
        let heal_val = i32::from(card.value());

        let healed = if self.can_heal_this_turn {
            let deficit = self.rules.starting_life - self.life;
            heal_val.min(deficit)
        } else {
            0
        };
        let wasted = heal_val - healed;

        self.score -= wasted;
        if self.can_heal_this_turn {
            self.change_life(heal_val);
        }

        self.discard.push_back(card);
        self.can_heal_this_turn = false;
        self.record(GameEvent::PotionUsed { card, healed, wasted });
    }

    /// Apply a life change, capped at starting life and floored at zero.
    /// Reaching zero loses the game.
    pub(super) fn change_life(&mut self, delta: i32) {
        self.life = (self.life + delta).clamp(0, self.rules.starting_life);
        if self.life <= 0 {
            self.end_game();
        }
    }

    pub(super) fn end_game(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        if let Some(outcome) = self.outcome() {
            self.record(GameEvent::GameEnded {
                outcome,
                score: self.score,
            });
        }
    }
}
