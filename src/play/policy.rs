//! Action selection policies.

use crate::core::GameRng;
use crate::engine::{Action, GameOutcome, Scoundrel};

/// Chooses the next action for a game.
pub trait Policy: Send + Sync {
    /// Pick one of the game's legal actions.
    ///
    /// Returns `None` if no legal actions exist.
    fn choose(&self, game: &Scoundrel, rng: &mut GameRng) -> Option<Action>;
}

/// Uniform random policy.
///
/// Selects uniformly from legal actions.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn choose(&self, game: &Scoundrel, rng: &mut GameRng) -> Option<Action> {
        let actions = game.legal_actions();
        rng.choose(&actions).cloned()
    }
}

/// One-step lookahead.
///
/// Tries every resolution on a copy of the game and keeps the best one by
/// outcome, then score plus life. Skips only when every resolution loses.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn evaluate(game: &Scoundrel) -> i64 {
        let base = i64::from(game.score()) + i64::from(game.life());
        match game.outcome() {
            Some(GameOutcome::Won) => 10_000 + base,
            Some(GameOutcome::Lost) => -10_000 + base,
            None => base,
        }
    }
}

impl Policy for GreedyPolicy {
    fn choose(&self, game: &Scoundrel, _rng: &mut GameRng) -> Option<Action> {
        let actions = game.legal_actions();

        let mut best: Option<(i64, &Action)> = None;
        for action in actions.iter().filter(|a| matches!(a, Action::ResolveRoom { .. })) {
            let mut next = game.clone();
            if next.apply(action).is_err() {
                continue;
            }
            let value = Self::evaluate(&next);
            if best.map_or(true, |(v, _)| value > v) {
                best = Some((value, action));
            }
        }

        let skip = actions.iter().find(|a| **a == Action::SkipRoom);
        match (best, skip) {
            (Some((value, _)), Some(skip)) if value < -5_000 => Some(skip.clone()),
            (Some((_, action)), _) => Some(action.clone()),
            (None, _) => actions.first().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Suit};
    use crate::engine::ScoundrelBuilder;

    fn card(suit: Suit, value: u8) -> Card {
        Card::new(suit, value).unwrap()
    }

    #[test]
    fn test_random_policy_picks_legal_action() {
        let mut game = Scoundrel::new(4);
        game.enter_room().unwrap();
        let mut rng = GameRng::new(4);

        let action = RandomPolicy.choose(&game, &mut rng).unwrap();
        assert!(game.legal_actions().contains(&action));
    }

    #[test]
    fn test_greedy_skips_lethal_room() {
        let mut game = ScoundrelBuilder::new()
            .deck(vec![
                card(Suit::Spade, 14),
                card(Suit::Club, 14),
                card(Suit::Spade, 13),
                card(Suit::Club, 13),
                card(Suit::Heart, 2),
                card(Suit::Heart, 3),
                card(Suit::Heart, 4),
                card(Suit::Heart, 5),
            ])
            .build();
        game.enter_room().unwrap();

        let action = GreedyPolicy.choose(&game, &mut GameRng::new(0));
        assert_eq!(action, Some(Action::SkipRoom));
    }

    #[test]
    fn test_greedy_uses_weapon() {
        let mut game = ScoundrelBuilder::new()
            .deck(vec![
                card(Suit::Club, 9),
                card(Suit::Diamond, 9),
                card(Suit::Heart, 2),
                card(Suit::Heart, 3),
                card(Suit::Spade, 2),
            ])
            .build();
        game.enter_room().unwrap();

        let action = GreedyPolicy.choose(&game, &mut GameRng::new(0)).unwrap();
        let mut next = game.clone();
        next.apply(&action).unwrap();

        // Equipping the 9 first makes the 9 of Clubs free
        assert_eq!(next.life(), 20);
        assert_eq!(next.weapon(), Some(card(Suit::Diamond, 9)));
    }

    #[test]
    fn test_no_action_when_game_over() {
        let mut game = ScoundrelBuilder::new().deck(vec![card(Suit::Heart, 2)]).build();
        game.enter_room().unwrap();
        game.resolve_room(&[0], &[false]).unwrap();

        assert_eq!(GreedyPolicy.choose(&game, &mut GameRng::new(0)), None);
        assert_eq!(RandomPolicy.choose(&game, &mut GameRng::new(0)), None);
    }
}
