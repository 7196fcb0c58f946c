//! Whole-game runner and batch statistics.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::engine::{GameOutcome, Result, Scoundrel};

use super::policy::Policy;

/// Summary of one played game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// `None` if the action limit was hit first.
    pub outcome: Option<GameOutcome>,
    pub score: i32,
    pub life: i32,
    pub rooms_entered: u32,
    pub actions: usize,
}

/// Play `game` with `policy` until it ends or `max_actions` are taken.
pub fn play_game<P: Policy>(
    game: &mut Scoundrel,
    policy: &P,
    rng: &mut GameRng,
    max_actions: usize,
) -> Result<GameReport> {
    let mut actions = 0;

    while !game.is_game_over() && actions < max_actions {
        let Some(action) = policy.choose(game, rng) else {
            break;
        };
        game.apply(&action)?;
        actions += 1;
    }

    Ok(GameReport {
        outcome: game.outcome(),
        score: game.score(),
        life: game.life(),
        rooms_entered: game.rooms_entered(),
        actions,
    })
}

/// Aggregate results over many games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    pub unfinished: usize,
    pub total_score: i64,
    pub best_score: Option<i32>,
}

impl BatchStats {
    /// Fold one report into the totals.
    pub fn record(&mut self, report: &GameReport) {
        self.games += 1;
        match report.outcome {
            Some(GameOutcome::Won) => self.wins += 1,
            Some(GameOutcome::Lost) => self.losses += 1,
            None => self.unfinished += 1,
        }
        self.total_score += i64::from(report.score);
        self.best_score = Some(self.best_score.map_or(report.score, |b| b.max(report.score)));
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    #[must_use]
    pub fn mean_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games as f64
        }
    }
}

/// Play one standard game per seed.
///
/// The deck is shuffled from the seed and the policy gets a forked stream,
/// so each seed is reproducible on its own.
pub fn play_many<P: Policy>(
    policy: &P,
    seeds: impl IntoIterator<Item = u64>,
    max_actions: usize,
) -> Result<BatchStats> {
    let mut stats = BatchStats::default();

    for seed in seeds {
        let mut game = Scoundrel::new(seed);
        let mut rng = GameRng::new(seed).fork();
        let report = play_game(&mut game, policy, &mut rng, max_actions)?;
        stats.record(&report);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::{GreedyPolicy, RandomPolicy};

    #[test]
    fn test_random_game_finishes() {
        let mut game = Scoundrel::new(42);
        let mut rng = GameRng::new(42);

        let report = play_game(&mut game, &RandomPolicy, &mut rng, 1_000).unwrap();

        assert!(report.outcome.is_some());
        assert!(report.actions > 0);
        assert_eq!(report.score, game.score());
    }

    #[test]
    fn test_action_limit() {
        let mut game = Scoundrel::new(42);
        let mut rng = GameRng::new(42);

        let report = play_game(&mut game, &RandomPolicy, &mut rng, 1).unwrap();

        assert_eq!(report.outcome, None);
        assert_eq!(report.actions, 1);
        assert_eq!(report.rooms_entered, 1);
    }

    #[test]
    fn test_play_many_is_reproducible() {
        let a = play_many(&RandomPolicy, 0..20, 1_000).unwrap();
        let b = play_many(&RandomPolicy, 0..20, 1_000).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.games, 20);
        assert_eq!(a.wins + a.losses, 20);
        assert_eq!(a.unfinished, 0);
    }

    #[test]
    fn test_greedy_batch_completes() {
        let stats = play_many(&GreedyPolicy, 100..110, 1_000).unwrap();

        assert_eq!(stats.games, 10);
        assert_eq!(stats.unfinished, 0);
        assert!(stats.best_score.is_some());
        assert!((0.0..=1.0).contains(&stats.win_rate()));
    }

    #[test]
    fn test_batch_stats_record() {
        let mut stats = BatchStats::default();
        stats.record(&GameReport {
            outcome: Some(GameOutcome::Won),
            score: 10,
            life: 5,
            rooms_entered: 12,
            actions: 30,
        });
        stats.record(&GameReport {
            outcome: Some(GameOutcome::Lost),
            score: -40,
            life: 0,
            rooms_entered: 5,
            actions: 11,
        });

        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.best_score, Some(10));
        assert_eq!(stats.mean_score(), -15.0);
        assert_eq!(stats.win_rate(), 0.5);
    }
}
