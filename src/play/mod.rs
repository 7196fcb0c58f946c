//! Automated play: policies that pick actions and a runner that plays whole
//! games with them. Used for simulations and whole-game testing.

pub mod policy;
pub mod runner;

pub use policy::{GreedyPolicy, Policy, RandomPolicy};
pub use runner::{play_game, play_many, BatchStats, GameReport};
