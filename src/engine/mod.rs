//! Game engine: state, turn operations and card resolution.
//!
//! Callers drive a game through four operations:
//! - `enter_room`: draw up to four cards
//! - `skip_room`: put the room back under the deck (not twice in a row)
//! - `resolve_room`: resolve the room's cards in a chosen order
//! - accessors / `snapshot` for reading state
//!
//! Fields are only reachable from inside this module, so the operations
//! above are the only way to change a game.

pub mod action;
pub mod error;
pub mod event;
pub mod game;
pub mod order;
mod resolution;
pub mod snapshot;

pub use action::Action;
pub use error::{ResolveRoomError, Result, ScoundrelError};
pub use event::{EventRecord, GameEvent};
pub use game::{GameOutcome, Phase, Room, Scoundrel, ScoundrelBuilder};
pub use order::{ResolutionPlan, ResolutionStep};
pub use snapshot::GameSnapshot;
