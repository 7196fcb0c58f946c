//! Engine errors.
//!
//! Every error is a caller mistake (bad arguments or calls out of order) and
//! is returned before any state changes.

use thiserror::Error;

use super::game::GameOutcome;

/// Malformed `resolve_room` arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveRoomError {
    #[error("card_order must contain exactly {expected} items, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("slay_by_hand must contain exactly {expected} items, got {actual}")]
    SlayByHandLength { expected: usize, actual: usize },

    #[error("room slot {slot} is out of range for a room of {room_size} cards")]
    SlotOutOfRange { slot: usize, room_size: usize },

    #[error("room slot {slot} appears more than once in card_order")]
    DuplicateSlot { slot: usize },
}

/// Errors returned by the engine's mutating operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoundrelError {
    #[error("game over: {outcome}, final score {score}")]
    GameOver { outcome: GameOutcome, score: i32 },

    #[error("the current room must be resolved first")]
    InRoom,

    #[error("no room in progress, enter a new room first")]
    NotInRoom,

    #[error("can not skip two rooms in a row")]
    CanNotSkipRoom,

    #[error(transparent)]
    ResolveRoom(#[from] ResolveRoomError),
}

pub type Result<T> = std::result::Result<T, ScoundrelError>;
