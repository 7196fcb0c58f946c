//! Validation of `resolve_room` arguments.
//!
//! `card_order` and `slay_by_hand` are checked in full before the engine
//! touches any state, and turned into a list of [`ResolutionStep`]s.

use smallvec::SmallVec;

use crate::core::Ruleset;

use super::error::ResolveRoomError;

/// One card to resolve: which room slot, and whether to fight bare-handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionStep {
    pub slot: usize,
    pub slay_by_hand: bool,
}

/// Validated resolution order.
pub type ResolutionPlan = SmallVec<[ResolutionStep; 4]>;

/// Check `card_order`/`slay_by_hand` against a room of `room_len` cards.
///
/// Both must have exactly `rules.required_resolutions(room_len)` entries,
/// and every slot must be a distinct index into the room.
pub fn validate(
    card_order: &[usize],
    slay_by_hand: &[bool],
    room_len: usize,
    rules: &Ruleset,
) -> Result<ResolutionPlan, ResolveRoomError> {
    let expected = rules.required_resolutions(room_len);

    if card_order.len() != expected {
        return Err(ResolveRoomError::WrongLength {
            expected,
            actual: card_order.len(),
        });
    }
    if slay_by_hand.len() != expected {
        return Err(ResolveRoomError::SlayByHandLength {
            expected,
            actual: slay_by_hand.len(),
        });
    }

    let mut plan = ResolutionPlan::new();
    for (&slot, &by_hand) in card_order.iter().zip(slay_by_hand) {
        if slot >= room_len {
            return Err(ResolveRoomError::SlotOutOfRange {
                slot,
                room_size: room_len,
            });
        }
        if plan.iter().any(|step| step.slot == slot) {
            return Err(ResolveRoomError::DuplicateSlot { slot });
        }
        plan.push(ResolutionStep {
            slot,
            slay_by_hand: by_hand,
        });
    }

    Ok(plan)
}
