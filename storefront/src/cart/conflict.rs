//! Cross-restaurant conflict state machine
//!
//! Adding a dish from a restaurant other than the cart's current one never
//! mutates the cart directly. The attempt is parked here until the user
//! decides: confirm (replace the cart) or cancel (keep the cart).

use serde::Serialize;
use shared::models::Dish;

/// The dish add attempt waiting on a user decision
///
/// Carries the cart's restaurant at conflict time so the prompt can name
/// both sides ("your cart contains items from another restaurant").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingConflict {
    /// The dish the user tried to add
    pub incoming: Dish,
    /// Restaurant the cart belonged to when the conflict arose
    pub current_restaurant_id: String,
}

/// Conflict machine states
///
/// ```text
/// Idle --(add_item, other restaurant)--> AwaitingDecision
/// AwaitingDecision --(confirm)--> Idle   cart replaced
/// AwaitingDecision --(cancel)---> Idle   cart unchanged
/// ```
///
/// At most one conflict exists at a time; an `add_item` arriving while a
/// decision is pending is rejected rather than overwriting the parked dish.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConflictState {
    #[default]
    Idle,
    AwaitingDecision(PendingConflict),
}

impl ConflictState {
    pub fn is_awaiting_decision(&self) -> bool {
        matches!(self, ConflictState::AwaitingDecision(_))
    }

    /// The parked conflict, if any.
    pub fn pending(&self) -> Option<&PendingConflict> {
        match self {
            ConflictState::Idle => None,
            ConflictState::AwaitingDecision(pending) => Some(pending),
        }
    }
}
