//! Player operations, as recorded in a combat's action history.
//!
//! Only operations the engine accepted are recorded. A rejected play leaves
//! no trace in the history, matching the rule that rejected operations
//! leave state untouched.

use serde::{Deserialize, Serialize};

use super::ids::CardId;
use super::position::Position;

/// One accepted player operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CombatAction {
    /// A card played from hand.
    PlayCard {
        card: CardId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<Position>,
    },
    /// A free move.
    MovePlayer { position: Position },
    /// A move paid for by discarding a card.
    DiscardToMove { card: CardId, position: Position },
    /// The player ended their turn.
    EndTurn,
}

impl CombatAction {
    /// The card consumed by this action, if any.
    #[must_use]
    pub fn card(&self) -> Option<&CardId> {
        match self {
            CombatAction::PlayCard { card, .. } | CombatAction::DiscardToMove { card, .. } => Some(card),
            CombatAction::MovePlayer { .. } | CombatAction::EndTurn => None,
        }
    }

    /// Whether the action changes the player's position outside of a card play.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(
            self,
            CombatAction::MovePlayer { .. } | CombatAction::DiscardToMove { .. }
        )
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: CombatAction,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number across the whole combat (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: CombatAction, turn: u32, sequence: u32) -> Self {
        Self {
            action,
            turn,
            sequence,
        }
    }
}
