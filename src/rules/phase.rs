//! Combat phases and results.

use serde::{Deserialize, Serialize};

use crate::core::ids::{MonsterId, PartId};
use crate::monsters::MonsterTier;

/// How a finished combat ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatResult {
    /// Monster total health reached zero.
    Victory,
    /// Player health reached zero.
    Defeat,
}

impl CombatResult {
    /// Check if the player won.
    #[must_use]
    pub fn is_victory(self) -> bool {
        self == CombatResult::Victory
    }
}

/// Where the engine's state machine stands.
///
/// `CombatStart → PlayerTurn → MonsterTurn → (PlayerTurn | CombatEnd)`.
/// `MonsterTurn` only exists inside `end_player_turn`; drivers never
/// observe the engine resting in it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", content = "result", rename_all = "camelCase")]
pub enum CombatPhase {
    /// No combat has been started.
    #[default]
    CombatStart,
    /// Waiting for player operations.
    PlayerTurn,
    /// The monster is acting.
    MonsterTurn,
    /// Terminal.
    CombatEnd(CombatResult),
}

impl CombatPhase {
    /// Check if the combat has finished.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, CombatPhase::CombatEnd(_))
    }

    /// The result, once finished.
    #[must_use]
    pub fn result(self) -> Option<CombatResult> {
        match self {
            CombatPhase::CombatEnd(result) => Some(result),
            _ => None,
        }
    }
}

/// Summary of a finished combat, read by the progression layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatOutcome {
    pub result: CombatResult,
    pub monster: MonsterId,
    pub tier: MonsterTier,
    /// Parts broken during the fight. Empty on defeat.
    pub broken_parts: Vec<PartId>,
    /// Parts still intact at the end. Empty on defeat.
    pub intact_parts: Vec<PartId>,
    /// Turn on which combat ended.
    pub turns: u32,
    /// Player health at the end.
    pub player_health: i32,
}
