//! Turn-boundary triggers.
//!
//! Effects carry no behaviour of their own; the engine asks
//! [`resolve_effect_trigger`] what an effect does at a given boundary and
//! applies the returned [`StateDelta`] itself.

use serde::{Deserialize, Serialize};

use super::status::{StatusEffect, StatusKind};

/// A boundary at which effects may fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerPhase {
    /// A new player turn begins.
    TurnStart,
    /// The afflicted side's turn ends. Durations tick after this phase.
    TurnEnd,
    /// The afflicted target changed position.
    Moved,
}

/// What a trigger does to the afflicted target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StateDelta {
    /// Nothing happens.
    #[default]
    Unchanged,
    /// The target loses this much health (block does not apply).
    Damage(i32),
}

impl StateDelta {
    /// True when the trigger has no effect.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, StateDelta::Unchanged)
    }
}

/// Look up what `effect` does at `phase`.
///
/// - Poison and burning deal their magnitude at `TurnEnd`.
/// - Bleeding deals its magnitude on `Moved`.
/// - Everything else is inert at every phase.
///
/// A zero or negative magnitude resolves to `Unchanged`.
#[must_use]
pub fn resolve_effect_trigger(effect: &StatusEffect, phase: TriggerPhase) -> StateDelta {
    let fires = match effect.kind {
        StatusKind::Poison | StatusKind::Burning => phase == TriggerPhase::TurnEnd,
        StatusKind::Bleeding => phase == TriggerPhase::Moved,
        StatusKind::Stun
        | StatusKind::Buff
        | StatusKind::Weakness
        | StatusKind::Resistance
        | StatusKind::Sharpness => false,
    };

    match effect.amount() {
        amount if fires && amount > 0 => StateDelta::Damage(amount),
        _ => StateDelta::Unchanged,
    }
}
