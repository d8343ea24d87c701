//! Combat configuration.
//!
//! Drivers build a `CombatConfig` once and hand it to every engine they
//! create. All fields have defaults matching the standard ruleset, so
//! `CombatConfig::default()` is the normal starting point and the builder
//! methods adjust it.

use serde::{Deserialize, Serialize};

use super::position::Position;
use crate::effects::{StatusEffect, StatusKind};

/// Effect applied when a card's `status_on_hit` lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPreset {
    /// Turns the effect lasts.
    pub duration: u32,
    /// Damage per tick, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<i32>,
}

impl StatusPreset {
    /// Create a preset.
    #[must_use]
    pub const fn new(duration: u32, magnitude: Option<i32>) -> Self {
        Self { duration, magnitude }
    }
}

/// On-hit presets for the kinds a card may inflict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPresets {
    pub poison: StatusPreset,
    pub burning: StatusPreset,
    pub bleeding: StatusPreset,
    pub stun: StatusPreset,
}

impl Default for StatusPresets {
    fn default() -> Self {
        Self {
            poison: StatusPreset::new(3, Some(3)),
            burning: StatusPreset::new(2, Some(5)),
            bleeding: StatusPreset::new(3, Some(2)),
            stun: StatusPreset::new(1, None),
        }
    }
}

impl StatusPresets {
    /// The effect a `status_on_hit` of `kind` applies.
    ///
    /// Returns `None` for kinds that cannot be inflicted on hit.
    #[must_use]
    pub fn effect_for(&self, kind: StatusKind) -> Option<StatusEffect> {
        let preset = match kind {
            StatusKind::Poison => self.poison,
            StatusKind::Burning => self.burning,
            StatusKind::Bleeding => self.bleeding,
            StatusKind::Stun => self.stun,
            StatusKind::Buff
            | StatusKind::Weakness
            | StatusKind::Resistance
            | StatusKind::Sharpness => return None,
        };

        let effect = StatusEffect::new(kind, preset.duration);
        Some(match preset.magnitude {
            Some(magnitude) => effect.with_magnitude(magnitude),
            None => effect,
        })
    }
}

/// Rules knobs for one combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Hand is refilled to this size at the start of each player turn.
    pub hand_size: usize,

    /// Position changes per turn that cost nothing.
    pub free_moves_per_turn: u32,

    /// Where the player stands when combat starts.
    pub starting_position: Position,

    /// Effects applied by `status_on_hit` cards.
    pub status_presets: StatusPresets,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            free_moves_per_turn: 1,
            starting_position: Position::CENTER,
            status_presets: StatusPresets::default(),
        }
    }
}

impl CombatConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the free-move budget.
    #[must_use]
    pub fn with_free_moves(mut self, moves: u32) -> Self {
        self.free_moves_per_turn = moves;
        self
    }

    /// Set the starting position.
    #[must_use]
    pub fn with_starting_position(mut self, position: Position) -> Self {
        self.starting_position = position;
        self
    }

    /// Set the on-hit presets.
    #[must_use]
    pub fn with_status_presets(mut self, presets: StatusPresets) -> Self {
        self.status_presets = presets;
        self
    }
}
