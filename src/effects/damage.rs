//! Damage formulas.
//!
//! Pure functions over the effect sets involved, so the numbers can be
//! checked without building a combat.

use super::status::{StatusEffects, StatusKind};

/// Damage a player card deals to one monster part.
///
/// `base` plus the part's weakness bonus plus the player's buff bonus,
/// never negative.
#[must_use]
pub fn outgoing_damage(base: i32, part_effects: &StatusEffects, player_effects: &StatusEffects) -> i32 {
    let damage = base
        .saturating_add(part_effects.magnitude(StatusKind::Weakness))
        .saturating_add(player_effects.magnitude(StatusKind::Buff));
    damage.max(0)
}

/// Damage a monster attack deals to the player after effects, before block.
///
/// Weakness adds and resistance subtracts. With a resistance effect active
/// the result is floored at 1; otherwise at 0.
#[must_use]
pub fn incoming_damage(base: i32, player_effects: &StatusEffects) -> i32 {
    let damage = base
        .saturating_add(player_effects.magnitude(StatusKind::Weakness))
        .saturating_sub(player_effects.magnitude(StatusKind::Resistance));

    if player_effects.has(StatusKind::Resistance) {
        damage.max(1)
    } else {
        damage.max(0)
    }
}

/// Damage left over after the player's block absorbs what it can.
#[must_use]
pub fn after_block(damage: i32, block: i32) -> i32 {
    damage.saturating_sub(block).max(0)
}
