//! Status effects, turn triggers and damage formulas.
//!
//! - `StatusEffect`: plain `{kind, duration, magnitude}` data
//! - `StatusEffects`: per-target set, one effect per kind, newest wins
//! - `resolve_effect_trigger`: what an effect does at a turn boundary
//! - `damage`: outgoing/incoming damage computation

pub mod damage;
mod status;
mod trigger;

pub use status::{StatusEffect, StatusEffects, StatusKind};
pub use trigger::{resolve_effect_trigger, StateDelta, TriggerPhase};
