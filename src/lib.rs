//! # hunt-combat
//!
//! Deterministic turn-based combat core for a monster-hunting roguelike
//! card game.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `CombatEngine` exclusively owns an encounter's
//!    `CombatState`. Drivers mutate it only through engine operations.
//!
//! 2. **Effects Are Data**: Status effects are `{kind, duration, magnitude}`
//!    values. Their behaviour is looked up by kind, so state clones and
//!    serializes like any other value.
//!
//! 3. **Events, Not Callbacks Into State**: Every change is announced as a
//!    `CombatEvent`, delivered synchronously and in order. Subscribers
//!    observe; they cannot reach back into the engine.
//!
//! ## Architecture
//!
//! - **Seeded RNG**: `GameRng` (ChaCha8) makes every combat replayable from
//!   its seed and inputs.
//!
//! - **Persistent Data Structures**: piles and history use `im-rs`, so a
//!   state snapshot is an O(1) clone.
//!
//! ## Modules
//!
//! - `core`: identifiers, positions, state, actions, RNG, configuration
//! - `zones`: deck, hand and discard piles
//! - `cards`: card definitions and the built-in catalog
//! - `monsters`: monsters, parts, attack patterns and the bestiary
//! - `effects`: status effects, triggers and damage formulas
//! - `events`: combat events and the event bus
//! - `rules`: the combat engine state machine
//! - `progression`: run progress repository and encounter settlement

pub mod core;
pub mod zones;
pub mod cards;
pub mod monsters;
pub mod effects;
pub mod events;
pub mod rules;
pub mod progression;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    AttackId, CardId, MonsterId, PartId,
    Position,
    GameRng, GameRngState,
    CombatConfig, StatusPresets,
    CombatAction, ActionRecord,
    CombatState, PlayerRoster, PlayerState,
};

pub use crate::zones::{Piles, PileId};

pub use crate::cards::{Card, CardCatalog, CardEffect, CardKind, TargetMode, Weapon};

pub use crate::monsters::{AttackKind, Bestiary, Monster, MonsterAttack, MonsterPart, MonsterTier};

pub use crate::effects::{resolve_effect_trigger, StateDelta, StatusEffect, StatusEffects, StatusKind, TriggerPhase};

pub use crate::events::{CombatEvent, EffectTarget, EventBus, EventKind, EventLog, Subscriber, SubscriptionId};

pub use crate::rules::{CombatEngine, CombatOutcome, CombatPhase, CombatResult};

pub use crate::progression::{settle_encounter, InMemoryProgression, ProgressionRepository};

pub use crate::error::{CombatError, ProgressionError};
