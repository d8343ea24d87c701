//! Core combat types: identifiers, positions, state, actions, RNG, configuration.
//!
//! These are the building blocks the rules layer mutates. Nothing here
//! knows about event delivery or turn sequencing.

pub mod ids;
pub mod position;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use ids::{AttackId, CardId, MonsterId, PartId};
pub use position::Position;
pub use rng::{GameRng, GameRngState};
pub use config::{CombatConfig, StatusPreset, StatusPresets};
pub use action::{ActionRecord, CombatAction};
pub use state::{CombatState, PartHit, PlayerRoster, PlayerState};
