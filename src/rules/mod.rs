//! The combat rules layer.
//!
//! `CombatEngine` runs the state machine:
//! - Card resolution and movement during the player turn
//! - The monster attack and status-effect processing at turn end
//! - Victory and defeat detection
//!
//! It mutates `CombatState` and announces every change as a `CombatEvent`.

pub mod engine;
pub mod phase;
mod resolve;

pub use engine::CombatEngine;
pub use phase::{CombatOutcome, CombatPhase, CombatResult};
