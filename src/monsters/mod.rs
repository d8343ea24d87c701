//! Monsters: parts, attack patterns and built-in templates.
//!
//! ## Key Types
//!
//! - `Monster`: template and combat instance (parts, total health, pattern)
//! - `MonsterPart`: breakable part with its own status effects
//! - `MonsterAttack`: one telegraphed attack in the cyclic pattern
//! - `Bestiary`: lookup of built-in templates

pub mod bestiary;
pub mod definition;

pub use bestiary::Bestiary;
pub use definition::{AttackKind, Monster, MonsterAttack, MonsterPart, MonsterTier, PartDamage};
