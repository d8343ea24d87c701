//! Card system: definitions and the built-in catalog.
//!
//! ## Key Types
//!
//! - `Card`: immutable card value (kind, weapon, damage/block/heal, effects)
//! - `CardEffect`: status effect description carried by a card
//! - `CardCatalog`: lookup of built-in cards and weapon starter decks

pub mod catalog;
pub mod definition;

pub use catalog::CardCatalog;
pub use definition::{Card, CardEffect, CardKind, TargetMode, Weapon};
