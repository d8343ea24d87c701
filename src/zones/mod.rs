//! Card locations during a combat.
//!
//! ## Key Types
//!
//! - `Piles`: the player's deck, hand and discard
//! - `PileId`: names one of the three piles
//! - `Drawn`: result of a draw, including whether the discard was reshuffled

pub mod piles;

pub use piles::{Drawn, PileId, Piles};
