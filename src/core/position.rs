//! Battlefield positions.
//!
//! The arena is a row of three positions. The player stands on one of
//! them, monster attacks telegraph which positions they hit, and for
//! three-part monsters each position faces one part.

use serde::{Deserialize, Serialize};

use crate::error::CombatError;

/// A position on the three-wide battlefield.
///
/// Always in `0..Position::COUNT`; construction validates the index, so a
/// `Position` held by the engine can never be out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Number of positions on the battlefield.
    pub const COUNT: u8 = 3;

    /// Left position.
    pub const LEFT: Position = Position(0);
    /// Centre position (the player's default start).
    pub const CENTER: Position = Position(1);
    /// Right position.
    pub const RIGHT: Position = Position(2);

    /// Create a position, rejecting indices outside the battlefield.
    pub fn new(index: u8) -> Result<Self, CombatError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(CombatError::InvalidPosition(index))
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Iterate over every position, left to right.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::COUNT).map(Position)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

impl TryFrom<u8> for Position {
    type Error = CombatError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Position({})", self.0)
    }
}
