//! String-backed identifiers for cards, monsters, parts and attacks.
//!
//! Content is authored with human-readable ids (`"quick_slash"`,
//! `"heavy_strike"`), so identifiers wrap a `String` rather than an
//! allocated integer. Duplicate card ids are legal inside a deck: the
//! piles track copies by position, not by id.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the raw id.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a card definition (e.g. `"quick_slash"`).
    CardId,
    "Card"
);

string_id!(
    /// Identifier of a monster template.
    MonsterId,
    "Monster"
);

string_id!(
    /// Identifier of a monster part, unique within one monster.
    PartId,
    "Part"
);

string_id!(
    /// Identifier of a monster attack, unique within one attack pattern.
    AttackId,
    "Attack"
);
