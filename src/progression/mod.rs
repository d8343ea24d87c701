//! Meta-progression collaborator: run progress, rewards and settlement.
//!
//! ## Key Types
//!
//! - `ProgressionRepository`: where run progress is read and committed
//! - `InMemoryProgression`: repository kept in memory
//! - `Harvest`: materials taken from one monster part
//! - `settle_encounter`: commit a finished combat to a repository

pub mod encounter;
pub mod repository;
pub mod rewards;

pub use encounter::settle_encounter;
pub use repository::{
    DefeatedMonster, EncounterRecord, InMemoryProgression, MaterialKey, ProgressionRepository, RunProgress,
};
pub use rewards::{gold_for_tier, harvest, Harvest, BROKEN_PART_YIELD, INTACT_PART_YIELD};
