//! Run progress and the repository drivers record it through.
//!
//! The combat core never touches progression itself. A driver owns a
//! repository, hands its roster to the engine, and settles the result
//! afterwards (see [`settle_encounter`](super::settle_encounter)).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rewards::Harvest;
use crate::cards::{Card, Weapon};
use crate::core::ids::{MonsterId, PartId};
use crate::core::state::PlayerRoster;
use crate::error::ProgressionError;
use crate::rules::CombatResult;

/// Inventory key for a harvested material.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialKey {
    pub monster: MonsterId,
    pub part: PartId,
}

impl MaterialKey {
    #[must_use]
    pub fn new(monster: impl Into<MonsterId>, part: impl Into<PartId>) -> Self {
        Self {
            monster: monster.into(),
            part: part.into(),
        }
    }
}

impl std::fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.monster.as_str(), self.part.as_str())
    }
}

/// A monster beaten during the run and what was taken from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefeatedMonster {
    pub monster: MonsterId,
    pub parts_harvested: Vec<Harvest>,
}

/// The run in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunProgress {
    pub id: u64,
    pub weapon: Weapon,
    pub deck: Vec<Card>,
    pub current_health: i32,
    pub max_health: i32,
    pub gold: u32,
    pub monsters_defeated: Vec<DefeatedMonster>,
    /// Encounters settled so far, won or lost.
    pub encounters: u32,
}

impl RunProgress {
    /// The roster to start the next combat with.
    #[must_use]
    pub fn roster(&self) -> PlayerRoster {
        PlayerRoster::new(self.max_health, self.weapon, self.deck.clone()).with_health(self.current_health)
    }
}

/// What one settled encounter contributed to the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterRecord {
    pub monster: MonsterId,
    pub result: CombatResult,
    pub player_health: i32,
    pub gold: u32,
    pub harvested: Vec<Harvest>,
}

/// Where run progress lives.
///
/// Passed explicitly to whatever settles encounters; there is no global
/// progression store.
pub trait ProgressionRepository {
    /// The run in progress, if any.
    fn current_run(&self) -> Option<&RunProgress>;

    /// Fold an encounter's result into the current run.
    ///
    /// A defeat ends the run.
    fn commit_run_result(&mut self, record: EncounterRecord) -> Result<(), ProgressionError>;

    /// Record materials harvested from a beaten monster.
    fn add_harvested_materials(&mut self, monster: &MonsterId, harvest: &[Harvest]) -> Result<(), ProgressionError>;
}

/// Repository kept in memory. Suitable for tests and simple drivers.
#[derive(Clone, Debug)]
pub struct InMemoryProgression {
    max_health: i32,
    current_run: Option<RunProgress>,
    completed_runs: Vec<RunProgress>,
    materials: FxHashMap<MaterialKey, u32>,
    next_run_id: u64,
}

impl Default for InMemoryProgression {
    fn default() -> Self {
        Self::new(100)
    }
}

impl InMemoryProgression {
    /// Create a store whose runs start at `max_health`.
    #[must_use]
    pub fn new(max_health: i32) -> Self {
        Self {
            max_health,
            current_run: None,
            completed_runs: Vec::new(),
            materials: FxHashMap::default(),
            next_run_id: 1,
        }
    }

    /// Begin a run, replacing any run in progress.
    pub fn start_run(&mut self, weapon: Weapon, deck: Vec<Card>) -> &RunProgress {
        let id = self.next_run_id;
        self.next_run_id += 1;
        debug!(run = id, ?weapon, deck = deck.len(), "run started");

        self.current_run.insert(RunProgress {
            id,
            weapon,
            deck,
            current_health: self.max_health,
            max_health: self.max_health,
            gold: 0,
            monsters_defeated: Vec::new(),
            encounters: 0,
        })
    }

    /// Finish the current run.
    ///
    /// A successful run moves its harvested materials into the permanent
    /// inventory and is kept; a failed run is dropped.
    pub fn end_run(&mut self, successful: bool) -> Option<RunProgress> {
        let run = self.current_run.take()?;
        debug!(run = run.id, successful, gold = run.gold, "run ended");

        if successful {
            for defeated in &run.monsters_defeated {
                for harvest in &defeated.parts_harvested {
                    let key = MaterialKey::new(defeated.monster.clone(), harvest.part.clone());
                    *self.materials.entry(key).or_default() += harvest.quantity;
                }
            }
            self.completed_runs.push(run.clone());
        }
        Some(run)
    }

    /// Runs completed successfully.
    #[must_use]
    pub fn completed_runs(&self) -> &[RunProgress] {
        &self.completed_runs
    }

    /// Quantity of one material in the permanent inventory.
    #[must_use]
    pub fn material(&self, key: &MaterialKey) -> u32 {
        self.materials.get(key).copied().unwrap_or(0)
    }

    /// The permanent inventory.
    #[must_use]
    pub fn materials(&self) -> &FxHashMap<MaterialKey, u32> {
        &self.materials
    }

    fn run_mut(&mut self) -> Result<&mut RunProgress, ProgressionError> {
        self.current_run.as_mut().ok_or(ProgressionError::NoActiveRun)
    }
}

impl ProgressionRepository for InMemoryProgression {
    fn current_run(&self) -> Option<&RunProgress> {
        self.current_run.as_ref()
    }

    fn commit_run_result(&mut self, record: EncounterRecord) -> Result<(), ProgressionError> {
        let run = self.run_mut()?;
        run.encounters += 1;
        run.current_health = record.player_health.clamp(0, run.max_health);
        run.gold += record.gold;
        debug!(run = run.id, monster = %record.monster, result = ?record.result, gold = run.gold, "encounter committed");

        if record.result == CombatResult::Defeat {
            self.end_run(false);
        }
        Ok(())
    }

    fn add_harvested_materials(&mut self, monster: &MonsterId, harvest: &[Harvest]) -> Result<(), ProgressionError> {
        let run = self.run_mut()?;
        run.monsters_defeated.push(DefeatedMonster {
            monster: monster.clone(),
            parts_harvested: harvest.to_vec(),
        });
        Ok(())
    }
}
