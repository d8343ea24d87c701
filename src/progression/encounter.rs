//! Settling a finished combat into run progress.

use tracing::debug;

use super::repository::{EncounterRecord, ProgressionRepository};
use super::rewards::{gold_for_tier, harvest};
use crate::error::ProgressionError;
use crate::rules::CombatEngine;

/// Read a finished engine and commit its result to `repo`.
///
/// A victory harvests every part (broken parts yield more) and awards gold
/// by monster tier. A defeat awards nothing and ends the run. Must be
/// called before the engine is dropped.
pub fn settle_encounter<R>(engine: &CombatEngine, repo: &mut R) -> Result<EncounterRecord, ProgressionError>
where
    R: ProgressionRepository + ?Sized,
{
    let outcome = engine.outcome().ok_or(ProgressionError::CombatNotFinished)?;
    if repo.current_run().is_none() {
        return Err(ProgressionError::NoActiveRun);
    }

    let harvested = harvest(&outcome);
    let gold = if outcome.result.is_victory() {
        repo.add_harvested_materials(&outcome.monster, &harvested)?;
        gold_for_tier(outcome.tier)
    } else {
        0
    };

    let record = EncounterRecord {
        monster: outcome.monster,
        result: outcome.result,
        player_health: outcome.player_health,
        gold,
        harvested,
    };
    debug!(monster = %record.monster, result = ?record.result, gold, "encounter settled");

    repo.commit_run_result(record.clone())?;
    Ok(record)
}
