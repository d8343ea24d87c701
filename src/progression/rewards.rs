//! Encounter rewards.

use serde::{Deserialize, Serialize};

use crate::core::ids::PartId;
use crate::monsters::MonsterTier;
use crate::rules::CombatOutcome;

/// Materials harvested from a broken part.
pub const BROKEN_PART_YIELD: u32 = 2;

/// Materials harvested from an intact part.
pub const INTACT_PART_YIELD: u32 = 1;

/// Gold for defeating a monster of `tier`.
#[must_use]
pub const fn gold_for_tier(tier: MonsterTier) -> u32 {
    match tier {
        MonsterTier::Small => 25,
        MonsterTier::Large => 50,
        MonsterTier::Elite => 75,
        MonsterTier::Boss => 100,
    }
}

/// Materials taken from one part.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Harvest {
    pub part: PartId,
    pub quantity: u32,
}

/// Materials from a won fight: broken parts yield more than intact ones.
///
/// Broken parts come first, each group in part order. A lost fight
/// yields nothing.
#[must_use]
pub fn harvest(outcome: &CombatOutcome) -> Vec<Harvest> {
    if !outcome.result.is_victory() {
        return Vec::new();
    }

    let broken = outcome.broken_parts.iter().map(|part| Harvest {
        part: part.clone(),
        quantity: BROKEN_PART_YIELD,
    });
    let intact = outcome.intact_parts.iter().map(|part| Harvest {
        part: part.clone(),
        quantity: INTACT_PART_YIELD,
    });
    broken.chain(intact).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ids::MonsterId;
    use crate::rules::CombatResult;

    fn outcome(result: CombatResult) -> CombatOutcome {
        CombatOutcome {
            result,
            monster: MonsterId::new("great_jagras"),
            tier: MonsterTier::Large,
            broken_parts: vec![PartId::new("head")],
            intact_parts: vec![PartId::new("body"), PartId::new("tail")],
            turns: 4,
            player_health: 30,
        }
    }

    #[test]
    fn test_gold_by_tier() {
        assert_eq!(gold_for_tier(MonsterTier::Small), 25);
        assert_eq!(gold_for_tier(MonsterTier::Large), 50);
        assert_eq!(gold_for_tier(MonsterTier::Elite), 75);
        assert_eq!(gold_for_tier(MonsterTier::Boss), 100);
    }

    #[test]
    fn test_broken_parts_yield_more() {
        let harvested = harvest(&outcome(CombatResult::Victory));
        let quantities: Vec<_> = harvested.iter().map(|h| (h.part.as_str(), h.quantity)).collect();
        assert_eq!(quantities, vec![("head", 2), ("body", 1), ("tail", 1)]);
    }

    #[test]
    fn test_defeat_yields_nothing() {
        assert!(harvest(&outcome(CombatResult::Defeat)).is_empty());
    }
}
