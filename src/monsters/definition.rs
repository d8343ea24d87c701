//! Monster templates and their combat copies.
//!
//! A `Monster` value serves both as the shared template and, after
//! [`Monster::fresh_copy`], as the combat-owned instance the engine mutates.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ids::{AttackId, MonsterId, PartId};
use crate::core::position::Position;
use crate::effects::{StatusEffects, StatusKind};

/// Monster size class. Affects rewards, not combat rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonsterTier {
    Small,
    Large,
    Elite,
    Boss,
}

/// Attack archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    Basic,
    Sweep,
    Heavy,
    /// Harmless wind-up, always followed by its payoff attack.
    Charge,
    /// The monster shifts around; counts as the monster moving.
    Reposition,
}

/// One entry of a monster's attack pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterAttack {
    pub id: AttackId,
    pub name: String,
    pub kind: AttackKind,
    pub damage: i32,
    /// Positions the attack hits.
    pub target_positions: SmallVec<[Position; 3]>,
    /// Cards the player may play while this attack is telegraphed.
    pub player_card_allowance: u32,
    /// Attack that follows a charge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followup_attack_id: Option<AttackId>,
    #[serde(default)]
    pub description: String,
}

impl MonsterAttack {
    /// Create an attack.
    #[must_use]
    pub fn new(
        id: impl Into<AttackId>,
        name: impl Into<String>,
        kind: AttackKind,
        damage: i32,
        targets: &[Position],
        player_card_allowance: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            damage,
            target_positions: SmallVec::from_slice(targets),
            player_card_allowance,
            followup_attack_id: None,
            description: String::new(),
        }
    }

    /// Set the followup attack (builder pattern).
    #[must_use]
    pub fn followed_by(mut self, attack: impl Into<AttackId>) -> Self {
        self.followup_attack_id = Some(attack.into());
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Whether the attack hits `position`.
    #[must_use]
    pub fn hits(&self, position: Position) -> bool {
        self.target_positions.contains(&position)
    }
}

/// Result of damaging one part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartDamage {
    /// Damage applied (never negative).
    pub dealt: i32,
    /// The part broke on this hit.
    pub newly_broken: bool,
}

/// A breakable monster part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterPart {
    pub id: PartId,
    pub name: String,
    /// Never below zero.
    pub health: i32,
    /// Set once when health first reaches zero; never cleared.
    #[serde(default)]
    pub broken: bool,
    #[serde(default)]
    pub status_effects: StatusEffects,
}

impl MonsterPart {
    /// Create an intact part.
    #[must_use]
    pub fn new(id: impl Into<PartId>, name: impl Into<String>, health: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            health: health.max(0),
            broken: false,
            status_effects: StatusEffects::new(),
        }
    }

    /// Reduce health by `amount`, clamping at zero and breaking the part
    /// the first time it reaches zero.
    pub fn apply_damage(&mut self, amount: i32) -> PartDamage {
        let dealt = amount.max(0);
        self.health = (self.health - dealt).max(0);

        let newly_broken = !self.broken && self.health == 0;
        if newly_broken {
            self.broken = true;
        }

        PartDamage { dealt, newly_broken }
    }
}

/// A monster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    pub tier: MonsterTier,
    pub parts: Vec<MonsterPart>,
    /// Tracked independently of part health; never below zero.
    pub total_health: i32,
    pub attack_pattern: Vec<MonsterAttack>,
    #[serde(default)]
    pub description: String,
}

impl Monster {
    /// Create a monster whose total health is the sum of its parts.
    #[must_use]
    pub fn new(
        id: impl Into<MonsterId>,
        name: impl Into<String>,
        tier: MonsterTier,
        parts: Vec<MonsterPart>,
        attack_pattern: Vec<MonsterAttack>,
    ) -> Self {
        let total_health = parts.iter().map(|p| p.health).sum();
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            parts,
            total_health,
            attack_pattern,
            description: String::new(),
        }
    }

    /// Override total health (builder pattern).
    #[must_use]
    pub fn with_total_health(mut self, total_health: i32) -> Self {
        self.total_health = total_health.max(0);
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Field-by-field copy for a new combat.
    ///
    /// Parts come back with no status effects, so a template carrying
    /// leftovers from an earlier fight never leaks them into the next one.
    #[must_use]
    pub fn fresh_copy(&self) -> Monster {
        Monster {
            id: self.id.clone(),
            name: self.name.clone(),
            tier: self.tier,
            parts: self
                .parts
                .iter()
                .map(|part| MonsterPart {
                    id: part.id.clone(),
                    name: part.name.clone(),
                    health: part.health,
                    broken: part.broken,
                    status_effects: StatusEffects::new(),
                })
                .collect(),
            total_health: self.total_health,
            attack_pattern: self.attack_pattern.clone(),
            description: self.description.clone(),
        }
    }

    /// Index of the part facing `position`.
    ///
    /// Three-part monsters map positions 0/1/2 onto parts 0/1/2. Any other
    /// shape resolves every position to the first part.
    #[must_use]
    pub fn part_index_at(&self, position: Position) -> Option<usize> {
        if self.parts.len() >= Position::COUNT as usize {
            Some(position.index() as usize)
        } else if self.parts.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// The part facing `position`.
    #[must_use]
    pub fn part_at(&self, position: Position) -> Option<&MonsterPart> {
        self.part_index_at(position).and_then(|i| self.parts.get(i))
    }

    /// Get a part by id.
    #[must_use]
    pub fn part(&self, id: &PartId) -> Option<&MonsterPart> {
        self.parts.iter().find(|p| &p.id == id)
    }

    /// Index of an attack in the pattern.
    #[must_use]
    pub fn attack_index(&self, id: &AttackId) -> Option<usize> {
        self.attack_pattern.iter().position(|a| &a.id == id)
    }

    /// A monster is stunned while any part carries a stun.
    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.parts.iter().any(|p| p.status_effects.has(StatusKind::Stun))
    }

    /// Victory condition: total health exhausted.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.total_health <= 0
    }

    /// Ids of broken parts, in part order.
    #[must_use]
    pub fn broken_parts(&self) -> Vec<PartId> {
        self.parts.iter().filter(|p| p.broken).map(|p| p.id.clone()).collect()
    }
}
