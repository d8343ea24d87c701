//! Combat state: the aggregate root of one encounter.
//!
//! ## PlayerState
//!
//! The player's resources during combat:
//! - Health, max health, block
//! - Position on the battlefield
//! - Active status effects
//!
//! ## CombatState
//!
//! Everything one encounter mutates:
//! - Player state and card piles
//! - The combat-owned monster copy
//! - Attack pointer, turn and per-turn counters
//! - Action history
//!
//! The state is created once per encounter and dropped when the encounter
//! ends. Only the engine mutates it; drivers read it through snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, CombatAction};
use super::config::CombatConfig;
use super::ids::PartId;
use super::position::Position;
use super::rng::GameRng;
use crate::cards::{Card, Weapon};
use crate::effects::StatusEffects;
use crate::error::CombatError;
use crate::monsters::{AttackKind, Monster, MonsterAttack};
use crate::zones::Piles;

/// What the driver hands the engine about the player at combat start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRoster {
    pub health: i32,
    pub max_health: i32,
    pub weapon: Weapon,
    /// The run deck, in any order; combat shuffles its own copy.
    pub deck: Vec<Card>,
}

impl PlayerRoster {
    /// Create a roster at full health.
    #[must_use]
    pub fn new(max_health: i32, weapon: Weapon, deck: Vec<Card>) -> Self {
        Self {
            health: max_health,
            max_health,
            weapon,
            deck,
        }
    }

    /// Set current health (builder pattern).
    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }
}

/// The player's in-combat resources.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Never below zero.
    pub health: i32,
    pub max_health: i32,
    /// Absorbs monster damage; reset after every monster attack.
    pub block: i32,
    pub position: Position,
    pub weapon: Weapon,
    pub status_effects: StatusEffects,
}

impl PlayerState {
    /// Lose `amount` health, clamped at zero. Returns the health lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_sub(amount.max(0)).max(0);
        before - self.health
    }

    /// Restore up to `amount` health without exceeding max. Returns the
    /// health gained.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = self.health.saturating_add(amount.max(0)).min(self.max_health).max(before);
        self.health - before
    }

    /// Add to the block pool. Block is uncapped.
    pub fn add_block(&mut self, amount: i32) {
        self.block = self.block.saturating_add(amount);
    }

    /// Defeat condition.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// Result of damaging the part at some index, including the aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartHit {
    pub part: PartId,
    pub dealt: i32,
    pub newly_broken: bool,
    /// Monster total health after the hit.
    pub total_health: i32,
}

/// Mutable record of one encounter.
///
/// Uses `im` persistent vectors for the piles and history, so cloning the
/// state for a snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatState {
    pub player: PlayerState,
    pub piles: Piles,

    /// Combat-owned copy of the monster template.
    pub monster: Monster,

    /// Index of the telegraphed attack in the monster's pattern.
    pub attack_index: usize,

    /// Turn number (starts at 1).
    pub turn: u32,

    pub cards_played_this_turn: u32,

    /// Cards the telegraphed attack lets the player play this turn.
    pub player_card_allowance: u32,

    /// Free moves spent this turn.
    pub moves_this_turn: u32,

    /// Accepted operations in order.
    pub history: Vector<ActionRecord>,
}

impl CombatState {
    /// Build the state for a new encounter.
    ///
    /// The monster is structurally copied so the template is never touched,
    /// and the deck is shuffled from the roster's order. Counters start at
    /// zero and the attack pointer at the first attack; the engine reveals
    /// the first intention.
    pub fn initialize(
        roster: &PlayerRoster,
        template: &Monster,
        config: &CombatConfig,
        rng: &mut GameRng,
    ) -> Result<Self, CombatError> {
        if template.parts.is_empty() {
            return Err(CombatError::InvalidMonster {
                id: template.id.clone(),
                reason: "monster has no parts",
            });
        }
        if template.attack_pattern.is_empty() {
            return Err(CombatError::InvalidMonster {
                id: template.id.clone(),
                reason: "attack pattern is empty",
            });
        }

        let mut piles = Piles::new(roster.deck.iter().cloned());
        piles.shuffle_deck(rng);

        Ok(Self {
            player: PlayerState {
                health: roster.health.clamp(0, roster.max_health.max(0)),
                max_health: roster.max_health,
                block: 0,
                position: config.starting_position,
                weapon: roster.weapon,
                status_effects: StatusEffects::new(),
            },
            piles,
            monster: template.fresh_copy(),
            attack_index: 0,
            turn: 1,
            cards_played_this_turn: 0,
            player_card_allowance: 0,
            moves_this_turn: 0,
            history: Vector::new(),
        })
    }

    /// The telegraphed attack.
    #[must_use]
    pub fn current_attack(&self) -> Option<&MonsterAttack> {
        self.monster.attack_pattern.get(self.attack_index)
    }

    /// Move the attack pointer past the attack that just resolved.
    ///
    /// A resolved charge jumps to its followup. Otherwise the pointer steps
    /// cyclically, and landing on a charge re-targets its followup at once.
    /// Followups missing from the pattern are ignored.
    pub fn advance_attack(&mut self) {
        let len = self.monster.attack_pattern.len();
        if len == 0 {
            return;
        }

        if let Some(followup) = self.charge_followup(self.attack_index) {
            self.attack_index = followup;
            return;
        }

        let next = (self.attack_index + 1) % len;
        self.attack_index = self.charge_followup(next).unwrap_or(next);
    }

    fn charge_followup(&self, index: usize) -> Option<usize> {
        let attack = self.monster.attack_pattern.get(index)?;
        if attack.kind != AttackKind::Charge {
            return None;
        }
        let followup = attack.followup_attack_id.as_ref()?;
        self.monster.attack_index(followup)
    }

    /// Apply the telegraphed attack's allowance and reset per-turn counters.
    ///
    /// Returns the attack now telegraphed.
    pub fn reveal_intention(&mut self) -> Option<MonsterAttack> {
        let attack = self.current_attack()?.clone();
        self.player_card_allowance = attack.player_card_allowance;
        self.cards_played_this_turn = 0;
        self.moves_this_turn = 0;
        Some(attack)
    }

    /// Damage the part at `index` and the monster's total health by the
    /// same clamped amount.
    pub fn damage_part(&mut self, index: usize, amount: i32) -> Option<PartHit> {
        let part = self.monster.parts.get_mut(index)?;
        let hit = part.apply_damage(amount);
        let part_id = part.id.clone();

        self.monster.total_health = (self.monster.total_health - hit.dealt).max(0);

        Some(PartHit {
            part: part_id,
            dealt: hit.dealt,
            newly_broken: hit.newly_broken,
            total_health: self.monster.total_health,
        })
    }

    /// Check whether the allowance admits another card.
    #[must_use]
    pub fn can_play_card(&self) -> bool {
        self.cards_played_this_turn < self.player_card_allowance
    }

    /// Check whether a free move is left under `budget`.
    #[must_use]
    pub fn has_free_move(&self, budget: u32) -> bool {
        self.moves_this_turn < budget
    }

    /// Append an accepted operation to the history.
    pub fn record(&mut self, action: CombatAction) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(action, self.turn, sequence));
    }
}
