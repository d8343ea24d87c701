//! Card definitions.
//!
//! Cards are immutable values. A deck is an ordered sequence of card
//! copies; two copies of `"quick_slash"` are equal values and the piles
//! tell them apart by position only.

use serde::{Deserialize, Serialize};

use crate::core::ids::CardId;
use crate::effects::{StatusEffect, StatusKind};

/// Weapon a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    SwordAndShield,
    Greatsword,
    Bow,
}

impl Weapon {
    /// Every weapon.
    pub const ALL: [Weapon; 3] = [Weapon::SwordAndShield, Weapon::Greatsword, Weapon::Bow];
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Damages monster parts.
    Attack,
    /// Adds block.
    Defense,
    /// Moves the player to the target position.
    Movement,
    /// Heals and/or buffs the player.
    Special,
}

/// How a card picks its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetMode {
    /// The monster part at one chosen position.
    Single,
    /// Every monster part.
    All,
    /// The player.
    #[serde(rename = "self")]
    SelfTarget,
    /// A chosen battlefield position (movement).
    Position,
}

/// An effect carried on a card, applied when the card resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardEffect {
    /// Kind of status to apply.
    pub kind: StatusKind,
    /// Turns it lasts. Defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Magnitude of the status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

impl CardEffect {
    /// Create a card effect.
    #[must_use]
    pub fn new(kind: StatusKind) -> Self {
        Self {
            kind,
            duration: None,
            value: None,
        }
    }

    /// Set the duration (builder pattern).
    #[must_use]
    pub fn lasting(mut self, turns: u32) -> Self {
        self.duration = Some(turns);
        self
    }

    /// Set the value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    /// The status effect this card effect produces.
    #[must_use]
    pub fn to_status(&self) -> StatusEffect {
        let effect = StatusEffect::new(self.kind, self.duration.unwrap_or(1));
        match self.value {
            Some(value) => effect.with_magnitude(value),
            None => effect,
        }
    }
}

/// A card.
///
/// ## Example
///
/// ```
/// use hunt_combat::cards::{Card, Weapon};
///
/// let slash = Card::attack("quick_slash", "Quick Slash", Weapon::SwordAndShield, 4);
/// assert_eq!(slash.damage, Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub weapon: Weapon,
    pub kind: CardKind,
    /// Display only; the engine gates plays by count, not cost.
    pub cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal: Option<i32>,
    /// Extra cards drawn after the card resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_count: Option<u32>,
    /// Carried as data; the engine does not delay charged cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_turns: Option<u32>,
    pub target_mode: TargetMode,
    /// Status applied with the configured preset on every part hit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_on_hit: Option<StatusKind>,
    /// Effects applied to the part(s) hit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied_effects: Vec<CardEffect>,
    /// Effect applied to the player by a special card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_effect: Option<CardEffect>,
    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Create a bare card of the given kind and target mode.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        weapon: Weapon,
        kind: CardKind,
        target_mode: TargetMode,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weapon,
            kind,
            cost: 1,
            damage: None,
            block: None,
            heal: None,
            draw_count: None,
            charge_turns: None,
            target_mode,
            status_on_hit: None,
            applied_effects: Vec::new(),
            self_effect: None,
            description: String::new(),
        }
    }

    /// Single-target attack card.
    #[must_use]
    pub fn attack(id: &str, name: &str, weapon: Weapon, damage: i32) -> Self {
        Self::new(id, name, weapon, CardKind::Attack, TargetMode::Single).with_damage(damage)
    }

    /// Attack card hitting every part.
    #[must_use]
    pub fn sweep(id: &str, name: &str, weapon: Weapon, damage: i32) -> Self {
        Self::new(id, name, weapon, CardKind::Attack, TargetMode::All).with_damage(damage)
    }

    /// Defense card.
    #[must_use]
    pub fn defense(id: &str, name: &str, weapon: Weapon, block: i32) -> Self {
        let mut card = Self::new(id, name, weapon, CardKind::Defense, TargetMode::SelfTarget);
        card.block = Some(block);
        card
    }

    /// Movement card.
    #[must_use]
    pub fn movement(id: &str, name: &str, weapon: Weapon) -> Self {
        Self::new(id, name, weapon, CardKind::Movement, TargetMode::Position)
    }

    /// Special (self-targeted) card.
    #[must_use]
    pub fn special(id: &str, name: &str, weapon: Weapon) -> Self {
        Self::new(id, name, weapon, CardKind::Special, TargetMode::SelfTarget)
    }

    /// Set base damage (builder pattern).
    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Set block (builder pattern).
    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = Some(block);
        self
    }

    /// Set heal (builder pattern).
    #[must_use]
    pub fn with_heal(mut self, heal: i32) -> Self {
        self.heal = Some(heal);
        self
    }

    /// Set extra draws (builder pattern).
    #[must_use]
    pub fn with_draw(mut self, count: u32) -> Self {
        self.draw_count = Some(count);
        self
    }

    /// Set charge turns (builder pattern).
    #[must_use]
    pub fn with_charge(mut self, turns: u32) -> Self {
        self.charge_turns = Some(turns);
        self
    }

    /// Set cost (builder pattern).
    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Set on-hit status (builder pattern).
    #[must_use]
    pub fn with_status_on_hit(mut self, kind: StatusKind) -> Self {
        self.status_on_hit = Some(kind);
        self
    }

    /// Add an effect applied to the part(s) hit (builder pattern).
    #[must_use]
    pub fn with_applied_effect(mut self, effect: CardEffect) -> Self {
        self.applied_effects.push(effect);
        self
    }

    /// Set the self effect (builder pattern).
    #[must_use]
    pub fn with_self_effect(mut self, effect: CardEffect) -> Self {
        self.self_effect = Some(effect);
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Whether playing this card requires a target position.
    #[must_use]
    pub fn needs_target(&self) -> bool {
        match self.kind {
            CardKind::Attack => self.target_mode == TargetMode::Single,
            CardKind::Movement => true,
            CardKind::Defense | CardKind::Special => false,
        }
    }
}
