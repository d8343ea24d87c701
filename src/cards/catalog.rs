//! Built-in card content: the weapon starter decks and the status cards.
//!
//! The combat core only consumes a deck; this catalog exists so drivers
//! and tests have real content to fight with.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardEffect, Weapon};
use crate::core::ids::CardId;
use crate::effects::StatusKind;

/// Lookup of card definitions by id.
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of every built-in card.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for card in weapon_cards().into_iter().chain(status_cards()) {
            catalog.register(card);
        }
        catalog
    }

    /// Register a card, replacing any card with the same id.
    pub fn register(&mut self, card: Card) {
        self.cards.insert(card.id.clone(), card);
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.get(&CardId::new(id))
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Build a deck from ids, skipping unknown ones.
    #[must_use]
    pub fn deck(&self, ids: &[&str]) -> Vec<Card> {
        ids.iter().filter_map(|id| self.get(id).cloned()).collect()
    }

    /// The ten-card starter deck for a weapon.
    #[must_use]
    pub fn starter_deck(&self, weapon: Weapon) -> Vec<Card> {
        self.deck(starter_ids(weapon))
    }
}

fn starter_ids(weapon: Weapon) -> &'static [&'static str] {
    match weapon {
        Weapon::SwordAndShield => &[
            "quick_slash",
            "quick_slash",
            "quick_slash",
            "shield_bash",
            "shield_bash",
            "guard",
            "guard",
            "roll",
            "roundslash",
            "item_use",
        ],
        Weapon::Greatsword => &[
            "overhead_slash",
            "overhead_slash",
            "overhead_slash",
            "tackle",
            "tackle",
            "charged_slash",
            "charged_slash",
            "side_roll",
            "wide_sweep",
            "gs_guard",
        ],
        Weapon::Bow => &[
            "rapid_shot",
            "rapid_shot",
            "rapid_shot",
            "spread_shot",
            "spread_shot",
            "power_shot",
            "quick_dash",
            "quick_dash",
            "apply_coating",
            "charged_shot",
        ],
    }
}

fn weapon_cards() -> Vec<Card> {
    use Weapon::{Bow, Greatsword, SwordAndShield};

    vec![
        Card::attack("quick_slash", "Quick Slash", SwordAndShield, 4)
            .with_description("Deal 4 damage to target position"),
        Card::attack("shield_bash", "Shield Bash", SwordAndShield, 2)
            .with_applied_effect(CardEffect::new(StatusKind::Stun).lasting(1))
            .with_description("Deal 2 damage and stun monster at target position for 1 turn"),
        Card::defense("guard", "Guard", SwordAndShield, 5)
            .with_description("Block 5 damage from any position"),
        Card::movement("roll", "Roll", SwordAndShield)
            .with_draw(1)
            .with_description("Move to any position and draw 1 card"),
        Card::sweep("roundslash", "Roundslash", SwordAndShield, 3)
            .with_description("Deal 3 damage to all positions"),
        Card::special("item_use", "Item Use", SwordAndShield)
            .with_heal(4)
            .with_description("Recover 4 health"),
        Card::attack("overhead_slash", "Overhead Slash", Greatsword, 6)
            .with_description("Deal 6 damage to target position"),
        Card::attack("tackle", "Tackle", Greatsword, 2)
            .with_block(3)
            .with_description("Deal 2 damage and gain Block 3"),
        Card::attack("charged_slash", "Charged Slash", Greatsword, 10)
            .with_charge(1)
            .with_cost(2)
            .with_description("Charge for 1 turn, then deal 10 damage to target position"),
        Card::movement("side_roll", "Side Roll", Greatsword)
            .with_description("Move to any position"),
        Card::sweep("wide_sweep", "Wide Sweep", Greatsword, 4)
            .with_cost(2)
            .with_description("Deal 4 damage to all positions"),
        Card::defense("gs_guard", "Guard", Greatsword, 7)
            .with_description("Block 7 damage from any position"),
        Card::attack("rapid_shot", "Rapid Shot", Bow, 3)
            .with_draw(1)
            .with_description("Deal 3 damage to target position and draw 1 card"),
        Card::sweep("spread_shot", "Spread Shot", Bow, 2)
            .with_description("Deal 2 damage to all positions"),
        Card::attack("power_shot", "Power Shot", Bow, 5)
            .with_description("Deal 5 damage to target position"),
        Card::movement("quick_dash", "Quick Dash", Bow)
            .with_draw(1)
            .with_description("Move to any position and draw 1 card"),
        Card::special("apply_coating", "Apply Coating", Bow)
            .with_self_effect(CardEffect::new(StatusKind::Buff).with_value(3).lasting(1))
            .with_description("Your next attack deals 3 additional damage"),
        Card::attack("charged_shot", "Charged Shot", Bow, 8)
            .with_charge(1)
            .with_cost(2)
            .with_description("Charge for 1 turn, then deal 8 damage to target position"),
    ]
}

fn status_cards() -> Vec<Card> {
    use Weapon::{Bow, Greatsword, SwordAndShield};

    vec![
        Card::attack("poison_slash", "Poison Slash", SwordAndShield, 3)
            .with_status_on_hit(StatusKind::Poison)
            .with_description("Deal 3 damage and apply Poison to target position"),
        Card::attack("fire_attack", "Fire Attack", SwordAndShield, 2)
            .with_status_on_hit(StatusKind::Burning)
            .with_description("Deal 2 damage and apply Burning to target position"),
        Card::attack("bleed_slash", "Bleed Slash", Greatsword, 5)
            .with_status_on_hit(StatusKind::Bleeding)
            .with_description("Deal 5 damage and apply Bleeding to target position"),
        Card::attack("stun_strike", "Stun Strike", Greatsword, 4)
            .with_status_on_hit(StatusKind::Stun)
            .with_cost(2)
            .with_description("Deal 4 damage and apply Stun to target position"),
        Card::attack("poison_arrow", "Poison Arrow", Bow, 2)
            .with_status_on_hit(StatusKind::Poison)
            .with_description("Deal 2 damage and apply Poison to target position"),
        Card::sweep("fire_arrow", "Fire Arrow", Bow, 2)
            .with_status_on_hit(StatusKind::Burning)
            .with_cost(2)
            .with_description("Deal 2 damage and apply Burning to all positions"),
    ]
}
