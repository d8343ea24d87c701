//! Built-in monster templates and their attacks.

use rustc_hash::FxHashMap;

use super::definition::{AttackKind, Monster, MonsterAttack, MonsterPart, MonsterTier};
use crate::core::ids::MonsterId;
use crate::core::position::Position;

const ALL_POSITIONS: [Position; 3] = [Position::LEFT, Position::CENTER, Position::RIGHT];

/// The standard attacks monsters draw their patterns from.
pub mod attacks {
    use super::*;

    /// Hits one position; player may play 3 cards.
    #[must_use]
    pub fn basic_attack() -> MonsterAttack {
        MonsterAttack::new("basic_attack", "Basic Attack", AttackKind::Basic, 5, &[Position::LEFT], 3)
            .with_description("Target 1 position, player can play 3 cards next turn")
    }

    /// Hits every position; player may play 2 cards.
    #[must_use]
    pub fn sweeping_attack() -> MonsterAttack {
        MonsterAttack::new("sweeping_attack", "Sweeping Attack", AttackKind::Sweep, 3, &ALL_POSITIONS, 2)
            .with_description("Target all positions, player can play 2 cards next turn")
    }

    /// Hits two positions hard; player may play 1 card.
    #[must_use]
    pub fn heavy_strike() -> MonsterAttack {
        MonsterAttack::new(
            "heavy_strike",
            "Heavy Strike",
            AttackKind::Heavy,
            8,
            &[Position::LEFT, Position::CENTER],
            1,
        )
        .with_description("Target 2 positions, player can play 1 card next turn")
    }

    /// No damage; the charged attack comes next.
    #[must_use]
    pub fn charge() -> MonsterAttack {
        MonsterAttack::new("charge", "Charge", AttackKind::Charge, 0, &[], 3)
            .followed_by("charged_attack")
            .with_description("No attack this turn, powerful attack next turn")
    }

    /// Payoff of a charge.
    #[must_use]
    pub fn charged_attack() -> MonsterAttack {
        MonsterAttack::new("charged_attack", "Charged Attack", AttackKind::Heavy, 12, &ALL_POSITIONS, 2)
            .with_description("Powerful attack hitting all positions")
    }

    /// No damage; the monster shifts position.
    #[must_use]
    pub fn reposition() -> MonsterAttack {
        MonsterAttack::new("reposition", "Reposition", AttackKind::Reposition, 0, &[], 3)
            .with_description("Monster shifts target positions")
    }
}

/// Monster templates by id.
#[derive(Clone, Debug, Default)]
pub struct Bestiary {
    monsters: FxHashMap<MonsterId, Monster>,
}

impl Bestiary {
    /// Create an empty bestiary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in monsters.
    #[must_use]
    pub fn standard() -> Self {
        let mut bestiary = Self::new();
        bestiary.register(great_jagras());
        bestiary.register(kulu_ya_ku());
        bestiary.register(pukei_pukei());
        bestiary
    }

    /// Register a template, replacing any with the same id.
    pub fn register(&mut self, monster: Monster) {
        self.monsters.insert(monster.id.clone(), monster);
    }

    /// Get a template by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Monster> {
        self.monsters.get(&MonsterId::new(id))
    }

    /// Number of templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Iterate over templates (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.values()
    }
}

/// Great Jagras: a straightforward brawler.
#[must_use]
pub fn great_jagras() -> Monster {
    Monster::new(
        "great_jagras",
        "Great Jagras",
        MonsterTier::Large,
        vec![
            MonsterPart::new("head", "Head", 20),
            MonsterPart::new("body", "Body", 30),
            MonsterPart::new("tail", "Tail", 15),
        ],
        vec![
            attacks::basic_attack(),
            attacks::basic_attack(),
            attacks::sweeping_attack(),
            attacks::heavy_strike(),
            attacks::reposition(),
        ],
    )
    .with_description("Attacks in packs and swallows prey whole with its massive jaw.")
}

/// Kulu-Ya-Ku: charges up a heavy blow.
#[must_use]
pub fn kulu_ya_ku() -> Monster {
    Monster::new(
        "kulu_ya_ku",
        "Kulu-Ya-Ku",
        MonsterTier::Large,
        vec![
            MonsterPart::new("head", "Head", 25),
            MonsterPart::new("body", "Body", 25),
            MonsterPart::new("legs", "Legs", 20),
        ],
        vec![
            attacks::basic_attack(),
            attacks::basic_attack(),
            attacks::sweeping_attack(),
            attacks::charge(),
            attacks::charged_attack(),
            attacks::reposition(),
        ],
    )
    .with_description("An intelligent bird wyvern that fights with tools.")
}

/// Pukei-Pukei: sweeping attacks and a charge.
#[must_use]
pub fn pukei_pukei() -> Monster {
    Monster::new(
        "pukei_pukei",
        "Pukei-Pukei",
        MonsterTier::Large,
        vec![
            MonsterPart::new("head", "Head", 20),
            MonsterPart::new("body", "Body", 30),
            MonsterPart::new("tail", "Tail", 25),
        ],
        vec![
            attacks::basic_attack(),
            attacks::sweeping_attack(),
            attacks::sweeping_attack(),
            attacks::heavy_strike(),
            attacks::charge(),
            attacks::charged_attack(),
        ],
    )
    .with_description("A poisonous bird wyvern that stores toxins in its tail.")
}
