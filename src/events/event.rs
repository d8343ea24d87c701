//! Combat events.
//!
//! Every observable state change is announced as one `CombatEvent`, in the
//! order the changes happen. Events serialize as an internally tagged union
//! (`{"type":"cardPlayed", ...}`) so a presentation layer in any language
//! can consume them.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::ids::PartId;
use crate::core::position::Position;
use crate::core::state::PlayerState;
use crate::effects::{StatusEffect, StatusKind};
use crate::monsters::{Monster, MonsterAttack};
use crate::rules::CombatResult;

/// Which side an effect event concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectTarget {
    Player,
    Monster,
}

/// Something that happened during combat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CombatEvent {
    CombatStarted {
        player: PlayerState,
        monster: Monster,
    },
    CardPlayed {
        card: Card,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target_position: Option<Position>,
    },
    CardDrawn {
        card: Card,
    },
    /// The discard pile was shuffled back into the deck.
    DeckShuffled,
    PlayerMoved {
        position: Position,
        /// False when a card was discarded to pay for the move.
        free: bool,
    },
    CardDiscarded {
        card: Card,
    },
    PlayerDamaged {
        damage: i32,
    },
    PlayerHealed {
        amount: i32,
    },
    PlayerBlocked {
        block: i32,
    },
    MonsterDamaged {
        part: PartId,
        damage: i32,
        total_health: i32,
    },
    PartBroken {
        part: PartId,
    },
    /// The monster skipped its attack.
    MonsterStunned,
    MonsterIntentionRevealed {
        attack: MonsterAttack,
    },
    /// An on-hit status landed.
    StatusEffectApplied {
        effect: StatusEffect,
        target_type: EffectTarget,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        part_id: Option<PartId>,
    },
    /// An active effect fired at a turn boundary or on movement.
    StatusEffectActivated {
        effect_type: StatusKind,
        effect_name: String,
        target: EffectTarget,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        part_id: Option<PartId>,
    },
    /// A card's applied effect landed on a part.
    MonsterEffectApplied {
        effect: StatusEffect,
        part: PartId,
    },
    PlayerEffectApplied {
        effect: StatusEffect,
    },
    TurnEnded {
        current_turn: u32,
        player_cards_allowed: u32,
    },
    CombatEnded {
        result: CombatResult,
    },
    /// A rejected operation.
    Error {
        message: String,
    },
}

/// Discriminant of [`CombatEvent`], used to subscribe to one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    CombatStarted,
    CardPlayed,
    CardDrawn,
    DeckShuffled,
    PlayerMoved,
    CardDiscarded,
    PlayerDamaged,
    PlayerHealed,
    PlayerBlocked,
    MonsterDamaged,
    PartBroken,
    MonsterStunned,
    MonsterIntentionRevealed,
    StatusEffectApplied,
    StatusEffectActivated,
    MonsterEffectApplied,
    PlayerEffectApplied,
    TurnEnded,
    CombatEnded,
    Error,
}

impl EventKind {
    /// Wire name, as it appears in the serialized `type` tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::CombatStarted => "combatStarted",
            EventKind::CardPlayed => "cardPlayed",
            EventKind::CardDrawn => "cardDrawn",
            EventKind::DeckShuffled => "deckShuffled",
            EventKind::PlayerMoved => "playerMoved",
            EventKind::CardDiscarded => "cardDiscarded",
            EventKind::PlayerDamaged => "playerDamaged",
            EventKind::PlayerHealed => "playerHealed",
            EventKind::PlayerBlocked => "playerBlocked",
            EventKind::MonsterDamaged => "monsterDamaged",
            EventKind::PartBroken => "partBroken",
            EventKind::MonsterStunned => "monsterStunned",
            EventKind::MonsterIntentionRevealed => "monsterIntentionRevealed",
            EventKind::StatusEffectApplied => "statusEffectApplied",
            EventKind::StatusEffectActivated => "statusEffectActivated",
            EventKind::MonsterEffectApplied => "monsterEffectApplied",
            EventKind::PlayerEffectApplied => "playerEffectApplied",
            EventKind::TurnEnded => "turnEnded",
            EventKind::CombatEnded => "combatEnded",
            EventKind::Error => "error",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl CombatEvent {
    /// The event's kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            CombatEvent::CombatStarted { .. } => EventKind::CombatStarted,
            CombatEvent::CardPlayed { .. } => EventKind::CardPlayed,
            CombatEvent::CardDrawn { .. } => EventKind::CardDrawn,
            CombatEvent::DeckShuffled => EventKind::DeckShuffled,
            CombatEvent::PlayerMoved { .. } => EventKind::PlayerMoved,
            CombatEvent::CardDiscarded { .. } => EventKind::CardDiscarded,
            CombatEvent::PlayerDamaged { .. } => EventKind::PlayerDamaged,
            CombatEvent::PlayerHealed { .. } => EventKind::PlayerHealed,
            CombatEvent::PlayerBlocked { .. } => EventKind::PlayerBlocked,
            CombatEvent::MonsterDamaged { .. } => EventKind::MonsterDamaged,
            CombatEvent::PartBroken { .. } => EventKind::PartBroken,
            CombatEvent::MonsterStunned => EventKind::MonsterStunned,
            CombatEvent::MonsterIntentionRevealed { .. } => EventKind::MonsterIntentionRevealed,
            CombatEvent::StatusEffectApplied { .. } => EventKind::StatusEffectApplied,
            CombatEvent::StatusEffectActivated { .. } => EventKind::StatusEffectActivated,
            CombatEvent::MonsterEffectApplied { .. } => EventKind::MonsterEffectApplied,
            CombatEvent::PlayerEffectApplied { .. } => EventKind::PlayerEffectApplied,
            CombatEvent::TurnEnded { .. } => EventKind::TurnEnded,
            CombatEvent::CombatEnded { .. } => EventKind::CombatEnded,
            CombatEvent::Error { .. } => EventKind::Error,
        }
    }

    /// Build the activation event for an effect that fired.
    #[must_use]
    pub fn activated(effect: &StatusEffect, target: EffectTarget, part_id: Option<PartId>) -> Self {
        CombatEvent::StatusEffectActivated {
            effect_type: effect.kind,
            effect_name: effect.kind.display_name().to_owned(),
            target,
            part_id,
        }
    }
}
