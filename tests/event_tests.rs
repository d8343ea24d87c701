//! Event delivery tests.
//!
//! Covers what subscribers observe while driving an engine:
//! - Ordering of events within one operation
//! - Filtered and wildcard subscriptions, unsubscribing
//! - Error events for rejected operations
//! - The serialized wire shape

use std::cell::RefCell;
use std::rc::Rc;

use hunt_combat::cards::{Card, Weapon};
use hunt_combat::core::{CardId, CombatConfig, PlayerRoster, Position};
use hunt_combat::events::{CombatEvent, EventBus, EventKind, EventLog};
use hunt_combat::monsters::{AttackKind, Monster, MonsterAttack, MonsterPart, MonsterTier};
use hunt_combat::rules::{CombatEngine, CombatResult};

fn jagras() -> Monster {
    Monster::new(
        "great_jagras",
        "Great Jagras",
        MonsterTier::Large,
        vec![
            MonsterPart::new("head", "Head", 20),
            MonsterPart::new("body", "Body", 30),
            MonsterPart::new("tail", "Tail", 15),
        ],
        vec![MonsterAttack::new("bite", "Bite", AttackKind::Basic, 5, &[Position::CENTER], 3)],
    )
}

fn slashes(damage: i32) -> PlayerRoster {
    let card = Card::attack("slash", "Slash", Weapon::SwordAndShield, damage);
    PlayerRoster::new(50, Weapon::SwordAndShield, vec![card; 10])
}

// =============================================================================
// Subscriptions
// =============================================================================

/// A kind subscription sees only its kind.
#[test]
fn test_filtered_subscription() {
    let mut engine = CombatEngine::new(CombatConfig::default(), 3);
    let drawn = EventLog::new();
    let damaged = EventLog::new();
    engine.subscribe(EventKind::CardDrawn, drawn.subscriber());
    engine.subscribe(EventKind::MonsterDamaged, damaged.subscriber());

    engine.start_combat(&slashes(4), &jagras()).unwrap();
    assert_eq!(drawn.len(), 5);
    assert!(damaged.is_empty());

    engine.play_card(&CardId::new("slash"), Some(Position::RIGHT)).unwrap();
    assert_eq!(drawn.len(), 5);
    assert_eq!(
        damaged.events(),
        vec![CombatEvent::MonsterDamaged {
            part: "tail".into(),
            damage: 4,
            total_health: 61,
        }]
    );
}

#[test]
fn test_closure_subscriber() {
    let mut engine = CombatEngine::new(CombatConfig::default(), 3);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    engine.subscribe_all(move |event: &CombatEvent| sink.borrow_mut().push(event.kind().name()));

    engine.start_combat(&slashes(4), &jagras()).unwrap();
    assert_eq!(seen.borrow().last(), Some(&"combatStarted"));
    assert_eq!(seen.borrow().len(), 7);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut engine = CombatEngine::new(CombatConfig::default(), 3);
    let log = EventLog::new();
    let id = engine.subscribe_all(log.subscriber());

    engine.start_combat(&slashes(4), &jagras()).unwrap();
    let seen = log.len();

    assert!(engine.unsubscribe(id));
    assert!(!engine.unsubscribe(id));
    engine.end_player_turn().unwrap();
    assert_eq!(log.len(), seen);
}

/// Wildcard and filtered subscribers interleave in subscription order.
#[test]
fn test_delivery_in_subscription_order() {
    let mut bus = EventBus::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&order);
    bus.subscribe(EventKind::DeckShuffled, move |_: &CombatEvent| sink.borrow_mut().push("first"));
    let sink = Rc::clone(&order);
    bus.subscribe_all(move |_: &CombatEvent| sink.borrow_mut().push("second"));
    let sink = Rc::clone(&order);
    bus.subscribe(EventKind::DeckShuffled, move |_: &CombatEvent| sink.borrow_mut().push("third"));
    let sink = Rc::clone(&order);
    bus.subscribe(EventKind::MonsterStunned, move |_: &CombatEvent| sink.borrow_mut().push("never"));

    bus.publish(&CombatEvent::DeckShuffled);
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_start_announces_after_setup() {
    let mut engine = CombatEngine::new(CombatConfig::default(), 11);
    let log = EventLog::new();
    engine.subscribe_all(log.subscriber());

    engine.start_combat(&slashes(4), &jagras()).unwrap();
    let events = log.events();

    let Some(CombatEvent::CombatStarted { player, monster }) = events.last() else {
        panic!("expected combatStarted last, got {:?}", events.last());
    };
    assert_eq!(player.health, 50);
    assert_eq!(player.position, Position::CENTER);
    assert_eq!(monster.total_health, 65);

    let Some(CombatEvent::MonsterIntentionRevealed { attack }) = events.get(5) else {
        panic!("expected the intention before combatStarted");
    };
    assert_eq!(attack.id.as_str(), "bite");
}

/// Every event of a killing blow arrives before `combatEnded`, and
/// nothing follows it.
#[test]
fn test_combat_ended_is_last() {
    let mut engine = CombatEngine::new(CombatConfig::default(), 5);
    let log = EventLog::new();
    engine.subscribe_all(log.subscriber());
    engine.start_combat(&slashes(30), &jagras()).unwrap();
    log.clear();

    engine.play_card(&CardId::new("slash"), Some(Position::LEFT)).unwrap();
    engine.play_card(&CardId::new("slash"), Some(Position::CENTER)).unwrap();
    engine.play_card(&CardId::new("slash"), Some(Position::RIGHT)).unwrap();

    let kinds = log.kinds();
    assert_eq!(
        kinds[kinds.len() - 4..],
        [EventKind::CardPlayed, EventKind::PartBroken, EventKind::MonsterDamaged, EventKind::CombatEnded]
    );
    assert_eq!(log.count(EventKind::PartBroken), 3);
    assert_eq!(
        log.events().last(),
        Some(&CombatEvent::CombatEnded {
            result: CombatResult::Victory,
        })
    );

    engine.end_player_turn().unwrap_err();
    assert_eq!(log.kinds().len(), kinds.len());
}

#[test]
fn test_rejection_emits_only_error() {
    let mut engine = CombatEngine::new(CombatConfig::default(), 5);
    let log = EventLog::new();
    engine.subscribe_all(log.subscriber());
    engine.start_combat(&slashes(4), &jagras()).unwrap();
    log.clear();

    engine.play_card(&CardId::new("slash"), None).unwrap_err();
    engine.move_player(Position::LEFT).unwrap();
    engine.move_player(Position::RIGHT).unwrap_err();

    assert_eq!(
        log.events(),
        vec![
            CombatEvent::Error {
                message: "Card Card(slash) requires a target position".into(),
            },
            CombatEvent::PlayerMoved {
                position: Position::LEFT,
                free: true,
            },
            CombatEvent::Error {
                message: "No free moves left this turn. Discard a card to move again.".into(),
            },
        ]
    );
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn test_events_serialize_with_type_tag() {
    let damaged = CombatEvent::MonsterDamaged {
        part: "head".into(),
        damage: 25,
        total_health: 40,
    };
    assert_eq!(
        serde_json::to_value(&damaged).unwrap(),
        serde_json::json!({"type": "monsterDamaged", "part": "head", "damage": 25, "totalHealth": 40})
    );

    let ended = CombatEvent::TurnEnded {
        current_turn: 2,
        player_cards_allowed: 1,
    };
    assert_eq!(
        serde_json::to_value(&ended).unwrap(),
        serde_json::json!({"type": "turnEnded", "currentTurn": 2, "playerCardsAllowed": 1})
    );

    let moved = CombatEvent::PlayerMoved {
        position: Position::RIGHT,
        free: false,
    };
    let json = serde_json::to_string(&moved).unwrap();
    assert_eq!(serde_json::from_str::<CombatEvent>(&json).unwrap(), moved);
}

#[test]
fn test_recorded_combat_serializes() {
    let mut engine = CombatEngine::new(CombatConfig::default(), 8);
    let log = EventLog::new();
    engine.subscribe_all(log.subscriber());
    engine.start_combat(&slashes(4), &jagras()).unwrap();
    engine.play_card(&CardId::new("slash"), Some(Position::LEFT)).unwrap();
    engine.end_player_turn().unwrap();

    for event in log.events() {
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], event.kind().name());
    }
}
