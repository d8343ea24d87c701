//! The combat engine.
//!
//! `CombatEngine` owns one encounter's [`CombatState`] and is the only
//! thing that mutates it. Drivers call the operations below in response to
//! player or AI decisions and observe the results through events.
//!
//! Every operation returns the phase the engine rests in afterwards:
//!
//! - Invalid operations return `Err`, emit an `error` event and change
//!   nothing.
//! - Calls outside a live combat return a precondition error and emit
//!   nothing.

use tracing::{debug, warn};

use super::phase::{CombatOutcome, CombatPhase, CombatResult};
use super::resolve::Resolution;
use crate::cards::Card;
use crate::core::action::CombatAction;
use crate::core::config::CombatConfig;
use crate::core::ids::CardId;
use crate::core::position::Position;
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::{CombatState, PlayerRoster};
use crate::effects::TriggerPhase;
use crate::error::CombatError;
use crate::events::{CombatEvent, EventBus, EventKind, Subscriber, SubscriptionId};
use crate::monsters::Monster;

/// Turn-based combat engine for one encounter.
///
/// ## Example
///
/// ```
/// use hunt_combat::cards::{CardCatalog, Weapon};
/// use hunt_combat::core::{CombatConfig, PlayerRoster};
/// use hunt_combat::monsters::Bestiary;
/// use hunt_combat::rules::{CombatEngine, CombatPhase};
///
/// let catalog = CardCatalog::standard();
/// let roster = PlayerRoster::new(50, Weapon::SwordAndShield, catalog.starter_deck(Weapon::SwordAndShield));
/// let monster = Bestiary::standard().get("great_jagras").unwrap().clone();
///
/// let mut engine = CombatEngine::new(CombatConfig::default(), 42);
/// let phase = engine.start_combat(&roster, &monster).unwrap();
/// assert_eq!(phase, CombatPhase::PlayerTurn);
/// assert_eq!(engine.state().unwrap().piles.hand().len(), 5);
/// ```
#[derive(Debug)]
pub struct CombatEngine {
    config: CombatConfig,
    rng: GameRng,
    bus: EventBus,
    state: Option<CombatState>,
    phase: CombatPhase,
}

impl CombatEngine {
    /// Create an engine. Identical seeds and inputs replay identical combats.
    #[must_use]
    pub fn new(config: CombatConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            bus: EventBus::new(),
            state: None,
            phase: CombatPhase::CombatStart,
        }
    }

    /// Create an engine resuming from an RNG checkpoint.
    #[must_use]
    pub fn with_rng_state(config: CombatConfig, rng: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(rng),
            ..Self::new(config, 0)
        }
    }

    // === Accessors ===

    /// The rules configuration.
    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    /// Check if the combat has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// The live state, once combat has started.
    ///
    /// Stays readable after combat ends so drivers can inspect broken
    /// parts before dropping the engine.
    #[must_use]
    pub fn state(&self) -> Option<&CombatState> {
        self.state.as_ref()
    }

    /// Independent copy of the state. O(1): piles and history are
    /// persistent vectors.
    #[must_use]
    pub fn snapshot(&self) -> Option<CombatState> {
        self.state.clone()
    }

    /// Checkpoint of the RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Summary of a finished combat. `None` while combat is live.
    #[must_use]
    pub fn outcome(&self) -> Option<CombatOutcome> {
        let result = self.phase.result()?;
        let state = self.state.as_ref()?;

        let (broken_parts, intact_parts) = match result {
            CombatResult::Victory => {
                let (broken, intact): (Vec<_>, Vec<_>) = state.monster.parts.iter().partition(|p| p.broken);
                (
                    broken.into_iter().map(|p| p.id.clone()).collect(),
                    intact.into_iter().map(|p| p.id.clone()).collect(),
                )
            }
            CombatResult::Defeat => (Vec::new(), Vec::new()),
        };

        Some(CombatOutcome {
            result,
            monster: state.monster.id.clone(),
            tier: state.monster.tier,
            broken_parts,
            intact_parts,
            turns: state.turn,
            player_health: state.player.health,
        })
    }

    // === Subscriptions ===

    /// Subscribe to one kind of event.
    pub fn subscribe(&mut self, kind: EventKind, subscriber: impl Subscriber + 'static) -> SubscriptionId {
        self.bus.subscribe(kind, subscriber)
    }

    /// Subscribe to every event.
    pub fn subscribe_all(&mut self, subscriber: impl Subscriber + 'static) -> SubscriptionId {
        self.bus.subscribe_all(subscriber)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    // === Operations ===

    /// Start the encounter.
    ///
    /// Builds the state from the roster and a structural copy of the
    /// monster, fills the hand, reveals the first intention and emits
    /// `combatStarted`.
    pub fn start_combat(&mut self, roster: &PlayerRoster, monster: &Monster) -> Result<CombatPhase, CombatError> {
        match self.phase {
            CombatPhase::CombatStart => {}
            CombatPhase::CombatEnd(_) => return Err(CombatError::CombatOver),
            CombatPhase::PlayerTurn | CombatPhase::MonsterTurn => return Err(CombatError::AlreadyStarted),
        }

        let state = match CombatState::initialize(roster, monster, &self.config, &mut self.rng) {
            Ok(state) => state,
            Err(error) => return self.reject(error),
        };
        self.state = Some(state);
        self.phase = CombatPhase::PlayerTurn;
        debug!(monster = %monster.id, deck = roster.deck.len(), "combat started");

        let mut res = self.resolution()?;
        res.refill_hand();
        res.reveal_intention();
        let player = res.state.player.clone();
        let monster = res.state.monster.clone();
        res.emit(CombatEvent::CombatStarted { player, monster });

        Ok(self.phase)
    }

    /// Play a card from hand, optionally at a target position.
    ///
    /// Rejected when the card is not in hand, the allowance is spent, or a
    /// required target is missing. Ends the combat at once if the card
    /// brings the monster's total health to zero.
    pub fn play_card(&mut self, card_id: &CardId, target: Option<Position>) -> Result<CombatPhase, CombatError> {
        self.live_state()?;
        if let Err(error) = self.validate_play(card_id, target) {
            return self.reject(error);
        }

        let mut res = self.resolution()?;
        let Some(card) = res.state.piles.take_from_hand(card_id) else {
            return Err(CombatError::CardNotInHand(card_id.clone()));
        };
        res.emit(CombatEvent::CardPlayed {
            card: card.clone(),
            target_position: target,
        });

        res.resolve_card(&card, target);
        res.state.piles.push_discard(card);
        res.state.cards_played_this_turn += 1;
        res.state.record(CombatAction::PlayCard {
            card: card_id.clone(),
            target,
        });

        debug!(card = %card_id, target = ?target.map(Position::index), "card played");
        Ok(self.settle())
    }

    /// Spend the free move to reach `position`.
    pub fn move_player(&mut self, position: Position) -> Result<CombatPhase, CombatError> {
        let state = self.live_state()?;
        if !state.has_free_move(self.config.free_moves_per_turn) {
            return self.reject(CombatError::NoFreeMoves);
        }

        let mut res = self.resolution()?;
        res.state.moves_this_turn += 1;
        res.move_player(position, true);
        res.state.record(CombatAction::MovePlayer { position });

        debug!(position = %position, "free move");
        Ok(self.settle())
    }

    /// Discard a card from hand to move to `position`.
    ///
    /// Counts neither against the card allowance nor the free-move budget.
    pub fn discard_to_move(&mut self, card_id: &CardId, position: Position) -> Result<CombatPhase, CombatError> {
        let state = self.live_state()?;
        if !state.piles.in_hand(card_id) {
            return self.reject(CombatError::CardNotInHand(card_id.clone()));
        }

        let mut res = self.resolution()?;
        if let Some(card) = res.state.piles.hand_to_discard(card_id) {
            res.emit(CombatEvent::CardDiscarded { card });
        }
        res.move_player(position, false);
        res.state.record(CombatAction::DiscardToMove {
            card: card_id.clone(),
            position,
        });

        debug!(card = %card_id, position = %position, "discarded to move");
        Ok(self.settle())
    }

    /// End the player's turn and run the monster's.
    ///
    /// Player end-of-turn effects fire and tick, the monster attacks (or is
    /// stunned), monster-part effects fire and tick, and if nobody has won
    /// the next player turn begins: turn counter, start-of-turn triggers,
    /// hand refill, new intention, `turnEnded`.
    pub fn end_player_turn(&mut self) -> Result<CombatPhase, CombatError> {
        self.live_state()?;
        self.phase = CombatPhase::MonsterTurn;

        let mut res = self.resolution()?;
        res.state.record(CombatAction::EndTurn);

        res.run_player_triggers(TriggerPhase::TurnEnd);
        res.tick_player_effects();
        if res.state.player.is_defeated() {
            return Ok(self.finish(CombatResult::Defeat));
        }

        if let Some(result) = res.monster_attack() {
            return Ok(self.finish(result));
        }

        res.run_part_triggers(TriggerPhase::TurnEnd);
        res.tick_part_effects();
        if let Some(result) = self.check_end() {
            return Ok(self.finish(result));
        }

        let mut res = self.resolution()?;
        res.state.turn += 1;
        res.run_player_triggers(TriggerPhase::TurnStart);
        res.run_part_triggers(TriggerPhase::TurnStart);
        res.refill_hand();
        res.reveal_intention();

        let current_turn = res.state.turn;
        let player_cards_allowed = res.state.player_card_allowance;
        res.emit(CombatEvent::TurnEnded {
            current_turn,
            player_cards_allowed,
        });

        self.phase = CombatPhase::PlayerTurn;
        debug!(turn = current_turn, allowed = player_cards_allowed, "player turn begins");
        Ok(self.phase)
    }

    /// Apply a recorded action.
    pub fn apply(&mut self, action: &CombatAction) -> Result<CombatPhase, CombatError> {
        match action {
            CombatAction::PlayCard { card, target } => self.play_card(card, *target),
            CombatAction::MovePlayer { position } => self.move_player(*position),
            CombatAction::DiscardToMove { card, position } => self.discard_to_move(card, *position),
            CombatAction::EndTurn => self.end_player_turn(),
        }
    }

    /// Every action the engine would accept right now.
    ///
    /// Copies of the same card yield one entry each. Moves to the current
    /// position are omitted. Empty outside the player's turn.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<CombatAction> {
        let Ok(state) = self.live_state() else {
            return Vec::new();
        };

        let mut cards: Vec<&Card> = Vec::new();
        for card in state.piles.hand() {
            if !cards.iter().any(|c| c.id == card.id) {
                cards.push(card);
            }
        }

        let elsewhere: Vec<Position> = Position::all().filter(|&p| p != state.player.position).collect();
        let mut actions = Vec::new();

        if state.can_play_card() {
            for card in &cards {
                if card.needs_target() {
                    actions.extend(Position::all().map(|p| CombatAction::PlayCard {
                        card: card.id.clone(),
                        target: Some(p),
                    }));
                } else {
                    actions.push(CombatAction::PlayCard {
                        card: card.id.clone(),
                        target: None,
                    });
                }
            }
        }

        if state.has_free_move(self.config.free_moves_per_turn) {
            actions.extend(elsewhere.iter().map(|&position| CombatAction::MovePlayer { position }));
        }

        for card in &cards {
            actions.extend(elsewhere.iter().map(|&position| CombatAction::DiscardToMove {
                card: card.id.clone(),
                position,
            }));
        }

        actions.push(CombatAction::EndTurn);
        actions
    }

    // === Internals ===

    fn live_state(&self) -> Result<&CombatState, CombatError> {
        match self.phase {
            CombatPhase::CombatStart => Err(CombatError::NotStarted),
            CombatPhase::CombatEnd(_) => Err(CombatError::CombatOver),
            CombatPhase::PlayerTurn | CombatPhase::MonsterTurn => self.state.as_ref().ok_or(CombatError::NotStarted),
        }
    }

    fn validate_play(&self, card_id: &CardId, target: Option<Position>) -> Result<(), CombatError> {
        let state = self.live_state()?;

        let card = state
            .piles
            .find_in_hand(card_id)
            .and_then(|idx| state.piles.hand().get(idx))
            .ok_or_else(|| CombatError::CardNotInHand(card_id.clone()))?;

        if !state.can_play_card() {
            return Err(CombatError::AllowanceExhausted {
                allowed: state.player_card_allowance,
            });
        }

        if card.needs_target() && target.is_none() {
            return Err(CombatError::TargetRequired(card.id.clone()));
        }

        Ok(())
    }

    fn resolution(&mut self) -> Result<Resolution<'_>, CombatError> {
        let state = self.state.as_mut().ok_or(CombatError::NotStarted)?;
        Ok(Resolution {
            state,
            rng: &mut self.rng,
            bus: &mut self.bus,
            config: &self.config,
        })
    }

    fn reject(&mut self, error: CombatError) -> Result<CombatPhase, CombatError> {
        warn!(%error, "operation rejected");
        self.bus.publish(&CombatEvent::Error {
            message: error.to_string(),
        });
        Err(error)
    }

    fn check_end(&self) -> Option<CombatResult> {
        let state = self.state.as_ref()?;
        if state.monster.is_defeated() {
            Some(CombatResult::Victory)
        } else if state.player.is_defeated() {
            Some(CombatResult::Defeat)
        } else {
            None
        }
    }

    /// End the combat if either side is finished, otherwise stay in the
    /// current phase.
    fn settle(&mut self) -> CombatPhase {
        match self.check_end() {
            Some(result) => self.finish(result),
            None => self.phase,
        }
    }

    fn finish(&mut self, result: CombatResult) -> CombatPhase {
        self.phase = CombatPhase::CombatEnd(result);
        let turn = self.state.as_ref().map_or(0, |s| s.turn);
        debug!(?result, turn, "combat ended");
        self.bus.publish(&CombatEvent::CombatEnded { result });
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Weapon;
    use crate::monsters::{AttackKind, MonsterAttack, MonsterPart, MonsterTier};

    fn monster(allowance: u32) -> Monster {
        Monster::new(
            "test",
            "Test",
            MonsterTier::Small,
            vec![
                MonsterPart::new("head", "Head", 20),
                MonsterPart::new("body", "Body", 30),
                MonsterPart::new("tail", "Tail", 15),
            ],
            vec![MonsterAttack::new("basic", "Basic", AttackKind::Basic, 5, &[Position::LEFT], allowance)],
        )
    }

    fn roster() -> PlayerRoster {
        let mut deck = vec![Card::attack("slash", "Slash", Weapon::SwordAndShield, 4); 5];
        deck.extend(vec![Card::defense("guard", "Guard", Weapon::SwordAndShield, 3); 5]);
        PlayerRoster::new(30, Weapon::SwordAndShield, deck)
    }

    fn started(allowance: u32) -> CombatEngine {
        let config = CombatConfig::default().with_hand_size(10);
        let mut engine = CombatEngine::new(config, 1);
        engine.start_combat(&roster(), &monster(allowance)).unwrap();
        engine
    }

    #[test]
    fn test_legal_actions_at_turn_start() {
        let engine = started(3);
        let actions = engine.legal_actions();

        // slash x3 targets, guard, 2 moves, 2 cards x 2 discard-moves, end
        assert_eq!(actions.len(), 3 + 1 + 2 + 4 + 1);
        assert!(actions.contains(&CombatAction::PlayCard {
            card: CardId::new("slash"),
            target: Some(Position::RIGHT),
        }));
        assert!(actions.contains(&CombatAction::PlayCard {
            card: CardId::new("guard"),
            target: None,
        }));
        assert!(!actions.contains(&CombatAction::MovePlayer {
            position: Position::CENTER,
        }));
        assert_eq!(actions.last(), Some(&CombatAction::EndTurn));
    }

    #[test]
    fn test_legal_actions_respect_budgets() {
        let mut engine = started(1);
        engine.play_card(&CardId::new("guard"), None).unwrap();
        engine.move_player(Position::LEFT).unwrap();

        let actions = engine.legal_actions();
        assert!(actions.iter().all(|a| !matches!(a, CombatAction::PlayCard { .. } | CombatAction::MovePlayer { .. })));
        assert!(actions.iter().any(|a| matches!(a, CombatAction::DiscardToMove { .. })));

        for action in actions {
            let mut copy = started(1);
            copy.apply(&CombatAction::PlayCard {
                card: CardId::new("guard"),
                target: None,
            })
            .unwrap();
            copy.move_player(Position::LEFT).unwrap();
            assert!(copy.apply(&action).is_ok(), "{action:?}");
        }
    }

    #[test]
    fn test_rng_checkpoint_resumes_identically() {
        let config = CombatConfig::default();
        let mut original = CombatEngine::new(config.clone(), 77);
        let checkpoint = original.rng_state();
        let mut resumed = CombatEngine::with_rng_state(config, &checkpoint);

        original.start_combat(&roster(), &monster(3)).unwrap();
        resumed.start_combat(&roster(), &monster(3)).unwrap();
        assert_eq!(original.snapshot(), resumed.snapshot());
    }

    #[test]
    fn test_outcome_only_when_over() {
        let mut engine = started(3);
        assert!(engine.outcome().is_none());
        assert!(!engine.is_over());

        for target in [Position::LEFT, Position::CENTER, Position::RIGHT] {
            for _ in 0..12 {
                if engine.is_over() {
                    break;
                }
                if engine.play_card(&CardId::new("slash"), Some(target)).is_err() {
                    engine.end_player_turn().unwrap();
                }
            }
        }
        assert!(engine.is_over());
        assert_eq!(engine.outcome().map(|o| o.result), Some(CombatResult::Victory));
    }
}
