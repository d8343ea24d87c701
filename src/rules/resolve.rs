//! State transitions shared by the engine's operations.
//!
//! A [`Resolution`] borrows everything one operation needs (state, RNG,
//! event bus, config) so the steps of card resolution, triggers and the
//! monster attack can be written as small methods without fighting the
//! borrow checker over `CombatEngine`'s fields.
//!
//! Nothing here validates. The engine checks an operation is legal first,
//! then drives a `Resolution` through it.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::{Card, CardKind, TargetMode};
use crate::core::config::CombatConfig;
use crate::core::ids::PartId;
use crate::core::position::Position;
use crate::core::rng::GameRng;
use crate::core::state::CombatState;
use crate::effects::damage::{after_block, incoming_damage, outgoing_damage};
use crate::effects::{resolve_effect_trigger, StateDelta, StatusEffect, StatusKind, TriggerPhase};
use crate::events::{CombatEvent, EffectTarget, EventBus};
use crate::monsters::AttackKind;

use super::phase::CombatResult;

/// Mutable view over one combat for the duration of an operation.
pub(crate) struct Resolution<'a> {
    pub state: &'a mut CombatState,
    pub rng: &'a mut GameRng,
    pub bus: &'a mut EventBus,
    pub config: &'a CombatConfig,
}

impl Resolution<'_> {
    pub fn emit(&mut self, event: CombatEvent) {
        trace!(event = %event.kind(), "emit");
        self.bus.publish(&event);
    }

    // === Cards ===

    /// Draw one card, reshuffling the discard if the deck is empty.
    ///
    /// Returns false when there was nothing to draw.
    pub fn draw_card(&mut self) -> bool {
        let Some(drawn) = self.state.piles.draw(self.rng) else {
            return false;
        };
        if drawn.reshuffled {
            self.emit(CombatEvent::DeckShuffled);
        }
        self.emit(CombatEvent::CardDrawn { card: drawn.card });
        true
    }

    /// Draw until the hand holds `hand_size` cards or nothing is left.
    pub fn refill_hand(&mut self) {
        while self.state.piles.hand().len() < self.config.hand_size && self.draw_card() {}
    }

    /// Draw up to `count` extra cards.
    pub fn draw_extra(&mut self, count: u32) {
        for _ in 0..count {
            if !self.draw_card() {
                break;
            }
        }
    }

    /// Apply a played card's effect. The card is out of every pile while
    /// this runs.
    pub fn resolve_card(&mut self, card: &Card, target: Option<Position>) {
        match card.kind {
            CardKind::Attack => self.resolve_attack(card, target),
            CardKind::Defense => {
                if let Some(block) = card.block {
                    self.state.player.add_block(block);
                    self.emit(CombatEvent::PlayerBlocked { block });
                }
            }
            CardKind::Movement => {
                if let Some(position) = target {
                    self.move_player(position, false);
                }
            }
            CardKind::Special => self.resolve_special(card),
        }

        if let Some(count) = card.draw_count {
            self.draw_extra(count);
        }
    }

    fn resolve_attack(&mut self, card: &Card, target: Option<Position>) {
        let parts: SmallVec<[usize; 3]> = match card.target_mode {
            TargetMode::All => (0..self.state.monster.parts.len()).collect(),
            TargetMode::Single | TargetMode::Position | TargetMode::SelfTarget => target
                .and_then(|position| self.state.monster.part_index_at(position))
                .into_iter()
                .collect(),
        };

        if let Some(base) = card.damage {
            for &index in &parts {
                let Some(part) = self.state.monster.parts.get(index) else {
                    continue;
                };
                let damage = outgoing_damage(base, &part.status_effects, &self.state.player.status_effects);
                self.damage_part(index, damage);
            }
        }

        for applied in &card.applied_effects {
            let effect = applied.to_status();
            for &index in &parts {
                if let Some(part) = self.apply_part_effect(index, effect) {
                    self.emit(CombatEvent::MonsterEffectApplied { effect, part });
                }
            }
        }

        let on_hit = card
            .status_on_hit
            .and_then(|kind| self.config.status_presets.effect_for(kind));
        if let Some(effect) = on_hit {
            for &index in &parts {
                if let Some(part) = self.apply_part_effect(index, effect) {
                    self.emit(CombatEvent::StatusEffectApplied {
                        effect,
                        target_type: EffectTarget::Monster,
                        part_id: Some(part),
                    });
                }
            }
        }
    }

    fn resolve_special(&mut self, card: &Card) {
        if let Some(heal) = card.heal {
            let amount = self.state.player.heal(heal);
            self.emit(CombatEvent::PlayerHealed { amount });
        }

        if let Some(applied) = card.self_effect {
            match applied.kind {
                StatusKind::Buff => {
                    let effect = applied.to_status();
                    self.state.player.status_effects.apply(effect);
                    self.emit(CombatEvent::PlayerEffectApplied { effect });
                }
                kind => trace!(effect = %kind, card = %card.id, "self effect has no handler"),
            }
        }
    }

    // === Monster ===

    /// Damage one part and the monster's total health.
    ///
    /// `partBroken` precedes `monsterDamaged` when the hit breaks the part.
    pub fn damage_part(&mut self, index: usize, amount: i32) {
        let Some(hit) = self.state.damage_part(index, amount) else {
            return;
        };

        if hit.newly_broken {
            debug!(part = %hit.part, "part broken");
            self.emit(CombatEvent::PartBroken { part: hit.part.clone() });
        }
        self.emit(CombatEvent::MonsterDamaged {
            part: hit.part,
            damage: hit.dealt,
            total_health: hit.total_health,
        });
    }

    fn apply_part_effect(&mut self, index: usize, effect: StatusEffect) -> Option<PartId> {
        let part = self.state.monster.parts.get_mut(index)?;
        part.status_effects.apply(effect);
        trace!(part = %part.id, effect = %effect.kind, duration = effect.duration, "part effect applied");
        Some(part.id.clone())
    }

    /// Resolve the telegraphed attack.
    ///
    /// Returns the result if either side fell during the attack; the attack
    /// pointer is then left where it is. Otherwise block resets and the
    /// pointer advances.
    pub fn monster_attack(&mut self) -> Option<CombatResult> {
        let attack = self.state.current_attack().cloned()?;

        if self.state.monster.is_stunned() {
            debug!(attack = %attack.id, "monster stunned, attack skipped");
            self.emit(CombatEvent::MonsterStunned);
        } else {
            debug!(attack = %attack.id, position = %self.state.player.position, "monster attacks");

            if attack.kind == AttackKind::Reposition {
                self.run_part_triggers(TriggerPhase::Moved);
                if self.state.monster.is_defeated() {
                    debug!(attack = %attack.id, "monster fell while repositioning");
                    return Some(CombatResult::Victory);
                }
            }

            if attack.hits(self.state.player.position) {
                let damage = after_block(
                    incoming_damage(attack.damage, &self.state.player.status_effects),
                    self.state.player.block,
                );
                self.state.player.take_damage(damage);
                self.emit(CombatEvent::PlayerDamaged { damage });

                if self.state.player.is_defeated() {
                    return Some(CombatResult::Defeat);
                }
            }
        }

        self.state.player.block = 0;
        self.state.advance_attack();
        None
    }

    /// Apply the new intention's allowance and announce it.
    pub fn reveal_intention(&mut self) {
        if let Some(attack) = self.state.reveal_intention() {
            self.emit(CombatEvent::MonsterIntentionRevealed { attack });
        }
    }

    // === Player ===

    /// Put the player at `position` and fire movement triggers.
    pub fn move_player(&mut self, position: Position, free: bool) {
        self.state.player.position = position;
        self.emit(CombatEvent::PlayerMoved { position, free });
        self.run_player_triggers(TriggerPhase::Moved);
    }

    // === Status effects ===

    /// Fire every player effect for `phase`.
    pub fn run_player_triggers(&mut self, phase: TriggerPhase) {
        let effects: SmallVec<[StatusEffect; 4]> = self.state.player.status_effects.iter().copied().collect();

        for effect in effects {
            match resolve_effect_trigger(&effect, phase) {
                StateDelta::Unchanged => {}
                StateDelta::Damage(damage) => {
                    trace!(effect = %effect.kind, ?phase, damage, "player effect fired");
                    self.emit(CombatEvent::activated(&effect, EffectTarget::Player, None));
                    self.state.player.take_damage(damage);
                    self.emit(CombatEvent::PlayerDamaged { damage });
                }
            }
        }
    }

    /// Fire every monster-part effect for `phase`, part by part.
    pub fn run_part_triggers(&mut self, phase: TriggerPhase) {
        for index in 0..self.state.monster.parts.len() {
            let Some(part) = self.state.monster.parts.get(index) else {
                continue;
            };
            let part_id = part.id.clone();
            let effects: SmallVec<[StatusEffect; 4]> = part.status_effects.iter().copied().collect();

            for effect in effects {
                match resolve_effect_trigger(&effect, phase) {
                    StateDelta::Unchanged => {}
                    StateDelta::Damage(damage) => {
                        trace!(part = %part_id, effect = %effect.kind, ?phase, damage, "part effect fired");
                        self.emit(CombatEvent::activated(&effect, EffectTarget::Monster, Some(part_id.clone())));
                        self.damage_part(index, damage);
                    }
                }
            }
        }
    }

    /// Decrement player effect durations, dropping expired ones.
    pub fn tick_player_effects(&mut self) {
        for kind in self.state.player.status_effects.tick() {
            trace!(effect = %kind, "player effect expired");
        }
    }

    /// Decrement every part's effect durations, dropping expired ones.
    pub fn tick_part_effects(&mut self) {
        for part in &mut self.state.monster.parts {
            for kind in part.status_effects.tick() {
                trace!(part = %part.id, effect = %kind, "part effect expired");
            }
        }
    }
}
