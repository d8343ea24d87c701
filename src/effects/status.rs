//! Status effects as plain data.
//!
//! An effect is a `{kind, duration, magnitude}` triple. Behaviour lives in
//! the engine and in [`resolve_effect_trigger`](super::resolve_effect_trigger),
//! never inside the effect, so effects clone and serialize like any other
//! value.
//!
//! A target (the player or one monster part) holds at most one effect per
//! kind. Re-applying a kind overwrites the old instance in place: the
//! newest duration and magnitude win, nothing stacks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The kinds of status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Damage at the end of each turn.
    Poison,
    /// Damage whenever the afflicted target moves.
    Bleeding,
    /// Damage at the end of each turn.
    Burning,
    /// A stunned monster skips its attack.
    Stun,
    /// Bonus damage on the player's attacks.
    Buff,
    /// Extra damage taken.
    Weakness,
    /// Reduced damage taken (never below 1).
    Resistance,
    /// No engine behaviour.
    Sharpness,
}

impl StatusKind {
    /// Every kind, in declaration order.
    pub const ALL: [StatusKind; 8] = [
        StatusKind::Poison,
        StatusKind::Bleeding,
        StatusKind::Burning,
        StatusKind::Stun,
        StatusKind::Buff,
        StatusKind::Weakness,
        StatusKind::Resistance,
        StatusKind::Sharpness,
    ];

    /// Display name shown to the player.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            StatusKind::Poison => "Poison",
            StatusKind::Bleeding => "Bleeding",
            StatusKind::Burning => "Burning",
            StatusKind::Stun => "Stunned",
            StatusKind::Buff => "Attack Up",
            StatusKind::Weakness => "Weakness Exploit",
            StatusKind::Resistance => "Resistance",
            StatusKind::Sharpness => "Sharpened Weapon",
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One active status effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusEffect {
    /// What the effect does.
    pub kind: StatusKind,
    /// Remaining turn boundaries before it expires.
    pub duration: u32,
    /// Damage per tick, or bonus/reduction amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<i32>,
}

impl StatusEffect {
    /// Create an effect without magnitude. Duration is at least 1.
    #[must_use]
    pub fn new(kind: StatusKind, duration: u32) -> Self {
        Self {
            kind,
            duration: duration.max(1),
            magnitude: None,
        }
    }

    /// Set the magnitude (builder pattern).
    #[must_use]
    pub fn with_magnitude(mut self, magnitude: i32) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// Poison dealing `per_turn` damage at each turn end.
    #[must_use]
    pub fn poison(duration: u32, per_turn: i32) -> Self {
        Self::new(StatusKind::Poison, duration).with_magnitude(per_turn)
    }

    /// Burning dealing `per_turn` damage at each turn end.
    #[must_use]
    pub fn burning(duration: u32, per_turn: i32) -> Self {
        Self::new(StatusKind::Burning, duration).with_magnitude(per_turn)
    }

    /// Bleeding dealing `per_move` damage whenever the target moves.
    #[must_use]
    pub fn bleeding(duration: u32, per_move: i32) -> Self {
        Self::new(StatusKind::Bleeding, duration).with_magnitude(per_move)
    }

    /// Stun.
    #[must_use]
    pub fn stun(duration: u32) -> Self {
        Self::new(StatusKind::Stun, duration)
    }

    /// Attack bonus.
    #[must_use]
    pub fn buff(duration: u32, bonus: i32) -> Self {
        Self::new(StatusKind::Buff, duration).with_magnitude(bonus)
    }

    /// Magnitude, or zero when unset.
    #[must_use]
    pub fn amount(&self) -> i32 {
        self.magnitude.unwrap_or(0)
    }
}

/// The status effects on one target, keyed by kind.
///
/// Insertion order is kept so effects tick in the order they were first
/// applied; replacing an effect keeps its slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffects {
    effects: SmallVec<[StatusEffect; 4]>,
}

impl StatusEffects {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an effect, replacing any existing effect of the same kind.
    ///
    /// Returns the replaced effect, if any.
    pub fn apply(&mut self, effect: StatusEffect) -> Option<StatusEffect> {
        match self.effects.iter_mut().find(|e| e.kind == effect.kind) {
            Some(slot) => Some(std::mem::replace(slot, effect)),
            None => {
                self.effects.push(effect);
                None
            }
        }
    }

    /// Get the active effect of a kind.
    #[must_use]
    pub fn get(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Check whether an effect of this kind is active.
    #[must_use]
    pub fn has(&self, kind: StatusKind) -> bool {
        self.get(kind).is_some()
    }

    /// Magnitude of the active effect of this kind, or zero.
    #[must_use]
    pub fn magnitude(&self, kind: StatusKind) -> i32 {
        self.get(kind).map_or(0, StatusEffect::amount)
    }

    /// Decrement every duration by one and drop expired effects.
    ///
    /// Returns the kinds that expired.
    pub fn tick(&mut self) -> SmallVec<[StatusKind; 4]> {
        let mut expired = SmallVec::new();
        for effect in &mut self.effects {
            effect.duration = effect.duration.saturating_sub(1);
            if effect.duration == 0 {
                expired.push(effect.kind);
            }
        }
        self.effects.retain(|e| e.duration > 0);
        expired
    }

    /// Remove an effect by kind.
    pub fn remove(&mut self, kind: StatusKind) -> Option<StatusEffect> {
        let idx = self.effects.iter().position(|e| e.kind == kind)?;
        Some(self.effects.remove(idx))
    }

    /// Iterate over active effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    /// Number of active effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.effects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_not_stack() {
        let mut set = StatusEffects::new();
        assert!(set.apply(StatusEffect::poison(3, 3)).is_none());

        let replaced = set.apply(StatusEffect::poison(1, 5));
        assert_eq!(replaced, Some(StatusEffect::poison(3, 3)));

        assert_eq!(set.len(), 1);
        let poison = set.get(StatusKind::Poison).unwrap();
        assert_eq!(poison.duration, 1);
        assert_eq!(poison.magnitude, Some(5));
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut set = StatusEffects::new();
        set.apply(StatusEffect::stun(1));
        set.apply(StatusEffect::poison(3, 3));
        set.apply(StatusEffect::stun(2));

        let kinds: Vec<_> = set.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![StatusKind::Stun, StatusKind::Poison]);
    }

    #[test]
    fn test_tick_expires() {
        let mut set = StatusEffects::new();
        set.apply(StatusEffect::stun(1));
        set.apply(StatusEffect::burning(2, 5));

        let expired = set.tick();
        assert_eq!(expired.as_slice(), &[StatusKind::Stun]);
        assert!(!set.has(StatusKind::Stun));
        assert_eq!(set.get(StatusKind::Burning).unwrap().duration, 1);

        let expired = set.tick();
        assert_eq!(expired.as_slice(), &[StatusKind::Burning]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_zero_duration_clamped() {
        let effect = StatusEffect::new(StatusKind::Sharpness, 0);
        assert_eq!(effect.duration, 1);
    }

    #[test]
    fn test_magnitude_defaults_to_zero() {
        let mut set = StatusEffects::new();
        assert_eq!(set.magnitude(StatusKind::Buff), 0);
        set.apply(StatusEffect::stun(1));
        assert_eq!(set.magnitude(StatusKind::Stun), 0);
        set.apply(StatusEffect::buff(1, 3));
        assert_eq!(set.magnitude(StatusKind::Buff), 3);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&StatusEffect::stun(1)).unwrap();
        assert_eq!(json, r#"{"kind":"stun","duration":1}"#);

        let poison: StatusEffect =
            serde_json::from_str(r#"{"kind":"poison","duration":3,"magnitude":3}"#).unwrap();
        assert_eq!(poison, StatusEffect::poison(3, 3));
    }
}
