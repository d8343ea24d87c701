//! Error types.
//!
//! Two classes of engine failure exist:
//!
//! - **Rejected operations**: the driver asked for something the rules
//!   forbid (card not in hand, allowance spent, missing target). The engine
//!   leaves state untouched, emits an `error` event carrying the
//!   `Display` text, and returns the error.
//! - **Precondition failures**: the engine was called before combat started
//!   or after it ended. No event is emitted and nothing is mutated.

use thiserror::Error;

use crate::core::ids::{CardId, MonsterId};

/// Errors returned by [`CombatEngine`](crate::rules::CombatEngine) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CombatError {
    /// An operation was invoked before `start_combat`.
    #[error("combat has not started")]
    NotStarted,

    /// `start_combat` was invoked while a combat is in progress.
    #[error("combat has already started")]
    AlreadyStarted,

    /// An operation was invoked after the combat ended.
    #[error("combat is over")]
    CombatOver,

    /// The card is not in the player's hand.
    #[error("Card {0} is not in hand")]
    CardNotInHand(CardId),

    /// The telegraphed monster attack allows no more card plays this turn.
    #[error("Cannot play more cards this turn (allowed {allowed})")]
    AllowanceExhausted {
        /// Cards allowed this turn.
        allowed: u32,
    },

    /// The free-move budget for this turn is spent.
    #[error("No free moves left this turn. Discard a card to move again.")]
    NoFreeMoves,

    /// The card needs a target position and none was given.
    #[error("Card {0} requires a target position")]
    TargetRequired(CardId),

    /// A position index outside the battlefield.
    #[error("Position {0} is outside the battlefield")]
    InvalidPosition(u8),

    /// The monster template cannot be fought.
    #[error("Monster {id} cannot start combat: {reason}")]
    InvalidMonster {
        /// Offending template.
        id: MonsterId,
        /// What is wrong with it.
        reason: &'static str,
    },
}

impl CombatError {
    /// True for precondition failures (engine used outside a live combat).
    ///
    /// These are programming errors in the driver and never produce an
    /// `error` event.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::NotStarted | Self::AlreadyStarted | Self::CombatOver)
    }
}

/// Errors returned by progression repositories and the settlement helper.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// There is no run in progress to record against.
    #[error("no run in progress")]
    NoActiveRun,

    /// The engine has not reached a terminal phase.
    #[error("combat has not finished")]
    CombatNotFinished,
}
