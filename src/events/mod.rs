//! Combat events and their delivery.
//!
//! ## Key Types
//!
//! - `CombatEvent`: tagged union of everything the engine announces
//! - `EventKind`: discriminant used to subscribe to one kind
//! - `EventBus`: synchronous, in-order publish/subscribe
//! - `EventLog`: subscriber that records events for later inspection

pub mod bus;
pub mod event;

pub use bus::{EventBus, EventLog, Subscriber, SubscriptionId};
pub use event::{CombatEvent, EffectTarget, EventKind};
