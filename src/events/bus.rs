//! Synchronous publish/subscribe for combat events.
//!
//! Subscribers register either for one [`EventKind`] or for every event.
//! Publishing delivers the event to each matching subscriber in the order
//! they subscribed, before `publish` returns. Subscribers only observe:
//! they receive `&CombatEvent` and have no access to the engine.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::{CombatEvent, EventKind};

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl SubscriptionId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Receives combat events.
///
/// Implemented for every `FnMut(&CombatEvent)`, so closures can subscribe
/// directly.
pub trait Subscriber {
    /// Called once per delivered event.
    fn on_event(&mut self, event: &CombatEvent);
}

impl<F> Subscriber for F
where
    F: FnMut(&CombatEvent),
{
    fn on_event(&mut self, event: &CombatEvent) {
        self(event);
    }
}

/// Event bus.
#[derive(Default)]
pub struct EventBus {
    /// All subscribers.
    subscribers: FxHashMap<SubscriptionId, Box<dyn Subscriber>>,

    /// Index by event kind for fast lookup.
    by_kind: FxHashMap<EventKind, Vec<SubscriptionId>>,

    /// Subscribers receiving every event.
    wildcard: Vec<SubscriptionId>,

    next_id: u32,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("kinds", &self.by_kind.len())
            .field("wildcard", &self.wildcard.len())
            .finish()
    }
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self, subscriber: Box<dyn Subscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id, subscriber);
        id
    }

    /// Subscribe to one kind of event.
    pub fn subscribe(&mut self, kind: EventKind, subscriber: impl Subscriber + 'static) -> SubscriptionId {
        let id = self.allocate(Box::new(subscriber));
        self.by_kind.entry(kind).or_default().push(id);
        id
    }

    /// Subscribe to every event.
    pub fn subscribe_all(&mut self, subscriber: impl Subscriber + 'static) -> SubscriptionId {
        let id = self.allocate(Box::new(subscriber));
        self.wildcard.push(id);
        id
    }

    /// Remove a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if self.subscribers.remove(&id).is_none() {
            return false;
        }

        self.wildcard.retain(|&s| s != id);
        let mut empty_kinds = Vec::new();
        for (kind, list) in &mut self.by_kind {
            list.retain(|&s| s != id);
            if list.is_empty() {
                empty_kinds.push(*kind);
            }
        }
        for kind in empty_kinds {
            self.by_kind.remove(&kind);
        }
        true
    }

    /// Deliver an event to every matching subscriber, in subscription order.
    pub fn publish(&mut self, event: &CombatEvent) {
        // Both lists are in allocation order; merge them.
        let mut wildcard = self.wildcard.as_slice();
        let mut specific = self.by_kind.get(&event.kind()).map_or(&[][..], Vec::as_slice);

        loop {
            let id = match (wildcard.first(), specific.first()) {
                (Some(&w), Some(&k)) if w < k => {
                    wildcard = &wildcard[1..];
                    w
                }
                (_, Some(&k)) => {
                    specific = &specific[1..];
                    k
                }
                (Some(&w), None) => {
                    wildcard = &wildcard[1..];
                    w
                }
                (None, None) => break,
            };
            if let Some(subscriber) = self.subscribers.get_mut(&id) {
                subscriber.on_event(event);
            }
        }
    }

    /// Number of active subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Check if nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

/// Records every event it receives.
///
/// Clones share the same buffer, so a driver keeps one handle and gives
/// the bus another via [`EventLog::subscriber`].
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<CombatEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber appending to this log.
    #[must_use]
    pub fn subscriber(&self) -> impl Subscriber + 'static {
        let events = Rc::clone(&self.events);
        move |event: &CombatEvent| events.borrow_mut().push(event.clone())
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<CombatEvent> {
        self.events.borrow().clone()
    }

    /// Kinds recorded so far, in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(CombatEvent::kind).collect()
    }

    /// How many events of `kind` were recorded.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.borrow().iter().filter(|e| e.kind() == kind).count()
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&self) -> Vec<CombatEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Forget everything recorded.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}
