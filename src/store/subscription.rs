// src/store/subscription.rs
use super::provider::ProviderState;
use crate::i18n::Locale;
use std::rc::{Rc, Weak};

pub type Listener = Rc<dyn Fn(Locale)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Change listeners registered with one provider.
#[derive(Default)]
pub struct SubscriberRegistry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl SubscriberRegistry {
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.listeners.iter().any(|(existing, _)| *existing == id)
    }

    /// Copy of the current listeners, so dispatch can run without holding a
    /// borrow of the registry.
    pub fn snapshot(&self) -> Vec<(SubscriptionId, Listener)> {
        self.listeners.clone()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Registration handle. Dropping it removes the listener.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: SubscriptionId,
    provider: Weak<ProviderState>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, provider: Weak<ProviderState>) -> Self {
        Self { id, provider }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.provider.upgrade() {
            state.listeners.borrow_mut().unsubscribe(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let mut registry = SubscriberRegistry::default();
        let a = registry.subscribe(Rc::new(|_| {}));
        let b = registry.subscribe(Rc::new(|_| {}));
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);

        assert!(registry.unsubscribe(a));
        assert!(!registry.unsubscribe(a));
        assert!(!registry.contains(a));
        assert!(registry.contains(b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let hits = Rc::new(Cell::new(0));
        let mut registry = SubscriberRegistry::default();
        let counter = Rc::clone(&hits);
        let id = registry.subscribe(Rc::new(move |_| counter.set(counter.get() + 1)));

        let snapshot = registry.snapshot();
        registry.unsubscribe(id);
        assert!(registry.is_empty());

        for (_, listener) in snapshot {
            listener(Locale::De);
        }
        assert_eq!(hits.get(), 1);
    }
}
