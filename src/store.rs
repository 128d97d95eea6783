//! Narrow observable value used for UI state that several consumers read.

use std::fmt;

/// Handle returned by [`Store::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A single observable value.
///
/// Writes that do not change the value are dropped: subscribers are only notified (and the
/// version only advances) when the stored value actually changes.
pub struct Store<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(&T)>)>,
}

impl<T: PartialEq> Store<T> {
    /// Create a store holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of effective writes since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace the value. Returns `true` when the value changed and subscribers were notified.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        for (_, f) in &mut self.subscribers {
            f(&self.value);
        }
        true
    }

    /// Register a callback invoked with the new value after each effective write.
    pub fn subscribe(&mut self, f: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Returns `false` when the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/unit/store.rs"]
mod tests;
