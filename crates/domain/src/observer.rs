//! Change-notification plumbing
//!
//! A small, explicit subject abstraction: mutable state owns a
//! [`ChangeNotifier`], subscribers register a callback keyed by a
//! [`SubscriptionId`], and each committed mutation calls
//! [`ChangeNotifier::notify`] with the name of the property that changed.
//!
//! The domain is single-threaded and synchronous (one logical actor per
//! aggregate), so callbacks are plain boxed closures with no locking.
//! Delivery order follows subscription order; no further ordering is
//! guaranteed.

use std::fmt;

/// Handle returned by [`ChangeNotifier::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subject side of the observer contract.
///
/// Cloning a notifier (or a value that owns one) yields an empty notifier:
/// subscriptions are tied to the original instance and do not travel with
/// copies.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn Fn(&str)>)>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked with the property name on every
    /// committed mutation.
    pub fn subscribe(&mut self, observer: impl Fn(&str) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered callback. Returns `false` if the
    /// subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Notify all subscribers, in subscription order, that `property`
    /// changed.
    pub fn notify(&self, property: &str) {
        for (_, observer) in &self.subscribers {
            observer(property);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Clone for ChangeNotifier {
    fn clone(&self) -> Self {
        Self::default()
    }
}
