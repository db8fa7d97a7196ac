//! Experience ledger - the single spendable currency driving all derived
//! power levels.

use serde::{Deserialize, Serialize};

use crate::observer::{ChangeNotifier, SubscriptionId};

/// Experience points for one progressing entity (an attribute, skill,
/// trait, or a character's own pool).
///
/// `total_experience` accumulates every delta ever applied and may go
/// negative (experience debt). `current_experience` is the residual left
/// after the most recently attained level; it is maintained by the owning
/// derivation routine, not settable by outside callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperiencePoints {
    total_experience: i32,
    current_experience: i32,
    #[serde(skip)]
    notifier: ChangeNotifier,
}

impl ExperiencePoints {
    /// Property name published when the total changes.
    pub const TOTAL_EXPERIENCE: &'static str = "total_experience";
    /// Property name published when the residual changes.
    pub const CURRENT_EXPERIENCE: &'static str = "current_experience";

    /// A ledger seeded with `value`: both the total and the residual
    /// expose `value` until the first derivation settles the residual.
    pub fn new(value: i32) -> Self {
        Self {
            total_experience: value,
            current_experience: value,
            notifier: ChangeNotifier::new(),
        }
    }

    #[inline]
    pub fn total_experience(&self) -> i32 {
        self.total_experience
    }

    #[inline]
    pub fn current_experience(&self) -> i32 {
        self.current_experience
    }

    /// Apply a signed experience delta.
    ///
    /// A delta of 0 performs no mutation and raises no notification. No
    /// bounds are enforced; totals may go negative. One notification is
    /// raised per field that actually changed.
    pub fn add_experience(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }

        self.total_experience += delta;
        tracing::trace!(delta, total = self.total_experience, "experience added");
        self.notifier.notify(Self::TOTAL_EXPERIENCE);

        self.current_experience += delta;
        self.notifier.notify(Self::CURRENT_EXPERIENCE);
    }

    /// Settle the residual after a derivation. Notifies only on an actual
    /// change, which keeps repeated derivations quiet.
    pub(crate) fn settle_current(&mut self, value: i32) {
        if self.current_experience != value {
            self.current_experience = value;
            self.notifier.notify(Self::CURRENT_EXPERIENCE);
        }
    }

    /// Subscribe to field-change notifications.
    pub fn subscribe(&mut self, observer: impl Fn(&str) + 'static) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    /// Drop a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl Default for ExperiencePoints {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PartialEq for ExperiencePoints {
    fn eq(&self, other: &Self) -> bool {
        self.total_experience == other.total_experience
            && self.current_experience == other.current_experience
    }
}

impl Eq for ExperiencePoints {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_construction_exposes_seed_in_both_fields() {
        let ledger = ExperiencePoints::new(100);
        assert_eq!(ledger.total_experience(), 100);
        assert_eq!(ledger.current_experience(), 100);
    }

    #[test]
    fn test_add_experience_mutates_both_fields() {
        for delta in [20, -20, 10, -10, 100, -100] {
            let mut ledger = ExperiencePoints::new(100);
            ledger.add_experience(delta);
            assert_eq!(ledger.total_experience(), 100 + delta);
            assert_eq!(ledger.current_experience(), 100 + delta);
        }
    }

    #[test]
    fn test_total_may_go_negative() {
        let mut ledger = ExperiencePoints::new(0);
        ledger.add_experience(-125);
        assert_eq!(ledger.total_experience(), -125);
    }

    #[test]
    fn test_additivity_of_deltas() {
        let mut split = ExperiencePoints::new(0);
        for delta in [35, -10, 50, 25] {
            split.add_experience(delta);
        }

        let mut single = ExperiencePoints::new(0);
        single.add_experience(100);

        assert_eq!(split.total_experience(), single.total_experience());
    }

    #[test]
    fn test_add_notifies_each_changed_field() {
        let mut ledger = ExperiencePoints::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        ledger.subscribe(move |property| sink.borrow_mut().push(property.to_string()));

        ledger.add_experience(20);
        assert_eq!(
            *seen.borrow(),
            vec![
                ExperiencePoints::TOTAL_EXPERIENCE.to_string(),
                ExperiencePoints::CURRENT_EXPERIENCE.to_string()
            ]
        );
    }

    #[test]
    fn test_zero_delta_is_silent_noop() {
        let mut ledger = ExperiencePoints::new(50);
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        ledger.subscribe(move |_| *sink.borrow_mut() += 1);

        ledger.add_experience(0);
        assert_eq!(*count.borrow(), 0);
        assert_eq!(ledger.total_experience(), 50);
        assert_eq!(ledger.current_experience(), 50);
    }

    #[test]
    fn test_settle_current_notifies_only_on_change() {
        let mut ledger = ExperiencePoints::new(120);
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        ledger.subscribe(move |_| *sink.borrow_mut() += 1);

        ledger.settle_current(20);
        assert_eq!(*count.borrow(), 1);
        ledger.settle_current(20);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(ledger.current_experience(), 20);
        assert_eq!(ledger.total_experience(), 120);
    }

    #[test]
    fn test_serde_skips_notifier() {
        let mut ledger = ExperiencePoints::new(100);
        ledger.add_experience(25);

        let json = serde_json::to_string(&ledger).expect("serialize");
        let restored: ExperiencePoints = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, ledger);
    }
}
