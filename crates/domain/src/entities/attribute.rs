//! Attribute entity - one of the eight fixed character attributes.
//!
//! The score is derived, never stored: one point per 100 XP, floored and
//! clamped to the allowed maximum.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::AttributeId;
use crate::observer::{ChangeNotifier, SubscriptionId};
use crate::progression;
use crate::value_objects::{AttributeCode, ExperiencePoints};

/// A character attribute (Strength, Reflexes, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    id: AttributeId,
    code: AttributeCode,
    description: String,
    experience: ExperiencePoints,
    maximum_score_allowed: i32,
    phenotype_modifier: i32,
    link_modifier: i32,
    is_exceptional_attribute: bool,
    #[serde(skip)]
    notifier: ChangeNotifier,
}

impl Attribute {
    /// Property name published when the cap changes.
    pub const MAXIMUM_SCORE_ALLOWED: &'static str = "maximum_score_allowed";
    /// Property name published when the phenotype modifier changes.
    pub const PHENOTYPE_MODIFIER: &'static str = "phenotype_modifier";
    /// Property name published when the link modifier changes.
    pub const LINK_MODIFIER: &'static str = "link_modifier";

    /// Create an attribute. The maximum allowed score must be
    /// non-negative; a negative cap is a configuration error.
    pub fn new(
        code: AttributeCode,
        experience: ExperiencePoints,
        maximum_score_allowed: i32,
    ) -> Result<Self, DomainError> {
        if maximum_score_allowed < 0 {
            return Err(DomainError::configuration(format!(
                "maximum score for {code} must be non-negative, got {maximum_score_allowed}"
            )));
        }

        Ok(Self {
            id: AttributeId::new(),
            code,
            description: String::new(),
            experience,
            maximum_score_allowed,
            phenotype_modifier: 0,
            link_modifier: 0,
            is_exceptional_attribute: false,
            notifier: ChangeNotifier::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_link_modifier(mut self, link_modifier: i32) -> Self {
        self.link_modifier = link_modifier;
        self
    }

    pub fn with_exceptional(mut self, is_exceptional: bool) -> Self {
        self.is_exceptional_attribute = is_exceptional;
        self
    }

    pub fn with_id(mut self, id: AttributeId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> AttributeId {
        self.id
    }

    #[inline]
    pub fn code(&self) -> AttributeCode {
        self.code
    }

    /// Short code, e.g. "STR".
    #[inline]
    pub fn abbreviation(&self) -> &'static str {
        self.code.as_str()
    }

    /// Full name, e.g. "Strength".
    #[inline]
    pub fn name(&self) -> &'static str {
        self.code.display_name()
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn experience(&self) -> &ExperiencePoints {
        &self.experience
    }

    #[inline]
    pub fn experience_mut(&mut self) -> &mut ExperiencePoints {
        &mut self.experience
    }

    #[inline]
    pub fn maximum_score_allowed(&self) -> i32 {
        self.maximum_score_allowed
    }

    #[inline]
    pub fn phenotype_modifier(&self) -> i32 {
        self.phenotype_modifier
    }

    #[inline]
    pub fn link_modifier(&self) -> i32 {
        self.link_modifier
    }

    #[inline]
    pub fn is_exceptional_attribute(&self) -> bool {
        self.is_exceptional_attribute
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn add_experience(&mut self, delta: i32) {
        self.experience.add_experience(delta);
    }

    /// Re-cap the attribute, e.g. when a phenotype is applied.
    pub fn set_maximum_score_allowed(&mut self, maximum: i32) -> Result<(), DomainError> {
        if maximum < 0 {
            return Err(DomainError::configuration(format!(
                "maximum score for {} must be non-negative, got {maximum}",
                self.code
            )));
        }
        if self.maximum_score_allowed != maximum {
            self.maximum_score_allowed = maximum;
            self.notifier.notify(Self::MAXIMUM_SCORE_ALLOWED);
        }
        Ok(())
    }

    pub fn set_phenotype_modifier(&mut self, modifier: i32) {
        if self.phenotype_modifier != modifier {
            self.phenotype_modifier = modifier;
            self.notifier.notify(Self::PHENOTYPE_MODIFIER);
        }
    }

    pub fn set_link_modifier(&mut self, modifier: i32) {
        if self.link_modifier != modifier {
            self.link_modifier = modifier;
            self.notifier.notify(Self::LINK_MODIFIER);
        }
    }

    /// Subscribe to field-change notifications on this attribute. Ledger
    /// changes are published by [`Attribute::experience`]'s own notifier.
    pub fn subscribe(&mut self, observer: impl Fn(&str) + 'static) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    /// Drop a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// Derived score, computed on read. Experience debt surfaces as a
    /// negative score.
    ///
    /// Settles the ledger's residual per the exact-boundary rule; reading
    /// twice with no intervening mutation yields the same score and
    /// leaves the residual unchanged.
    pub fn score(&mut self) -> i32 {
        let total = self.experience.total_experience();
        let score = progression::attribute_score(total, self.maximum_score_allowed);
        self.experience
            .settle_current(progression::boundary_residual(total, progression::LEVEL_STEP));
        score
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.code == other.code
            && self.description == other.description
            && self.experience == other.experience
            && self.maximum_score_allowed == other.maximum_score_allowed
            && self.phenotype_modifier == other.phenotype_modifier
            && self.link_modifier == other.link_modifier
            && self.is_exceptional_attribute == other.is_exceptional_attribute
    }
}

impl Eq for Attribute {}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(seed: i32) -> Attribute {
        Attribute::new(AttributeCode::Str, ExperiencePoints::new(seed), 8)
            .expect("valid attribute")
    }

    #[test]
    fn test_rejects_negative_maximum() {
        let result = Attribute::new(AttributeCode::Str, ExperiencePoints::new(0), -1);
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_score_is_capped() {
        for (delta, expected) in [(20, 1), (100, 2), (-125, -1), (1000, 8)] {
            let mut attribute = strength(100);
            assert_eq!(attribute.score(), 1);

            attribute.add_experience(delta);
            let capped = (100 + delta).div_euclid(100).min(8);
            assert_eq!(attribute.score(), expected);
            assert_eq!(attribute.score(), capped);
        }
    }

    #[test]
    fn test_score_settles_residual_at_exact_boundary() {
        let mut attribute = strength(100);
        attribute.score();
        assert_eq!(attribute.experience().current_experience(), 0);

        attribute.add_experience(100);
        attribute.score();
        // 200 total is "just reached" level 2: one step stays banked.
        assert_eq!(attribute.experience().current_experience(), 100);
    }

    #[test]
    fn test_score_residual_off_boundary_equals_total() {
        let mut attribute = strength(100);
        attribute.add_experience(20);
        attribute.score();
        assert_eq!(attribute.experience().current_experience(), 120);
        assert_eq!(attribute.experience().total_experience(), 120);
    }

    #[test]
    fn test_score_is_idempotent() {
        let mut attribute = strength(250);
        let first = attribute.score();
        let residual = attribute.experience().current_experience();

        assert_eq!(attribute.score(), first);
        assert_eq!(attribute.experience().current_experience(), residual);
        assert_eq!(attribute.experience().total_experience(), 250);
    }

    #[test]
    fn test_score_floors_negative_under_debt() {
        let mut attribute = strength(100);
        attribute.add_experience(-125);
        // min(8, floor(-25 / 100)) is -1.
        assert_eq!(attribute.score(), -1);
        assert_eq!(attribute.experience().total_experience(), -25);

        let mut deeper = strength(0);
        deeper.add_experience(-125);
        assert_eq!(deeper.score(), -2);
    }

    #[test]
    fn test_setters_notify_once_per_change() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut attribute = strength(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        attribute.subscribe(move |property| sink.borrow_mut().push(property.to_string()));

        attribute.set_maximum_score_allowed(9).expect("valid cap");
        attribute.set_maximum_score_allowed(9).expect("valid cap");
        attribute.set_phenotype_modifier(1);
        attribute.set_link_modifier(0);

        assert_eq!(
            *seen.borrow(),
            vec![
                Attribute::MAXIMUM_SCORE_ALLOWED.to_string(),
                Attribute::PHENOTYPE_MODIFIER.to_string()
            ]
        );
    }
}
