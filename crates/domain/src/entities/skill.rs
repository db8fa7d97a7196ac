//! Skill entity - a learned capability with a level derived from
//! experience against the threshold table.

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, SkillId};
use crate::observer::{ChangeNotifier, SubscriptionId};
use crate::progression::{self, ThresholdTable};
use crate::value_objects::{
    AttributeCode, ComplexityRating, ExperiencePoints, LearningSpeed, SkillLevel,
};

/// A skill a character can possess.
///
/// The level is derived, never stored. Which threshold table applies
/// depends on the owning character's traits (Fast/Slow Learner), so
/// level derivation for an owned skill goes through
/// [`crate::aggregates::Character::skill_level`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    id: SkillId,
    name: String,
    description: String,
    complexity_rating: ComplexityRating,
    target_number: i32,
    specialty: Option<String>,
    sub_skill: Option<String>,
    is_tiered: bool,
    page_reference: Option<String>,
    experience: ExperiencePoints,
    /// Non-owning references into the character's fixed attribute roster.
    linked_attributes: Vec<AttributeCode>,
    /// Non-owning back-reference, set when the skill is added to a
    /// character.
    owner: Option<CharacterId>,
    #[serde(skip)]
    notifier: ChangeNotifier,
}

impl Skill {
    /// Property name published when the owner back-reference changes.
    pub const OWNER: &'static str = "owner";

    pub fn new(
        name: impl Into<String>,
        complexity_rating: ComplexityRating,
        target_number: i32,
        experience: ExperiencePoints,
    ) -> Self {
        Self {
            id: SkillId::new(),
            name: name.into(),
            description: String::new(),
            complexity_rating,
            target_number,
            specialty: None,
            sub_skill: None,
            is_tiered: false,
            page_reference: None,
            experience,
            linked_attributes: Vec::new(),
            owner: None,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn with_sub_skill(mut self, sub_skill: impl Into<String>) -> Self {
        self.sub_skill = Some(sub_skill.into());
        self
    }

    pub fn with_page_reference(mut self, page_reference: impl Into<String>) -> Self {
        self.page_reference = Some(page_reference.into());
        self
    }

    pub fn with_linked_attribute(mut self, code: AttributeCode) -> Self {
        self.linked_attributes.push(code);
        self
    }

    pub fn with_tiered(mut self, is_tiered: bool) -> Self {
        self.is_tiered = is_tiered;
        self
    }

    pub fn with_id(mut self, id: SkillId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> SkillId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name qualified with the sub-skill, e.g. "Language/English".
    pub fn qualified_name(&self) -> String {
        match &self.sub_skill {
            Some(sub_skill) => format!("{}/{}", self.name, sub_skill),
            None => self.name.clone(),
        }
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn complexity_rating(&self) -> ComplexityRating {
        self.complexity_rating
    }

    #[inline]
    pub fn target_number(&self) -> i32 {
        self.target_number
    }

    #[inline]
    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    #[inline]
    pub fn sub_skill(&self) -> Option<&str> {
        self.sub_skill.as_deref()
    }

    #[inline]
    pub fn is_tiered(&self) -> bool {
        self.is_tiered
    }

    #[inline]
    pub fn page_reference(&self) -> Option<&str> {
        self.page_reference.as_deref()
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
    pub fn linked_attributes(&self) -> &[AttributeCode] {
        &self.linked_attributes
    }

    #[inline]
    pub fn owner(&self) -> Option<CharacterId> {
        self.owner
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn add_experience(&mut self, delta: i32) {
        self.experience.add_experience(delta);
    }

    /// Wire the back-reference to the owning character. Called when the
    /// skill joins an aggregate; a reconstructed object graph is expected
    /// to arrive with this already set.
    pub fn attach_owner(&mut self, owner: CharacterId) {
        if self.owner != Some(owner) {
            self.owner = Some(owner);
            self.notifier.notify(Self::OWNER);
        }
    }

    /// Subscribe to field-change notifications on this skill. Ledger
    /// changes are published by [`Skill::experience`]'s own notifier.
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

    /// Derived level under the given learning speed, computed on read.
    ///
    /// Settles the ledger's residual to the experience past the resolved
    /// breakpoint (0 once maxed). Below the first breakpoint the level is
    /// [`SkillLevel::Unset`] and the residual is left untouched.
    pub fn level(&mut self, speed: LearningSpeed) -> SkillLevel {
        let table = ThresholdTable::for_speed(speed);
        let (level, residual) =
            progression::skill_level(self.experience.total_experience(), &table);
        if let Some(residual) = residual {
            self.experience.settle_current(residual);
        }
        level
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.complexity_rating == other.complexity_rating
            && self.target_number == other.target_number
            && self.specialty == other.specialty
            && self.sub_skill == other.sub_skill
            && self.is_tiered == other.is_tiered
            && self.page_reference == other.page_reference
            && self.experience == other.experience
            && self.linked_attributes == other.linked_attributes
            && self.owner == other.owner
    }
}

impl Eq for Skill {}
