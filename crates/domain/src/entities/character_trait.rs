//! Trait entity - a character quality with a signed, clamped derived
//! level.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::TraitId;
use crate::progression;
use crate::value_objects::{ExperiencePoints, TraitTypeSet};

/// A trait a character (or their vehicle) can possess.
///
/// Levels run signed: positive experience buys the trait up, negative
/// experience represents a drawback or debt. The derived level is clamped
/// into the trait's configured band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterTrait {
    id: TraitId,
    name: String,
    description: String,
    page_reference: Option<String>,
    experience: ExperiencePoints,
    minimum_level: i32,
    maximum_level: i32,
    trait_type: TraitTypeSet,
    is_variable: bool,
}

impl CharacterTrait {
    /// Create a trait. The level band must satisfy
    /// `minimum_level <= maximum_level`.
    pub fn new(
        name: impl Into<String>,
        experience: ExperiencePoints,
        minimum_level: i32,
        maximum_level: i32,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if minimum_level > maximum_level {
            return Err(DomainError::configuration(format!(
                "trait {name:?} minimum level {minimum_level} exceeds maximum {maximum_level}"
            )));
        }

        Ok(Self {
            id: TraitId::new(),
            name,
            description: String::new(),
            page_reference: None,
            experience,
            minimum_level,
            maximum_level,
            trait_type: TraitTypeSet::new(),
            is_variable: false,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_page_reference(mut self, page_reference: impl Into<String>) -> Self {
        self.page_reference = Some(page_reference.into());
        self
    }

    pub fn with_trait_type(mut self, trait_type: TraitTypeSet) -> Self {
        self.trait_type = trait_type;
        self
    }

    pub fn with_variable(mut self, is_variable: bool) -> Self {
        self.is_variable = is_variable;
        self
    }

    pub fn with_id(mut self, id: TraitId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> TraitId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
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
    pub fn minimum_level(&self) -> i32 {
        self.minimum_level
    }

    #[inline]
    pub fn maximum_level(&self) -> i32 {
        self.maximum_level
    }

    #[inline]
    pub fn trait_type(&self) -> &TraitTypeSet {
        &self.trait_type
    }

    #[inline]
    pub fn is_variable(&self) -> bool {
        self.is_variable
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn add_experience(&mut self, delta: i32) {
        self.experience.add_experience(delta);
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// Derived signed level, computed on read.
    ///
    /// One level per 100 XP rounding toward zero; raw levels below the
    /// minimum collapse to 0, above the maximum to the maximum. Settles
    /// the ledger's residual with the sign-aware exact-boundary rule.
    pub fn level(&mut self) -> i32 {
        let total = self.experience.total_experience();
        let level = progression::trait_level(total, self.minimum_level, self.maximum_level);
        self.experience
            .settle_current(progression::boundary_residual(total, progression::LEVEL_STEP));
        level
    }
}
