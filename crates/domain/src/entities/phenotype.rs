//! Phenotype entity - a genetic template that re-caps attributes,
//! applies score modifiers, and grants bonus traits.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::CharacterTrait;
use crate::ids::PhenotypeId;
use crate::value_objects::AttributeCode;

/// A genetic/phenotype template.
///
/// Applying one to a character overwrites the attribute caps it names,
/// sets the score modifiers it names, and copies its bonus traits onto
/// the character. Attributes a phenotype is silent on keep their current
/// cap and get a modifier of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phenotype {
    id: PhenotypeId,
    name: String,
    description: String,
    attribute_maximums: BTreeMap<AttributeCode, i32>,
    attribute_modifiers: BTreeMap<AttributeCode, i32>,
    bonus_traits: Vec<CharacterTrait>,
    field_aptitude: Option<String>,
}

impl Phenotype {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PhenotypeId::new(),
            name: name.into(),
            description: String::new(),
            attribute_maximums: BTreeMap::new(),
            attribute_modifiers: BTreeMap::new(),
            bonus_traits: Vec::new(),
            field_aptitude: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_maximum(mut self, code: AttributeCode, maximum: i32) -> Self {
        self.attribute_maximums.insert(code, maximum);
        self
    }

    pub fn with_modifier(mut self, code: AttributeCode, modifier: i32) -> Self {
        self.attribute_modifiers.insert(code, modifier);
        self
    }

    pub fn with_bonus_trait(mut self, bonus: CharacterTrait) -> Self {
        self.bonus_traits.push(bonus);
        self
    }

    pub fn with_field_aptitude(mut self, aptitude: impl Into<String>) -> Self {
        self.field_aptitude = Some(aptitude.into());
        self
    }

    pub fn with_id(mut self, id: PhenotypeId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> PhenotypeId {
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

    /// Cap for `code`, if this phenotype overrides it.
    pub fn maximum_for(&self, code: AttributeCode) -> Option<i32> {
        self.attribute_maximums.get(&code).copied()
    }

    /// Score modifier for `code`; zero when the phenotype is silent.
    pub fn modifier_for(&self, code: AttributeCode) -> i32 {
        self.attribute_modifiers.get(&code).copied().unwrap_or(0)
    }

    #[inline]
    pub fn attribute_maximums(&self) -> &BTreeMap<AttributeCode, i32> {
        &self.attribute_maximums
    }

    #[inline]
    pub fn attribute_modifiers(&self) -> &BTreeMap<AttributeCode, i32> {
        &self.attribute_modifiers
    }

    #[inline]
    pub fn bonus_traits(&self) -> &[CharacterTrait] {
        &self.bonus_traits
    }

    #[inline]
    pub fn field_aptitude(&self) -> Option<&str> {
        self.field_aptitude.as_deref()
    }
}
