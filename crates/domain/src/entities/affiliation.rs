//! Affiliation entity - faction membership, optionally nested one level
//! (sub-faction under a main faction).

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::ids::AffiliationId;
use crate::value_objects::ExperienceAllotment;

/// A faction a character can belong to.
///
/// Forms a shallow tree: a `None` parent denotes a root/main faction, and
/// observed data nests at most one level (sub-faction -> main faction).
/// The progression core only ever reads affiliations.
///
/// Equality is by identity id; ordering is by name (see
/// [`Affiliation::cmp_by_name`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Affiliation {
    id: AffiliationId,
    name: String,
    description: String,
    experience_cost: i32,
    primary_language: String,
    secondary_languages: Vec<String>,
    fixed_experience_allotments: Vec<ExperienceAllotment>,
    parent: Option<Box<Affiliation>>,
}

impl Affiliation {
    pub fn new(name: impl Into<String>, experience_cost: i32) -> Self {
        Self {
            id: AffiliationId::new(),
            name: name.into(),
            description: String::new(),
            experience_cost,
            primary_language: String::new(),
            secondary_languages: Vec::new(),
            fixed_experience_allotments: Vec::new(),
            parent: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_primary_language(mut self, language: impl Into<String>) -> Self {
        self.primary_language = language.into();
        self
    }

    pub fn with_secondary_language(mut self, language: impl Into<String>) -> Self {
        self.secondary_languages.push(language.into());
        self
    }

    pub fn with_allotment(mut self, allotment: ExperienceAllotment) -> Self {
        self.fixed_experience_allotments.push(allotment);
        self
    }

    pub fn with_parent(mut self, parent: Affiliation) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn with_id(mut self, id: AffiliationId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> AffiliationId {
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

    /// Experience cost to start play in this faction.
    #[inline]
    pub fn experience_cost(&self) -> i32 {
        self.experience_cost
    }

    #[inline]
    pub fn primary_language(&self) -> &str {
        &self.primary_language
    }

    /// Ordered as configured; order is part of the data.
    #[inline]
    pub fn secondary_languages(&self) -> &[String] {
        &self.secondary_languages
    }

    #[inline]
    pub fn fixed_experience_allotments(&self) -> &[ExperienceAllotment] {
        &self.fixed_experience_allotments
    }

    #[inline]
    pub fn parent(&self) -> Option<&Affiliation> {
        self.parent.as_deref()
    }

    /// A root/main faction has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// True when this affiliation, or its direct parent, carries `name`.
    ///
    /// Only one level of ancestry is consulted - a documented boundary,
    /// not a recursive ancestor walk.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name || self.parent.as_ref().is_some_and(|parent| parent.name == name)
    }

    /// Primary language, falling back to the parent faction's when this
    /// one does not set its own.
    pub fn effective_primary_language(&self) -> &str {
        if self.primary_language.is_empty() {
            self.parent
                .as_deref()
                .map(Affiliation::effective_primary_language)
                .unwrap_or("")
        } else {
            &self.primary_language
        }
    }

    /// Fixed allotments granted by the whole membership: the parent's
    /// first, then this faction's own.
    pub fn lineage_allotments(&self) -> Vec<&ExperienceAllotment> {
        let mut allotments: Vec<&ExperienceAllotment> = self
            .parent
            .as_deref()
            .map(|parent| parent.fixed_experience_allotments.iter().collect())
            .unwrap_or_default();
        allotments.extend(self.fixed_experience_allotments.iter());
        allotments
    }

    /// Name ordering for rosters and pick lists. Kept separate from `Ord`
    /// because equality is by id.
    pub fn cmp_by_name(&self, other: &Affiliation) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialEq for Affiliation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Affiliation {}

impl Hash for Affiliation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
