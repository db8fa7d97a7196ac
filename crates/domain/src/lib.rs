//! Character progression domain for the WarCollege character builder.
//!
//! Everything a character can become is bought with experience points:
//! attributes, skills, and traits each own an experience ledger, and the
//! visible numbers (scores, levels) are derived from those ledgers on
//! read, never stored. The [`progression`] module holds the pure
//! derivation engines; entities wrap them with identity and state;
//! [`aggregates::Character`] is the root tying the object graph together.

pub mod aggregates;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod factory;
pub mod ids;
pub mod observer;
pub mod progression;
pub mod value_objects;

pub use aggregates::Character;
pub use catalog::PhenotypeCatalog;
pub use entities::{Affiliation, Attribute, CharacterTrait, Phenotype, Skill};
pub use error::DomainError;
pub use factory::{CharacterFactory, DEFAULT_STARTING_EXPERIENCE};
pub use observer::{ChangeNotifier, SubscriptionId};
pub use progression::{ThresholdTable, LEVEL_STEP};

// Re-export ID types
pub use ids::{AffiliationId, AttributeId, CharacterId, PhenotypeId, SkillId, TraitId};

// Re-export value objects
pub use value_objects::{
    AllotmentCategory, AttributeCode, ComplexityRating, ExperienceAllotment, ExperiencePoints,
    LearningSpeed, SkillLevel, TraitKind, TraitTypeSet, MAX_SKILL_LEVEL, UNSET_SKILL_LEVEL,
};
