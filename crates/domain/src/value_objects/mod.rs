//! Value objects - Immutable objects defined by their attributes

mod allotment;
mod attribute_code;
mod complexity;
mod experience;
mod learning;
mod skill_level;
mod trait_type;

pub use allotment::{AllotmentCategory, ExperienceAllotment};
pub use attribute_code::AttributeCode;
pub use complexity::ComplexityRating;
pub use experience::ExperiencePoints;
pub use learning::LearningSpeed;
pub use skill_level::{SkillLevel, MAX_SKILL_LEVEL, UNSET_SKILL_LEVEL};
pub use trait_type::{TraitKind, TraitTypeSet};
