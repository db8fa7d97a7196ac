//! Entities - Objects with identity that persist over time

mod affiliation;
mod attribute;
mod character_trait;
mod phenotype;
mod skill;

pub use affiliation::Affiliation;
pub use attribute::Attribute;
pub use character_trait::CharacterTrait;
pub use phenotype::Phenotype;
pub use skill::Skill;
