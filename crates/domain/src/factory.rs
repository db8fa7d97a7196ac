//! Character factory - assembles a fresh character with the standard
//! attribute roster and starter skills.

use uuid::Uuid;

use crate::aggregates::Character;
use crate::catalog::PhenotypeCatalog;
use crate::entities::{Attribute, Skill};
use crate::error::DomainError;
use crate::ids::SkillId;
use crate::value_objects::{AttributeCode, ComplexityRating, ExperiencePoints};

/// Starting pool for a fresh character.
pub const DEFAULT_STARTING_EXPERIENCE: i32 = 5000;

const LANGUAGE_SKILL_ID: Uuid = Uuid::from_u128(0xDAB4_BCD0_8C78_409A_B128_E93AC344591F);
const PERCEPTION_SKILL_ID: Uuid = Uuid::from_u128(0x83C2_C195_74ED_43D1_821F_E2985687B8FE);

/// Builds new characters against a phenotype catalog.
pub struct CharacterFactory<'a> {
    catalog: &'a PhenotypeCatalog,
}

impl<'a> CharacterFactory<'a> {
    pub fn new(catalog: &'a PhenotypeCatalog) -> Self {
        Self { catalog }
    }

    /// Create a character with the default starting pool.
    pub fn create(&self, name: impl Into<String>) -> Result<Character, DomainError> {
        self.create_with_pool(name, DEFAULT_STARTING_EXPERIENCE)
    }

    /// Create a character: the eight-attribute roster at 0 XP (CHA and EDG
    /// capped at 9, the rest at 8), the two starter skills (Language/
    /// English at 20 XP, Perception at 10 XP), the Normal Human phenotype,
    /// and `pool` experience to spend.
    pub fn create_with_pool(
        &self,
        name: impl Into<String>,
        pool: i32,
    ) -> Result<Character, DomainError> {
        let mut character = Character::new(name, standard_roster()?)?;

        character.add_skill(
            Skill::new(
                "Language",
                ComplexityRating::SimpleAdvanced,
                8,
                ExperiencePoints::new(20),
            )
            .with_id(SkillId::from_uuid(LANGUAGE_SKILL_ID))
            .with_description("The language you speak.")
            .with_sub_skill("English")
            .with_page_reference("p. 148")
            .with_linked_attribute(AttributeCode::Int)
            .with_linked_attribute(AttributeCode::Cha),
        );
        character.add_skill(
            Skill::new(
                "Perception",
                ComplexityRating::SimpleBasic,
                7,
                ExperiencePoints::new(10),
            )
            .with_id(SkillId::from_uuid(PERCEPTION_SKILL_ID))
            .with_description("What you can see.")
            .with_page_reference("p. 151")
            .with_linked_attribute(AttributeCode::Int),
        );

        let normal_human = self.catalog.by_name(PhenotypeCatalog::NORMAL_HUMAN)?;
        character.set_phenotype(normal_human.clone())?;
        character.add_experience(pool);

        tracing::debug!(character = character.name(), pool, "character created");
        Ok(character)
    }
}

fn standard_roster() -> Result<Vec<Attribute>, DomainError> {
    let descriptions = [
        "How physically strong a character is.",
        "How durable and \"in shape\" a character is.",
        "How quick a character can respond to situations.",
        "How well a character can manipulate and handle objects.",
        "How intelligent a character is.",
        "How decisive a character is.",
        "How inspiring a character is.",
        "How lucky a character is.",
    ];

    AttributeCode::all_standard()
        .into_iter()
        .zip(descriptions)
        .map(|(code, description)| {
            let maximum = match code {
                AttributeCode::Cha | AttributeCode::Edg => 9,
                _ => 8,
            };
            Ok(Attribute::new(code, ExperiencePoints::new(0), maximum)?
                .with_description(description))
        })
        .collect()
}
