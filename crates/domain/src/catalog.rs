//! Phenotype catalog - the explicit read-only registry of the four core
//! phenotypes.
//!
//! Built once at startup and passed by reference; replaces the hidden
//! global singletons a naive port would reach for.

use uuid::Uuid;

use crate::entities::{CharacterTrait, Phenotype};
use crate::error::DomainError;
use crate::ids::PhenotypeId;
use crate::value_objects::{AttributeCode, ExperiencePoints};

/// Read-only registry of the four core-rules phenotypes.
///
/// Entry ids are fixed so characters reconstructed from storage resolve
/// the same catalog entries across runs.
#[derive(Debug, Clone)]
pub struct PhenotypeCatalog {
    entries: Vec<Phenotype>,
}

impl PhenotypeCatalog {
    pub const NORMAL_HUMAN: &'static str = "Normal Human";
    pub const AEROSPACE: &'static str = "Aerospace";
    pub const ELEMENTAL: &'static str = "Elemental";
    pub const MECHWARRIOR: &'static str = "MechWarrior";

    const NORMAL_HUMAN_ID: Uuid = Uuid::from_u128(0xb2a9_c1d4_0001_4a00_9e00_000000000001);
    const AEROSPACE_ID: Uuid = Uuid::from_u128(0xb2a9_c1d4_0001_4a00_9e00_000000000002);
    const ELEMENTAL_ID: Uuid = Uuid::from_u128(0xb2a9_c1d4_0001_4a00_9e00_000000000003);
    const MECHWARRIOR_ID: Uuid = Uuid::from_u128(0xb2a9_c1d4_0001_4a00_9e00_000000000004);

    /// Build the core-rules catalog.
    pub fn standard() -> Result<Self, DomainError> {
        let entries = vec![
            normal_human()?,
            aerospace()?,
            elemental()?,
            mechwarrior()?,
        ];
        tracing::debug!(entries = entries.len(), "phenotype catalog built");
        Ok(Self { entries })
    }

    /// Exact-name lookup.
    pub fn by_name(&self, name: &str) -> Result<&Phenotype, DomainError> {
        self.entries
            .iter()
            .find(|phenotype| phenotype.name() == name)
            .ok_or_else(|| DomainError::not_found("Phenotype", name))
    }

    pub fn by_id(&self, id: PhenotypeId) -> Option<&Phenotype> {
        self.entries.iter().find(|phenotype| phenotype.id() == id)
    }

    #[inline]
    pub fn entries(&self) -> &[Phenotype] {
        &self.entries
    }
}

fn normal_human() -> Result<Phenotype, DomainError> {
    // The baseline: caps mirror a fresh character's (CHA/EDG run to 9),
    // no modifiers, no bonus traits.
    Ok(Phenotype::new(PhenotypeCatalog::NORMAL_HUMAN)
        .with_id(PhenotypeId::from_uuid(PhenotypeCatalog::NORMAL_HUMAN_ID))
        .with_description("The baseline human genotype.")
        .with_maximum(AttributeCode::Str, 8)
        .with_maximum(AttributeCode::Bod, 8)
        .with_maximum(AttributeCode::Rfl, 8)
        .with_maximum(AttributeCode::Dex, 8)
        .with_maximum(AttributeCode::Int, 8)
        .with_maximum(AttributeCode::Wil, 8)
        .with_maximum(AttributeCode::Cha, 9)
        .with_maximum(AttributeCode::Edg, 9))
}

fn aerospace() -> Result<Phenotype, DomainError> {
    Ok(Phenotype::new(PhenotypeCatalog::AEROSPACE)
        .with_id(PhenotypeId::from_uuid(PhenotypeCatalog::AEROSPACE_ID))
        .with_description("Clan aerospace pilot breeding program.")
        .with_maximum(AttributeCode::Str, 7)
        .with_maximum(AttributeCode::Bod, 7)
        .with_maximum(AttributeCode::Rfl, 9)
        .with_maximum(AttributeCode::Dex, 9)
        .with_maximum(AttributeCode::Int, 8)
        .with_maximum(AttributeCode::Wil, 8)
        .with_maximum(AttributeCode::Cha, 9)
        .with_maximum(AttributeCode::Edg, 9)
        .with_modifier(AttributeCode::Rfl, 1)
        .with_modifier(AttributeCode::Dex, 1)
        .with_bonus_trait(
            CharacterTrait::new("Good Vision", ExperiencePoints::new(100), 1, 1)?
                .with_page_reference("p. 117"),
        )
        .with_field_aptitude("Aerospace Pilot"))
}

fn elemental() -> Result<Phenotype, DomainError> {
    Ok(Phenotype::new(PhenotypeCatalog::ELEMENTAL)
        .with_id(PhenotypeId::from_uuid(PhenotypeCatalog::ELEMENTAL_ID))
        .with_description("Clan battlesuit infantry breeding program.")
        .with_maximum(AttributeCode::Str, 9)
        .with_maximum(AttributeCode::Bod, 9)
        .with_maximum(AttributeCode::Rfl, 8)
        .with_maximum(AttributeCode::Dex, 8)
        .with_maximum(AttributeCode::Int, 8)
        .with_maximum(AttributeCode::Wil, 8)
        .with_maximum(AttributeCode::Cha, 9)
        .with_maximum(AttributeCode::Edg, 9)
        .with_modifier(AttributeCode::Str, 1)
        .with_modifier(AttributeCode::Bod, 1)
        .with_bonus_trait(
            CharacterTrait::new("Toughness", ExperiencePoints::new(100), 1, 3)?
                .with_page_reference("p. 125"),
        )
        .with_field_aptitude("Battlesuit"))
}

fn mechwarrior() -> Result<Phenotype, DomainError> {
    Ok(Phenotype::new(PhenotypeCatalog::MECHWARRIOR)
        .with_id(PhenotypeId::from_uuid(PhenotypeCatalog::MECHWARRIOR_ID))
        .with_description("Clan MechWarrior breeding program.")
        .with_maximum(AttributeCode::Str, 8)
        .with_maximum(AttributeCode::Bod, 8)
        .with_maximum(AttributeCode::Rfl, 9)
        .with_maximum(AttributeCode::Dex, 9)
        .with_maximum(AttributeCode::Int, 8)
        .with_maximum(AttributeCode::Wil, 8)
        .with_maximum(AttributeCode::Cha, 9)
        .with_maximum(AttributeCode::Edg, 9)
        .with_modifier(AttributeCode::Rfl, 1)
        .with_bonus_trait(
            CharacterTrait::new("Sixth Sense", ExperiencePoints::new(100), 1, 1)?
                .with_page_reference("p. 123"),
        )
        .with_field_aptitude("MechWarrior"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_holds_four_core_phenotypes() {
        let catalog = PhenotypeCatalog::standard().expect("valid catalog");
        let names: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|phenotype| phenotype.name())
            .collect();
        assert_eq!(
            names,
            vec![
                PhenotypeCatalog::NORMAL_HUMAN,
                PhenotypeCatalog::AEROSPACE,
                PhenotypeCatalog::ELEMENTAL,
                PhenotypeCatalog::MECHWARRIOR
            ]
        );
    }

    #[test]
    fn test_ids_are_stable_across_builds() {
        let first = PhenotypeCatalog::standard().expect("valid catalog");
        let second = PhenotypeCatalog::standard().expect("valid catalog");

        for (a, b) in first.entries().iter().zip(second.entries()) {
            assert_eq!(a.id(), b.id());
        }
    }

    #[test]
    fn test_by_name_and_by_id_agree() {
        let catalog = PhenotypeCatalog::standard().expect("valid catalog");
        let elemental = catalog
            .by_name(PhenotypeCatalog::ELEMENTAL)
            .expect("catalog entry");
        assert_eq!(
            catalog.by_id(elemental.id()).map(Phenotype::name),
            Some(PhenotypeCatalog::ELEMENTAL)
        );
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let catalog = PhenotypeCatalog::standard().expect("valid catalog");
        assert!(matches!(
            catalog.by_name("Protomech"),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_normal_human_is_pure_baseline() {
        let catalog = PhenotypeCatalog::standard().expect("valid catalog");
        let human = catalog
            .by_name(PhenotypeCatalog::NORMAL_HUMAN)
            .expect("catalog entry");

        assert_eq!(human.maximum_for(AttributeCode::Cha), Some(9));
        assert_eq!(human.maximum_for(AttributeCode::Str), Some(8));
        assert!(human.attribute_modifiers().is_empty());
        assert!(human.bonus_traits().is_empty());
    }
}
