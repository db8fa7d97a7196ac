//! Character aggregate - the root owning attributes, skills, traits,
//! affiliation, phenotype, and the character's own experience pool.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Affiliation, Attribute, CharacterTrait, Phenotype, Skill};
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::observer::{ChangeNotifier, SubscriptionId};
use crate::value_objects::{AttributeCode, ExperiencePoints, LearningSpeed, SkillLevel};

/// Aggregate root for one playable character.
///
/// Owns exactly eight attributes, in roster order, plus the skill and
/// trait collections. Capability queries (`has_trait`, `has_skill`) go
/// through counted name indexes maintained on every add/remove, so they
/// stay O(1) even with duplicate trait names (Multiple-type traits).
///
/// All derivation entry points take `&mut self` because reading a derived
/// value settles the underlying ledger's residual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    id: CharacterId,
    name: String,
    player_name: String,
    hair_color: String,
    eye_color: String,
    weight: f32,
    height: f32,
    age: i32,
    description: String,
    notes: String,
    c_bills: i32,
    experience: ExperiencePoints,
    affiliation: Option<Affiliation>,
    phenotype: Option<Phenotype>,
    attributes: [Attribute; AttributeCode::COUNT],
    skills: Vec<Skill>,
    traits: Vec<CharacterTrait>,
    skill_names: HashMap<String, u32>,
    trait_names: HashMap<String, u32>,
    #[serde(skip)]
    notifier: ChangeNotifier,
}

impl Character {
    pub const NAME: &'static str = "name";
    pub const PLAYER_NAME: &'static str = "player_name";
    pub const HAIR_COLOR: &'static str = "hair_color";
    pub const EYE_COLOR: &'static str = "eye_color";
    pub const WEIGHT: &'static str = "weight";
    pub const HEIGHT: &'static str = "height";
    pub const AGE: &'static str = "age";
    pub const DESCRIPTION: &'static str = "description";
    pub const NOTES: &'static str = "notes";
    pub const C_BILLS: &'static str = "c_bills";
    pub const AFFILIATION: &'static str = "affiliation";
    pub const PHENOTYPE: &'static str = "phenotype";
    pub const SKILLS: &'static str = "skills";
    pub const TRAITS: &'static str = "traits";

    /// Create a character from a full attribute roster.
    ///
    /// The roster must contain exactly eight attributes in roster order
    /// (STR, BOD, RFL, DEX, INT, WIL, CHA, EDG); anything else is a
    /// configuration error. An empty name is a validation error.
    pub fn new(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("character name must not be empty"));
        }

        let attributes: [Attribute; AttributeCode::COUNT] =
            attributes.try_into().map_err(|roster: Vec<Attribute>| {
                DomainError::configuration(format!(
                    "character needs exactly {} attributes, got {}",
                    AttributeCode::COUNT,
                    roster.len()
                ))
            })?;
        for (attribute, expected) in attributes.iter().zip(AttributeCode::all_standard()) {
            if attribute.code() != expected {
                return Err(DomainError::configuration(format!(
                    "attribute roster out of order: expected {expected}, got {}",
                    attribute.code()
                )));
            }
        }

        Ok(Self {
            id: CharacterId::new(),
            name,
            player_name: String::new(),
            hair_color: String::new(),
            eye_color: String::new(),
            weight: 0.0,
            height: 0.0,
            age: 0,
            description: String::new(),
            notes: String::new(),
            c_bills: 0,
            experience: ExperiencePoints::new(0),
            affiliation: None,
            phenotype: None,
            attributes,
            skills: Vec::new(),
            traits: Vec::new(),
            skill_names: HashMap::new(),
            trait_names: HashMap::new(),
            notifier: ChangeNotifier::new(),
        })
    }

    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[inline]
    pub fn hair_color(&self) -> &str {
        &self.hair_color
    }

    #[inline]
    pub fn eye_color(&self) -> &str {
        &self.eye_color
    }

    #[inline]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn age(&self) -> i32 {
        self.age
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[inline]
    pub fn c_bills(&self) -> i32 {
        self.c_bills
    }

    /// The character's own unspent pool, separate from the per-entity
    /// ledgers.
    #[inline]
    pub fn experience(&self) -> &ExperiencePoints {
        &self.experience
    }

    #[inline]
    pub fn affiliation(&self) -> Option<&Affiliation> {
        self.affiliation.as_ref()
    }

    #[inline]
    pub fn phenotype(&self) -> Option<&Phenotype> {
        self.phenotype.as_ref()
    }

    /// Roster-ordered attribute array.
    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[inline]
    pub fn attribute(&self, code: AttributeCode) -> &Attribute {
        &self.attributes[code.index()]
    }

    /// Attribute codes are immutable, so handing out `&mut Attribute`
    /// cannot desync the roster.
    #[inline]
    pub fn attribute_mut(&mut self, code: AttributeCode) -> &mut Attribute {
        &mut self.attributes[code.index()]
    }

    #[inline]
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    #[inline]
    pub fn traits(&self) -> &[CharacterTrait] {
        &self.traits
    }

    // =========================================================================
    // Capability queries
    // =========================================================================

    /// Exact, case-sensitive trait-name lookup via the counted index.
    pub fn has_trait(&self, name: &str) -> bool {
        self.trait_names.contains_key(name)
    }

    /// Exact, case-sensitive skill-name lookup via the counted index.
    pub fn has_skill(&self, name: &str) -> bool {
        self.skill_names.contains_key(name)
    }

    /// True when the affiliation, or its direct parent, carries `name`.
    /// Exactly one ancestry level is consulted.
    pub fn is_in_affiliation(&self, name: &str) -> bool {
        self.affiliation
            .as_ref()
            .is_some_and(|affiliation| affiliation.matches_name(name))
    }

    /// Threshold-table variant selected by the learner traits. Fast
    /// Learner wins when both are present.
    pub fn learning_speed(&self) -> LearningSpeed {
        LearningSpeed::from_traits(
            self.has_trait(LearningSpeed::FAST_LEARNER_TRAIT),
            self.has_trait(LearningSpeed::SLOW_LEARNER_TRAIT),
        )
    }

    // =========================================================================
    // Derivation entry points
    // =========================================================================

    /// Derived score of the attribute for `code`.
    pub fn attribute_score(&mut self, code: AttributeCode) -> i32 {
        self.attributes[code.index()].score()
    }

    /// Derived level of the named skill under this character's learning
    /// speed.
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown name and
    /// [`DomainError::NotReady`] for a skill whose owner back-reference
    /// was never attached.
    pub fn skill_level(&mut self, name: &str) -> Result<SkillLevel, DomainError> {
        let index = self
            .skills
            .iter()
            .position(|skill| skill.name() == name)
            .ok_or_else(|| DomainError::not_found("Skill", name))?;
        if self.skills[index].owner().is_none() {
            return Err(DomainError::not_ready(format!(
                "skill {name:?} has no owning character"
            )));
        }

        let speed = self.learning_speed();
        Ok(self.skills[index].level(speed))
    }

    /// Derived level of the named trait.
    pub fn trait_level(&mut self, name: &str) -> Result<i32, DomainError> {
        let with_trait = self
            .traits
            .iter_mut()
            .find(|with_trait| with_trait.name() == name)
            .ok_or_else(|| DomainError::not_found("Trait", name))?;
        Ok(with_trait.level())
    }

    // =========================================================================
    // Collection mutations
    // =========================================================================

    /// Add a skill, attaching the owner back-reference and updating the
    /// name index.
    pub fn add_skill(&mut self, mut skill: Skill) {
        skill.attach_owner(self.id);
        *self.skill_names.entry(skill.name().to_string()).or_insert(0) += 1;
        self.skills.push(skill);
        self.notifier.notify(Self::SKILLS);
    }

    /// Remove the first skill matching `name`. Returns the removed skill,
    /// or `None` when no skill carries that name (in which case nothing
    /// is published).
    pub fn remove_skill(&mut self, name: &str) -> Option<Skill> {
        let index = self.skills.iter().position(|skill| skill.name() == name)?;
        decrement(&mut self.skill_names, name);
        let skill = self.skills.remove(index);
        self.notifier.notify(Self::SKILLS);
        Some(skill)
    }

    /// Add a trait, updating the name index. Duplicate names are allowed
    /// (Multiple-type traits); the index counts them.
    pub fn add_trait(&mut self, with_trait: CharacterTrait) {
        *self
            .trait_names
            .entry(with_trait.name().to_string())
            .or_insert(0) += 1;
        self.traits.push(with_trait);
        self.notifier.notify(Self::TRAITS);
    }

    /// Remove the first trait matching `name`. Returns the removed trait,
    /// or `None` when no trait carries that name (in which case nothing
    /// is published).
    pub fn remove_trait(&mut self, name: &str) -> Option<CharacterTrait> {
        let index = self
            .traits
            .iter()
            .position(|with_trait| with_trait.name() == name)?;
        decrement(&mut self.trait_names, name);
        let with_trait = self.traits.remove(index);
        self.notifier.notify(Self::TRAITS);
        Some(with_trait)
    }

    /// Apply a signed delta to the character's own pool.
    pub fn add_experience(&mut self, delta: i32) {
        self.experience.add_experience(delta);
    }

    /// Apply a signed delta to the named skill's ledger.
    ///
    /// Goes by name rather than a `&mut Skill` handle so the name index
    /// can never drift out of sync with the collection.
    pub fn add_skill_experience(&mut self, name: &str, delta: i32) -> Result<(), DomainError> {
        let skill = self
            .skills
            .iter_mut()
            .find(|skill| skill.name() == name)
            .ok_or_else(|| DomainError::not_found("Skill", name))?;
        skill.add_experience(delta);
        Ok(())
    }

    /// Apply a signed delta to the first trait matching `name`.
    pub fn add_trait_experience(&mut self, name: &str, delta: i32) -> Result<(), DomainError> {
        let with_trait = self
            .traits
            .iter_mut()
            .find(|with_trait| with_trait.name() == name)
            .ok_or_else(|| DomainError::not_found("Trait", name))?;
        with_trait.add_experience(delta);
        Ok(())
    }

    pub fn set_affiliation(&mut self, affiliation: Option<Affiliation>) {
        self.affiliation = affiliation;
        self.notifier.notify(Self::AFFILIATION);
    }

    /// Apply a phenotype: overwrite the attribute caps it names, set every
    /// attribute's modifier (zero where the phenotype is silent), and copy
    /// its bonus traits onto the character.
    pub fn set_phenotype(&mut self, phenotype: Phenotype) -> Result<(), DomainError> {
        for attribute in &mut self.attributes {
            let code = attribute.code();
            if let Some(maximum) = phenotype.maximum_for(code) {
                attribute.set_maximum_score_allowed(maximum)?;
            }
            attribute.set_phenotype_modifier(phenotype.modifier_for(code));
        }
        for bonus in phenotype.bonus_traits() {
            self.add_trait(bonus.clone());
        }

        tracing::debug!(character = %self.name, phenotype = phenotype.name(), "phenotype applied");
        self.phenotype = Some(phenotype);
        self.notifier.notify(Self::PHENOTYPE);
        Ok(())
    }

    // =========================================================================
    // Biography setters
    // =========================================================================

    /// Rename the character. An empty name is a validation error.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("character name must not be empty"));
        }
        if self.name != name {
            self.name = name;
            self.notifier.notify(Self::NAME);
        }
        Ok(())
    }

    pub fn set_player_name(&mut self, player_name: impl Into<String>) {
        let player_name = player_name.into();
        if self.player_name != player_name {
            self.player_name = player_name;
            self.notifier.notify(Self::PLAYER_NAME);
        }
    }

    pub fn set_hair_color(&mut self, hair_color: impl Into<String>) {
        let hair_color = hair_color.into();
        if self.hair_color != hair_color {
            self.hair_color = hair_color;
            self.notifier.notify(Self::HAIR_COLOR);
        }
    }

    pub fn set_eye_color(&mut self, eye_color: impl Into<String>) {
        let eye_color = eye_color.into();
        if self.eye_color != eye_color {
            self.eye_color = eye_color;
            self.notifier.notify(Self::EYE_COLOR);
        }
    }

    pub fn set_weight(&mut self, weight: f32) {
        if (self.weight - weight).abs() > f32::EPSILON {
            self.weight = weight;
            self.notifier.notify(Self::WEIGHT);
        }
    }

    pub fn set_height(&mut self, height: f32) {
        if (self.height - height).abs() > f32::EPSILON {
            self.height = height;
            self.notifier.notify(Self::HEIGHT);
        }
    }

    pub fn set_age(&mut self, age: i32) {
        if self.age != age {
            self.age = age;
            self.notifier.notify(Self::AGE);
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        if self.description != description {
            self.description = description;
            self.notifier.notify(Self::DESCRIPTION);
        }
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        let notes = notes.into();
        if self.notes != notes {
            self.notes = notes;
            self.notifier.notify(Self::NOTES);
        }
    }

    pub fn set_c_bills(&mut self, c_bills: i32) {
        if self.c_bills != c_bills {
            self.c_bills = c_bills;
            self.notifier.notify(Self::C_BILLS);
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Subscribe to aggregate-level field-change notifications.
    pub fn subscribe(&mut self, observer: impl Fn(&str) + 'static) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    /// Drop a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

fn decrement(index: &mut HashMap<String, u32>, name: &str) {
    if let Some(count) = index.get_mut(name) {
        *count -= 1;
        if *count == 0 {
            index.remove(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::ComplexityRating;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn roster() -> Vec<Attribute> {
        AttributeCode::all_standard()
            .into_iter()
            .map(|code| {
                Attribute::new(code, ExperiencePoints::new(0), 8).expect("valid attribute")
            })
            .collect()
    }

    fn character() -> Character {
        Character::new("Natasha Kerensky", roster()).expect("valid character")
    }

    fn fit(seed: i32) -> CharacterTrait {
        CharacterTrait::new("Fit", ExperiencePoints::new(seed), 1, 6).expect("valid trait")
    }

    fn archery(seed: i32) -> Skill {
        Skill::new(
            "Archery",
            ComplexityRating::SimpleBasic,
            7,
            ExperiencePoints::new(seed),
        )
    }

    #[test]
    fn test_rejects_empty_name() {
        let result = Character::new("", roster());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_rejects_wrong_roster_size() {
        let mut short = roster();
        short.pop();
        let result = Character::new("Natasha Kerensky", short);
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_rejects_roster_out_of_order() {
        let mut swapped = roster();
        swapped.swap(0, 1);
        let result = Character::new("Natasha Kerensky", swapped);
        assert!(matches!(result, Err(DomainError::Configuration(_))));
    }

    #[test]
    fn test_has_trait_is_exact_and_case_sensitive() {
        let mut character = character();
        character.add_trait(fit(230));

        assert!(character.has_trait("Fit"));
        assert!(!character.has_trait("fit"));
        assert!(!character.has_trait("Fit "));
    }

    #[test]
    fn test_has_skill_is_exact_and_case_sensitive() {
        let mut character = character();
        character.add_skill(archery(37));

        assert!(character.has_skill("Archery"));
        assert!(!character.has_skill("archery"));
    }

    #[test]
    fn test_trait_index_survives_duplicate_add_remove() {
        let mut character = character();
        character.add_trait(fit(100));
        character.add_trait(fit(200));

        assert!(character.remove_trait("Fit").is_some());
        assert!(character.has_trait("Fit"));
        assert!(character.remove_trait("Fit").is_some());
        assert!(!character.has_trait("Fit"));
        assert!(character.remove_trait("Fit").is_none());
    }

    #[test]
    fn test_is_in_affiliation_matches_parent_one_level() {
        let mut character = character();
        let league = Affiliation::new("Free Worlds League", 0);
        let marik = Affiliation::new("Marik Commonwealth", 150).with_parent(league);
        character.set_affiliation(Some(marik));

        assert!(character.is_in_affiliation("Marik Commonwealth"));
        assert!(character.is_in_affiliation("Free Worlds League"));
        assert!(!character.is_in_affiliation("Lyran Alliance"));
    }

    #[test]
    fn test_is_in_affiliation_false_without_affiliation() {
        let character = character();
        assert!(!character.is_in_affiliation("Free Worlds League"));
    }

    #[test]
    fn test_learning_speed_follows_traits() {
        let mut character = character();
        assert_eq!(character.learning_speed(), LearningSpeed::Standard);

        character.add_trait(
            CharacterTrait::new("Slow Learner", ExperiencePoints::new(100), 1, 1)
                .expect("valid trait"),
        );
        assert_eq!(character.learning_speed(), LearningSpeed::Slow);

        character.add_trait(
            CharacterTrait::new("Fast Learner", ExperiencePoints::new(100), 1, 1)
                .expect("valid trait"),
        );
        assert_eq!(character.learning_speed(), LearningSpeed::Fast);
    }

    #[test]
    fn test_skill_level_uses_owner_learning_speed() {
        let mut character = character();
        character.add_skill(archery(24));
        assert_eq!(
            character.skill_level("Archery").expect("skill exists"),
            SkillLevel::Rated(0)
        );

        // Fast Learner rescales the table: 24 XP now buys level 1.
        character.add_trait(
            CharacterTrait::new("Fast Learner", ExperiencePoints::new(100), 1, 1)
                .expect("valid trait"),
        );
        assert_eq!(
            character.skill_level("Archery").expect("skill exists"),
            SkillLevel::Rated(1)
        );
    }

    #[test]
    fn test_skill_level_without_owner_is_not_ready() {
        let mut character = character();
        // Bypass add_skill to model a half-reconstructed graph.
        *character.skill_names.entry("Archery".to_string()).or_insert(0) += 1;
        character.skills.push(archery(30));

        let result = character.skill_level("Archery");
        assert!(matches!(result, Err(DomainError::NotReady(_))));
    }

    #[test]
    fn test_add_skill_experience_reaches_named_skill() {
        let mut character = character();
        character.add_skill(archery(0));
        character
            .add_skill_experience("Archery", 37)
            .expect("skill exists");

        assert_eq!(
            character.skill_level("Archery").expect("skill exists"),
            SkillLevel::Rated(1)
        );
        assert!(matches!(
            character.add_skill_experience("Gunnery", 10),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_skill_level_unknown_name_is_not_found() {
        let mut character = character();
        let result = character.skill_level("Archery");
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_trait_level_through_aggregate() {
        let mut character = character();
        character.add_trait(fit(250));
        assert_eq!(character.trait_level("Fit").expect("trait exists"), 2);

        let result = character.trait_level("Toughness");
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_add_skill_attaches_owner() {
        let mut character = character();
        character.add_skill(archery(0));
        assert_eq!(character.skills()[0].owner(), Some(character.id()));
    }

    #[test]
    fn test_attribute_score_by_code() {
        let mut character = character();
        character.attribute_mut(AttributeCode::Str).add_experience(250);
        assert_eq!(character.attribute_score(AttributeCode::Str), 2);
        assert_eq!(character.attribute_score(AttributeCode::Bod), 0);
    }

    #[test]
    fn test_set_phenotype_recaps_and_grants_bonus_traits() {
        let mut character = character();
        let phenotype = Phenotype::new("Elemental")
            .with_maximum(AttributeCode::Str, 9)
            .with_modifier(AttributeCode::Str, 1)
            .with_bonus_trait(
                CharacterTrait::new("Toughness", ExperiencePoints::new(100), 1, 3)
                    .expect("valid trait"),
            );

        character.set_phenotype(phenotype).expect("valid phenotype");

        assert_eq!(
            character.attribute(AttributeCode::Str).maximum_score_allowed(),
            9
        );
        assert_eq!(character.attribute(AttributeCode::Str).phenotype_modifier(), 1);
        // Silent attributes keep their cap and get a zero modifier.
        assert_eq!(
            character.attribute(AttributeCode::Bod).maximum_score_allowed(),
            8
        );
        assert_eq!(character.attribute(AttributeCode::Bod).phenotype_modifier(), 0);
        assert!(character.has_trait("Toughness"));
    }

    #[test]
    fn test_biography_setters_notify_once_per_change() {
        let mut character = character();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        character.subscribe(move |property| sink.borrow_mut().push(property.to_string()));

        character.set_age(28);
        character.set_age(28);
        character.set_weight(75.5);
        character.set_player_name("Sam");

        assert_eq!(
            *seen.borrow(),
            vec![
                Character::AGE.to_string(),
                Character::WEIGHT.to_string(),
                Character::PLAYER_NAME.to_string()
            ]
        );
    }

    #[test]
    fn test_collection_mutations_notify() {
        let mut character = character();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        character.subscribe(move |property| sink.borrow_mut().push(property.to_string()));

        character.add_skill(archery(0));
        character.add_trait(fit(100));
        assert!(character.remove_skill("Archery").is_some());
        assert!(character.remove_trait("Fit").is_some());
        // Misses mutate nothing and stay silent.
        assert!(character.remove_skill("Archery").is_none());
        assert!(character.remove_trait("Fit").is_none());

        assert_eq!(
            *seen.borrow(),
            vec![
                Character::SKILLS.to_string(),
                Character::TRAITS.to_string(),
                Character::SKILLS.to_string(),
                Character::TRAITS.to_string()
            ]
        );
    }

    #[test]
    fn test_set_name_rejects_empty() {
        let mut character = character();
        assert!(matches!(
            character.set_name(""),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(character.name(), "Natasha Kerensky");
    }

    #[test]
    fn test_own_pool_accumulates() {
        let mut character = character();
        character.add_experience(5000);
        character.add_experience(-150);
        assert_eq!(character.experience().total_experience(), 4850);
    }

    #[test]
    fn test_clone_drops_subscriptions() {
        let mut character = character();
        character.subscribe(|_| {});
        let copy = character.clone();

        assert_eq!(copy.name(), character.name());
        assert!(copy.has_skill("Archery") == character.has_skill("Archery"));
    }
}
