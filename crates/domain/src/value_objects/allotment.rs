//! Fixed experience allotments granted by an affiliation (e.g. "Trait /
//! Wealth / 100", "Skill / Negotiation / 10").

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Progression category an allotment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllotmentCategory {
    Attribute,
    Skill,
    Trait,
}

impl AllotmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attribute => "Attribute",
            Self::Skill => "Skill",
            Self::Trait => "Trait",
        }
    }
}

impl fmt::Display for AllotmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AllotmentCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Attribute" | "Attributes" => Ok(Self::Attribute),
            "Skill" | "Skills" => Ok(Self::Skill),
            "Trait" | "Traits" => Ok(Self::Trait),
            other => Err(DomainError::parse(format!(
                "unknown allotment category: {other}"
            ))),
        }
    }
}

/// A fixed grant of experience points toward one named target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceAllotment {
    category: AllotmentCategory,
    name: String,
    points: i32,
}

impl ExperienceAllotment {
    pub fn new(category: AllotmentCategory, name: impl Into<String>, points: i32) -> Self {
        Self {
            category,
            name: name.into(),
            points,
        }
    }

    #[inline]
    pub fn category(&self) -> AllotmentCategory {
        self.category
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed: negative allotments represent imposed drawbacks.
    #[inline]
    pub fn points(&self) -> i32 {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allotment_fields() {
        let allotment =
            ExperienceAllotment::new(AllotmentCategory::Trait, "Reputation", -100);
        assert_eq!(allotment.category(), AllotmentCategory::Trait);
        assert_eq!(allotment.name(), "Reputation");
        assert_eq!(allotment.points(), -100);
    }

    #[test]
    fn test_category_from_str_accepts_plural() {
        assert_eq!(
            "Skills".parse::<AllotmentCategory>(),
            Ok(AllotmentCategory::Skill)
        );
        assert_eq!(
            "Trait".parse::<AllotmentCategory>(),
            Ok(AllotmentCategory::Trait)
        );
        assert!("Gear".parse::<AllotmentCategory>().is_err());
    }
}
