//! Skill level value object - the typed result of a skill derivation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest level a skill can reach.
pub const MAX_SKILL_LEVEL: i32 = 10;

/// Numeric sentinel exposed for a skill below its first breakpoint.
pub const UNSET_SKILL_LEVEL: i32 = -1;

/// Derived rank of a skill.
///
/// Experience below the first breakpoint is not an error; it is the
/// explicit [`SkillLevel::Unset`] marker ("no level yet").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    /// Not enough experience for level 0 yet.
    Unset,
    /// A resolved level in `0..=10`.
    Rated(i32),
}

impl SkillLevel {
    /// Numeric form: the rated level, or -1 when unset.
    pub fn value(&self) -> i32 {
        match self {
            Self::Unset => UNSET_SKILL_LEVEL,
            Self::Rated(level) => *level,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// True once no further experience can raise the level.
    pub fn is_maxed(&self) -> bool {
        matches!(self, Self::Rated(level) if *level >= MAX_SKILL_LEVEL)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "-"),
            Self::Rated(level) => write!(f, "{level}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_uses_sentinel_for_unset() {
        assert_eq!(SkillLevel::Unset.value(), -1);
        assert_eq!(SkillLevel::Rated(0).value(), 0);
        assert_eq!(SkillLevel::Rated(10).value(), 10);
    }

    #[test]
    fn test_is_maxed() {
        assert!(SkillLevel::Rated(10).is_maxed());
        assert!(!SkillLevel::Rated(9).is_maxed());
        assert!(!SkillLevel::Unset.is_maxed());
    }

    #[test]
    fn test_display() {
        assert_eq!(SkillLevel::Unset.to_string(), "-");
        assert_eq!(SkillLevel::Rated(3).to_string(), "3");
    }
}
