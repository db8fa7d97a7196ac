//! Learning speed - how a character's traits reshape the skill threshold
//! table.

use serde::{Deserialize, Serialize};

/// Breakpoint-table variant selected by the owning character's traits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearningSpeed {
    /// No learner trait; the base table applies.
    #[default]
    Standard,
    /// "Fast Learner" trait; breakpoints scaled by 4/5, floored.
    Fast,
    /// "Slow Learner" trait; breakpoints scaled by 6/5, floored.
    Slow,
}

impl LearningSpeed {
    /// Trait name that selects [`LearningSpeed::Fast`].
    pub const FAST_LEARNER_TRAIT: &'static str = "Fast Learner";
    /// Trait name that selects [`LearningSpeed::Slow`].
    pub const SLOW_LEARNER_TRAIT: &'static str = "Slow Learner";

    /// Resolve the speed from capability queries. Fast Learner wins when a
    /// character somehow carries both traits.
    pub fn from_traits(has_fast_learner: bool, has_slow_learner: bool) -> Self {
        if has_fast_learner {
            Self::Fast
        } else if has_slow_learner {
            Self::Slow
        } else {
            Self::Standard
        }
    }

    /// Breakpoint scale as an exact `(numerator, denominator)` pair, or
    /// `None` for the base table.
    pub fn breakpoint_scale(self) -> Option<(i32, i32)> {
        match self {
            Self::Standard => None,
            Self::Fast => Some((4, 5)),
            Self::Slow => Some((6, 5)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_traits() {
        assert_eq!(
            LearningSpeed::from_traits(false, false),
            LearningSpeed::Standard
        );
        assert_eq!(LearningSpeed::from_traits(true, false), LearningSpeed::Fast);
        assert_eq!(LearningSpeed::from_traits(false, true), LearningSpeed::Slow);
    }

    #[test]
    fn test_fast_learner_wins_over_slow() {
        assert_eq!(LearningSpeed::from_traits(true, true), LearningSpeed::Fast);
    }
}
