//! Progression engines - pure derivation of game-visible values from
//! accumulated experience.
//!
//! Each engine maps `(total experience, table/config constants)` to a
//! level value plus the residual the owning ledger should settle to. The
//! functions here never touch a ledger themselves; the entity wrappers
//! (`Attribute::score`, `Skill::level`, `CharacterTrait::level`) apply the
//! residual, which keeps every derivation deterministic and idempotent.

mod rounding;
mod thresholds;

pub use rounding::{boundary_residual, floor_level, toward_zero_level, LEVEL_STEP};
pub use thresholds::{LevelLookup, ThresholdTable, SKILL_BREAKPOINTS};

use crate::value_objects::SkillLevel;

/// Attribute score: one point per 100 XP, floored, capped at
/// `maximum_score_allowed`. There is no lower clamp: experience debt
/// floors into a visible negative score (`-25 -> -1`).
pub fn attribute_score(total: i32, maximum_score_allowed: i32) -> i32 {
    floor_level(total, LEVEL_STEP).min(maximum_score_allowed)
}

/// Skill level under the given table.
///
/// Returns the level and, when the total resolves inside the table, the
/// residual to settle. Below the first breakpoint the level is
/// [`SkillLevel::Unset`] and the residual is left untouched.
pub fn skill_level(total: i32, table: &ThresholdTable) -> (SkillLevel, Option<i32>) {
    match table.lookup(total) {
        None => (SkillLevel::Unset, None),
        Some(LevelLookup { level, residual }) => (SkillLevel::Rated(level), Some(residual)),
    }
}

/// Trait level: one signed level per 100 XP rounding toward zero, then
/// clamped. A raw level below `minimum_level` collapses to 0 (not to the
/// minimum - observed rule, preserved); above `maximum_level` it collapses
/// to the maximum.
pub fn trait_level(total: i32, minimum_level: i32, maximum_level: i32) -> i32 {
    let raw = toward_zero_level(total, LEVEL_STEP);
    if raw < minimum_level {
        0
    } else if raw > maximum_level {
        maximum_level
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_score_floors_and_caps() {
        assert_eq!(attribute_score(0, 8), 0);
        assert_eq!(attribute_score(99, 8), 0);
        assert_eq!(attribute_score(100, 8), 1);
        assert_eq!(attribute_score(250, 8), 2);
        assert_eq!(attribute_score(1000, 8), 8);
    }

    #[test]
    fn test_attribute_score_debt_floors_negative() {
        // min(8, floor(-25 / 100)) is -1, not 0.
        assert_eq!(attribute_score(-25, 8), -1);
        assert_eq!(attribute_score(-100, 8), -1);
        assert_eq!(attribute_score(-125, 8), -2);
        assert_eq!(attribute_score(-250, 8), -3);
    }

    #[test]
    fn test_attribute_score_monotonic_in_total() {
        let mut last = i32::MIN;
        for total in (-500..=1200).step_by(25) {
            let score = attribute_score(total, 8);
            assert!(score >= last, "score regressed at total {total}");
            last = score;
        }
    }

    #[test]
    fn test_skill_level_spec_boundaries() {
        let table = ThresholdTable::skill_base();
        assert_eq!(skill_level(19, &table), (SkillLevel::Unset, None));
        assert_eq!(skill_level(20, &table), (SkillLevel::Rated(0), Some(0)));
        assert_eq!(skill_level(29, &table), (SkillLevel::Rated(0), Some(9)));
        assert_eq!(skill_level(30, &table), (SkillLevel::Rated(1), Some(0)));
        assert_eq!(skill_level(569, &table), (SkillLevel::Rated(9), Some(99)));
        assert_eq!(skill_level(570, &table), (SkillLevel::Rated(10), Some(0)));
    }

    #[test]
    fn test_trait_level_signed_rounding() {
        assert_eq!(trait_level(250, 0, 6), 2);
        assert_eq!(trait_level(-250, -6, 6), -2);
        // Ceiling toward zero: -50 XP is level 0, not level -1.
        assert_eq!(trait_level(-50, -6, 6), 0);
    }

    #[test]
    fn test_trait_level_clamps() {
        // Above the maximum collapses to the maximum.
        assert_eq!(trait_level(900, 1, 6), 6);
        // Below the minimum collapses to zero, not the minimum.
        assert_eq!(trait_level(-250, 1, 6), 0);
        assert_eq!(trait_level(0, 1, 6), 0);
    }
}
