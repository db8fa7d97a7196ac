//! Threshold tables - ordered experience breakpoints marking level
//! boundaries.
//!
//! The breakpoint at index `i` is the cumulative experience required to
//! reach level `i`. Tables are validated at construction: a malformed
//! table is a configuration error, never silently tolerated.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::LearningSpeed;

/// Base skill breakpoints for levels 0 through 10 (the last entry marks
/// the maxed level).
pub const SKILL_BREAKPOINTS: [i32; 11] = [20, 30, 50, 80, 120, 170, 230, 300, 380, 470, 570];

/// Resolved position within a threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelLookup {
    /// Index of the largest breakpoint at or below the total.
    pub level: i32,
    /// Experience remaining past that breakpoint; 0 once maxed.
    pub residual: i32,
}

/// An ascending ordered sequence of experience breakpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdTable {
    breakpoints: Vec<i32>,
}

impl ThresholdTable {
    /// Build a table from breakpoints, which must be non-empty and
    /// strictly ascending.
    pub fn new(breakpoints: Vec<i32>) -> Result<Self, DomainError> {
        if breakpoints.is_empty() {
            return Err(DomainError::configuration("threshold table is empty"));
        }
        if let Some(pair) = breakpoints.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(DomainError::configuration(format!(
                "threshold table is not strictly ascending at {} >= {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { breakpoints })
    }

    /// The unscaled skill table.
    pub fn skill_base() -> Self {
        Self {
            breakpoints: SKILL_BREAKPOINTS.to_vec(),
        }
    }

    /// The skill table for a given learning speed.
    ///
    /// Fast Learner scales every breakpoint by 4/5, Slow Learner by 6/5,
    /// floored. The fractional scale keeps the arithmetic exact: a float
    /// `1.2 * 20` lands just under 24 and would floor to 23.
    pub fn for_speed(speed: LearningSpeed) -> Self {
        match speed.breakpoint_scale() {
            None => Self::skill_base(),
            // Base gaps are at least 10 points, so scaling by 4/5 or 6/5
            // preserves strict ascent.
            Some((numerator, denominator)) => Self {
                breakpoints: SKILL_BREAKPOINTS
                    .iter()
                    .map(|b| (b * numerator).div_euclid(denominator))
                    .collect(),
            },
        }
    }

    /// Scale every breakpoint by `numerator / denominator`, flooring, and
    /// revalidate the result.
    pub fn scaled(&self, numerator: i32, denominator: i32) -> Result<Self, DomainError> {
        if numerator <= 0 || denominator <= 0 {
            return Err(DomainError::configuration(format!(
                "threshold scale must be positive, got {numerator}/{denominator}"
            )));
        }
        Self::new(
            self.breakpoints
                .iter()
                .map(|b| (b * numerator).div_euclid(denominator))
                .collect(),
        )
    }

    /// Find the largest index whose breakpoint is at or below `total`.
    ///
    /// Returns `None` when the total is below the first breakpoint ("no
    /// level yet"). At or past the last breakpoint the table is maxed and
    /// the residual is 0; otherwise the residual is the experience past
    /// the resolved breakpoint.
    pub fn lookup(&self, total: i32) -> Option<LevelLookup> {
        let index = self
            .breakpoints
            .iter()
            .rposition(|breakpoint| *breakpoint <= total)?;

        let residual = if index == self.breakpoints.len() - 1 {
            0
        } else {
            total - self.breakpoints[index]
        };

        Some(LevelLookup {
            level: index as i32,
            residual,
        })
    }

    /// Highest level this table can resolve.
    pub fn max_level(&self) -> i32 {
        (self.breakpoints.len() - 1) as i32
    }

    /// Experience required for level 0.
    pub fn first_breakpoint(&self) -> i32 {
        self.breakpoints[0]
    }

    pub fn breakpoints(&self) -> &[i32] {
        &self.breakpoints
    }
}
