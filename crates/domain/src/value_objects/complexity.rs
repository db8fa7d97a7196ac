//! Skill complexity rating - the two-letter action/training code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How involved a skill is in physical action (Simple/Complex) and
/// training (Basic/Advanced).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityRating {
    /// SB - Simple action, Basic training
    #[serde(rename = "SB")]
    SimpleBasic,
    /// SA - Simple action, Advanced training
    #[serde(rename = "SA")]
    SimpleAdvanced,
    /// CB - Complex action, Basic training
    #[serde(rename = "CB")]
    ComplexBasic,
    /// CA - Complex action, Advanced training
    #[serde(rename = "CA")]
    ComplexAdvanced,
}

impl ComplexityRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleBasic => "SB",
            Self::SimpleAdvanced => "SA",
            Self::ComplexBasic => "CB",
            Self::ComplexAdvanced => "CA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SimpleBasic => "Simple-Basic",
            Self::SimpleAdvanced => "Simple-Advanced",
            Self::ComplexBasic => "Complex-Basic",
            Self::ComplexAdvanced => "Complex-Advanced",
        }
    }

    pub fn is_advanced(&self) -> bool {
        matches!(self, Self::SimpleAdvanced | Self::ComplexAdvanced)
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Self::ComplexBasic | Self::ComplexAdvanced)
    }

    /// Simple skills link one attribute, advanced skills link two.
    pub fn linked_attribute_count(&self) -> usize {
        if self.is_advanced() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for ComplexityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplexityRating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SB" => Ok(Self::SimpleBasic),
            "SA" => Ok(Self::SimpleAdvanced),
            "CB" => Ok(Self::ComplexBasic),
            "CA" => Ok(Self::ComplexAdvanced),
            other => Err(DomainError::parse(format!(
                "unknown complexity rating: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for rating in [
            ComplexityRating::SimpleBasic,
            ComplexityRating::SimpleAdvanced,
            ComplexityRating::ComplexBasic,
            ComplexityRating::ComplexAdvanced,
        ] {
            assert_eq!(
                ComplexityRating::from_str(rating.as_str()),
                Ok(rating)
            );
        }
        assert!(ComplexityRating::from_str("XX").is_err());
    }

    #[test]
    fn test_linked_attribute_count() {
        assert_eq!(ComplexityRating::SimpleBasic.linked_attribute_count(), 1);
        assert_eq!(ComplexityRating::SimpleAdvanced.linked_attribute_count(), 2);
        assert_eq!(ComplexityRating::ComplexAdvanced.linked_attribute_count(), 2);
    }

    #[test]
    fn test_serde_uses_two_letter_code() {
        let json = serde_json::to_string(&ComplexityRating::ComplexBasic).expect("serialize");
        assert_eq!(json, "\"CB\"");
    }
}
