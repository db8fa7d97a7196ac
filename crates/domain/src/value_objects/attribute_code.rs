//! Attribute code value object - the fixed eight-attribute roster.
//!
//! Provides type safety for attribute references instead of magic strings
//! like "STR", "RFL".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The eight character attributes, in roster order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeCode {
    /// Strength - raw physical power
    Str,
    /// Body - durability and conditioning
    Bod,
    /// Reflexes - reaction speed
    Rfl,
    /// Dexterity - fine manipulation
    Dex,
    /// Intelligence - reasoning and memory
    Int,
    /// Willpower - decisiveness
    Wil,
    /// Charisma - force of personality
    Cha,
    /// Edge - plain luck
    Edg,
}

impl AttributeCode {
    /// Size of the fixed roster.
    pub const COUNT: usize = 8;

    /// Returns the short uppercase abbreviation (e.g., "STR", "RFL").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Bod => "BOD",
            Self::Rfl => "RFL",
            Self::Dex => "DEX",
            Self::Int => "INT",
            Self::Wil => "WIL",
            Self::Cha => "CHA",
            Self::Edg => "EDG",
        }
    }

    /// Returns the full attribute name (e.g., "Strength", "Reflexes").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Bod => "Body",
            Self::Rfl => "Reflexes",
            Self::Dex => "Dexterity",
            Self::Int => "Intelligence",
            Self::Wil => "Willpower",
            Self::Cha => "Charisma",
            Self::Edg => "Edge",
        }
    }

    /// All eight attributes in roster order.
    pub fn all_standard() -> [AttributeCode; Self::COUNT] {
        [
            Self::Str,
            Self::Bod,
            Self::Rfl,
            Self::Dex,
            Self::Int,
            Self::Wil,
            Self::Cha,
            Self::Edg,
        ]
    }

    /// Position within the fixed roster.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AttributeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttributeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Str),
            "BOD" | "BODY" => Ok(Self::Bod),
            "RFL" | "REFLEXES" => Ok(Self::Rfl),
            "DEX" | "DEXTERITY" => Ok(Self::Dex),
            "INT" | "INTELLIGENCE" => Ok(Self::Int),
            "WIL" | "WILLPOWER" => Ok(Self::Wil),
            "CHA" | "CHARISMA" => Ok(Self::Cha),
            "EDG" | "EDGE" => Ok(Self::Edg),
            other => Err(DomainError::parse(format!(
                "unknown attribute code: {other}"
            ))),
        }
    }
}
