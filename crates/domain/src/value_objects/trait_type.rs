//! Trait typing - a trait can carry several kinds at once (e.g. Positive +
//! Character + Identity).

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One facet of a trait's classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum TraitKind {
    Neutral,
    Positive,
    Negative,
    Flexible,
    Character,
    Vehicle,
    Identity,
    Opposed,
    Multiple,
}

impl TraitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Flexible => "Flexible",
            Self::Character => "Character",
            Self::Vehicle => "Vehicle",
            Self::Identity => "Identity",
            Self::Opposed => "Opposed",
            Self::Multiple => "Multiple",
        }
    }
}

impl fmt::Display for TraitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of kinds a trait belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitTypeSet(BTreeSet<TraitKind>);

impl TraitTypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from any collection of kinds.
    pub fn of(kinds: impl IntoIterator<Item = TraitKind>) -> Self {
        Self(kinds.into_iter().collect())
    }

    /// Builder form: add one kind.
    pub fn with(mut self, kind: TraitKind) -> Self {
        self.0.insert(kind);
        self
    }

    pub fn insert(&mut self, kind: TraitKind) -> bool {
        self.0.insert(kind)
    }

    pub fn has(&self, kind: TraitKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TraitKind> + '_ {
        self.0.iter().copied()
    }

    /// A character may carry several instances of a Multiple-kind trait.
    pub fn allows_duplicates(&self) -> bool {
        self.has(TraitKind::Multiple)
    }
}

impl FromIterator<TraitKind> for TraitTypeSet {
    fn from_iter<I: IntoIterator<Item = TraitKind>>(iter: I) -> Self {
        Self::of(iter)
    }
}
