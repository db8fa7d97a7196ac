//! Aggregates - Consistency boundaries around entity clusters

mod character;

pub use character::Character;
