//! Fitness goal specification.

pub mod types;

pub use types::{Category, ConstraintTag, DifficultyLevel, GoalSpec};
