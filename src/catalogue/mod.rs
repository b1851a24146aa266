//! Exercise catalogue: the read-only library the planner draws from.

pub mod library;
pub mod types;

pub use library::built_in;
pub use types::{CatalogueCategory, CatalogueError, Exercise, ExerciseCatalogue};
