//! TrainPlan - Exercise Program Planner
//!
//! An open-source, self-hosted exercise program planner built in Rust.
//! Interprets free-form natural-language fitness requests into structured
//! goals, then generates multi-week, session-by-session training programs
//! with intensity progression and constraint-aware exercise selection.

pub mod catalogue;
pub mod goals;
pub mod interpreter;
pub mod planner;
pub mod storage;

// Re-export commonly used types
pub use catalogue::ExerciseCatalogue;
pub use goals::GoalSpec;
pub use interpreter::RequestInterpreter;
pub use planner::ProgramGenerator;
pub use storage::config::AppConfig;
