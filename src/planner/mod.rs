//! Program generation: goal spec + catalogue -> dated session plan.

pub mod engine;
pub mod types;

pub use engine::ProgramGenerator;
pub use types::{GoalStatus, Intensity, PlanError, Program, ProgramGoal, Session, SessionStatus};
