//! Program, session and intensity types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalogue::Exercise;
use crate::goals::{Category, ConstraintTag, DifficultyLevel, GoalSpec};

/// Per-week intensity classification.
///
/// Drives the exercise budget per session: programs ramp up over the
/// first two weeks, hold steady, then peak over the final two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Normal,
    Peak,
}

impl Intensity {
    /// Classify a 1-indexed week within a program.
    ///
    /// The light window is checked first and wins when both windows
    /// overlap (short programs): weeks 1-2 of a 4-week program are light
    /// even though they also satisfy the peak condition.
    pub fn for_week(week: u32, total_weeks: u32) -> Self {
        if week <= 2 {
            Intensity::Light
        } else if week >= total_weeks.saturating_sub(2) {
            Intensity::Peak
        } else {
            Intensity::Normal
        }
    }

    /// Nominal number of exercises for a session at this intensity.
    pub fn exercise_budget(&self) -> usize {
        match self {
            Intensity::Light => 4,
            Intensity::Peak => 8,
            Intensity::Normal => 6,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Light => write!(f, "light"),
            Intensity::Normal => write!(f, "normal"),
            Intensity::Peak => write!(f, "peak"),
        }
    }
}

/// Lifecycle status of a planned session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Planned,
    Completed,
    Skipped,
}

/// Lifecycle status of a program goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Abandoned,
}

/// One dated workout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// 1-indexed week within the program
    pub week_number: u32,
    /// 1-indexed session within the week
    pub session_number: u32,
    /// Lifecycle status, `planned` at generation time
    pub status: SessionStatus,
    /// Coach notes, empty at generation time
    pub notes: String,
    /// Display title
    pub title: String,
    /// Sum of per-exercise calories (calories/min x that exercise's minutes)
    pub total_calories: u32,
    /// Sum of exercise durations
    pub total_duration_minutes: u32,
    /// Selected exercise snapshots (copied from the catalogue)
    pub exercises: Vec<Exercise>,
}

/// Goal-level metadata attached to a generated program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramGoal {
    /// Unique identifier
    pub id: Uuid,
    /// Display title derived from the spec
    pub title: String,
    /// Display description derived from the spec
    pub description: String,
    /// Goal category
    pub category: Category,
    /// Lifecycle status, `pending` at generation time
    pub status: GoalStatus,
    /// First day of the program
    pub start_date: NaiveDate,
    /// Day the program ends
    pub end_date: NaiveDate,
    /// Difficulty level
    pub difficulty_level: DifficultyLevel,
    /// Sessions per week
    pub sessions_per_week: u32,
    /// Program length in weeks
    pub duration_weeks: u32,
    /// Physical limitations carried over from the spec
    pub constraints: Vec<ConstraintTag>,
    /// Completion percentage, 0 at generation time
    pub progress: u8,
}

/// A complete generated program.
///
/// Returned by value; the generator keeps no reference to it. Sessions
/// are ordered week-major then session-minor, which callers may rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Goal metadata
    pub goal: ProgramGoal,
    /// All sessions, in chronological-within-week order
    pub sessions: Vec<Session>,
}

/// Planning errors.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The weekly loop assumes a positive week count.
    #[error("Goal duration must be at least 1 week, got {0}")]
    InvalidDuration(u32),

    /// Date placement assumes a positive session count.
    #[error("Goal must have at least 1 session per week, got {0}")]
    InvalidSessionFrequency(u32),
}

/// Validate the positive-count invariants a spec must satisfy before the
/// weekly loop runs. Interpretation can never produce a violation;
/// directly constructed specs can.
pub fn validate_spec(spec: &GoalSpec) -> Result<(), PlanError> {
    if spec.duration_weeks == 0 {
        return Err(PlanError::InvalidDuration(spec.duration_weeks));
    }
    if spec.sessions_per_week == 0 {
        return Err(PlanError::InvalidSessionFrequency(spec.sessions_per_week));
    }
    Ok(())
}
