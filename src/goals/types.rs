//! Goal specification types and display templating.

use serde::{Deserialize, Serialize};

/// User-facing goal category.
///
/// Distinct from the exercise library's own taxonomy (see
/// [`crate::catalogue::CatalogueCategory`]); the planner maps between the
/// two with a fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Lose weight / body fat
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Improve cardiovascular endurance
    Endurance,
    /// Improve flexibility and mobility
    Flexibility,
    /// Recover from an injury
    Rehabilitation,
    /// Fallback when no category keyword matches
    #[default]
    General,
}

impl Category {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::WeightLoss => "Weight Loss",
            Category::MuscleGain => "Muscle Gain",
            Category::Endurance => "Endurance",
            Category::Flexibility => "Flexibility",
            Category::Rehabilitation => "Rehabilitation",
            Category::General => "General",
        }
    }

    /// Get all categories.
    pub fn all() -> Vec<Category> {
        vec![
            Category::WeightLoss,
            Category::MuscleGain,
            Category::Endurance,
            Category::Flexibility,
            Category::Rehabilitation,
            Category::General,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Difficulty level of a program.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum DifficultyLevel {
    Beginner,
    /// Fallback when no difficulty keyword matches
    #[default]
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Physical limitation marker attached to a goal.
///
/// Only `KneePain` currently suppresses exercises during selection; the
/// other tags are detected and stored but have no filtering effect yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintTag {
    KneePain,
    BackPain,
    ShoulderPain,
}

impl ConstraintTag {
    /// Get the wire tag used at serialization boundaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintTag::KneePain => "knee_pain",
            ConstraintTag::BackPain => "back_pain",
            ConstraintTag::ShoulderPain => "shoulder_pain",
        }
    }
}

impl std::fmt::Display for ConstraintTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured representation of a fitness request.
///
/// Produced by the interpreter (always fully defaulted, never invalid) or
/// constructed directly by a caller, in which case the planner validates
/// the positive-count invariants at the generation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSpec {
    /// Goal category (General when nothing matched)
    pub category: Category,
    /// Difficulty level (Intermediate when nothing matched)
    pub difficulty_level: DifficultyLevel,
    /// Program length in weeks (default 8, must be >= 1)
    pub duration_weeks: u32,
    /// Training sessions per week (default 3, must be >= 1)
    pub sessions_per_week: u32,
    /// Physical limitations, possibly empty
    pub constraints: Vec<ConstraintTag>,
}

impl Default for GoalSpec {
    fn default() -> Self {
        Self {
            category: Category::General,
            difficulty_level: DifficultyLevel::Intermediate,
            duration_weeks: 8,
            sessions_per_week: 3,
            constraints: Vec::new(),
        }
    }
}

impl GoalSpec {
    /// Create a spec for a category with defaults everywhere else.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Check whether a constraint tag is present.
    pub fn has_constraint(&self, tag: ConstraintTag) -> bool {
        self.constraints.contains(&tag)
    }

    /// Display title, a pure function of the spec fields.
    pub fn title(&self) -> String {
        let weeks = self.duration_weeks;
        let level = self.difficulty_level;
        match self.category {
            Category::WeightLoss => {
                format!("Programme perte de poids {weeks} semaines - Niveau {level}")
            }
            Category::MuscleGain => {
                format!("Programme prise de muscle {weeks} semaines - Niveau {level}")
            }
            Category::Endurance => {
                format!("Programme endurance {weeks} semaines - Niveau {level}")
            }
            Category::Flexibility => {
                format!("Programme flexibilité {weeks} semaines - Niveau {level}")
            }
            Category::Rehabilitation => {
                format!("Programme rééducation {weeks} semaines - Niveau {level}")
            }
            Category::General => {
                format!("Programme fitness {weeks} semaines - Niveau {level}")
            }
        }
    }

    /// Display description, a pure function of the spec fields.
    pub fn description(&self) -> String {
        let weeks = self.duration_weeks;
        let level = self.difficulty_level;
        let sessions = self.sessions_per_week;
        let objective = match self.category {
            Category::WeightLoss => "perte de poids",
            Category::MuscleGain => "prise de muscle",
            Category::Endurance => "amélioration endurance",
            Category::Flexibility => "amélioration flexibilité",
            Category::Rehabilitation => "rééducation",
            Category::General => "fitness général",
        };
        format!(
            "Objectif {objective} sur {weeks} semaines. \
             Programme adapté aux {level} avec {sessions} séances par semaine."
        )
    }
}
