//! Catalogue types and JSON loading.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::goals::DifficultyLevel;

/// Category in the exercise library's own taxonomy.
///
/// Not the same thing as a goal [`Category`](crate::goals::Category); the
/// planner maps goal categories onto one or more catalogue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogueCategory {
    Cardio,
    Strength,
    Flexibility,
    Core,
}

impl CatalogueCategory {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            CatalogueCategory::Cardio => "Cardio",
            CatalogueCategory::Strength => "Strength",
            CatalogueCategory::Flexibility => "Flexibility",
            CatalogueCategory::Core => "Core",
        }
    }

    /// Get all catalogue categories.
    pub fn all() -> Vec<CatalogueCategory> {
        vec![
            CatalogueCategory::Cardio,
            CatalogueCategory::Strength,
            CatalogueCategory::Flexibility,
            CatalogueCategory::Core,
        ]
    }
}

impl std::fmt::Display for CatalogueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single catalogue entry.
///
/// Sessions hold copied snapshots of these, so a catalogue reload cannot
/// retroactively alter an already generated program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Display name
    pub name: String,
    /// Prescribed duration in minutes
    pub duration_minutes: u32,
    /// Energy expenditure per minute of work
    pub calories_per_minute: u32,
    /// Muscle/joint tags (informational)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Exercise {
    /// Create a new exercise entry.
    pub fn new(name: &str, duration_minutes: u32, calories_per_minute: u32) -> Self {
        Self {
            name: name.to_string(),
            duration_minutes,
            calories_per_minute,
            tags: Vec::new(),
        }
    }

    /// Attach muscle/joint tags.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    /// Total calories for one performance of this exercise.
    pub fn total_calories(&self) -> u32 {
        self.calories_per_minute * self.duration_minutes
    }
}

/// Catalogue errors.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// The exercise library: category -> difficulty level -> entries.
///
/// Loaded once at startup and read-only afterwards, so shared references
/// across concurrent generation calls are safe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseCatalogue {
    entries: HashMap<CatalogueCategory, HashMap<DifficultyLevel, Vec<Exercise>>>,
}

impl ExerciseCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalogue from a JSON file.
    ///
    /// Expected shape: `{ "Cardio": { "Beginner": [ { "name": ... } ] } }`.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogueError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogueError::IoError(e.to_string()))?;

        let catalogue: ExerciseCatalogue =
            serde_json::from_str(&content).map_err(|e| CatalogueError::ParseError(e.to_string()))?;

        tracing::info!(
            path = %path.display(),
            entries = catalogue.len(),
            "Exercise catalogue loaded"
        );
        Ok(catalogue)
    }

    /// Add entries for a (category, level) slot, appending to any already there.
    pub fn insert(
        &mut self,
        category: CatalogueCategory,
        level: DifficultyLevel,
        exercises: Vec<Exercise>,
    ) {
        self.entries
            .entry(category)
            .or_default()
            .entry(level)
            .or_default()
            .extend(exercises);
    }

    /// Look up the entries for a (category, level) pair.
    ///
    /// `None` and an empty slice are equivalent to callers: both mean the
    /// slot contributes nothing.
    pub fn exercises(
        &self,
        category: CatalogueCategory,
        level: DifficultyLevel,
    ) -> Option<&[Exercise]> {
        self.entries
            .get(&category)
            .and_then(|levels| levels.get(&level))
            .map(Vec::as_slice)
    }

    /// Total number of entries across every slot.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(|levels| levels.values())
            .map(Vec::len)
            .sum()
    }

    /// Check whether the catalogue has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
