//! Program generation engine.
//!
//! Turns a validated goal spec into a calendar of sessions: a weekly
//! intensity curve, deterministic date placement, and constraint-aware
//! random exercise selection. Given a fixed seed and a fixed `today`,
//! generation is fully deterministic.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::catalogue::{CatalogueCategory, Exercise, ExerciseCatalogue};
use crate::goals::{Category, ConstraintTag, GoalSpec};
use crate::planner::types::{
    validate_spec, GoalStatus, Intensity, PlanError, Program, ProgramGoal, Session, SessionStatus,
};

/// Exercise-name substrings suppressed for goals with knee pain.
const SQUAT_FAMILY: &[&str] = &["squat", "fente", "lunge"];

/// Fixed mapping from the user-facing goal taxonomy to the catalogue's
/// exercise taxonomy.
pub fn catalogue_groups(category: Category) -> &'static [CatalogueCategory] {
    match category {
        Category::WeightLoss => &[CatalogueCategory::Cardio, CatalogueCategory::Strength],
        Category::MuscleGain => &[CatalogueCategory::Strength, CatalogueCategory::Core],
        Category::Endurance => &[CatalogueCategory::Cardio],
        Category::Flexibility => &[CatalogueCategory::Flexibility],
        Category::Rehabilitation => &[CatalogueCategory::Flexibility, CatalogueCategory::Core],
        Category::General => &[
            CatalogueCategory::Cardio,
            CatalogueCategory::Strength,
            CatalogueCategory::Flexibility,
            CatalogueCategory::Core,
        ],
    }
}

/// Program generation engine.
///
/// Owns the catalogue snapshot and the sampling RNG. The RNG is seedable
/// so tests (and callers who want reproducible plans) can pin it; the
/// current date is an explicit parameter rather than a wall-clock read.
pub struct ProgramGenerator {
    /// Read-only catalogue snapshot
    catalogue: ExerciseCatalogue,
    /// Exercise sampling source
    rng: StdRng,
}

impl ProgramGenerator {
    /// Create a generator with an entropy-seeded RNG.
    pub fn new(catalogue: ExerciseCatalogue) -> Self {
        Self {
            catalogue,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed for reproducible plans.
    pub fn with_seed(catalogue: ExerciseCatalogue, seed: u64) -> Self {
        Self {
            catalogue,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a program starting from the current wall-clock date.
    pub fn generate_from_today(&mut self, spec: &GoalSpec) -> Result<Program, PlanError> {
        self.generate(spec, Utc::now().date_naive())
    }

    /// Generate a program starting at `today`.
    ///
    /// Validation failures surface before any session is produced; no
    /// partial program is ever returned. Catalogue misses degrade to
    /// zero-exercise contributions, never errors.
    pub fn generate(&mut self, spec: &GoalSpec, today: NaiveDate) -> Result<Program, PlanError> {
        validate_spec(spec)?;

        let groups = catalogue_groups(spec.category);
        let mut sessions =
            Vec::with_capacity(session_capacity(spec.duration_weeks, spec.sessions_per_week));

        for week in 1..=spec.duration_weeks {
            let intensity = Intensity::for_week(week, spec.duration_weeks);

            for session_number in 1..=spec.sessions_per_week {
                // Deterministic placement; sessions of one week can land
                // on the same weekday when sessions_per_week is large.
                let date = today
                    + Duration::weeks(i64::from(week) - 1)
                    + Duration::days((i64::from(session_number) * 2) % 7);

                let exercises = self.select_exercises(groups, spec, intensity);
                let total_duration_minutes = exercises.iter().map(|ex| ex.duration_minutes).sum();
                let total_calories = exercises.iter().map(Exercise::total_calories).sum();

                sessions.push(Session {
                    date,
                    week_number: week,
                    session_number,
                    status: SessionStatus::Planned,
                    notes: String::new(),
                    title: format!("Semaine {week} - Séance {session_number}"),
                    total_calories,
                    total_duration_minutes,
                    exercises,
                });
            }
        }

        let goal = ProgramGoal {
            id: Uuid::from_u128(self.rng.gen()),
            title: spec.title(),
            description: spec.description(),
            category: spec.category,
            status: GoalStatus::Pending,
            start_date: today,
            end_date: today + Duration::weeks(i64::from(spec.duration_weeks)),
            difficulty_level: spec.difficulty_level,
            sessions_per_week: spec.sessions_per_week,
            duration_weeks: spec.duration_weeks,
            constraints: spec.constraints.clone(),
            progress: 0,
        };

        tracing::info!(
            category = %spec.category,
            weeks = spec.duration_weeks,
            sessions = sessions.len(),
            "Program generated"
        );

        Ok(Program { goal, sessions })
    }

    /// Select the exercises for one session.
    ///
    /// The budget is split evenly across the mapped catalogue groups with
    /// truncating division (the remainder is dropped, so the total can
    /// undershoot the nominal budget). Each group contributes only at the
    /// exact difficulty level; a missing slot contributes nothing.
    fn select_exercises(
        &mut self,
        groups: &[CatalogueCategory],
        spec: &GoalSpec,
        intensity: Intensity,
    ) -> Vec<Exercise> {
        let budget = intensity.exercise_budget();
        let per_group = std::cmp::max(1, budget / groups.len());

        let mut selected = Vec::new();
        for group in groups {
            let Some(available) = self.catalogue.exercises(*group, spec.difficulty_level) else {
                tracing::debug!(group = %group, level = %spec.difficulty_level, "No catalogue entries");
                continue;
            };

            let candidates = filter_by_constraints(available, &spec.constraints);
            let take = candidates.len().min(per_group);
            selected.extend(
                candidates
                    .choose_multiple(&mut self.rng, take)
                    .map(|ex| (*ex).clone()),
            );
        }

        selected
    }
}

/// Capacity hint for the session list.
///
/// Widened so a structurally valid spec with huge counts cannot overflow
/// the product, and capped because this is only a hint: generation still
/// grows the list past it.
fn session_capacity(duration_weeks: u32, sessions_per_week: u32) -> usize {
    const MAX_HINT: u64 = 4096;
    (u64::from(duration_weeks) * u64::from(sessions_per_week)).min(MAX_HINT) as usize
}

/// Apply constraint filtering to a group's entries.
///
/// Only knee pain filters anything today: it removes squat/lunge-family
/// exercises by name. Back and shoulder pain are carried on the spec but
/// have no effect here yet.
fn filter_by_constraints<'a>(
    exercises: &'a [Exercise],
    constraints: &[ConstraintTag],
) -> Vec<&'a Exercise> {
    if constraints.contains(&ConstraintTag::KneePain) {
        exercises
            .iter()
            .filter(|ex| {
                let name = ex.name.to_lowercase();
                !SQUAT_FAMILY.iter().any(|word| name.contains(word))
            })
            .collect()
    } else {
        exercises.iter().collect()
    }
}
