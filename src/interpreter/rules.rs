//! Declarative keyword rule tables.
//!
//! Tables are scanned first-match-wins in the order written here, so
//! priority is part of the data, not buried in control flow. Keywords
//! are bilingual (French/English) substrings matched against the
//! case-folded request.

use crate::goals::{Category, ConstraintTag, DifficultyLevel};

/// Category detection rules, in priority order. No match means
/// [`Category::General`].
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::WeightLoss,
        &["perdre", "poids", "maigrir", "weight", "fat", "gross"],
    ),
    (
        Category::MuscleGain,
        &["muscle", "prendre", "masse", "gain", "strength"],
    ),
    (
        Category::Endurance,
        &["endurance", "cardio", "course", "run"],
    ),
    (
        Category::Flexibility,
        &["flexible", "étirement", "yoga", "stretch"],
    ),
    (
        Category::Rehabilitation,
        &["rééducation", "rehab", "blessure", "injury"],
    ),
];

/// Difficulty detection rules, in priority order. No match means
/// [`DifficultyLevel::Intermediate`].
pub const DIFFICULTY_RULES: &[(DifficultyLevel, &[&str])] = &[
    (
        DifficultyLevel::Beginner,
        &["débutant", "beginner", "jamais", "first", "debutant"],
    ),
    (
        DifficultyLevel::Advanced,
        &["avancé", "advanced", "expert", "confirmé"],
    ),
];

/// Constraint detection rules. Unlike the tables above these are
/// independent scans: every matching tag is collected.
pub const CONSTRAINT_RULES: &[(ConstraintTag, &[&str])] = &[
    (ConstraintTag::KneePain, &["genou", "knee", "articulation"]),
    (ConstraintTag::BackPain, &["dos", "back", "lombaires"]),
    (ConstraintTag::ShoulderPain, &["épaule", "shoulder"]),
];
