//! Built-in exercise library.
//!
//! Default catalogue used when no external JSON file is configured.
//! Entry names keep the bilingual French/English flavour of the seed
//! data that ships with the desktop app.

use super::types::{CatalogueCategory, Exercise, ExerciseCatalogue};
use crate::goals::DifficultyLevel;

/// Build the default catalogue, every category at every level populated.
pub fn built_in() -> ExerciseCatalogue {
    let mut catalogue = ExerciseCatalogue::new();

    catalogue.insert(
        CatalogueCategory::Cardio,
        DifficultyLevel::Beginner,
        cardio_beginner(),
    );
    catalogue.insert(
        CatalogueCategory::Cardio,
        DifficultyLevel::Intermediate,
        cardio_intermediate(),
    );
    catalogue.insert(
        CatalogueCategory::Cardio,
        DifficultyLevel::Advanced,
        cardio_advanced(),
    );

    catalogue.insert(
        CatalogueCategory::Strength,
        DifficultyLevel::Beginner,
        strength_beginner(),
    );
    catalogue.insert(
        CatalogueCategory::Strength,
        DifficultyLevel::Intermediate,
        strength_intermediate(),
    );
    catalogue.insert(
        CatalogueCategory::Strength,
        DifficultyLevel::Advanced,
        strength_advanced(),
    );

    catalogue.insert(
        CatalogueCategory::Flexibility,
        DifficultyLevel::Beginner,
        flexibility_beginner(),
    );
    catalogue.insert(
        CatalogueCategory::Flexibility,
        DifficultyLevel::Intermediate,
        flexibility_intermediate(),
    );
    catalogue.insert(
        CatalogueCategory::Flexibility,
        DifficultyLevel::Advanced,
        flexibility_advanced(),
    );

    catalogue.insert(
        CatalogueCategory::Core,
        DifficultyLevel::Beginner,
        core_beginner(),
    );
    catalogue.insert(
        CatalogueCategory::Core,
        DifficultyLevel::Intermediate,
        core_intermediate(),
    );
    catalogue.insert(
        CatalogueCategory::Core,
        DifficultyLevel::Advanced,
        core_advanced(),
    );

    tracing::debug!(entries = catalogue.len(), "Built-in catalogue seeded");
    catalogue
}

fn cardio_beginner() -> Vec<Exercise> {
    vec![
        Exercise::new("Marche rapide", 25, 6).with_tags(&["legs", "heart"]),
        Exercise::new("Vélo tranquille", 30, 4).with_tags(&["legs", "knees"]),
        Exercise::new("Natation douce", 20, 9).with_tags(&["full_body", "shoulders"]),
        Exercise::new("Rameur léger", 15, 7).with_tags(&["back", "arms"]),
        Exercise::new("Step touch", 10, 5).with_tags(&["legs"]),
    ]
}

fn cardio_intermediate() -> Vec<Exercise> {
    vec![
        Exercise::new("Course à pied", 25, 12).with_tags(&["legs", "knees", "heart"]),
        Exercise::new("Vélo spinning", 30, 9).with_tags(&["legs"]),
        Exercise::new("Corde à sauter", 15, 16).with_tags(&["calves", "knees"]),
        Exercise::new("Jumping jacks", 10, 10).with_tags(&["full_body"]),
        Exercise::new("Montées de genoux", 10, 11).with_tags(&["legs", "core"]),
    ]
}

fn cardio_advanced() -> Vec<Exercise> {
    vec![
        Exercise::new("HIIT course", 20, 17).with_tags(&["legs", "heart"]),
        Exercise::new("Rameur intensif", 25, 13).with_tags(&["back", "arms"]),
        Exercise::new("Boxe cardio", 30, 13).with_tags(&["shoulders", "core"]),
        Exercise::new("Sprint intervals", 15, 18).with_tags(&["legs", "knees"]),
        Exercise::new("Burpees", 10, 14).with_tags(&["full_body", "knees"]),
    ]
}

fn strength_beginner() -> Vec<Exercise> {
    vec![
        Exercise::new("Squats poids du corps", 10, 7).with_tags(&["quads", "glutes", "knees"]),
        Exercise::new("Pompes sur genoux", 8, 6).with_tags(&["chest", "arms"]),
        Exercise::new("Fentes statiques", 10, 7).with_tags(&["quads", "knees"]),
        Exercise::new("Pont fessier", 8, 5).with_tags(&["glutes", "back"]),
        Exercise::new("Élévations latérales", 8, 4).with_tags(&["shoulders"]),
        Exercise::new("Rowing élastique", 10, 5).with_tags(&["back", "arms"]),
    ]
}

fn strength_intermediate() -> Vec<Exercise> {
    vec![
        Exercise::new("Squats avec charge", 12, 9).with_tags(&["quads", "glutes", "knees"]),
        Exercise::new("Pompes", 10, 8).with_tags(&["chest", "arms"]),
        Exercise::new("Fentes sautées", 10, 10).with_tags(&["quads", "knees"]),
        Exercise::new("Tractions assistées", 10, 8).with_tags(&["back", "arms"]),
        Exercise::new("Développé haltères", 12, 7).with_tags(&["shoulders"]),
        Exercise::new("Walking lunges", 10, 9).with_tags(&["quads", "glutes", "knees"]),
    ]
}

fn strength_advanced() -> Vec<Exercise> {
    vec![
        Exercise::new("Squats barre", 15, 11).with_tags(&["quads", "glutes", "knees"]),
        Exercise::new("Développé couché", 15, 9).with_tags(&["chest", "arms"]),
        Exercise::new("Soulevé de terre", 15, 11).with_tags(&["back", "glutes"]),
        Exercise::new("Tractions lestées", 12, 10).with_tags(&["back", "arms"]),
        Exercise::new("Bulgarian split squat", 12, 10).with_tags(&["quads", "knees"]),
        Exercise::new("Overhead press", 12, 8).with_tags(&["shoulders"]),
    ]
}

fn flexibility_beginner() -> Vec<Exercise> {
    vec![
        Exercise::new("Étirements doux", 15, 2).with_tags(&["full_body"]),
        Exercise::new("Yoga débutant", 20, 3).with_tags(&["full_body", "back"]),
        Exercise::new("Mobilité épaules", 10, 2).with_tags(&["shoulders"]),
        Exercise::new("Étirement ischio-jambiers", 10, 2).with_tags(&["hamstrings"]),
        Exercise::new("Cat-cow stretch", 8, 2).with_tags(&["back", "core"]),
    ]
}

fn flexibility_intermediate() -> Vec<Exercise> {
    vec![
        Exercise::new("Yoga vinyasa", 30, 4).with_tags(&["full_body"]),
        Exercise::new("Étirements dynamiques", 15, 3).with_tags(&["legs", "hips"]),
        Exercise::new("Pigeon pose", 10, 2).with_tags(&["hips", "glutes"]),
        Exercise::new("Mobilité hanches", 12, 3).with_tags(&["hips"]),
        Exercise::new("Salutation au soleil", 15, 4).with_tags(&["full_body"]),
    ]
}

fn flexibility_advanced() -> Vec<Exercise> {
    vec![
        Exercise::new("Yoga ashtanga", 40, 5).with_tags(&["full_body"]),
        Exercise::new("Grand écart progressif", 15, 3).with_tags(&["hips", "hamstrings"]),
        Exercise::new("Backbend flow", 15, 4).with_tags(&["back", "shoulders"]),
        Exercise::new("Deep stretch complet", 25, 3).with_tags(&["full_body"]),
    ]
}

fn core_beginner() -> Vec<Exercise> {
    vec![
        Exercise::new("Gainage sur genoux", 8, 4).with_tags(&["core"]),
        Exercise::new("Dead bug", 8, 4).with_tags(&["core", "back"]),
        Exercise::new("Crunchs", 8, 5).with_tags(&["abs"]),
        Exercise::new("Bird dog", 8, 4).with_tags(&["core", "back"]),
        Exercise::new("Planche inclinée", 6, 4).with_tags(&["core", "shoulders"]),
    ]
}

fn core_intermediate() -> Vec<Exercise> {
    vec![
        Exercise::new("Gainage", 10, 5).with_tags(&["core"]),
        Exercise::new("Russian twists", 8, 6).with_tags(&["abs", "obliques"]),
        Exercise::new("Mountain climbers", 8, 9).with_tags(&["core", "knees"]),
        Exercise::new("Relevés de jambes", 8, 6).with_tags(&["abs", "hips"]),
        Exercise::new("Planche latérale", 8, 5).with_tags(&["obliques"]),
    ]
}

fn core_advanced() -> Vec<Exercise> {
    vec![
        Exercise::new("Gainage lesté", 10, 7).with_tags(&["core"]),
        Exercise::new("Dragon flag", 8, 8).with_tags(&["abs", "back"]),
        Exercise::new("Ab wheel rollout", 10, 7).with_tags(&["core", "shoulders"]),
        Exercise::new("Hanging leg raises", 8, 7).with_tags(&["abs", "hips"]),
        Exercise::new("V-ups", 8, 8).with_tags(&["abs"]),
    ]
}
