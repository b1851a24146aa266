//! Unit tests for GoalSpec defaults and display templating.

use trainplan::goals::{Category, ConstraintTag, DifficultyLevel, GoalSpec};

#[test]
fn test_goal_spec_defaults() {
    let spec = GoalSpec::default();

    assert_eq!(spec.category, Category::General);
    assert_eq!(spec.difficulty_level, DifficultyLevel::Intermediate);
    assert_eq!(spec.duration_weeks, 8);
    assert_eq!(spec.sessions_per_week, 3);
    assert!(spec.constraints.is_empty());
}

#[test]
fn test_title_interpolates_weeks_and_level() {
    let spec = GoalSpec {
        category: Category::WeightLoss,
        difficulty_level: DifficultyLevel::Beginner,
        duration_weeks: 12,
        ..Default::default()
    };

    let title = spec.title();
    assert!(title.contains("perte de poids"));
    assert!(title.contains("12 semaines"));
    assert!(title.contains("Beginner"));
}

#[test]
fn test_description_interpolates_session_count() {
    let spec = GoalSpec {
        category: Category::Endurance,
        sessions_per_week: 4,
        ..Default::default()
    };

    let description = spec.description();
    assert!(description.contains("endurance"));
    assert!(description.contains("4 séances par semaine"));
}

#[test]
fn test_titles_differ_per_category() {
    let titles: Vec<String> = Category::all()
        .into_iter()
        .map(|category| GoalSpec::new(category).title())
        .collect();

    for (i, title) in titles.iter().enumerate() {
        for other in titles.iter().skip(i + 1) {
            assert_ne!(title, other);
        }
    }
}

#[test]
fn test_has_constraint() {
    let spec = GoalSpec {
        constraints: vec![ConstraintTag::KneePain, ConstraintTag::BackPain],
        ..Default::default()
    };

    assert!(spec.has_constraint(ConstraintTag::KneePain));
    assert!(spec.has_constraint(ConstraintTag::BackPain));
    assert!(!spec.has_constraint(ConstraintTag::ShoulderPain));
}

#[test]
fn test_constraint_wire_tags() {
    assert_eq!(ConstraintTag::KneePain.as_str(), "knee_pain");
    assert_eq!(ConstraintTag::BackPain.as_str(), "back_pain");
    assert_eq!(ConstraintTag::ShoulderPain.as_str(), "shoulder_pain");
}
