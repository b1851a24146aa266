//! Natural-language request interpretation.
//!
//! Deterministic keyword and pattern matching, no NLU: every branch has a
//! default, so interpretation is total and never fails.

pub mod rules;

use std::sync::OnceLock;

use regex::Regex;

use crate::goals::GoalSpec;
use rules::{CATEGORY_RULES, CONSTRAINT_RULES, DIFFICULTY_RULES};

fn months_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*(mois|month)").expect("valid pattern"))
}

fn weeks_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)\s*(semaine|week)").expect("valid pattern"))
}

fn sessions_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+)\s*(séances?|sessions?|fois)\s*par\s*(semaine|week)")
            .expect("valid pattern")
    })
}

/// First positive count captured by `re` in `text`, if any.
fn first_count(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|&n| n >= 1)
}

/// Maps free-form request text to a [`GoalSpec`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestInterpreter;

impl RequestInterpreter {
    /// Create a new interpreter.
    pub fn new() -> Self {
        Self
    }

    /// Interpret a request.
    ///
    /// Input is case-folded before matching. Empty or irrelevant text
    /// produces a fully defaulted spec rather than an error.
    pub fn interpret(&self, text: &str) -> GoalSpec {
        let text = text.to_lowercase();

        let spec = GoalSpec {
            category: self.detect_category(&text),
            difficulty_level: self.detect_difficulty(&text),
            duration_weeks: self.detect_duration_weeks(&text),
            sessions_per_week: self.detect_sessions_per_week(&text),
            constraints: self.detect_constraints(&text),
        };

        tracing::debug!(
            category = %spec.category,
            level = %spec.difficulty_level,
            weeks = spec.duration_weeks,
            sessions = spec.sessions_per_week,
            "Request interpreted"
        );
        spec
    }

    /// First-match-wins scan of the category rule table.
    fn detect_category(&self, text: &str) -> crate::goals::Category {
        for (category, keywords) in CATEGORY_RULES {
            if keywords.iter().any(|kw| text.contains(kw)) {
                return *category;
            }
        }
        crate::goals::Category::General
    }

    /// First-match-wins scan of the difficulty rule table.
    fn detect_difficulty(&self, text: &str) -> crate::goals::DifficultyLevel {
        for (level, keywords) in DIFFICULTY_RULES {
            if keywords.iter().any(|kw| text.contains(kw)) {
                return *level;
            }
        }
        crate::goals::DifficultyLevel::Intermediate
    }

    /// Duration in weeks: a month count (x4) beats a week count beats the
    /// default of 8. Only the first occurrence of each pattern counts,
    /// and a zero count falls through to the default so the spec stays
    /// valid for any input. The month conversion saturates: interpretation
    /// is total and must not panic on an absurdly large count.
    fn detect_duration_weeks(&self, text: &str) -> u32 {
        if let Some(months) = first_count(months_regex(), text) {
            return months.saturating_mul(4);
        }

        if let Some(weeks) = first_count(weeks_regex(), text) {
            return weeks;
        }

        8
    }

    /// Sessions per week: "<n> séances/sessions/fois par semaine", default 3.
    fn detect_sessions_per_week(&self, text: &str) -> u32 {
        first_count(sessions_regex(), text).unwrap_or(3)
    }

    /// Independent, non-exclusive constraint scans; tags can co-occur.
    fn detect_constraints(&self, text: &str) -> Vec<crate::goals::ConstraintTag> {
        CONSTRAINT_RULES
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|kw| text.contains(kw)))
            .map(|(tag, _)| *tag)
            .collect()
    }
}
