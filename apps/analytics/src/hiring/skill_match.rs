//! Skill Matching — pluggable, trait-based scorer that measures a candidate's
//! declared skills against a role's required skills.
//!
//! Default: `SubstringSkillMatcher` (pure-Rust, deterministic, fully testable).
//! The run holds an `Arc<dyn SkillMatcher>` so a stricter backend can be swapped in
//! without touching the report code.

use serde::Serialize;
use tracing::debug;

use crate::scoring::{percentage, round_to};

pub const STRONG_MATCH_THRESHOLD: f64 = 80.0;
pub const GOOD_MATCH_THRESHOLD: f64 = 60.0;
pub const MODERATE_MATCH_THRESHOLD: f64 = 40.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRecommendation {
    Strong,
    Good,
    Moderate,
    Weak,
}

impl MatchRecommendation {
    /// Buckets an unrounded 0 – 100 score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= STRONG_MATCH_THRESHOLD => MatchRecommendation::Strong,
            s if s >= GOOD_MATCH_THRESHOLD => MatchRecommendation::Good,
            s if s >= MODERATE_MATCH_THRESHOLD => MatchRecommendation::Moderate,
            _ => MatchRecommendation::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchRecommendation::Strong => "strong match",
            MatchRecommendation::Good => "good match",
            MatchRecommendation::Moderate => "moderate match",
            MatchRecommendation::Weak => "weak match",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            MatchRecommendation::Strong => "🟢 Strong Match",
            MatchRecommendation::Good => "🟡 Good Match",
            MatchRecommendation::Moderate => "🟠 Moderate Match",
            MatchRecommendation::Weak => "🔴 Weak Match",
        }
    }
}

/// Result of scoring one candidate against one required-skill list.
#[derive(Debug, Clone, Serialize)]
pub struct SkillMatch {
    /// 0 – 100, one decimal place
    pub score: f64,
    pub matches: usize,
    pub total_required: usize,
    pub recommendation: MatchRecommendation,
    /// Required skills that were covered, in required order.
    pub matched: Vec<String>,
    /// Required skills with no covering candidate skill.
    pub missing: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The skill matcher trait. Implement this to swap matching backends.
pub trait SkillMatcher: Send + Sync {
    fn score(&self, candidate_skills: &[String], required_skills: &[String]) -> SkillMatch;

    /// Short backend name, surfaced in the report for transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// SubstringSkillMatcher — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Overlap matcher using bidirectional, case-insensitive substring containment.
///
/// A required skill counts once if it contains, or is contained in, any
/// candidate skill. This is deliberately loose: "SQL" is covered by "NoSQL",
/// while "ML" does not cover "Machine Learning". An empty candidate skill is
/// contained in every requirement and so covers all of them.
pub struct SubstringSkillMatcher;

impl SkillMatcher for SubstringSkillMatcher {
    fn score(&self, candidate_skills: &[String], required_skills: &[String]) -> SkillMatch {
        compute_skill_match(candidate_skills, required_skills)
    }

    fn backend(&self) -> &'static str {
        "substring"
    }
}

fn compute_skill_match(candidate_skills: &[String], required_skills: &[String]) -> SkillMatch {
    let candidate_lower: Vec<String> = candidate_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for required in required_skills {
        let required_lower = required.to_lowercase();
        let covered = candidate_lower
            .iter()
            .any(|cand| skills_overlap(&required_lower, cand));

        if covered {
            matched.push(required.clone());
        } else {
            missing.push(required.clone());
        }
    }

    let raw_score = percentage(matched.len(), required_skills.len());
    let recommendation = MatchRecommendation::from_score(raw_score);

    debug!(
        matches = matched.len(),
        total_required = required_skills.len(),
        score = raw_score,
        recommendation = recommendation.label(),
        "skill match scored"
    );

    SkillMatch {
        score: round_to(raw_score, 1),
        matches: matched.len(),
        total_required: required_skills.len(),
        recommendation,
        matched,
        missing,
    }
}

/// Both arguments must already be lower-cased.
fn skills_overlap(required: &str, candidate: &str) -> bool {
    required.contains(candidate) || candidate.contains(required)
}
