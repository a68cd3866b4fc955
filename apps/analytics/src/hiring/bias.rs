//! Bias detection — flags gender-coded, age-coded and exclusionary wording in job descriptions.
//!
//! Matching is case-insensitive substring containment against fixed vocabularies,
//! so "understanding" also fires inside "misunderstanding".

use serde::Serialize;
use tracing::debug;

use crate::models::job::JobDescription;
use crate::scoring::{percentage, round_to};

pub const MASCULINE_CODED: &[&str] = &[
    "aggressive",
    "competitive",
    "dominant",
    "ninja",
    "rockstar",
    "guru",
];

pub const FEMININE_CODED: &[&str] = &["supportive", "collaborative", "nurturing", "understanding"];

pub const AGE_CODED: &[&str] = &["young", "energetic", "digital native", "recent graduate"];

pub const EXCLUSIONARY: &[&str] = &["culture fit", "like us", "one of us"];

/// Scores strictly above this are high bias.
pub const HIGH_BIAS_THRESHOLD: f64 = 2.0;
/// Scores strictly above this (and not high) are moderate bias.
pub const MODERATE_BIAS_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasAssessment {
    High,
    Moderate,
    Low,
}

impl BiasAssessment {
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_BIAS_THRESHOLD {
            BiasAssessment::High
        } else if score > MODERATE_BIAS_THRESHOLD {
            BiasAssessment::Moderate
        } else {
            BiasAssessment::Low
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            BiasAssessment::High => "🔴 High Bias",
            BiasAssessment::Moderate => "🟡 Moderate Bias",
            BiasAssessment::Low => "🟢 Low Bias",
        }
    }
}

/// Terms found for one bias category. Categories with no hits are never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum BiasFinding {
    Gender {
        masculine: Vec<&'static str>,
        feminine: Vec<&'static str>,
    },
    Age {
        terms: Vec<&'static str>,
    },
    Exclusionary {
        terms: Vec<&'static str>,
    },
}

impl BiasFinding {
    pub fn term_count(&self) -> usize {
        match self {
            BiasFinding::Gender {
                masculine,
                feminine,
            } => masculine.len() + feminine.len(),
            BiasFinding::Age { terms } | BiasFinding::Exclusionary { terms } => terms.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BiasReport {
    /// Flagged terms per 100 words, two decimal places.
    pub bias_score: f64,
    pub assessment: BiasAssessment,
    /// Ordered gender, age, exclusionary; empty categories omitted.
    pub findings: Vec<BiasFinding>,
}

pub fn detect_bias(job: &JobDescription) -> BiasReport {
    let text_lower = job.text.to_lowercase();

    let mut findings = Vec::new();

    let masculine = terms_in(&text_lower, MASCULINE_CODED);
    let feminine = terms_in(&text_lower, FEMININE_CODED);
    if !masculine.is_empty() || !feminine.is_empty() {
        findings.push(BiasFinding::Gender {
            masculine,
            feminine,
        });
    }

    let age = terms_in(&text_lower, AGE_CODED);
    if !age.is_empty() {
        findings.push(BiasFinding::Age { terms: age });
    }

    let exclusionary = terms_in(&text_lower, EXCLUSIONARY);
    if !exclusionary.is_empty() {
        findings.push(BiasFinding::Exclusionary {
            terms: exclusionary,
        });
    }

    let flagged: usize = findings.iter().map(BiasFinding::term_count).sum();
    let word_count = job.text.split_whitespace().count();
    let raw_score = percentage(flagged, word_count);

    debug!(
        title = %job.title,
        flagged,
        word_count,
        score = raw_score,
        "job description scanned for bias"
    );

    BiasReport {
        bias_score: round_to(raw_score, 2),
        assessment: BiasAssessment::from_score(raw_score),
        findings,
    }
}

fn terms_in(text_lower: &str, vocabulary: &[&'static str]) -> Vec<&'static str> {
    vocabulary
        .iter()
        .copied()
        .filter(|term| text_lower.contains(term))
        .collect()
}
