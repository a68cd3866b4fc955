//! Resume Parser — pulls contact details and known skills out of raw resume text.
//!
//! Pattern matching only: the first email-like and phone-like substrings win,
//! and skills come from a fixed vocabulary matched case-insensitively.
//! Nothing here fails; missing fields come back as `None` or an empty list.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::resume::Resume;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Optional leading `+` or `(`, a non-zero digit, at least 8 digits/separators, a final digit.
const PHONE_PATTERN: &str = r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]";

static RE_EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());
static RE_PHONE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(PHONE_PATTERN).ok());

/// Skills recognised in resume text, in reporting order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "SQL",
    "Machine Learning",
    "ML",
    "Data Analysis",
    "AWS",
    "Docker",
    "React",
    "Node.js",
];

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub parsed_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses a resume, stamping the result with `parsed_at`.
pub fn parse_resume_at(resume: &Resume, parsed_at: DateTime<Utc>) -> ParsedResume {
    let text = resume.text.as_str();

    let parsed = ParsedResume {
        email: first_match(&RE_EMAIL, "email", text),
        phone: first_match(&RE_PHONE, "phone", text),
        skills: extract_skills(text),
        parsed_at,
    };

    debug!(
        has_email = parsed.email.is_some(),
        has_phone = parsed.phone.is_some(),
        skill_count = parsed.skills.len(),
        "resume parsed"
    );

    parsed
}

/// Vocabulary skills that occur anywhere in `text`, case-insensitively.
///
/// Plain substring containment: "Java" is also found inside "JavaScript",
/// and "ML" inside "HTML".
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

fn first_match(re: &LazyLock<Option<Regex>>, field: &str, text: &str) -> Option<String> {
    match re.as_ref() {
        Some(re) => re.find(text).map(|m| m.as_str().to_string()),
        None => {
            warn!(field, "extraction pattern failed to compile; skipping field");
            None
        }
    }
}
