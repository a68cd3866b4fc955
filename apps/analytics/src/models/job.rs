use serde::Serialize;

/// An open role and the skills it asks for.
/// Only `required_skills` feed the match score; preferred skills are reported alongside.
#[derive(Debug, Clone, Serialize)]
pub struct JobRequirements {
    pub title: String,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}

/// A candidate as seen by the skill matcher: a name and a self-declared skill list.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub name: String,
    pub skills: Vec<String>,
}

/// A posted job description, scanned for biased wording.
#[derive(Debug, Clone, Serialize)]
pub struct JobDescription {
    pub title: String,
    pub text: String,
}
