// Hiring-side heuristics: resume parsing, skill matching, job-description bias checks.
// All keyword-based and deterministic; no model calls.

pub mod bias;
pub mod resume_parser;
pub mod skill_match;
