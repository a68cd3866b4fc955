//! Demo run — scores every sample record and collects the results into one report.
//!
//! The five sections are independent; they run in a fixed order only so the
//! printed output is stable.

pub mod text;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::hiring::bias::{detect_bias, BiasReport};
use crate::hiring::resume_parser::{parse_resume_at, ParsedResume};
use crate::hiring::skill_match::{SkillMatch, SkillMatcher};
use crate::models::employee::Employee;
use crate::models::job::{Candidate, JobDescription, JobRequirements};
use crate::samples;
use crate::workforce::sentiment::{
    analyze_sentiment, FeedbackAnalysis, Sentiment, SentimentSummary,
};
use crate::workforce::turnover::{predict_turnover_risk, RiskAssessment};

pub use text::TextReport;

// ────────────────────────────────────────────────────────────────────────────
// Report data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct CandidateMatch {
    pub candidate: Candidate,
    pub result: SkillMatch,
    /// Preferred skills the candidate covers. Informational only.
    pub preferred_matched: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillMatchingSection {
    pub job: JobRequirements,
    pub matcher_backend: String,
    pub candidates: Vec<CandidateMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRisk {
    pub employee: Employee,
    pub assessment: RiskAssessment,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentSection {
    pub feedback: Vec<FeedbackAnalysis>,
    pub summary: SentimentSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobBias {
    pub job: JobDescription,
    pub report: BiasReport,
}

/// Everything one run produces, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub generated_at: DateTime<Utc>,
    pub resumes: Vec<ParsedResume>,
    pub skill_matching: SkillMatchingSection,
    pub turnover: Vec<EmployeeRisk>,
    pub sentiment: SentimentSection,
    pub bias: Vec<JobBias>,
}

// ────────────────────────────────────────────────────────────────────────────
// Run
// ────────────────────────────────────────────────────────────────────────────

/// Runs all five demos against the built-in samples.
pub fn run_demo(matcher: Arc<dyn SkillMatcher>) -> Result<DemoReport, AppError> {
    run_demo_at(matcher, Utc::now())
}

pub fn run_demo_at(
    matcher: Arc<dyn SkillMatcher>,
    now: DateTime<Utc>,
) -> Result<DemoReport, AppError> {
    info!("Running people analytics demo");

    let resumes: Vec<ParsedResume> = samples::resumes()
        .iter()
        .map(|r| parse_resume_at(r, now))
        .collect();
    info!(count = resumes.len(), "Resumes parsed");

    let skill_matching = match_candidates(
        matcher.as_ref(),
        samples::job_requirements(),
        samples::candidates(),
    );
    info!(
        count = skill_matching.candidates.len(),
        backend = %skill_matching.matcher_backend,
        "Candidates matched"
    );

    let turnover = samples::employees()
        .into_iter()
        .map(|employee| -> Result<EmployeeRisk, AppError> {
            let assessment = predict_turnover_risk(&employee)?;
            Ok(EmployeeRisk {
                employee,
                assessment,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = turnover.len(), "Turnover risk assessed");

    let feedback: Vec<FeedbackAnalysis> = samples::feedback_samples()
        .into_iter()
        .map(|feedback| {
            let analysis = analyze_sentiment(&feedback.text);
            FeedbackAnalysis { feedback, analysis }
        })
        .collect();
    let summary = SentimentSummary::from_analyses(feedback.iter().map(|f| &f.analysis));
    info!(
        count = feedback.len(),
        positive = summary.count_of(Sentiment::Positive),
        negative = summary.count_of(Sentiment::Negative),
        "Feedback analyzed"
    );

    let bias: Vec<JobBias> = samples::job_descriptions()
        .into_iter()
        .map(|job| {
            let report = detect_bias(&job);
            JobBias { job, report }
        })
        .collect();
    info!(count = bias.len(), "Job descriptions checked for bias");

    Ok(DemoReport {
        generated_at: now,
        resumes,
        skill_matching,
        turnover,
        sentiment: SentimentSection { feedback, summary },
        bias,
    })
}

fn match_candidates(
    matcher: &dyn SkillMatcher,
    job: JobRequirements,
    candidates: Vec<Candidate>,
) -> SkillMatchingSection {
    let candidates = candidates
        .into_iter()
        .map(|candidate| {
            let result = matcher.score(&candidate.skills, &job.required_skills);
            let preferred_matched = matcher
                .score(&candidate.skills, &job.preferred_skills)
                .matched;
            CandidateMatch {
                candidate,
                result,
                preferred_matched,
            }
        })
        .collect();

    SkillMatchingSection {
        job,
        matcher_backend: matcher.backend().to_string(),
        candidates,
    }
}

/// Pretty-printed JSON rendering of the full report.
pub fn render_json(report: &DemoReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hiring::bias::BiasAssessment;
    use crate::hiring::skill_match::{MatchRecommendation, SubstringSkillMatcher};
    use crate::workforce::turnover::RiskLevel;
    use chrono::TimeZone;

    fn run() -> DemoReport {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        run_demo_at(Arc::new(SubstringSkillMatcher), now).unwrap()
    }

    #[test]
    fn test_resume_section() {
        let report = run();
        assert_eq!(report.resumes.len(), 2);
        assert_eq!(
            report.resumes[0].email.as_deref(),
            Some("alice.johnson@email.com")
        );
        assert_eq!(report.resumes[1].skills, vec!["Java", "SQL", "React", "Node.js"]);
    }

    #[test]
    fn test_skill_matching_section() {
        let report = run();
        let section = &report.skill_matching;
        assert_eq!(section.matcher_backend, "substring");

        let alice = &section.candidates[0];
        assert_eq!(alice.result.score, 75.0);
        assert_eq!(alice.result.recommendation, MatchRecommendation::Good);
        assert_eq!(alice.preferred_matched, vec!["AWS", "Docker"]);

        let bob = &section.candidates[1];
        assert_eq!(bob.result.score, 25.0);
        assert_eq!(bob.result.recommendation, MatchRecommendation::Weak);
        assert!(bob.preferred_matched.is_empty());
    }

    #[test]
    fn test_turnover_section() {
        let report = run();
        let levels: Vec<RiskLevel> = report
            .turnover
            .iter()
            .map(|r| r.assessment.risk_level)
            .collect();
        assert_eq!(levels, vec![RiskLevel::High, RiskLevel::Low, RiskLevel::Low]);
        assert_eq!(report.turnover[0].assessment.risk_score, 90);
    }

    #[test]
    fn test_sentiment_section() {
        let report = run();
        let summary = &report.sentiment.summary;
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count_of(Sentiment::Positive), 2);
        assert_eq!(summary.count_of(Sentiment::Negative), 2);
        assert_eq!(summary.count_of(Sentiment::Neutral), 0);
    }

    #[test]
    fn test_bias_section() {
        let report = run();
        assert_eq!(report.bias[0].report.assessment, BiasAssessment::High);
        assert_eq!(report.bias[1].report.assessment, BiasAssessment::Low);
        assert!(report.bias[1].report.findings.is_empty());
    }

    #[test]
    fn test_json_rendering() {
        let report = run();
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value["skill_matching"]["candidates"][0]["result"]["recommendation"],
            "good"
        );
        assert_eq!(value["turnover"][0]["assessment"]["risk_level"], "high");
        assert_eq!(value["bias"][0]["report"]["findings"][0]["category"], "gender");
        assert_eq!(value["sentiment"]["feedback"][0]["feedback"]["date"], "2024-01-15");
    }
}
