use std::fmt;

use crate::hiring::bias::BiasFinding;
use crate::report::DemoReport;
use crate::workforce::sentiment::preview;

const RULE_WIDTH: usize = 60;

const TAKEAWAYS: &str = "
🎯 Key Takeaways:

1. Resume Parsing: Automate extraction of candidate information
   → Saves 70-80% of manual screening time

2. Skill Matching: Use semantic matching for better accuracy
   → Improves quality of hire by 30-40%

3. Turnover Prediction: Identify at-risk employees proactively
   → Reduce turnover by 15-25%

4. Sentiment Analysis: Monitor employee satisfaction in real-time
   → Early detection of issues

5. Bias Detection: Ensure fair and inclusive hiring
   → Build diverse, high-performing teams
";

/// Human-readable rendering of a `DemoReport`, written with `{}`.
pub struct TextReport<'a> {
    report: &'a DemoReport,
    preview_chars: usize,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a DemoReport, preview_chars: usize) -> Self {
        Self {
            report,
            preview_chars,
        }
    }

    fn write_resumes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n📄 DEMO 1: Resume Parsing")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "\nParsing resumes...")?;

        for (i, parsed) in self.report.resumes.iter().enumerate() {
            writeln!(f, "\n📝 Resume {}:", i + 1)?;
            writeln!(f, "   Email: {}", parsed.email.as_deref().unwrap_or("None"))?;
            writeln!(f, "   Phone: {}", parsed.phone.as_deref().unwrap_or("None"))?;
            writeln!(f, "   Skills: {}", parsed.skills.join(", "))?;
        }
        Ok(())
    }

    fn write_skill_matching(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = &self.report.skill_matching;

        writeln!(f, "\n\n🎯 DEMO 2: Semantic Skill Matching")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "\nJob: {}", section.job.title)?;
        writeln!(
            f,
            "Required Skills: {}",
            section.job.required_skills.join(", ")
        )?;
        writeln!(
            f,
            "Preferred Skills: {}",
            section.job.preferred_skills.join(", ")
        )?;
        writeln!(f, "\nMatching candidates...\n")?;

        for m in &section.candidates {
            writeln!(f, "👤 {}", m.candidate.name)?;
            writeln!(f, "   Skills: {}", m.candidate.skills.join(", "))?;
            writeln!(f, "   Match Score: {:.1}%", m.result.score)?;
            writeln!(
                f,
                "   Matched {}/{} required skills",
                m.result.matches, m.result.total_required
            )?;
            if !m.result.missing.is_empty() {
                writeln!(f, "   Missing: {}", m.result.missing.join(", "))?;
            }
            if !m.preferred_matched.is_empty() {
                writeln!(f, "   Preferred: {}", m.preferred_matched.join(", "))?;
            }
            writeln!(f, "   {}\n", m.result.recommendation.badge())?;
        }
        Ok(())
    }

    fn write_turnover(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n📊 DEMO 3: Employee Turnover Risk Prediction")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "\nAnalyzing turnover risk for employees...\n")?;

        for risk in &self.report.turnover {
            let e = &risk.employee;
            let a = &risk.assessment;
            writeln!(f, "👤 {} ({})", e.name, e.id)?;
            writeln!(f, "   Satisfaction: {:.2}", e.satisfaction_level)?;
            writeln!(f, "   Monthly Hours: {}", e.average_monthly_hours)?;
            writeln!(f, "   Risk Level: {}", a.risk_level.badge())?;
            writeln!(f, "   Risk Score: {}/100", a.risk_score)?;
            if !a.risk_factors.is_empty() {
                writeln!(f, "   Risk Factors:")?;
                for factor in a.factor_descriptions() {
                    writeln!(f, "     • {factor}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_sentiment(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let section = &self.report.sentiment;

        writeln!(f, "\n💬 DEMO 4: Employee Feedback Sentiment Analysis")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "\nAnalyzing employee feedback...\n")?;

        for item in &section.feedback {
            let fb = &item.feedback;
            let a = &item.analysis;
            writeln!(f, "📝 Feedback from {} ({})", fb.employee_id, fb.date)?;
            writeln!(f, "   Text: \"{}\"", preview(&fb.text, self.preview_chars))?;
            writeln!(
                f,
                "   Sentiment: {} (confidence: {:?})",
                a.sentiment.badge(),
                a.confidence
            )?;
            writeln!(f, "   Urgency: {}", a.urgency.badge())?;
            writeln!(f)?;
        }

        writeln!(f, "\n📊 Sentiment Summary:")?;
        let total = section.summary.total;
        for share in &section.summary.shares {
            writeln!(
                f,
                "   {}: {}/{} ({:.1}%)",
                share.sentiment.name(),
                share.count,
                total,
                share.percentage
            )?;
        }
        Ok(())
    }

    fn write_bias(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n\n⚖️  DEMO 5: Bias Detection in Job Descriptions")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f, "\nAnalyzing job descriptions for bias...\n")?;

        for item in &self.report.bias {
            let r = &item.report;
            writeln!(f, "📋 Job Title: {}", item.job.title)?;
            writeln!(f, "   Assessment: {}", r.assessment.badge())?;
            writeln!(f, "   Bias Score: {:?}%", r.bias_score)?;

            if r.findings.is_empty() {
                writeln!(f, "   ✅ No major bias detected")?;
            } else {
                writeln!(f, "   Issues Found:")?;
                for finding in &r.findings {
                    write_finding(f, finding)?;
                }
                writeln!(f, "   Recommendation: Revise language to be more inclusive")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_finding(f: &mut fmt::Formatter<'_>, finding: &BiasFinding) -> fmt::Result {
    match finding {
        BiasFinding::Gender {
            masculine,
            feminine,
        } => {
            if !masculine.is_empty() {
                writeln!(f, "     • Masculine-coded: {}", masculine.join(", "))?;
            }
            if !feminine.is_empty() {
                writeln!(f, "     • Feminine-coded: {}", feminine.join(", "))?;
            }
            Ok(())
        }
        BiasFinding::Age { terms } => writeln!(f, "     • Age: {}", terms.join(", ")),
        BiasFinding::Exclusionary { terms } => {
            writeln!(f, "     • Exclusionary: {}", terms.join(", "))
        }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "=".repeat(RULE_WIDTH);

        writeln!(f, "{banner}")?;
        writeln!(f, "🤖 AI-Powered People Data Analytics - Complete Demo")?;
        writeln!(f, "{banner}")?;

        self.write_resumes(f)?;
        self.write_skill_matching(f)?;
        self.write_turnover(f)?;
        self.write_sentiment(f)?;
        self.write_bias(f)?;

        writeln!(f, "\n{banner}")?;
        writeln!(f, "✅ Demo Complete!")?;
        writeln!(f, "{banner}")?;
        writeln!(f, "{TAKEAWAYS}")?;
        writeln!(f, "{banner}")?;
        writeln!(f, "Thanks for trying AI-Powered People Data Analytics! 🚀")?;
        writeln!(f, "{banner}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hiring::skill_match::SubstringSkillMatcher;
    use crate::report::run_demo_at;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn render(preview_chars: usize) -> String {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let report = run_demo_at(Arc::new(SubstringSkillMatcher), now).unwrap();
        TextReport::new(&report, preview_chars).to_string()
    }

    #[test]
    fn test_sections_appear_in_order() {
        let out = render(80);
        let positions: Vec<usize> = [
            "DEMO 1: Resume Parsing",
            "DEMO 2: Semantic Skill Matching",
            "DEMO 3: Employee Turnover Risk Prediction",
            "DEMO 4: Employee Feedback Sentiment Analysis",
            "DEMO 5: Bias Detection in Job Descriptions",
            "Demo Complete!",
        ]
        .iter()
        .map(|h| out.find(h).unwrap_or_else(|| panic!("missing header {h}")))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_resume_and_match_lines() {
        let out = render(80);
        assert!(out.contains("   Email: alice.johnson@email.com"));
        assert!(out.contains("   Phone: +1-555-0101"));
        assert!(out.contains("   Skills: Python, SQL, Machine Learning, AWS, Docker"));
        assert!(out.contains("   Match Score: 75.0%"));
        assert!(out.contains("   Matched 3/4 required skills"));
        assert!(out.contains("🟡 Good Match"));
        assert!(out.contains("🔴 Weak Match"));
    }

    #[test]
    fn test_turnover_lines() {
        let out = render(80);
        assert!(out.contains("👤 Employee A (E001)"));
        assert!(out.contains("   Satisfaction: 0.35"));
        assert!(out.contains("   Risk Score: 90/100"));
        assert!(out.contains("     • Overloaded with projects"));
    }

    #[test]
    fn test_sentiment_lines_and_summary() {
        let out = render(80);
        assert!(out.contains("📝 Feedback from E103 (2024-01-17)"));
        assert!(out.contains("   Urgency: 🚨 HIGH"));
        assert!(out.contains("   Sentiment: 😊 POSITIVE (confidence: 0.9)"));
        assert!(out.contains("   POSITIVE: 2/4 (50.0%)"));
        assert!(out.contains("   NEUTRAL: 0/4 (0.0%)"));
    }

    #[test]
    fn test_preview_length_is_applied() {
        let out = render(10);
        assert!(out.contains("   Text: \"I love the...\""));
    }

    #[test]
    fn test_bias_lines() {
        let out = render(80);
        assert!(out.contains("   Bias Score: 28.57%"));
        assert!(out.contains("     • Masculine-coded: aggressive, competitive, rockstar"));
        assert!(out.contains("     • Age: young, energetic"));
        assert!(out.contains("     • Exclusionary: culture fit"));
        assert!(out.contains("   ✅ No major bias detected"));
        assert!(out.contains("   Bias Score: 0.0%"));
    }
}
