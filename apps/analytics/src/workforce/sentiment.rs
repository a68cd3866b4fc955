//! Feedback sentiment — keyword membership counts, urgency flag and batch summary.
//!
//! Counts are by vocabulary membership, not frequency: "great, great, great"
//! contributes one positive hit.

use serde::Serialize;
use tracing::debug;

use crate::models::feedback::Feedback;
use crate::scoring::{percentage, round_to};

pub const POSITIVE_WORDS: &[&str] = &[
    "great",
    "excellent",
    "good",
    "happy",
    "satisfied",
    "love",
    "amazing",
    "wonderful",
    "fantastic",
    "perfect",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "unhappy",
    "dissatisfied",
    "hate",
    "awful",
    "horrible",
    "worst",
    "disappointed",
];

pub const URGENT_WORDS: &[&str] = &["urgent", "immediately", "critical", "asap", "quit", "leaving"];

pub const BASE_CONFIDENCE: f64 = 0.7;
pub const CONFIDENCE_PER_HIT: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.95;
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Summary ordering.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn name(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊 POSITIVE",
            Sentiment::Negative => "😟 NEGATIVE",
            Sentiment::Neutral => "😐 NEUTRAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Normal,
}

impl Urgency {
    pub fn badge(&self) -> &'static str {
        match self {
            Urgency::High => "🚨 HIGH",
            Urgency::Normal => "📝 NORMAL",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    /// 0.5 for neutral, otherwise 0.8 – 0.95; two decimal places
    pub confidence: f64,
    pub urgency: Urgency,
}

pub fn analyze_sentiment(text: &str) -> SentimentAnalysis {
    let text_lower = text.to_lowercase();

    let pos_count = count_present(&text_lower, POSITIVE_WORDS);
    let neg_count = count_present(&text_lower, NEGATIVE_WORDS);
    let urgent = URGENT_WORDS.iter().any(|w| text_lower.contains(w));

    let (sentiment, confidence) = if pos_count > neg_count {
        (Sentiment::Positive, confidence_for(pos_count))
    } else if neg_count > pos_count {
        (Sentiment::Negative, confidence_for(neg_count))
    } else {
        (Sentiment::Neutral, NEUTRAL_CONFIDENCE)
    };

    let urgency = if urgent { Urgency::High } else { Urgency::Normal };

    debug!(pos_count, neg_count, urgent, ?sentiment, "feedback scored");

    SentimentAnalysis {
        sentiment,
        confidence: round_to(confidence.min(MAX_CONFIDENCE), 2),
        urgency,
    }
}

fn count_present(text_lower: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|w| text_lower.contains(*w)).count()
}

fn confidence_for(hits: usize) -> f64 {
    BASE_CONFIDENCE + hits as f64 * CONFIDENCE_PER_HIT
}

// ────────────────────────────────────────────────────────────────────────────
// Batch summary
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SentimentShare {
    pub sentiment: Sentiment,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    /// Always positive, negative, neutral, including zero counts.
    pub shares: Vec<SentimentShare>,
}

impl SentimentSummary {
    pub fn from_analyses<'a, I>(analyses: I) -> Self
    where
        I: IntoIterator<Item = &'a SentimentAnalysis>,
    {
        let mut counts = [0usize; 3];
        let mut total = 0;
        for analysis in analyses {
            let slot = match analysis.sentiment {
                Sentiment::Positive => 0,
                Sentiment::Negative => 1,
                Sentiment::Neutral => 2,
            };
            counts[slot] += 1;
            total += 1;
        }

        let shares = Sentiment::ALL
            .iter()
            .zip(counts)
            .map(|(sentiment, count)| SentimentShare {
                sentiment: *sentiment,
                count,
                percentage: percentage(count, total),
            })
            .collect();

        SentimentSummary { total, shares }
    }

    pub fn count_of(&self, sentiment: Sentiment) -> usize {
        self.shares
            .iter()
            .find(|s| s.sentiment == sentiment)
            .map(|s| s.count)
            .unwrap_or(0)
    }
}

/// A feedback record paired with its analysis, as carried in the report.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackAnalysis {
    pub feedback: Feedback,
    pub analysis: SentimentAnalysis,
}

/// First `max_chars` characters with `...` appended when the text is longer.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_positive_feedback() {
        let a = analyze_sentiment(
            "I love the flexible work hours and remote options. Great work-life balance!",
        );
        assert_eq!(a.sentiment, Sentiment::Positive);
        assert_eq!(a.confidence, 0.9);
        assert_eq!(a.urgency, Urgency::Normal);
    }

    #[test]
    fn test_negative_feedback() {
        let a = analyze_sentiment("Very disappointed with the lack of career growth opportunities.");
        assert_eq!(a.sentiment, Sentiment::Negative);
        assert_eq!(a.confidence, 0.8);
        assert_eq!(a.urgency, Urgency::Normal);
    }

    #[test]
    fn test_urgent_negative_feedback() {
        let a = analyze_sentiment(
            "Urgent: The workload is terrible and affecting my health. Considering leaving.",
        );
        assert_eq!(a.sentiment, Sentiment::Negative);
        assert_eq!(a.urgency, Urgency::High);
    }

    #[test]
    fn test_tie_is_neutral_with_fixed_confidence() {
        let a = analyze_sentiment("Good pay but terrible hours");
        assert_eq!(a.sentiment, Sentiment::Neutral);
        assert_eq!(a.confidence, 0.5);
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        let a = analyze_sentiment("");
        assert_eq!(a.sentiment, Sentiment::Neutral);
        assert_eq!(a.confidence, 0.5);
        assert_eq!(a.urgency, Urgency::Normal);
    }

    #[test]
    fn test_repetition_counts_once() {
        let a = analyze_sentiment("great great great great");
        assert_eq!(a.confidence, 0.8);
    }

    #[test]
    fn test_confidence_capped() {
        let a = analyze_sentiment("great excellent good happy amazing wonderful");
        assert_eq!(a.sentiment, Sentiment::Positive);
        assert_eq!(a.confidence, 0.95);
    }

    #[test]
    fn test_summary_counts_and_percentages() {
        let analyses: Vec<SentimentAnalysis> = [
            "I love it",
            "terrible",
            "awful place",
            "good team",
        ]
        .iter()
        .map(|t| analyze_sentiment(t))
        .collect();
        let summary = SentimentSummary::from_analyses(&analyses);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count_of(Sentiment::Positive), 2);
        assert_eq!(summary.count_of(Sentiment::Negative), 2);
        assert_eq!(summary.count_of(Sentiment::Neutral), 0);
        assert_eq!(summary.shares[0].percentage, 50.0);
        assert_eq!(summary.shares[2].percentage, 0.0);
    }

    #[test]
    fn test_empty_summary() {
        let none: Vec<SentimentAnalysis> = Vec::new();
        let summary = SentimentSummary::from_analyses(&none);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.shares.len(), 3);
        assert!(summary.shares.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        assert_eq!(preview("short", 80), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("héllo wörld", 5), "héllo...");
    }

    proptest! {
        #[test]
        fn prop_confidence_never_exceeds_cap(
            words in proptest::collection::vec(
                proptest::sample::select(vec![
                    "great", "love", "amazing", "perfect", "bad", "awful",
                    "worst", "hate", "urgent", "team", "pay",
                ]),
                0..40,
            )
        ) {
            let a = analyze_sentiment(&words.join(" "));
            prop_assert!(a.confidence <= MAX_CONFIDENCE);
            prop_assert!(a.confidence >= NEUTRAL_CONFIDENCE);
        }
    }
}
