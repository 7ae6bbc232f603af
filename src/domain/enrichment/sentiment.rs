//! Lexicon-based sentiment polarity.
//!
//! Two fixed keyword lexicons; score is `(pos - neg) / (pos + neg + 1)`.
//! Tone is problem-focused exactly when negative counts exceed positive.

use serde::{Deserialize, Serialize};

/// Positive-polarity lexicon.
const POSITIVE_WORDS: &[&str] = &[
    "improve",
    "improved",
    "improvement",
    "gain",
    "grow",
    "growth",
    "success",
    "successful",
    "efficient",
    "faster",
    "better",
    "saves",
    "opportunity",
    "win",
    "valuable",
    "love",
    "easy",
];

/// Negative-polarity lexicon.
const NEGATIVE_WORDS: &[&str] = &[
    "problem",
    "pain",
    "struggle",
    "struggling",
    "lose",
    "losing",
    "lost",
    "waste",
    "wasted",
    "frustrating",
    "frustration",
    "broken",
    "fail",
    "failing",
    "failure",
    "slow",
    "difficult",
    "costly",
    "churn",
    "risk",
];

/// Overall tone of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    ProblemFocused,
    #[default]
    SolutionFocused,
}

/// Polarity summary for one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// `(pos - neg) / (pos + neg + 1)`, in (-1, 1).
    pub score: f64,
    /// Positive lexicon hits.
    pub positive: u32,
    /// Negative lexicon hits.
    pub negative: u32,
    /// Problem-focused when negative > positive.
    pub tone: Tone,
}

/// Computes the polarity summary for a field.
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let positive = words
        .iter()
        .filter(|w| POSITIVE_WORDS.contains(*w))
        .count() as u32;
    let negative = words
        .iter()
        .filter(|w| NEGATIVE_WORDS.contains(*w))
        .count() as u32;

    let score = (f64::from(positive) - f64::from(negative))
        / (f64::from(positive) + f64::from(negative) + 1.0);
    let tone = if negative > positive {
        Tone::ProblemFocused
    } else {
        Tone::SolutionFocused
    };

    Sentiment {
        score,
        positive,
        negative,
        tone,
    }
}
