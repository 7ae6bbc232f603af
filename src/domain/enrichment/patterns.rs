//! Boolean structural pattern detection.
//!
//! Five independent regex tests; no interaction between them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static QUANTIFICATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d|%|\$").expect("valid quantification regex"));

static CAUSALITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:because|due to|caused by|leads? to|results? in|therefore|consequently|as a result|which means)\b")
        .expect("valid causality regex")
});

static COMPARISON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:more|less|fewer|better|worse|faster|slower|cheaper|than|compared to|versus|vs|unlike)\b")
        .expect("valid comparison regex")
});

static EVIDENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:interview(?:s|ed)?|surveys?|stud(?:y|ies)|data|research|pilots?|beta|tested|validated|observed|measured)\b")
        .expect("valid evidence regex")
});

static URGENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:urgent(?:ly)?|immediately|critical|asap|right now|pressing|deadline|every day|losing)\b")
        .expect("valid urgency regex")
});

/// The five independent structural signals for a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralPatterns {
    pub has_quantification: bool,
    pub has_causality: bool,
    pub has_comparison: bool,
    pub has_evidence: bool,
    pub has_urgency: bool,
}

/// Runs the five structural tests over a field.
pub fn detect_patterns(text: &str) -> StructuralPatterns {
    StructuralPatterns {
        has_quantification: QUANTIFICATION_RE.is_match(text),
        has_causality: CAUSALITY_RE.is_match(text),
        has_comparison: COMPARISON_RE.is_match(text),
        has_evidence: EVIDENCE_RE.is_match(text),
        has_urgency: URGENCY_RE.is_match(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantification_matches_digits_and_symbols() {
        assert!(detect_patterns("costs $40").has_quantification);
        assert!(detect_patterns("20% churn").has_quantification);
        assert!(!detect_patterns("costs a lot").has_quantification);
    }

    #[test]
    fn causality_matches_causal_connectives() {
        assert!(detect_patterns("slow because of manual entry").has_causality);
        assert!(detect_patterns("this leads to churn").has_causality);
        assert!(!detect_patterns("slow and manual").has_causality);
    }

    #[test]
    fn comparison_matches_comparative_language() {
        assert!(detect_patterns("faster than spreadsheets").has_comparison);
        assert!(detect_patterns("compared to last year").has_comparison);
        assert!(!detect_patterns("a good process").has_comparison);
    }

    #[test]
    fn evidence_matches_validation_vocabulary() {
        assert!(detect_patterns("we interviewed 30 founders").has_evidence);
        assert!(detect_patterns("a pilot with measured results").has_evidence);
        assert!(!detect_patterns("we think it is bad").has_evidence);
    }

    #[test]
    fn urgency_matches_urgency_vocabulary() {
        assert!(detect_patterns("we are losing deals every day").has_urgency);
        assert!(detect_patterns("this is critical").has_urgency);
        assert!(!detect_patterns("a mild annoyance").has_urgency);
    }

    #[test]
    fn patterns_are_independent() {
        let patterns = detect_patterns("because we measured a 3x faster close rate");
        assert!(patterns.has_quantification);
        assert!(patterns.has_causality);
        assert!(patterns.has_comparison);
        assert!(patterns.has_evidence);
        assert!(!patterns.has_urgency);
    }
}
