//! Role, company, technology, and timeframe extraction.
//!
//! Roles and technologies come from fixed vocabularies; companies from a
//! suffix-anchored title-case pattern. Sets are BTreeSets so iteration
//! order is independent of match order.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Known role titles, matched case-insensitively.
const ROLE_VOCABULARY: &[&str] = &[
    "account executive",
    "ceo",
    "cfo",
    "cto",
    "customer success manager",
    "designer",
    "developer",
    "engineer",
    "engineering manager",
    "founder",
    "head of growth",
    "head of marketing",
    "head of sales",
    "marketer",
    "operations manager",
    "product manager",
    "sales rep",
    "vp of engineering",
    "vp of marketing",
    "vp of sales",
];

/// Known technology and tool names, matched case-insensitively.
const TECHNOLOGY_VOCABULARY: &[&str] = &[
    "api",
    "crm",
    "excel",
    "hubspot",
    "jira",
    "machine learning",
    "notion",
    "salesforce",
    "slack",
    "spreadsheet",
    "spreadsheets",
    "sql",
    "zapier",
];

static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    // Title-case run ending in a corporate suffix, e.g. "Acme Labs Inc".
    Regex::new(r"\b([A-Z][a-zA-Z]+(?:\s+[A-Z][a-zA-Z]+)*\s+(?:Inc|Corp|LLC|Labs|Technologies|Systems|Software)\b\.?)")
        .expect("valid company regex")
});

static TIMEFRAME_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:every|each)\s+(?:day|week|month|quarter|year|sprint)\b",
        r"(?i)\b(?:daily|weekly|monthly|quarterly|annually)\b",
        r"(?i)\bQ[1-4]\b",
        r"(?i)\b(?:end of|by)\s+(?:the\s+)?(?:day|week|month|quarter|year)\b",
        r"(?i)\bduring\s+(?:onboarding|renewal|close|launch)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid timeframe regex"))
    .collect()
});

/// Extracts known role titles from field text.
pub fn extract_roles(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    ROLE_VOCABULARY
        .iter()
        .filter(|role| lower.contains(*role))
        .map(|role| role.to_string())
        .collect()
}

/// Extracts company names via the suffix-anchored title-case pattern.
pub fn extract_companies(text: &str) -> BTreeSet<String> {
    COMPANY_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches('.').to_string())
        .collect()
}

/// Extracts known technology and tool names from field text.
pub fn extract_technologies(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    TECHNOLOGY_VOCABULARY
        .iter()
        .filter(|tech| {
            // Whole-word containment; "api" must not match "rapid".
            lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| word == **tech)
                || (tech.contains(' ') && lower.contains(*tech))
        })
        .map(|tech| tech.to_string())
        .collect()
}

/// Extracts recurring or bounded time expressions, in discovery order.
pub fn extract_timeframes(text: &str) -> Vec<String> {
    let mut timeframes = Vec::new();
    for re in TIMEFRAME_RES.iter() {
        for m in re.find_iter(text) {
            let found = m.as_str().to_lowercase();
            if !timeframes.contains(&found) {
                timeframes.push(found);
            }
        }
    }
    timeframes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_matched_case_insensitively_and_deduplicated() {
        let roles = extract_roles("The VP of Sales and another vp of sales plus a Founder");
        assert_eq!(roles.len(), 2);
        assert!(roles.contains("vp of sales"));
        assert!(roles.contains("founder"));
    }

    #[test]
    fn companies_require_corporate_suffix() {
        let companies = extract_companies("Acme Labs Inc competes with Retool Systems");
        assert!(companies.contains("Acme Labs Inc"));
        assert!(companies.contains("Retool Systems"));
        assert!(!companies.iter().any(|c| c.contains("competes")));
    }

    #[test]
    fn technologies_match_whole_words_only() {
        let techs = extract_technologies("They track rapid growth in a spreadsheet and a CRM");
        assert!(techs.contains("spreadsheet"));
        assert!(techs.contains("crm"));
        assert!(!techs.contains("api"));
    }

    #[test]
    fn timeframes_keep_discovery_order_without_duplicates() {
        let timeframes = extract_timeframes("Reports run weekly, reviewed every quarter, weekly");
        assert_eq!(timeframes, vec!["every quarter", "weekly"]);
    }

    #[test]
    fn empty_text_extracts_nothing() {
        assert!(extract_roles("").is_empty());
        assert!(extract_companies("").is_empty());
        assert!(extract_technologies("").is_empty());
        assert!(extract_timeframes("").is_empty());
    }
}
