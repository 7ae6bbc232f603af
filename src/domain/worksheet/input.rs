//! Canonical worksheet input record.
//!
//! A submission arrives as a loose string map keyed by the six wire names
//! of the problem-statement worksheet. Normalization is explicit: absent
//! keys become empty strings, unknown keys are ignored. Downstream
//! stages only ever see the canonical [`WorksheetInput`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The six semantic fields of the problem-statement worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    WhoAffected,
    WhatProblem,
    WhenOccur,
    WhatImpact,
    HowSolving,
    EvidenceValidation,
}

impl FieldKey {
    /// All six fields in canonical worksheet order.
    pub const ALL: [FieldKey; 6] = [
        FieldKey::WhoAffected,
        FieldKey::WhatProblem,
        FieldKey::WhenOccur,
        FieldKey::WhatImpact,
        FieldKey::HowSolving,
        FieldKey::EvidenceValidation,
    ];

    /// The hyphenated wire name used by the worksheet UI.
    pub fn wire_name(&self) -> &'static str {
        match self {
            FieldKey::WhoAffected => "who-affected",
            FieldKey::WhatProblem => "what-problem",
            FieldKey::WhenOccur => "when-occur",
            FieldKey::WhatImpact => "what-impact",
            FieldKey::HowSolving => "how-solving",
            FieldKey::EvidenceValidation => "evidence-validation",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Normalized worksheet submission. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetInput {
    /// Who experiences the problem.
    pub who: String,
    /// What the problem is.
    pub problem: String,
    /// When the problem occurs.
    pub when: String,
    /// What the impact of the problem is.
    pub impact: String,
    /// How people solve it today.
    pub current_solutions: String,
    /// Evidence that the problem has been validated.
    pub evidence: String,
}

impl WorksheetInput {
    /// Builds a canonical record from a wire-keyed string map.
    ///
    /// Missing keys default to empty strings; unknown keys are ignored.
    pub fn from_map(fields: &HashMap<String, String>) -> Self {
        let get = |key: FieldKey| {
            fields
                .get(key.wire_name())
                .cloned()
                .unwrap_or_default()
        };
        Self {
            who: get(FieldKey::WhoAffected),
            problem: get(FieldKey::WhatProblem),
            when: get(FieldKey::WhenOccur),
            impact: get(FieldKey::WhatImpact),
            current_solutions: get(FieldKey::HowSolving),
            evidence: get(FieldKey::EvidenceValidation),
        }
    }

    /// Returns the text of a single field.
    pub fn field(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::WhoAffected => &self.who,
            FieldKey::WhatProblem => &self.problem,
            FieldKey::WhenOccur => &self.when,
            FieldKey::WhatImpact => &self.impact,
            FieldKey::HowSolving => &self.current_solutions,
            FieldKey::EvidenceValidation => &self.evidence,
        }
    }

    /// Iterates the fields in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        FieldKey::ALL.iter().map(move |key| (*key, self.field(*key)))
    }

    /// All field text concatenated and lower-cased, space separated.
    ///
    /// This is the haystack for whole-submission classification.
    pub fn combined_text(&self) -> String {
        let mut combined = String::new();
        for (_, text) in self.fields() {
            if !combined.is_empty() {
                combined.push(' ');
            }
            combined.push_str(&text.to_lowercase());
        }
        combined
    }

    /// Number of fields containing any non-whitespace text.
    pub fn non_empty_field_count(&self) -> usize {
        self.fields()
            .filter(|(_, text)| !text.trim().is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_fills_missing_keys_with_empty_strings() {
        let mut fields = HashMap::new();
        fields.insert("what-problem".to_string(), "Churn is rising".to_string());

        let input = WorksheetInput::from_map(&fields);
        assert_eq!(input.problem, "Churn is rising");
        assert_eq!(input.who, "");
        assert_eq!(input.evidence, "");
    }

    #[test]
    fn from_map_ignores_unknown_keys() {
        let mut fields = HashMap::new();
        fields.insert("what-problem".to_string(), "Churn".to_string());
        fields.insert("random-key".to_string(), "noise".to_string());

        let input = WorksheetInput::from_map(&fields);
        assert_eq!(input.problem, "Churn");
        assert_eq!(input.non_empty_field_count(), 1);
    }

    #[test]
    fn combined_text_is_lowercased_in_field_order() {
        let input = WorksheetInput {
            who: "VP of Sales".to_string(),
            problem: "Manual Reporting".to_string(),
            ..Default::default()
        };
        assert!(input.combined_text().starts_with("vp of sales manual reporting"));
    }

    #[test]
    fn field_lookup_matches_struct_fields() {
        let input = WorksheetInput {
            evidence: "12 interviews".to_string(),
            ..Default::default()
        };
        assert_eq!(input.field(FieldKey::EvidenceValidation), "12 interviews");
        assert_eq!(input.field(FieldKey::WhoAffected), "");
    }

    #[test]
    fn wire_names_match_worksheet_contract() {
        let names: Vec<&str> = FieldKey::ALL.iter().map(|k| k.wire_name()).collect();
        assert_eq!(
            names,
            vec![
                "who-affected",
                "what-problem",
                "when-occur",
                "what-impact",
                "how-solving",
                "evidence-validation",
            ]
        );
    }
}
