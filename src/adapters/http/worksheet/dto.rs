//! HTTP DTOs for worksheet endpoints.
//!
//! The worksheet payload uses the hyphenated field names the web client
//! sends. Missing fields deserialize to empty strings; the engine treats
//! them as unanswered.

use serde::{Deserialize, Serialize};

use crate::domain::worksheet::WorksheetInput;

/// Raw worksheet fields as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorksheetDto {
    #[serde(rename = "who-affected", default)]
    pub who: String,
    #[serde(rename = "what-problem", default)]
    pub problem: String,
    #[serde(rename = "when-occur", default)]
    pub when: String,
    #[serde(rename = "what-impact", default)]
    pub impact: String,
    #[serde(rename = "how-solving", default)]
    pub current_solutions: String,
    #[serde(rename = "evidence-validation", default)]
    pub evidence: String,
}

impl From<WorksheetDto> for WorksheetInput {
    fn from(dto: WorksheetDto) -> Self {
        WorksheetInput {
            who: dto.who,
            problem: dto.problem,
            when: dto.when,
            impact: dto.impact,
            current_solutions: dto.current_solutions,
            evidence: dto.evidence,
        }
    }
}

/// Body for POST /api/worksheets/analyze.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeWorksheetRequest {
    pub block_id: String,
    pub subcomponent_id: String,
    pub worksheet: WorksheetDto,
}

/// Body for POST /api/worksheets/score.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreWorksheetRequest {
    pub worksheet: WorksheetDto,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_worksheet_fields_default_to_empty() {
        let dto: WorksheetDto =
            serde_json::from_str(r#"{"what-problem": "Churn is rising"}"#).unwrap();
        let input: WorksheetInput = dto.into();
        assert_eq!(input.problem, "Churn is rising");
        assert!(input.who.is_empty());
        assert!(input.evidence.is_empty());
    }

    #[test]
    fn unknown_worksheet_fields_are_ignored() {
        let dto: WorksheetDto = serde_json::from_str(
            r#"{"what-problem": "Churn", "extra-field": "ignored"}"#,
        )
        .unwrap();
        assert_eq!(dto.problem, "Churn");
    }
}
