//! Score repository port.
//!
//! Defines the contract for persisting subcomponent scores. A score is
//! keyed by (user, block, subcomponent); saving a new value for the same
//! key supersedes the previous one while the change history is retained
//! by the implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BlockId, DomainError, SubcomponentId, Timestamp, UserId};

/// How a score came to be recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreSource {
    /// Produced by the analysis engine from worksheet text.
    WorksheetAnalysis,
    /// Entered directly by the user as a self-assessment.
    Manual,
}

impl ScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSource::WorksheetAnalysis => "worksheet-analysis",
            ScoreSource::Manual => "manual",
        }
    }
}

/// One persisted subcomponent score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub user_id: UserId,
    pub block_id: BlockId,
    pub subcomponent_id: SubcomponentId,
    /// 0-100.
    pub score: u8,
    pub source: ScoreSource,
    /// The full analysis payload that produced the score, when one exists.
    pub analysis: Option<serde_json::Value>,
    pub recorded_at: Timestamp,
}

/// Repository port for subcomponent score persistence.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Save a score, superseding any previous score for the same
    /// (user, block, subcomponent) key. Implementations record the
    /// delta from the previous value in a change log.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save_score(&self, record: &ScoreRecord) -> Result<(), DomainError>;

    /// The most recent score for a subcomponent, if any.
    async fn latest_score(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
        subcomponent_id: &SubcomponentId,
    ) -> Result<Option<ScoreRecord>, DomainError>;

    /// All current scores within a block for a user, ordered by
    /// subcomponent id.
    async fn block_scores(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
    ) -> Result<Vec<ScoreRecord>, DomainError>;

    /// Every score ever recorded for a subcomponent, oldest first.
    async fn score_history(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
        subcomponent_id: &SubcomponentId,
    ) -> Result<Vec<ScoreRecord>, DomainError>;
}
