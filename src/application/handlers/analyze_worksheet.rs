//! AnalyzeWorksheetHandler - analyze a worksheet and persist the score.
//!
//! The engine runs first and its result is returned regardless of what
//! happens at the persistence boundary. A storage failure downgrades the
//! response to `persisted: false` and logs a warning; it never discards
//! the computed analysis.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::engine::{AnalysisEngine, AnalysisResult};
use crate::domain::foundation::{BlockId, SubcomponentId, Timestamp, UserId};
use crate::domain::worksheet::WorksheetInput;
use crate::ports::{ScoreRecord, ScoreRepository, ScoreSource};

/// Request to analyze one worksheet submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeWorksheetCommand {
    pub user_id: UserId,
    pub block_id: BlockId,
    pub subcomponent_id: SubcomponentId,
    pub input: WorksheetInput,
}

/// The analysis plus whether the score made it to storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeWorksheetResponse {
    pub result: AnalysisResult,
    pub persisted: bool,
}

/// Runs the analysis engine and records the resulting score.
pub struct AnalyzeWorksheetHandler {
    engine: AnalysisEngine,
    score_repository: Arc<dyn ScoreRepository>,
    store_analysis_payload: bool,
}

impl AnalyzeWorksheetHandler {
    pub fn new(score_repository: Arc<dyn ScoreRepository>) -> Self {
        Self {
            engine: AnalysisEngine::new(),
            score_repository,
            store_analysis_payload: true,
        }
    }

    /// Controls whether the full analysis JSON is stored with the score.
    pub fn store_analysis_payload(mut self, store: bool) -> Self {
        self.store_analysis_payload = store;
        self
    }

    /// Analyze and persist. The returned `persisted` flag is false when
    /// storage rejected the save.
    pub async fn handle(&self, command: AnalyzeWorksheetCommand) -> AnalyzeWorksheetResponse {
        let result = self.engine.analyze(&command.input);

        let record = ScoreRecord {
            user_id: command.user_id,
            block_id: command.block_id.clone(),
            subcomponent_id: command.subcomponent_id.clone(),
            score: result.score,
            source: ScoreSource::WorksheetAnalysis,
            analysis: if self.store_analysis_payload {
                serde_json::to_value(&result).ok()
            } else {
                None
            },
            recorded_at: Timestamp::now(),
        };

        let persisted = match self.score_repository.save_score(&record).await {
            Ok(()) => true,
            Err(error) => {
                warn!(
                    user_id = %command.user_id,
                    block_id = %command.block_id,
                    subcomponent_id = %command.subcomponent_id,
                    %error,
                    "failed to persist worksheet score; returning result anyway"
                );
                false
            }
        };

        AnalyzeWorksheetResponse { result, persisted }
    }

    /// Analyze without touching storage. Used by the preview endpoint.
    pub fn analyze_only(&self, input: &WorksheetInput) -> AnalysisResult {
        self.engine.analyze(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScoreRepository;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;

    struct FailingScoreRepository;

    #[async_trait]
    impl ScoreRepository for FailingScoreRepository {
        async fn save_score(&self, _record: &ScoreRecord) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection lost"))
        }

        async fn latest_score(
            &self,
            _user_id: &UserId,
            _block_id: &BlockId,
            _subcomponent_id: &SubcomponentId,
        ) -> Result<Option<ScoreRecord>, DomainError> {
            Ok(None)
        }

        async fn block_scores(
            &self,
            _user_id: &UserId,
            _block_id: &BlockId,
        ) -> Result<Vec<ScoreRecord>, DomainError> {
            Ok(Vec::new())
        }

        async fn score_history(
            &self,
            _user_id: &UserId,
            _block_id: &BlockId,
            _subcomponent_id: &SubcomponentId,
        ) -> Result<Vec<ScoreRecord>, DomainError> {
            Ok(Vec::new())
        }
    }

    fn command() -> AnalyzeWorksheetCommand {
        AnalyzeWorksheetCommand {
            user_id: UserId::new(),
            block_id: BlockId::new("market-insight"),
            subcomponent_id: SubcomponentId::new("problem-definition"),
            input: WorksheetInput {
                problem: "Reps lose 6 hours weekly to manual CRM entry".to_string(),
                evidence: "30 interviews".to_string(),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn persists_score_and_analysis_payload() {
        let repository = Arc::new(InMemoryScoreRepository::new());
        let handler = AnalyzeWorksheetHandler::new(repository.clone());

        let cmd = command();
        let user_id = cmd.user_id;
        let response = handler.handle(cmd).await;

        assert!(response.persisted);
        let saved = repository
            .latest_score(
                &user_id,
                &BlockId::new("market-insight"),
                &SubcomponentId::new("problem-definition"),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(saved.score, response.result.score);
        assert_eq!(saved.source, ScoreSource::WorksheetAnalysis);
        assert!(saved.analysis.is_some());
    }

    #[tokio::test]
    async fn analysis_payload_can_be_withheld() {
        let repository = Arc::new(InMemoryScoreRepository::new());
        let handler =
            AnalyzeWorksheetHandler::new(repository.clone()).store_analysis_payload(false);

        let cmd = command();
        let user_id = cmd.user_id;
        handler.handle(cmd).await;

        let saved = repository
            .latest_score(
                &user_id,
                &BlockId::new("market-insight"),
                &SubcomponentId::new("problem-definition"),
            )
            .await
            .unwrap()
            .unwrap();
        assert!(saved.analysis.is_none());
    }

    #[tokio::test]
    async fn storage_failure_still_returns_result() {
        let handler = AnalyzeWorksheetHandler::new(Arc::new(FailingScoreRepository));
        let response = handler.handle(command()).await;

        assert!(!response.persisted);
        assert!(response.result.score <= 100);
        assert_eq!(response.result.detailed_scores.len(), 5);
    }
}
