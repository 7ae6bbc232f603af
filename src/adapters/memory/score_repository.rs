//! In-memory implementation of ScoreRepository.
//!
//! Keeps the full history of every save so tests can assert on both the
//! current score and the change log.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{BlockId, DomainError, SubcomponentId, UserId};
use crate::ports::{ScoreRecord, ScoreRepository};

/// In-memory score store. Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreRepository {
    records: Arc<RwLock<Vec<ScoreRecord>>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of saves, superseded ones included.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn save_score(&self, record: &ScoreRecord) -> Result<(), DomainError> {
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn latest_score(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
        subcomponent_id: &SubcomponentId,
    ) -> Result<Option<ScoreRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .find(|r| {
                r.user_id == *user_id
                    && r.block_id == *block_id
                    && r.subcomponent_id == *subcomponent_id
            })
            .cloned())
    }

    async fn block_scores(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
    ) -> Result<Vec<ScoreRecord>, DomainError> {
        let records = self.records.read().await;
        let mut current: Vec<ScoreRecord> = Vec::new();
        for record in records
            .iter()
            .filter(|r| r.user_id == *user_id && r.block_id == *block_id)
        {
            match current
                .iter_mut()
                .find(|c| c.subcomponent_id == record.subcomponent_id)
            {
                Some(existing) => *existing = record.clone(),
                None => current.push(record.clone()),
            }
        }
        current.sort_by(|a, b| a.subcomponent_id.as_str().cmp(b.subcomponent_id.as_str()));
        Ok(current)
    }

    async fn score_history(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
        subcomponent_id: &SubcomponentId,
    ) -> Result<Vec<ScoreRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| {
                r.user_id == *user_id
                    && r.block_id == *block_id
                    && r.subcomponent_id == *subcomponent_id
            })
            .cloned()
            .collect())
    }
}
