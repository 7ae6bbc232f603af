//! GetBlockRollupHandler - aggregate a block score from its subcomponents.
//!
//! A block is made of six subcomponents. Subcomponents the user has not
//! yet scored count as the fixed placeholder so a single strong worksheet
//! cannot carry a whole block.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BlockId, DomainError, UserId};
use crate::ports::ScoreRepository;

/// Subcomponents that make up every block.
pub const SUBCOMPONENTS_PER_BLOCK: usize = 6;

/// Stand-in score for a subcomponent with no recorded score yet.
pub const MISSING_SUBCOMPONENT_PLACEHOLDER: u8 = 30;

/// Aggregated view of one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRollup {
    pub block_id: BlockId,
    /// Mean of the block's six subcomponent scores, 0-100.
    pub score: u8,
    pub scored_subcomponents: usize,
    pub missing_subcomponents: usize,
}

/// Computes block rollups from persisted subcomponent scores.
pub struct GetBlockRollupHandler {
    score_repository: Arc<dyn ScoreRepository>,
}

impl GetBlockRollupHandler {
    pub fn new(score_repository: Arc<dyn ScoreRepository>) -> Self {
        Self { score_repository }
    }

    /// # Errors
    ///
    /// - `DatabaseError` when the repository fails
    pub async fn handle(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
    ) -> Result<BlockRollup, DomainError> {
        let records = self
            .score_repository
            .block_scores(user_id, block_id)
            .await?;

        let scored = records.len().min(SUBCOMPONENTS_PER_BLOCK);
        let missing = SUBCOMPONENTS_PER_BLOCK - scored;

        let total: u32 = records
            .iter()
            .take(SUBCOMPONENTS_PER_BLOCK)
            .map(|r| u32::from(r.score))
            .sum::<u32>()
            + missing as u32 * u32::from(MISSING_SUBCOMPONENT_PLACEHOLDER);

        let mean =
            (total as f64 / SUBCOMPONENTS_PER_BLOCK as f64).round() as u8;

        Ok(BlockRollup {
            block_id: block_id.clone(),
            score: mean,
            scored_subcomponents: scored,
            missing_subcomponents: missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryScoreRepository;
    use crate::domain::foundation::{SubcomponentId, Timestamp};
    use crate::ports::{ScoreRecord, ScoreSource};

    fn record(user_id: UserId, subcomponent: &str, score: u8) -> ScoreRecord {
        ScoreRecord {
            user_id,
            block_id: BlockId::new("market-insight"),
            subcomponent_id: SubcomponentId::new(subcomponent),
            score,
            source: ScoreSource::WorksheetAnalysis,
            analysis: None,
            recorded_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn empty_block_is_all_placeholder() {
        let repository = Arc::new(InMemoryScoreRepository::new());
        let handler = GetBlockRollupHandler::new(repository);

        let rollup = handler
            .handle(&UserId::new(), &BlockId::new("market-insight"))
            .await
            .unwrap();

        assert_eq!(rollup.score, MISSING_SUBCOMPONENT_PLACEHOLDER);
        assert_eq!(rollup.scored_subcomponents, 0);
        assert_eq!(rollup.missing_subcomponents, 6);
    }

    #[tokio::test]
    async fn partial_block_mixes_scores_and_placeholders() {
        let repository = Arc::new(InMemoryScoreRepository::new());
        let user_id = UserId::new();
        repository
            .save_score(&record(user_id, "problem-definition", 90))
            .await
            .unwrap();
        repository
            .save_score(&record(user_id, "customer-profile", 60))
            .await
            .unwrap();

        let handler = GetBlockRollupHandler::new(repository);
        let rollup = handler
            .handle(&user_id, &BlockId::new("market-insight"))
            .await
            .unwrap();

        // (90 + 60 + 4 * 30) / 6 = 45
        assert_eq!(rollup.score, 45);
        assert_eq!(rollup.scored_subcomponents, 2);
        assert_eq!(rollup.missing_subcomponents, 4);
    }

    #[tokio::test]
    async fn resaving_a_subcomponent_supersedes_not_duplicates() {
        let repository = Arc::new(InMemoryScoreRepository::new());
        let user_id = UserId::new();
        repository
            .save_score(&record(user_id, "problem-definition", 40))
            .await
            .unwrap();
        repository
            .save_score(&record(user_id, "problem-definition", 70))
            .await
            .unwrap();

        let handler = GetBlockRollupHandler::new(repository);
        let rollup = handler
            .handle(&user_id, &BlockId::new("market-insight"))
            .await
            .unwrap();

        // (70 + 5 * 30) / 6 ~= 36.7 -> 37
        assert_eq!(rollup.score, 37);
        assert_eq!(rollup.scored_subcomponents, 1);
    }
}
