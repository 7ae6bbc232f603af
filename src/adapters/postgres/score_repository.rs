//! PostgreSQL implementation of ScoreRepository.
//!
//! Current scores live in `worksheet_scores`, one row per
//! (user, block, subcomponent), upserted on save. Every save also
//! appends a before/after row to `score_changes` so score movement over
//! time can be reconstructed.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    BlockId, DomainError, ErrorCode, SubcomponentId, Timestamp, UserId,
};
use crate::ports::{ScoreRecord, ScoreRepository, ScoreSource};

/// PostgreSQL implementation of ScoreRepository.
#[derive(Clone)]
pub struct PostgresScoreRepository {
    pool: PgPool,
}

impl PostgresScoreRepository {
    /// Creates a new PostgresScoreRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRepository for PostgresScoreRepository {
    async fn save_score(&self, record: &ScoreRecord) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin transaction: {}", e),
            )
        })?;

        let previous: Option<i16> = sqlx::query_scalar(
            r#"
            SELECT score FROM worksheet_scores
            WHERE user_id = $1 AND block_id = $2 AND subcomponent_id = $3
            "#,
        )
        .bind(record.user_id.as_uuid())
        .bind(record.block_id.as_str())
        .bind(record.subcomponent_id.as_str())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to read previous score: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO worksheet_scores (
                user_id, block_id, subcomponent_id, score, source, analysis, recorded_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_id, block_id, subcomponent_id) DO UPDATE SET
                score = EXCLUDED.score,
                source = EXCLUDED.source,
                analysis = EXCLUDED.analysis,
                recorded_at = EXCLUDED.recorded_at
            "#,
        )
        .bind(record.user_id.as_uuid())
        .bind(record.block_id.as_str())
        .bind(record.subcomponent_id.as_str())
        .bind(i16::from(record.score))
        .bind(record.source.as_str())
        .bind(record.analysis.as_ref())
        .bind(record.recorded_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to upsert score: {}", e),
            )
        })?;

        sqlx::query(
            r#"
            INSERT INTO score_changes (
                user_id, block_id, subcomponent_id, previous_score, new_score, source, changed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.user_id.as_uuid())
        .bind(record.block_id.as_str())
        .bind(record.subcomponent_id.as_str())
        .bind(previous)
        .bind(i16::from(record.score))
        .bind(record.source.as_str())
        .bind(record.recorded_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to append score change: {}", e),
            )
        })?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit transaction: {}", e),
            )
        })?;

        Ok(())
    }

    async fn latest_score(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
        subcomponent_id: &SubcomponentId,
    ) -> Result<Option<ScoreRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, block_id, subcomponent_id, score, source, analysis, recorded_at
            FROM worksheet_scores
            WHERE user_id = $1 AND block_id = $2 AND subcomponent_id = $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(block_id.as_str())
        .bind(subcomponent_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch score: {}", e),
            )
        })?;

        row.map(|r| row_to_record(&r)).transpose()
    }

    async fn block_scores(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
    ) -> Result<Vec<ScoreRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, block_id, subcomponent_id, score, source, analysis, recorded_at
            FROM worksheet_scores
            WHERE user_id = $1 AND block_id = $2
            ORDER BY subcomponent_id
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(block_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch block scores: {}", e),
            )
        })?;

        rows.iter().map(row_to_record).collect()
    }

    async fn score_history(
        &self,
        user_id: &UserId,
        block_id: &BlockId,
        subcomponent_id: &SubcomponentId,
    ) -> Result<Vec<ScoreRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT user_id, block_id, subcomponent_id, new_score AS score, source,
                   NULL::jsonb AS analysis, changed_at AS recorded_at
            FROM score_changes
            WHERE user_id = $1 AND block_id = $2 AND subcomponent_id = $3
            ORDER BY changed_at ASC, id ASC
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(block_id.as_str())
        .bind(subcomponent_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch score history: {}", e),
            )
        })?;

        rows.iter().map(row_to_record).collect()
    }
}

fn source_from_str(s: &str) -> Result<ScoreSource, DomainError> {
    match s {
        "worksheet-analysis" => Ok(ScoreSource::WorksheetAnalysis),
        "manual" => Ok(ScoreSource::Manual),
        other => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Unknown score source: {}", other),
        )),
    }
}

fn row_to_record(row: &sqlx::postgres::PgRow) -> Result<ScoreRecord, DomainError> {
    let map_err = |e: sqlx::Error| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to decode score row: {}", e),
        )
    };

    let score: i16 = row.try_get("score").map_err(map_err)?;
    let source: String = row.try_get("source").map_err(map_err)?;

    Ok(ScoreRecord {
        user_id: UserId::from_uuid(row.try_get("user_id").map_err(map_err)?),
        block_id: BlockId::new(row.try_get::<String, _>("block_id").map_err(map_err)?),
        subcomponent_id: SubcomponentId::new(
            row.try_get::<String, _>("subcomponent_id").map_err(map_err)?,
        ),
        score: score.clamp(0, 100) as u8,
        source: source_from_str(&source)?,
        analysis: row.try_get("analysis").map_err(map_err)?,
        recorded_at: Timestamp::from_datetime(row.try_get("recorded_at").map_err(map_err)?),
    })
}
