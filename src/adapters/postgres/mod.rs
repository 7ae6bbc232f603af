//! PostgreSQL adapters.

mod score_repository;

pub use score_repository::PostgresScoreRepository;
