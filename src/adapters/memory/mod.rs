//! In-memory adapters for testing and development.

mod score_repository;

pub use score_repository::InMemoryScoreRepository;
