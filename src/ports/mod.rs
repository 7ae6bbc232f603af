//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScoreRepository` - Persistence of subcomponent scores and their
//!   change history

mod score_repository;

pub use score_repository::{ScoreRecord, ScoreRepository, ScoreSource};
