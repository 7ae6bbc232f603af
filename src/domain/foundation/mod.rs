//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the GTM Compass domain.

mod dimension;
mod errors;
mod ids;
mod percentage;
mod points;
mod timestamp;

pub use dimension::Dimension;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BlockId, SubcomponentId, UserId};
pub use percentage::Percentage;
pub use points::PointScore;
pub use timestamp::Timestamp;
