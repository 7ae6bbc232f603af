//! Worksheet input schema and field normalization.

mod input;

pub use input::{FieldKey, WorksheetInput};
