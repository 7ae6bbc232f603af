//! Deterministic per-dimension feedback synthesis.

mod synthesizer;

pub use synthesizer::{FeedbackSynthesizer, FEEDBACK_TEMPLATES};
