//! Whole-submission classification.

mod detector;

pub use detector::{
    detect_context, Context, Industry, Sophistication, Stage, Urgency,
};
