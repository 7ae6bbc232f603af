//! Use-case handlers.
//!
//! - `AnalyzeWorksheetHandler` - run the engine, persist the score
//! - `GetBlockRollupHandler` - aggregate a block from its subcomponents

mod analyze_worksheet;
mod get_block_rollup;

pub use analyze_worksheet::{
    AnalyzeWorksheetCommand, AnalyzeWorksheetHandler, AnalyzeWorksheetResponse,
};
pub use get_block_rollup::{
    BlockRollup, GetBlockRollupHandler, MISSING_SUBCOMPONENT_PLACEHOLDER,
    SUBCOMPONENTS_PER_BLOCK,
};
