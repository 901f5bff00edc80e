//! Harvest pipeline: scan listings, deduplicate across game systems, fetch
//! each army book once, expand to compatible systems, and write JSON/CSV.

pub mod analysis;
pub mod collect;
pub mod error;
pub mod expand;
pub mod fetch;
pub mod index;
pub mod scan;
pub mod writer;

pub use analysis::{RuleFrequency, common_rules, rating_hints};
pub use collect::{
    CrossSystemBook, DEFAULT_OUTPUT_DIR, Harvest, HarvestOptions, HarvestOutput, HarvestStats,
    Strategy, collect, collect_per_system, collect_smart, write_harvest,
};
pub use error::HarvestError;
pub use index::{BookIndex, IndexedBook};
pub use writer::WrittenFiles;
