//! Presentation script assembly: timing reconciliation, block set
//! verification, and deterministic markdown export.

pub mod blocks;
pub mod exporter;
pub mod timing;

pub use blocks::verify_block_set;
pub use exporter::ScriptExporter;
pub use timing::reconcile;
