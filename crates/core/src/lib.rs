//! Shared core for the deliverable transformation layer: document and
//! script types, the deliverable catalog, the placeholder taxonomy,
//! configuration, and errors.

pub mod catalog;
pub mod config;
pub mod error;
pub mod placeholder;
pub mod types;

pub use catalog::DeliverableCatalog;
pub use config::AppConfig;
pub use error::{StudioError, StudioResult};
pub use placeholder::{PlaceholderHit, PlaceholderScanner};
pub use types::{Audience, DeliverableId, Phase, ScriptBlock, TimelineSegment, TimestampInfo};
