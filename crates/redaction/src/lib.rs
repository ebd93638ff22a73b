//! Audience-aware redaction of deliverable content trees, plus the
//! post-redaction output validator.

pub mod engine;
pub mod policy;
pub mod validator;

pub use engine::RedactionEngine;
pub use policy::ExclusionPolicy;
pub use validator::{OutputValidator, ValidationReport};
