//! Dataset acquisition and validation.
//!
//! - snapshot resolution + fetch (`source`)
//! - strict schema validation into domain types (`ingest`)

pub mod ingest;
pub mod source;

pub use ingest::*;
pub use source::*;
