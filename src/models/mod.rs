//! Data models for probe output.
//!
//! - Enums for stream classification
//! - The per-stream record with its typed accessors
//! - The aggregated probe result
//! - Language tag resolution

mod enums;
mod language;
mod report;
mod stream;

// Re-export all public types
pub use enums::StreamKind;
pub use language::{resolve as resolve_language, LanguageTag};
pub use report::ProbeResult;
pub use stream::{StreamRecord, DISPOSITION_FLAGS};
