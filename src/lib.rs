//! ffinspect - structured access to ffprobe output.
//!
//! This crate parses the textual output of the `ffprobe` command line tool
//! into typed, queryable records. The parsing core is pure: it transforms
//! two line sequences (the `[STREAM]` block dump and the diagnostic
//! banner) into a [`ProbeResult`] without performing any I/O, so it can be
//! driven from a live ffprobe invocation or from captured output alike.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let result = ffinspect::probe_file(Path::new("movie.mkv")).unwrap();
//!
//! println!("Container title: {:?}", result.metadata().get("title"));
//! for stream in result.video() {
//!     println!(
//!         "Video: {:?} {:?} @ {:?} fps",
//!         stream.codec(),
//!         stream.frame_size(),
//!         stream.framerate(),
//!     );
//! }
//! for stream in result.audio() {
//!     println!(
//!         "Audio: {:?}, {:?} channels, {}",
//!         stream.codec(),
//!         stream.audio_channels(),
//!         stream.language(),
//!     );
//! }
//! ```

pub mod error;
pub mod logging;
pub mod models;
pub mod parse;
pub mod runner;

pub use error::{FieldError, ProbeError};
pub use models::{LanguageTag, ProbeResult, StreamKind, StreamRecord};
pub use parse::{parse_container_metadata, parse_stream_blocks};
pub use runner::{ffprobe_available, probe_file};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
