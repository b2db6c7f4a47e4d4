//! Parsers for the two ffprobe output channels.
//!
//! ffprobe emits two related but differently shaped text streams: the
//! stream block dump on stdout and the free-form diagnostic banner on
//! stderr. Both mention the same `[STREAM]`/`[/STREAM]` markers, but they
//! are parsed by two independent single-pass state machines: one extracts
//! block content, the other only uses stream declarations as a terminator
//! for the metadata section. Keeping the scans separate keeps each one
//! independently testable.

mod metadata;
mod stream_blocks;

pub use metadata::parse_container_metadata;
pub use stream_blocks::parse_stream_blocks;
