//! Stream block parser.
//!
//! `ffprobe -show_streams` dumps each stream as a delimited block:
//!
//! ```text
//! [STREAM]
//! index=0
//! codec_name=h264
//! codec_type=video
//! ...
//! [/STREAM]
//! ```
//!
//! This is a two-state scan: lines outside any block are discarded, lines
//! inside accumulate until the closing marker finalizes one
//! [`StreamRecord`].

use crate::models::StreamRecord;

/// Parse a line sequence into one record per `[STREAM]`…`[/STREAM]` block.
///
/// Blocks are returned in input order. A repeated opening marker while
/// already inside a block resets the accumulator, so a truncated block
/// never bleeds into the next one.
pub fn parse_stream_blocks<I, S>(lines: I) -> Vec<StreamRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut streams = Vec::new();
    let mut block_lines: Vec<String> = Vec::new();
    let mut in_block = false;

    for line in lines {
        let line = line.as_ref();

        if line.contains("[STREAM]") {
            in_block = true;
            block_lines.clear();
        } else if line.contains("[/STREAM]") && in_block {
            in_block = false;
            streams.push(StreamRecord::from_block_lines(block_lines.drain(..)));
        } else if in_block {
            block_lines.push(line.to_string());
        }
    }

    tracing::debug!("Parsed {} stream blocks", streams.len());

    streams
}
