//! Container metadata parser.
//!
//! ffprobe writes a diagnostic banner to stderr that includes one
//! container-level metadata section before the first stream declaration:
//!
//! ```text
//! Input #0, matroska,webm, from 'movie.mkv':
//!   Metadata:
//!     title           : My Movie
//!     encoder         : libebml v1.4.2
//!   Duration: 01:39:54.29, start: 0.000000, bitrate: 5000 kb/s
//!   Stream #0:0: Video: h264 (High), yuv420p(tv, bt709), 1920x1080
//! ```
//!
//! The scan has three states: before the section, inside it, and done.
//! The first `Stream #` line ends the section permanently; a later
//! `Metadata:` line (per-stream or chapter metadata) contributes nothing.
//! Stream block markers interleaved into the input carry no key/value
//! shape and fall through the segment matcher, so they are skipped
//! without special casing.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotInMetadata,
    InMetadata,
    Done,
}

/// Extract the container-level metadata mapping from diagnostic output.
///
/// Each line inside the section is split on `,`; every segment is matched
/// against the `key : value` shape, where the key is a run of word
/// characters. Segments that do not match are skipped silently, so
/// malformed input still yields partial metadata. Duplicate keys resolve
/// last-value-wins.
pub fn parse_container_metadata<I, S>(lines: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut metadata = HashMap::new();
    let mut state = State::NotInMetadata;

    for line in lines {
        let line = line.as_ref();

        match state {
            State::NotInMetadata if line.contains("Metadata:") => {
                state = State::InMetadata;
            }
            // The first stream declaration ends metadata collection for
            // good, whether or not a section was ever opened.
            State::NotInMetadata | State::InMetadata if line.contains("Stream #") => {
                state = State::Done;
            }
            // A repeated section header (e.g. chapter metadata) is not a
            // key/value line.
            State::InMetadata if line.contains("Metadata:") => {}
            State::InMetadata => {
                for segment in line.split(',') {
                    if let Some((key, value)) = match_segment(segment) {
                        metadata.insert(key.to_string(), value.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    tracing::debug!("Parsed {} container metadata entries", metadata.len());

    metadata
}

/// Match one segment against the `key : value` shape.
///
/// The key is the trailing run of word characters before the first `:`;
/// the value is the trimmed remainder of the segment.
fn match_segment(segment: &str) -> Option<(&str, &str)> {
    let (left, right) = segment.split_once(':')?;

    let left = left.trim_end();
    let key_start = left
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map(|(index, _)| index)?;

    Some((&left[key_start..], right.trim()))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_section_until_stream_marker() {
        let input = [
            "Metadata:",
            "  title : My Movie, year : 2020",
            "Stream #0",
        ];
        let metadata = parse_container_metadata(input);
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata["title"], "My Movie");
        assert_eq!(metadata["year"], "2020");
    }

    #[test]
    fn later_metadata_section_contributes_nothing() {
        let input = [
            "Metadata:",
            "  title : My Movie",
            "Stream #0:0: Video: h264",
            "  Metadata:",
            "    language : eng",
        ];
        let metadata = parse_container_metadata(input);
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata["title"], "My Movie");
        assert!(!metadata.contains_key("language"));
    }

    #[test]
    fn lines_before_section_are_ignored() {
        let input = [
            "Input #0, matroska,webm, from 'movie.mkv':",
            "  Metadata:",
            "    encoder         : libebml v1.4.2",
            "  Stream #0:0: Video: h264",
        ];
        let metadata = parse_container_metadata(input);
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata["encoder"], "libebml v1.4.2");
    }

    #[test]
    fn non_matching_segment_is_skipped() {
        let input = ["Metadata:", "  no separator segment, title : Kept"];
        let metadata = parse_container_metadata(input);
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata["title"], "Kept");
    }

    #[test]
    fn stream_block_markers_are_skipped() {
        let input = [
            "Metadata:",
            "[STREAM]",
            "  title : My Movie",
            "[/STREAM]",
            "Stream #0",
        ];
        let metadata = parse_container_metadata(input);
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata["title"], "My Movie");
    }

    #[test]
    fn repeated_section_header_is_not_a_key() {
        let input = ["Metadata:", "  title : My Movie", "  Metadata:", "  year : 2020"];
        let metadata = parse_container_metadata(input);
        assert_eq!(metadata.len(), 2);
        assert!(!metadata.contains_key("Metadata"));
    }

    #[test]
    fn duplicate_keys_last_value_wins() {
        let input = ["Metadata:", "  title : First", "  title : Second"];
        let metadata = parse_container_metadata(input);
        assert_eq!(metadata["title"], "Second");
    }

    #[test]
    fn value_keeps_colons_after_the_first() {
        let input = ["Metadata:", "  creation_time : 2020-01-01T12:30:00Z"];
        let metadata = parse_container_metadata(input);
        assert_eq!(metadata["creation_time"], "2020-01-01T12:30:00Z");
    }

    #[test]
    fn segment_matching() {
        assert_eq!(match_segment(" title : My Movie"), Some(("title", "My Movie")));
        assert_eq!(match_segment("major_brand: isom"), Some(("major_brand", "isom")));
        assert_eq!(match_segment("no colon here"), None);
        assert_eq!(match_segment(" : empty key"), None);
        assert_eq!(match_segment("foo bar : x"), Some(("bar", "x")));
    }

    #[test]
    fn stream_marker_before_section_blocks_it() {
        let input = ["Stream #0:0: Video: h264", "Metadata:", "  title : Late"];
        let metadata = parse_container_metadata(input);
        assert!(metadata.is_empty());
    }

    #[test]
    fn no_section_yields_empty_map() {
        let metadata = parse_container_metadata(["Stream #0", "  title : Nope"]);
        assert!(metadata.is_empty());
    }
}
