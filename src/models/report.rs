//! Aggregated probe output for one media file.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::enums::StreamKind;
use crate::models::stream::StreamRecord;

/// Everything extracted from one probe run: all streams in block order,
/// kind-partitioned views over them, and the container-level metadata.
///
/// Immutable to the caller; the kind lists are indices into the full
/// stream list, populated by a single classification pass at construction,
/// so each record lives in exactly one place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    streams: Vec<StreamRecord>,
    video: Vec<usize>,
    audio: Vec<usize>,
    subtitle: Vec<usize>,
    attachment: Vec<usize>,
    metadata: HashMap<String, String>,
}

impl ProbeResult {
    /// Assemble a result from parsed streams and container metadata.
    ///
    /// Streams whose kind is absent or unrecognized stay in the full list
    /// but appear in no kind view.
    pub fn new(streams: Vec<StreamRecord>, metadata: HashMap<String, String>) -> Self {
        let mut video = Vec::new();
        let mut audio = Vec::new();
        let mut subtitle = Vec::new();
        let mut attachment = Vec::new();

        for (index, stream) in streams.iter().enumerate() {
            match stream.kind() {
                Some(StreamKind::Video) => video.push(index),
                Some(StreamKind::Audio) => audio.push(index),
                Some(StreamKind::Subtitle) => subtitle.push(index),
                Some(StreamKind::Attachment) => attachment.push(index),
                None => {}
            }
        }

        Self {
            streams,
            video,
            audio,
            subtitle,
            attachment,
            metadata,
        }
    }

    /// All parsed streams, in input block order.
    pub fn streams(&self) -> &[StreamRecord] {
        &self.streams
    }

    /// Video streams, in input order.
    pub fn video(&self) -> Vec<&StreamRecord> {
        self.collect_kind(&self.video)
    }

    /// Audio streams, in input order.
    pub fn audio(&self) -> Vec<&StreamRecord> {
        self.collect_kind(&self.audio)
    }

    /// Subtitle streams, in input order.
    pub fn subtitle(&self) -> Vec<&StreamRecord> {
        self.collect_kind(&self.subtitle)
    }

    /// Attachment streams, in input order.
    pub fn attachment(&self) -> Vec<&StreamRecord> {
        self.collect_kind(&self.attachment)
    }

    /// Streams of one kind, in input order.
    pub fn of_kind(&self, kind: StreamKind) -> Vec<&StreamRecord> {
        match kind {
            StreamKind::Video => self.video(),
            StreamKind::Audio => self.audio(),
            StreamKind::Subtitle => self.subtitle(),
            StreamKind::Attachment => self.attachment(),
        }
    }

    /// Container-level metadata mapping.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    fn collect_kind(&self, indices: &[usize]) -> Vec<&StreamRecord> {
        indices.iter().map(|&i| &self.streams[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lines: &[&str]) -> StreamRecord {
        StreamRecord::from_block_lines(lines)
    }

    fn sample_result() -> ProbeResult {
        let streams = vec![
            record(&["index=0", "codec_type=video", "codec_name=h264"]),
            record(&["index=1", "codec_type=audio", "codec_name=aac"]),
            record(&["index=2", "codec_type=audio", "codec_name=ac3"]),
            record(&["index=3", "codec_type=subtitle", "codec_name=subrip"]),
            record(&["index=4", "codec_type=attachment", "codec_name=ttf"]),
            record(&["index=5", "codec_type=data"]),
            record(&["index=6"]),
        ];
        let metadata = HashMap::from([("title".to_string(), "My Movie".to_string())]);
        ProbeResult::new(streams, metadata)
    }

    #[test]
    fn partitions_streams_by_kind() {
        let result = sample_result();

        assert_eq!(result.streams().len(), 7);
        assert_eq!(result.video().len(), 1);
        assert_eq!(result.audio().len(), 2);
        assert_eq!(result.subtitle().len(), 1);
        assert_eq!(result.attachment().len(), 1);

        assert_eq!(result.video()[0].codec(), Some("h264"));
        assert_eq!(result.audio()[0].codec(), Some("aac"));
        assert_eq!(result.audio()[1].codec(), Some("ac3"));
    }

    #[test]
    fn every_kind_entry_is_in_full_list_once() {
        let result = sample_result();

        let kinds = [
            StreamKind::Video,
            StreamKind::Audio,
            StreamKind::Subtitle,
            StreamKind::Attachment,
        ];
        for kind in kinds {
            for stream in result.of_kind(kind) {
                let occurrences = result
                    .streams()
                    .iter()
                    .filter(|s| std::ptr::eq(*s, stream))
                    .count();
                assert_eq!(occurrences, 1);
                assert_eq!(stream.kind(), Some(kind));
            }
        }
    }

    #[test]
    fn unknown_kind_appears_in_no_view() {
        let result = sample_result();

        let partitioned = result.video().len()
            + result.audio().len()
            + result.subtitle().len()
            + result.attachment().len();
        // The data stream and the record without codec_type stay unlisted.
        assert_eq!(partitioned, result.streams().len() - 2);
    }

    #[test]
    fn metadata_is_exposed() {
        let result = sample_result();
        assert_eq!(result.metadata().get("title").unwrap(), "My Movie");
    }

    #[test]
    fn empty_result_is_valid() {
        let result = ProbeResult::new(Vec::new(), HashMap::new());
        assert!(result.streams().is_empty());
        assert!(result.video().is_empty());
        assert!(result.metadata().is_empty());
    }
}
