//! Core enums for stream classification.

use serde::{Deserialize, Serialize};

/// Kind of media stream, as reported by the `codec_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamKind {
    Video,
    Audio,
    Subtitle,
    Attachment,
}

impl StreamKind {
    /// Classify a raw `codec_type` value.
    ///
    /// Returns `None` for anything other than the four literal kind names,
    /// including `data` streams and absent values.
    pub fn from_codec_type(value: &str) -> Option<Self> {
        match value {
            "video" => Some(StreamKind::Video),
            "audio" => Some(StreamKind::Audio),
            "subtitle" => Some(StreamKind::Subtitle),
            "attachment" => Some(StreamKind::Attachment),
            _ => None,
        }
    }
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamKind::Video => write!(f, "video"),
            StreamKind::Audio => write!(f, "audio"),
            StreamKind::Subtitle => write!(f, "subtitle"),
            StreamKind::Attachment => write!(f, "attachment"),
        }
    }
}
