//! A single parsed stream and its typed accessors.
//!
//! ffprobe dumps one `key=value` pair per line inside each
//! `[STREAM]`…`[/STREAM]` block. A [`StreamRecord`] keeps those pairs
//! verbatim in a flat string map and layers typed, on-demand queries on
//! top, so "missing key" and "wrong type" are explicit instead of being
//! buried in an untyped attribute bag.
//!
//! Fault policy is deliberately mixed per field: load-bearing identifiers
//! (`index`, `channels`, `bit_rate`, disposition flags, video dimensions)
//! error out when absent or non-numeric, while cosmetic fields
//! (`TAG:NUMBER_OF_BYTES`, `TAG:title`) quietly default. Callers depend on
//! that distinction.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::models::enums::StreamKind;
use crate::models::language::{self, LanguageTag};

/// The fixed set of disposition flags ffprobe emits per stream.
pub const DISPOSITION_FLAGS: [&str; 17] = [
    "default",
    "dub",
    "original",
    "comment",
    "lyrics",
    "karaoke",
    "forced",
    "hearing_impaired",
    "visual_impaired",
    "clean_effects",
    "attached_pic",
    "timed_thumbnails",
    "captions",
    "descriptions",
    "metadata",
    "dependent",
    "still_image",
];

/// One elementary stream inside a media container.
///
/// Constructed once per stream block and immutable afterwards. All queries
/// are pure reads of the backing map; only `framerate` is computed eagerly
/// at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    fields: HashMap<String, String>,
    framerate: Option<i64>,
}

impl StreamRecord {
    /// Build a record from the raw lines of one stream block.
    ///
    /// Each line is split on the **first** `=` into key and value, so
    /// values containing `=` survive intact. Lines without `=` are
    /// malformed input and are skipped with a warning rather than aborting
    /// the parse. Duplicate keys resolve last-value-wins.
    pub fn from_block_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields = HashMap::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once('=') {
                Some((key, value)) => {
                    fields.insert(key.to_string(), value.to_string());
                }
                None => {
                    tracing::warn!("Skipping malformed stream block line: '{}'", line);
                }
            }
        }

        let framerate = compute_framerate(fields.get("avg_frame_rate").map(String::as_str));

        Self { fields, framerate }
    }

    /// Raw access to a field exactly as emitted by ffprobe.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Integer frame rate derived from `avg_frame_rate` at construction.
    ///
    /// `None` if the rational had a non-numeric component (or was absent),
    /// `Some(0)` if the denominator was zero.
    pub fn framerate(&self) -> Option<i64> {
        self.framerate
    }

    /// Kind of this stream, from `codec_type`.
    ///
    /// A record without `codec_type` (or with an unrecognized value) has no
    /// kind; every kind predicate returns false for it.
    pub fn kind(&self) -> Option<StreamKind> {
        self.field("codec_type").and_then(StreamKind::from_codec_type)
    }

    /// Is this stream labelled as a video stream?
    pub fn is_video(&self) -> bool {
        self.kind() == Some(StreamKind::Video)
    }

    /// Is this stream labelled as an audio stream?
    pub fn is_audio(&self) -> bool {
        self.kind() == Some(StreamKind::Audio)
    }

    /// Is this stream labelled as a subtitle stream?
    pub fn is_subtitle(&self) -> bool {
        self.kind() == Some(StreamKind::Subtitle)
    }

    /// Is this stream labelled as an attachment stream?
    pub fn is_attachment(&self) -> bool {
        self.kind() == Some(StreamKind::Attachment)
    }

    /// Pixel frame size as (width, height), for video streams.
    ///
    /// `Ok(None)` for non-video streams. For a video stream both
    /// dimensions must be present and numeric.
    pub fn frame_size(&self) -> Result<Option<(u32, u32)>, FieldError> {
        if !self.is_video() {
            return Ok(None);
        }
        let width = self.parse_numeric::<u32>("width")?;
        let height = self.parse_numeric::<u32>("height")?;
        Ok(Some((width, height)))
    }

    /// Display aspect ratio, e.g. "16:9".
    pub fn aspect_ratio(&self) -> Option<&str> {
        self.field("display_aspect_ratio")
    }

    /// Color range (one of unknown, tv, pc, unspecified, mpeg, jpeg).
    pub fn color_range(&self) -> Option<&str> {
        self.field("color_range")
    }

    /// Pixel format of a video stream, e.g. "yuv420p".
    pub fn pixel_format(&self) -> Option<&str> {
        self.field("pix_fmt")
    }

    /// Stream length in frames.
    ///
    /// Returns 0 for streams that are neither video nor audio.
    pub fn frames(&self) -> Result<u64, FieldError> {
        if !(self.is_video() || self.is_audio()) {
            return Ok(0);
        }
        self.parse_numeric("nb_frames")
    }

    /// Runtime duration in seconds.
    ///
    /// Parses `duration` as a float, falling back to the Matroska-style
    /// `TAG:DURATION` timestamp (`HH:MM:SS,ffffff`). When both fields are
    /// the literal "N/A" the duration is 0. Streams that are neither video
    /// nor audio report 0.0.
    pub fn duration_seconds(&self) -> Result<f64, FieldError> {
        if !(self.is_video() || self.is_audio()) {
            return Ok(0.0);
        }

        let duration = self.field("duration");
        if let Some(value) = duration {
            if let Ok(seconds) = value.trim().parse::<f64>() {
                return Ok(seconds);
            }
        }

        let tag_duration = self.field("TAG:DURATION");
        if let Some(value) = tag_duration {
            if let Some(seconds) = parse_tag_duration(value.trim()) {
                return Ok(seconds);
            }
        }

        if duration == Some("N/A") && tag_duration == Some("N/A") {
            return Ok(0.0);
        }

        match (duration, tag_duration) {
            (Some(value), _) => Err(FieldError::non_numeric("duration", value)),
            (None, Some(value)) => Err(FieldError::non_numeric("TAG:DURATION", value)),
            (None, None) => Err(FieldError::missing("duration")),
        }
    }

    /// Resolved stream language from `TAG:language`.
    ///
    /// Absent and "und"/"Und" tags resolve to the undefined language.
    pub fn language(&self) -> LanguageTag {
        language::resolve(self.field("TAG:language"))
    }

    /// Short codec name, e.g. "h264".
    pub fn codec(&self) -> Option<&str> {
        self.field("codec_name")
    }

    /// Long codec description, e.g. "H.264 / AVC / MPEG-4 AVC".
    pub fn codec_description(&self) -> Option<&str> {
        self.field("codec_long_name")
    }

    /// Short representative codec tag, e.g. "avc1".
    pub fn codec_tag(&self) -> Option<&str> {
        self.field("codec_tag_string")
    }

    /// Bit rate in bits per second.
    pub fn bit_rate(&self) -> Result<u64, FieldError> {
        self.parse_numeric("bit_rate")
    }

    /// Number of audio channels.
    pub fn audio_channels(&self) -> Result<u32, FieldError> {
        self.parse_numeric("channels")
    }

    /// Index of this stream within the container.
    pub fn stream_index(&self) -> Result<usize, FieldError> {
        self.parse_numeric("index")
    }

    /// Audio channel layout, e.g. "5.1(side)".
    pub fn channel_layout(&self) -> Option<&str> {
        self.field("channel_layout")
    }

    /// All 17 disposition flags as flag name -> integer value.
    ///
    /// A well-formed stream block carries every flag; any missing or
    /// non-numeric flag is a fault.
    pub fn dispositions(&self) -> Result<BTreeMap<&'static str, i64>, FieldError> {
        let mut flags = BTreeMap::new();
        for flag in DISPOSITION_FLAGS {
            let key = format!("DISPOSITION:{flag}");
            let raw = self
                .field(&key)
                .ok_or_else(|| FieldError::missing(key.clone()))?;
            let value = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| FieldError::non_numeric(key.clone(), raw))?;
            flags.insert(flag, value);
        }
        Ok(flags)
    }

    /// Stream size in bytes from `TAG:NUMBER_OF_BYTES`.
    ///
    /// Unlike the other integer queries this is cosmetic: absence or a
    /// non-numeric value reports 0.
    pub fn stream_bytes(&self) -> u64 {
        self.field("TAG:NUMBER_OF_BYTES")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Stream title from `TAG:title`.
    pub fn stream_title(&self) -> &str {
        self.field("TAG:title").unwrap_or("No title has been set")
    }

    fn parse_numeric<T: std::str::FromStr>(&self, key: &str) -> Result<T, FieldError> {
        let raw = self.field(key).ok_or_else(|| FieldError::missing(key))?;
        raw.trim()
            .parse()
            .map_err(|_| FieldError::non_numeric(key, raw))
    }
}

/// Reduce an `avg_frame_rate` rational ("N/D") to a rounded integer.
///
/// Every `/`-separated component must parse as an integer, otherwise the
/// frame rate is unknown. A zero divisor yields 0 rather than an error.
fn compute_framerate(raw: Option<&str>) -> Option<i64> {
    let raw = raw?;
    let mut parts = raw.split('/');

    let first: i64 = parts.next()?.trim().parse().ok()?;
    let mut rate = first as f64;

    for part in parts {
        let divisor: i64 = part.trim().parse().ok()?;
        if divisor == 0 {
            return Some(0);
        }
        rate /= divisor as f64;
    }

    Some(rate.round() as i64)
}

/// Parse a Matroska tag duration of the form `HH:MM:SS,ffffff`.
fn parse_tag_duration(raw: &str) -> Option<f64> {
    let (clock, frac) = raw.split_once(',')?;

    let mut parts = clock.split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    let seconds: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() || hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }

    // Fractional part is 1-6 digits of microseconds, right-padded.
    if frac.is_empty() || frac.len() > 6 || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let micros: u32 = frac.parse().ok()?;
    let micros = micros * 10u32.pow(6 - frac.len() as u32);

    let whole = f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + f64::from(seconds);
    Some(whole + f64::from(micros) / 1_000_000.0)
}
