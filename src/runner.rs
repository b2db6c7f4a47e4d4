//! ffprobe invocation.
//!
//! Thin process wrapper around the pure parsing core: it locates and runs
//! the `ffprobe` binary, captures both output channels, and hands the raw
//! lines to the parsers. All real logic lives in [`crate::parse`] and
//! [`crate::models`]; this module only owns tool presence, invocation and
//! the corresponding error conditions.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::ProbeError;
use crate::models::ProbeResult;
use crate::parse::{parse_container_metadata, parse_stream_blocks};

const FFPROBE: &str = "ffprobe";

/// Check whether ffprobe is installed and runnable.
///
/// Runs `ffprobe -h` with all output discarded, mirroring the cheapest
/// invocation that proves the binary exists on PATH.
pub fn ffprobe_available() -> bool {
    Command::new(FFPROBE)
        .arg("-h")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Probe a media file and parse the output into a [`ProbeResult`].
///
/// Runs `ffprobe -show_streams <path>`, feeds stdout to the stream block
/// parser and stderr to the container metadata parser.
pub fn probe_file(path: &Path) -> Result<ProbeResult, ProbeError> {
    if !ffprobe_available() {
        return Err(ProbeError::ToolNotFound);
    }
    probe_file_with(FFPROBE, path)
}

/// Probe a media file using a specific ffprobe binary.
pub fn probe_file_with(ffprobe_bin: &str, path: &Path) -> Result<ProbeResult, ProbeError> {
    if !path.is_file() {
        return Err(ProbeError::FileNotFound(path.to_path_buf()));
    }

    tracing::debug!("Running: {} -show_streams {}", ffprobe_bin, path.display());

    let output = Command::new(ffprobe_bin)
        .arg("-show_streams")
        .arg(path)
        .output()
        .map_err(|e| ProbeError::ExecutionFailed {
            tool: ffprobe_bin.to_string(),
            message: e.to_string(),
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            tool: ffprobe_bin.to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            message: stderr.to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let streams = parse_stream_blocks(stdout.lines());
    let metadata = parse_container_metadata(stderr.lines());

    tracing::info!(
        "Probed {}: {} streams, {} metadata entries",
        path.display(),
        streams.len(),
        metadata.len()
    );

    Ok(ProbeResult::new(streams, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_rejected_before_spawning() {
        let result = probe_file_with(FFPROBE, Path::new("/nonexistent/file.mkv"));
        assert!(matches!(result, Err(ProbeError::FileNotFound(_))));
    }

    #[test]
    fn unavailable_tool_fails_execution() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not really a video").unwrap();

        let result = probe_file_with("ffprobe-binary-that-does-not-exist", file.path());
        assert!(matches!(result, Err(ProbeError::ExecutionFailed { .. })));
    }
}
