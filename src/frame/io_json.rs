//! JSON serialization for frames.
//!
//! A frame file holds the image and the raw detector boxes:
//!
//! ```json
//! {
//!   "image": { "width": 3, "height": 2, "format": "rgb", "data": [1, 2, 3, 4, 5, 6] },
//!   "boxes": [ { "x1": 1, "y1": 1, "x2": 3, "y2": 3, "category": 0 } ]
//! }
//! ```
//!
//! Both keys are optional; a missing image reads as an empty grayscale image.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::model::Frame;
use crate::error::BoxMergeError;

/// Reads a frame from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_frame_json(path: &Path) -> Result<Frame, BoxMergeError> {
    let file = File::open(path).map_err(BoxMergeError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| BoxMergeError::FrameJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a frame to a JSON file, pretty-printed.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_frame_json(path: &Path, frame: &Frame) -> Result<(), BoxMergeError> {
    let file = File::create(path).map_err(BoxMergeError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, frame).map_err(|source| {
        BoxMergeError::FrameJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Reads a frame from a JSON string.
pub fn from_json_str(json: &str) -> Result<Frame, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a frame from JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<Frame, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes a frame to a pretty-printed JSON string.
pub fn to_json_string(frame: &Frame) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(frame)
}
