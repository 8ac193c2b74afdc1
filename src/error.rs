use std::path::PathBuf;
use thiserror::Error;

use crate::frame::PixelFormat;

/// The main error type for boxmerge operations.
#[derive(Debug, Error)]
pub enum BoxMergeError {
    #[error("Invalid threshold {0}: must lie in (0, 1]")]
    InvalidThreshold(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse frame JSON from {path}: {source}")]
    FrameJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write frame JSON to {path}: {source}")]
    FrameJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render merge report as JSON: {0}")]
    ReportJson(#[source] serde_json::Error),

    #[error("Unsupported report format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported pixel format: expected {expected:?}, found {found:?}")]
    UnsupportedPixelFormat {
        expected: PixelFormat,
        found: PixelFormat,
    },

    #[error("Pixel buffer holds {actual} byte(s), expected at least {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("Image dimensions {width}x{height} exceed the addressable buffer size")]
    ImageTooLarge { width: u32, height: u32 },
}
