//! Pixel buffer carried alongside detection boxes.
//!
//! The merger never looks at pixel data; an [`Image`] is copied from the
//! input frame into the result unchanged.

use serde::{Deserialize, Serialize};

use crate::error::BoxMergeError;

/// Channel layout of an [`Image`] buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// One byte per pixel.
    #[default]
    Gray,
    /// Three bytes per pixel, red first.
    Rgb,
    /// Three bytes per pixel, blue first.
    Bgr,
}

impl PixelFormat {
    /// Number of bytes each pixel occupies.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::Rgb | PixelFormat::Bgr => 3,
        }
    }
}

/// A raw, row-major pixel buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Width in pixels.
    pub width: u32,

    /// Height in pixels.
    pub height: u32,

    /// Channel layout of `data`.
    #[serde(default)]
    pub format: PixelFormat,

    /// Pixel bytes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<u8>,
}

impl Image {
    /// Creates an image from its dimensions, format and pixel bytes.
    pub fn new(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format,
            data,
        }
    }

    /// Number of pixels described by the dimensions, or `None` if it does
    /// not fit in a `usize`.
    #[inline]
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Number of bytes the dimensions require in the given format.
    fn buffer_len(&self, format: PixelFormat) -> Result<usize, BoxMergeError> {
        self.pixel_count()
            .and_then(|pixels| pixels.checked_mul(format.bytes_per_pixel()))
            .ok_or(BoxMergeError::ImageTooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Reorders an RGB buffer into BGR in place.
    ///
    /// # Errors
    /// Fails if the image is not RGB, if its dimensions overflow the buffer
    /// size, or if the buffer is empty or shorter than the dimensions
    /// require. The buffer is untouched on error. Bytes past the end of the
    /// described pixels are left as they are.
    pub fn rgb_to_bgr(&mut self) -> Result<(), BoxMergeError> {
        if self.format != PixelFormat::Rgb {
            return Err(BoxMergeError::UnsupportedPixelFormat {
                expected: PixelFormat::Rgb,
                found: self.format,
            });
        }

        let expected = self.buffer_len(PixelFormat::Rgb)?;
        if self.data.is_empty() || self.data.len() < expected {
            return Err(BoxMergeError::PixelBufferSize {
                expected,
                actual: self.data.len(),
            });
        }

        for pixel in self.data[..expected].chunks_exact_mut(3) {
            pixel.swap(0, 2);
        }
        self.format = PixelFormat::Bgr;
        Ok(())
    }
}
