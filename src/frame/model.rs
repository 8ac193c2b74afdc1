//! The frame model: one image and the detection boxes found in it.

use serde::{Deserialize, Serialize};

use super::bbox::BBox;
use super::image::Image;

/// A single video or still frame with its detection boxes.
///
/// Boxes are kept exactly as the detector produced them, including boxes
/// with unknown categories or degenerate geometry; merging drops those.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// The pixel buffer the boxes refer to.
    #[serde(default)]
    pub image: Image,

    /// Detection boxes, in detector order.
    #[serde(default)]
    pub boxes: Vec<BBox>,
}

impl Frame {
    /// Creates a frame from an image and its boxes.
    pub fn new(image: Image, boxes: Vec<BBox>) -> Self {
        Self { image, boxes }
    }

    /// Replaces the frame's boxes.
    pub fn with_boxes(mut self, boxes: impl IntoIterator<Item = BBox>) -> Self {
        self.boxes = boxes.into_iter().collect();
        self
    }
}
