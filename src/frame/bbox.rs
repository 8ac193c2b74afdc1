//! Integer bounding boxes in XYXY format and the geometry the merger needs.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::threshold::Threshold;

/// An axis-aligned detection box in XYXY pixel coordinates
/// (x1, y1) to (x2, y2), tagged with a raw category value.
///
/// Note: This type does NOT enforce that x1 < x2 or that the tag names a
/// known [`Category`]. Detector output is carried as-is and malformed boxes
/// are filtered out when a frame is partitioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    /// Raw category tag as produced by the detector.
    #[serde(rename = "category")]
    pub tag: i32,
}

impl BBox {
    /// Creates a box of a known category.
    #[inline]
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32, category: Category) -> Self {
        Self::with_tag(x1, y1, x2, y2, category.tag())
    }

    /// Creates a box carrying an arbitrary, possibly unknown, category tag.
    #[inline]
    pub fn with_tag(x1: i32, y1: i32, x2: i32, y2: i32, tag: i32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            tag,
        }
    }

    /// Returns the category named by the tag, if any.
    #[inline]
    pub fn category(&self) -> Option<Category> {
        Category::from_tag(self.tag)
    }

    /// Returns the width of the box. Non-positive for malformed boxes.
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.x2) - i64::from(self.x1)
    }

    /// Returns the height of the box. Non-positive for malformed boxes.
    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.y2) - i64::from(self.y1)
    }

    /// Returns the area of the box.
    ///
    /// Computed in floating point; the product of two full-range `i32`
    /// extents does not fit in an `i64`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() as f64 * self.height() as f64
    }

    /// Returns true if the box is a proper rectangle (x1 < x2 and y1 < y2).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }

    /// Returns the overlapping rectangle of two boxes, or `None` when they
    /// do not overlap or only touch along an edge.
    ///
    /// The result carries this box's tag.
    pub fn intersection(&self, other: &BBox) -> Option<BBox> {
        let x1 = self.x1.max(other.x1);
        let y1 = self.y1.max(other.y1);
        let x2 = self.x2.min(other.x2);
        let y2 = self.y2.min(other.y2);

        if x1 >= x2 || y1 >= y2 {
            return None;
        }

        Some(BBox::with_tag(x1, y1, x2, y2, self.tag))
    }

    /// Intersection over union with another box, in `[0, 1]`.
    ///
    /// Returns 0.0 when the boxes do not overlap.
    pub fn iou(&self, other: &BBox) -> f64 {
        let Some(inter) = self.intersection(other) else {
            return 0.0;
        };

        let intersection = inter.area();
        let union = self.area() + other.area() - intersection;

        intersection / union
    }

    /// Returns true if the IoU of the two boxes reaches the threshold.
    ///
    /// Disjoint boxes never overlap since a threshold is always positive.
    #[inline]
    pub fn overlaps(&self, other: &BBox, threshold: Threshold) -> bool {
        self.iou(other) >= threshold.get()
    }

    /// Smallest box enclosing both boxes. The tag is taken from `self`.
    ///
    /// No validity check is made; the union of two valid boxes is valid.
    pub fn union(&self, other: &BBox) -> BBox {
        BBox::with_tag(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
            self.tag,
        )
    }
}

impl std::fmt::Display for BBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.category() {
            Some(category) => write!(
                f,
                "({}, {}, {}, {}) {}",
                self.x1, self.y1, self.x2, self.y2, category
            ),
            None => write!(
                f,
                "({}, {}, {}, {}) tag {}",
                self.x1, self.y1, self.x2, self.y2, self.tag
            ),
        }
    }
}
