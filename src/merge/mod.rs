//! Merging of overlapping detection boxes.
//!
//! Boxes are first partitioned into one bucket per [`Category`], dropping
//! malformed entries. Each bucket is then reduced: any two boxes whose IoU
//! reaches the threshold are replaced by their enclosing box, until no such
//! pair is left. Buckets never interact, so boxes of different categories are
//! never merged.

mod report;

pub use report::{CategoryCounts, DropReason, DroppedBox, MergeReport, Source};

use log::{debug, trace};

use crate::error::BoxMergeError;
use crate::frame::{BBox, Category, Frame, Threshold};

/// The working list of boxes for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub category: Category,
    pub boxes: Vec<BBox>,
}

impl Bucket {
    /// Creates an empty bucket.
    pub fn new(category: Category) -> Self {
        Self {
            category,
            boxes: Vec::new(),
        }
    }
}

/// Valid boxes split by category, plus the boxes that were dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    /// One bucket per category, in [`Category::ALL`] order.
    pub buckets: [Bucket; 3],
    pub dropped: Vec<DroppedBox>,
}

impl Partition {
    /// Returns the bucket holding boxes of `category`.
    pub fn bucket(&self, category: Category) -> &Bucket {
        &self.buckets[category.index()]
    }
}

/// Splits one or two box lists into per-category buckets.
///
/// Within a bucket boxes keep their input order, with every box of `first`
/// ahead of the boxes of `second`. Boxes with an unknown category or a
/// degenerate rectangle are left out and listed in [`Partition::dropped`].
pub fn partition(first: &[BBox], second: Option<&[BBox]>) -> Partition {
    let mut buckets = Category::ALL.map(Bucket::new);
    let mut dropped = Vec::new();

    let sources = std::iter::once((Source::First, first))
        .chain(second.map(|boxes| (Source::Second, boxes)));

    for (source, boxes) in sources {
        for (index, bbox) in boxes.iter().enumerate() {
            match classify(bbox) {
                Ok(category) => buckets[category.index()].boxes.push(*bbox),
                Err(reason) => {
                    trace!("dropping {} box {}[{}]: {:?}", bbox, source, index, reason);
                    dropped.push(DroppedBox {
                        source,
                        index,
                        bbox: *bbox,
                        reason,
                    });
                }
            }
        }
    }

    Partition { buckets, dropped }
}

/// Resolves the bucket a box belongs in.
fn classify(bbox: &BBox) -> Result<Category, DropReason> {
    let category = bbox.category().ok_or(DropReason::UnknownCategory)?;
    if !bbox.is_valid() {
        return Err(DropReason::Degenerate);
    }
    Ok(category)
}

/// Merges overlapping boxes of one category in place.
///
/// Each pass walks the list front to back. The box at the anchor position
/// absorbs every later box it overlaps with, growing as it goes, so later
/// boxes are compared against the grown box. Passes repeat until one makes no
/// merge, leaving no pair whose IoU reaches the threshold.
///
/// Which boxes end up together can depend on input order when overlaps are
/// not transitive.
///
/// Returns the number of merges performed.
pub fn reduce(boxes: &mut Vec<BBox>, threshold: Threshold) -> usize {
    let mut merges = 0;
    loop {
        let merged = reduce_pass(boxes, threshold);
        if merged == 0 {
            return merges;
        }
        merges += merged;
    }
}

/// A single forward pass of [`reduce`].
fn reduce_pass(boxes: &mut Vec<BBox>, threshold: Threshold) -> usize {
    let mut merges = 0;
    let mut anchor = 0;

    while anchor + 1 < boxes.len() {
        let mut next = anchor + 1;
        while next < boxes.len() {
            if boxes[anchor].overlaps(&boxes[next], threshold) {
                let absorbed = boxes.remove(next);
                boxes[anchor] = boxes[anchor].union(&absorbed);
                merges += 1;
                // `next` now indexes the following box; compare it against
                // the grown anchor.
            } else {
                next += 1;
            }
        }
        anchor += 1;
    }

    merges
}

/// Reduces every bucket and flattens them in category order.
fn reduce_partition(partition: Partition, threshold: Threshold) -> (Vec<BBox>, MergeReport) {
    let mut report = MergeReport::new(threshold);
    let mut merged = Vec::new();

    for mut bucket in partition.buckets {
        let input = bucket.boxes.len();
        let merges = if bucket.boxes.is_empty() {
            0
        } else {
            reduce(&mut bucket.boxes, threshold)
        };

        report.categories.push(CategoryCounts {
            category: bucket.category,
            input,
            output: bucket.boxes.len(),
            merges,
        });
        merged.extend(bucket.boxes);
    }
    report.dropped = partition.dropped;

    debug!(
        "reduced {} box(es) to {} at threshold {} ({} dropped)",
        report.input_count(),
        report.output_count(),
        threshold,
        report.dropped_count()
    );

    (merged, report)
}

/// Merges overlapping same-category boxes of a frame in place.
///
/// The frame's boxes are replaced by the merged set, face boxes first, then
/// gun, then mask. The image is left untouched.
///
/// # Errors
/// Returns [`BoxMergeError::InvalidThreshold`] if `threshold` is not in
/// (0, 1]; the frame is not modified in that case.
pub fn clean_frame(frame: &mut Frame, threshold: f64) -> Result<MergeReport, BoxMergeError> {
    let threshold = Threshold::try_from(threshold)?;

    let (boxes, report) = reduce_partition(partition(&frame.boxes, None), threshold);
    frame.boxes = boxes;

    Ok(report)
}

/// Fuses the boxes of two frames showing the same image into one frame.
///
/// The result carries `first`'s image. Callers must make sure both frames
/// refer to the same image; pixel data is not compared.
///
/// # Errors
/// Returns [`BoxMergeError::InvalidThreshold`] if `threshold` is not in
/// (0, 1].
pub fn merge_frames(
    first: &Frame,
    second: &Frame,
    threshold: f64,
) -> Result<(Frame, MergeReport), BoxMergeError> {
    let threshold = Threshold::try_from(threshold)?;

    let (boxes, report) = reduce_partition(
        partition(&first.boxes, Some(second.boxes.as_slice())),
        threshold,
    );

    Ok((Frame::new(first.image.clone(), boxes), report))
}
