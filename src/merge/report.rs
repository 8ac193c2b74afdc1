//! Merge report types describing what a clean or merge call did.
//!
//! Dropping malformed boxes is not an error, so the report is the only place
//! a caller can see which boxes were discarded and how much merging took
//! place per category.

use serde::Serialize;
use std::fmt;

use crate::frame::{BBox, Category, Threshold};

/// A report generated by [`clean_frame`](super::clean_frame) and
/// [`merge_frames`](super::merge_frames).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergeReport {
    /// Threshold the boxes were merged at.
    pub threshold: Threshold,
    /// Per-category counts, in output order.
    pub categories: Vec<CategoryCounts>,
    /// Boxes discarded during partitioning.
    pub dropped: Vec<DroppedBox>,
}

impl MergeReport {
    /// Create an empty report for a merge at the given threshold.
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            categories: Vec::new(),
            dropped: Vec::new(),
        }
    }

    /// Number of valid boxes that entered reduction.
    pub fn input_count(&self) -> usize {
        self.categories.iter().map(|c| c.input).sum()
    }

    /// Number of boxes in the result.
    pub fn output_count(&self) -> usize {
        self.categories.iter().map(|c| c.output).sum()
    }

    /// Number of pairwise merges performed.
    pub fn merge_count(&self) -> usize {
        self.categories.iter().map(|c| c.merges).sum()
    }

    /// Number of boxes discarded as malformed.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Returns true if the output holds exactly the input boxes.
    pub fn is_unchanged(&self) -> bool {
        self.dropped.is_empty() && self.merge_count() == 0
    }

    /// Counts for one category.
    pub fn category(&self, category: Category) -> Option<&CategoryCounts> {
        self.categories.iter().find(|c| c.category == category)
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Merged at threshold {}: {} box(es) in, {} out ({} merge(s)), {} dropped",
            self.threshold,
            self.input_count(),
            self.output_count(),
            self.merge_count(),
            self.dropped_count()
        )?;

        for counts in &self.categories {
            writeln!(f, "  {}", counts)?;
        }

        if !self.dropped.is_empty() {
            writeln!(f)?;
            writeln!(f, "Dropped:")?;
            for dropped in &self.dropped {
                writeln!(f, "  {}", dropped)?;
            }
        }

        Ok(())
    }
}

/// Box counts for one category bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub category: Category,
    /// Valid boxes of this category before reduction.
    pub input: usize,
    /// Boxes left after reduction.
    pub output: usize,
    /// Merges performed; always `input - output`.
    pub merges: usize,
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<5} {} -> {} ({} merge(s))",
            self.category.name(),
            self.input,
            self.output,
            self.merges
        )
    }
}

/// Which input list a box came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// The frame being cleaned, or the first frame of a merge.
    First,
    /// The second frame of a merge.
    Second,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::First => write!(f, "first"),
            Source::Second => write!(f, "second"),
        }
    }
}

/// Why a box was discarded during partitioning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// The category tag is not one of the known categories.
    UnknownCategory,
    /// The box has zero or negative width or height.
    Degenerate,
}

/// A box discarded during partitioning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DroppedBox {
    pub source: Source,
    /// Position of the box in its source list.
    pub index: usize,
    pub bbox: BBox,
    pub reason: DropReason,
}

impl fmt::Display for DroppedBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {}[{}]: {}",
            self.reason, self.source, self.index, self.bbox
        )
    }
}
