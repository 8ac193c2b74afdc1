//! Validated IoU threshold.

use serde::Serialize;
use std::fmt;

use crate::error::BoxMergeError;

/// An IoU threshold in the interval (0, 1].
///
/// Boxes whose IoU is greater than or equal to the threshold are merged.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    /// Validates a raw threshold value.
    ///
    /// # Errors
    /// Returns [`BoxMergeError::InvalidThreshold`] for values that are not
    /// strictly positive and at most one, including NaN.
    pub fn new(value: f64) -> Result<Self, BoxMergeError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(BoxMergeError::InvalidThreshold(value))
        }
    }

    /// Returns the underlying value.
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = BoxMergeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
