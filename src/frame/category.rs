//! The closed set of object categories a detection box can carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A detection category.
///
/// The discriminant is the raw tag used in detector output and frame files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Face = 0,
    Gun = 1,
    Mask = 2,
}

impl Category {
    /// Every category, in the order merged boxes are emitted.
    pub const ALL: [Category; 3] = [Category::Face, Category::Gun, Category::Mask];

    /// Resolves a raw tag, returning `None` for tags outside the known set.
    #[inline]
    pub fn from_tag(tag: i32) -> Option<Self> {
        match tag {
            0 => Some(Category::Face),
            1 => Some(Category::Gun),
            2 => Some(Category::Mask),
            _ => None,
        }
    }

    /// Returns the raw tag for this category.
    #[inline]
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Position of this category in [`Category::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Category::Face => 0,
            Category::Gun => 1,
            Category::Mask => 2,
        }
    }

    /// Lowercase name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Face => "face",
            Category::Gun => "gun",
            Category::Mask => "mask",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
