//! Frame model for boxmerge.
//!
//! A [`Frame`] is one image plus the detection boxes a detector produced for
//! it. The types here follow two principles:
//!
//! 1. **Permissive Construction**: boxes may carry unknown category tags or
//!    inverted coordinates. Such boxes are representable so that input can
//!    be read as-is; the merger filters them out.
//!
//! 2. **Closed Categories**: the set of known categories is the
//!    [`Category`] enum, so adding a category is a compile-time checked
//!    change to every exhaustive match.
//!
//! # Example
//!
//! ```
//! use boxmerge::frame::{BBox, Category, Frame, Image, PixelFormat};
//!
//! let frame = Frame::new(
//!     Image::new(640, 480, PixelFormat::Rgb, Vec::new()),
//!     vec![
//!         BBox::new(10, 20, 100, 200, Category::Face),
//!         BBox::new(15, 25, 105, 205, Category::Face),
//!     ],
//! );
//! assert_eq!(frame.boxes.len(), 2);
//! ```

mod bbox;
mod category;
mod image;
pub mod io_json;
mod model;
mod threshold;

// Re-export core types for convenient access
pub use bbox::BBox;
pub use category::Category;
pub use image::{Image, PixelFormat};
pub use model::Frame;
pub use threshold::Threshold;
