#![allow(dead_code)]

use boxmerge::frame::{BBox, Category, Frame, Image, PixelFormat};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// A valid box of the given category inside a `span`×`span` canvas.
pub fn arb_valid_bbox_of(category: Category, span: i32) -> impl Strategy<Value = BBox> {
    (0..span, 0..span, 1..=span / 2, 1..=span / 2)
        .prop_map(move |(x, y, w, h)| BBox::new(x, y, x + w, y + h, category))
}

/// A valid box of any known category.
pub fn arb_valid_bbox(span: i32) -> impl Strategy<Value = BBox> {
    arb_category().prop_flat_map(move |category| arb_valid_bbox_of(category, span))
}

/// A box that must be dropped: unknown tag or degenerate rectangle.
pub fn arb_invalid_bbox(span: i32) -> impl Strategy<Value = BBox> {
    prop_oneof![
        // Unknown tag, any geometry
        (
            -span..span,
            -span..span,
            -span..span,
            -span..span,
            prop_oneof![i32::MIN..0, 3..i32::MAX],
        )
            .prop_map(|(x1, y1, x2, y2, tag)| BBox::with_tag(x1, y1, x2, y2, tag)),
        // Known tag, inverted or empty along x
        (0..span, 0..span, 0..span, 1..span, arb_category())
            .prop_map(|(x1, dx, y1, h, c)| BBox::new(x1, y1, x1 - dx, y1 + h, c)),
        // Known tag, inverted or empty along y
        (0..span, 1..span, 0..span, 0..span, arb_category())
            .prop_map(|(x1, w, y1, dy, c)| BBox::new(x1, y1, x1 + w, y1 - dy, c)),
    ]
}

/// A mix of valid and invalid boxes.
pub fn arb_boxes(span: i32, max_boxes: usize) -> impl Strategy<Value = Vec<BBox>> {
    prop::collection::vec(
        prop_oneof![4 => arb_valid_bbox(span), 1 => arb_invalid_bbox(span)],
        0..=max_boxes,
    )
}

pub fn arb_frame(span: i32, max_boxes: usize) -> impl Strategy<Value = Frame> {
    arb_boxes(span, max_boxes)
        .prop_map(|boxes| Frame::new(Image::new(2, 1, PixelFormat::Gray, vec![7, 9]), boxes))
}

/// A threshold in (0, 1].
pub fn arb_threshold() -> impl Strategy<Value = f64> {
    prop_oneof![
        (1u32..=100).prop_map(|n| n as f64 / 100.0),
        Just(1.0),
        Just(f64::MIN_POSITIVE),
    ]
}

/// A value outside (0, 1].
pub fn arb_bad_threshold() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(f64::NAN),
        -1000.0..0.0f64,
        1.0001..1000.0f64,
    ]
}
