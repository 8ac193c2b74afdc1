use boxmerge::frame::{BBox, Category, Frame, Threshold};
use boxmerge::merge::{clean_frame, merge_frames, partition, reduce};
use boxmerge::BoxMergeError;
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn invalid_boxes_never_survive(
        valid in prop::collection::vec(proptest_helpers::arb_valid_bbox(50), 0..10),
        invalid in prop::collection::vec(proptest_helpers::arb_invalid_bbox(50), 1..10),
        threshold in proptest_helpers::arb_threshold(),
    ) {
        let mut frame = Frame::default().with_boxes(valid.iter().chain(invalid.iter()).copied());
        let report = clean_frame(&mut frame, threshold).expect("valid threshold");

        prop_assert_eq!(report.dropped_count(), invalid.len());
        prop_assert!(frame.boxes.iter().all(|b| b.is_valid() && b.category().is_some()));
    }

    #[test]
    fn partition_keeps_every_valid_box(boxes in proptest_helpers::arb_boxes(50, 30)) {
        let partition = partition(&boxes, None);

        for bucket in &partition.buckets {
            let expected: Vec<BBox> = boxes
                .iter()
                .filter(|b| b.is_valid() && b.category() == Some(bucket.category))
                .copied()
                .collect();
            prop_assert_eq!(&bucket.boxes, &expected);
        }

        let kept: usize = partition.buckets.iter().map(|b| b.boxes.len()).sum();
        prop_assert_eq!(kept + partition.dropped.len(), boxes.len());
    }

    #[test]
    fn bad_threshold_is_rejected_without_mutation(
        frame in proptest_helpers::arb_frame(50, 20),
        threshold in proptest_helpers::arb_bad_threshold(),
    ) {
        let mut cleaned = frame.clone();
        let clean_failed = matches!(
            clean_frame(&mut cleaned, threshold),
            Err(BoxMergeError::InvalidThreshold(_))
        );
        prop_assert!(clean_failed);
        prop_assert_eq!(&cleaned, &frame);

        let merge_failed = matches!(
            merge_frames(&frame, &frame, threshold),
            Err(BoxMergeError::InvalidThreshold(_))
        );
        prop_assert!(merge_failed);
    }

    #[test]
    fn reduced_buckets_have_no_overlapping_pair(
        boxes in prop::collection::vec(proptest_helpers::arb_valid_bbox_of(Category::Face, 40), 0..25),
        threshold in proptest_helpers::arb_threshold(),
    ) {
        let threshold = Threshold::new(threshold).expect("valid threshold");
        let mut reduced = boxes.clone();
        let merges = reduce(&mut reduced, threshold);

        prop_assert_eq!(reduced.len() + merges, boxes.len());
        for (i, a) in reduced.iter().enumerate() {
            prop_assert!(a.is_valid());
            for b in &reduced[i + 1..] {
                prop_assert!(!a.overlaps(b, threshold), "{} and {} still overlap", a, b);
            }
        }
    }

    #[test]
    fn reduced_boxes_cover_their_inputs(
        boxes in prop::collection::vec(proptest_helpers::arb_valid_bbox_of(Category::Gun, 40), 1..25),
        threshold in proptest_helpers::arb_threshold(),
    ) {
        let mut reduced = boxes.clone();
        reduce(&mut reduced, Threshold::new(threshold).expect("valid threshold"));

        for input in &boxes {
            let covered = reduced.iter().any(|r| {
                r.x1 <= input.x1 && r.y1 <= input.y1 && r.x2 >= input.x2 && r.y2 >= input.y2
            });
            prop_assert!(covered, "{} is not covered by any output box", input);
        }
    }

    #[test]
    fn clean_frame_is_idempotent(
        frame in proptest_helpers::arb_frame(60, 30),
        threshold in proptest_helpers::arb_threshold(),
    ) {
        let mut once = frame;
        clean_frame(&mut once, threshold).expect("first clean");

        let mut twice = once.clone();
        let report = clean_frame(&mut twice, threshold).expect("second clean");

        prop_assert_eq!(&once, &twice);
        prop_assert!(report.is_unchanged());
    }

    #[test]
    fn categories_are_isolated(
        frame in proptest_helpers::arb_frame(30, 30),
        threshold in proptest_helpers::arb_threshold(),
    ) {
        let mut cleaned = frame.clone();
        let report = clean_frame(&mut cleaned, threshold).expect("clean frame");

        for category in Category::ALL {
            let mut alone = Frame::default().with_boxes(
                frame.boxes.iter().filter(|b| b.category() == Some(category)).copied(),
            );
            clean_frame(&mut alone, threshold).expect("clean single category");

            let from_mixed: Vec<BBox> = cleaned
                .boxes
                .iter()
                .filter(|b| b.category() == Some(category))
                .copied()
                .collect();
            prop_assert_eq!(&from_mixed, &alone.boxes);
            prop_assert_eq!(
                report.category(category).map(|c| c.output),
                Some(alone.boxes.len())
            );
        }
    }

    #[test]
    fn merge_with_empty_frame_is_clean(
        frame in proptest_helpers::arb_frame(50, 20),
        threshold in proptest_helpers::arb_threshold(),
    ) {
        let (merged, _) = merge_frames(&frame, &Frame::default(), threshold).expect("merge frames");

        let mut cleaned = frame;
        clean_frame(&mut cleaned, threshold).expect("clean frame");

        prop_assert_eq!(merged, cleaned);
    }

    #[test]
    fn merging_a_frame_with_itself_matches_clean(
        frame in proptest_helpers::arb_frame(50, 15),
    ) {
        // Exact duplicates always merge, so doubling the input changes nothing.
        let (merged, _) = merge_frames(&frame, &frame, 1.0).expect("merge frames");

        let mut cleaned = frame;
        clean_frame(&mut cleaned, 1.0).expect("clean frame");

        prop_assert_eq!(merged, cleaned);
    }

    #[test]
    fn identical_boxes_always_merge(
        bbox in proptest_helpers::arb_valid_bbox(100),
        threshold in proptest_helpers::arb_threshold(),
    ) {
        let threshold = Threshold::new(threshold).expect("valid threshold");
        prop_assert!(bbox.overlaps(&bbox, threshold));
        prop_assert_eq!(bbox.union(&bbox), bbox);
    }

    #[test]
    fn disjoint_boxes_never_merge(
        a in proptest_helpers::arb_valid_bbox_of(Category::Mask, 40),
        gap in 0..20i32,
        threshold in proptest_helpers::arb_threshold(),
    ) {
        let width = a.x2 - a.x1;
        let b = BBox::new(a.x2 + gap, a.y1, a.x2 + gap + width, a.y2, Category::Mask);
        prop_assert_eq!(a.iou(&b), 0.0);
        prop_assert!(!a.overlaps(&b, Threshold::new(threshold).expect("valid threshold")));
    }

    #[test]
    fn union_of_valid_boxes_is_valid_and_encloses(
        a in proptest_helpers::arb_valid_bbox(100),
        b in proptest_helpers::arb_valid_bbox(100),
    ) {
        let u = a.union(&b);
        prop_assert!(u.is_valid());
        prop_assert_eq!(u.tag, a.tag);
        prop_assert!(u.area() >= a.area().max(b.area()));
    }
}
