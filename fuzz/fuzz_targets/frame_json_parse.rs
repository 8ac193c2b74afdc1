//! Fuzz target for frame JSON parsing and merging.
//!
//! This fuzzer feeds arbitrary byte sequences to the frame JSON parser and
//! runs every parsed frame through `clean_frame`, checking for panics,
//! crashes, or hangs.

#![no_main]

use boxmerge::frame::io_json::from_json_slice;
use boxmerge::merge::clean_frame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(mut frame) = from_json_slice(data) {
        let _ = clean_frame(&mut frame, 0.5);
    }
});
