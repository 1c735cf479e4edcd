#![no_main]

use funcsel_syntax::context::classify;
use libfuzzer_sys::fuzz_target;

const MAX_SOURCE_BYTES: usize = 4096;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_SOURCE_BYTES)];
    let source = String::from_utf8_lossy(capped).into_owned();

    let map = classify(&source);

    // Spans must partition the source: contiguous, non-empty, covering
    // every byte, with no two adjacent spans sharing a label.
    let mut expected = 0u32;
    for span in map.spans() {
        assert_eq!(u32::from(span.range.start()), expected);
        assert!(!span.range.is_empty());
        expected = span.range.end().into();
    }
    assert_eq!(expected as usize, source.len());
    for pair in map.spans().windows(2) {
        assert_ne!(pair[0].label, pair[1].label);
    }
});
