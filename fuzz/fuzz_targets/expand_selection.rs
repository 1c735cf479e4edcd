#![no_main]

use funcsel_ide::{expand_once, Region};
use libfuzzer_sys::fuzz_target;

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fn source_offset(seed: u8, source: &str) -> u32 {
    if source.is_empty() {
        return 0;
    }
    (usize::from(seed) % source.len()) as u32
}

fuzz_target!(|data: &[u8]| {
    let Some((&seed, rest)) = data.split_first() else {
        return;
    };
    let source = decode_source(rest);
    let region = Region::cursor(source_offset(seed, &source).into());

    // Expansion must never panic, must keep the region count, and must only
    // ever grow a region.
    let expanded = expand_once(&source, &[region]);
    assert_eq!(expanded.len(), 1);
    assert!(expanded[0].contains(&region));

    let again = expand_once(&source, &expanded);
    assert_eq!(again.len(), 1);
    assert!(again[0].contains(&expanded[0]));
});
