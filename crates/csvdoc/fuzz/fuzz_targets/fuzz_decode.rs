//! Fuzz target for the decoder.
//!
//! This fuzzer tests that decoding:
//! 1. Never panics on malformed input
//! 2. Produces documents that pass validation
//! 3. Re-encodes without error

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(doc) = csvdoc::from_bytes(data) {
        assert!(doc.validate());
        let _ = csvdoc::to_string(&doc).expect("decoded documents always encode");
    }
});
