#![no_main]

use libfuzzer_sys::fuzz_target;
use region_draw::boundary::{BoundaryKeys, load_regions};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Fehler sind erlaubt, Panics nicht
        if let Ok(regions) = load_regions(text, &BoundaryKeys::default()) {
            assert!(regions.is_ordered());
        }
    }
});
