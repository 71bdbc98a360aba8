#![no_main]

use libfuzzer_sys::fuzz_target;
use region_draw::boundary::{parse_attribute_map, parse_population_list};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_attribute_map(text);
        let _ = parse_population_list(text);
    }
});
