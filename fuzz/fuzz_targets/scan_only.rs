#![no_main]

use libfuzzer_sys::fuzz_target;

use fastcbor::{well_formed_item, DecodeLimits, SafeReader};

fuzz_target!(|data: &[u8]| {
    let limits = DecodeLimits::for_bytes(data.len());
    if let Ok(end) = well_formed_item(data, &limits) {
        assert!(end > 0 && end <= data.len());
        // Whatever the scanner accepts, the safe skip walks to the same
        // boundary.
        let mut r = SafeReader::with_limits(data, limits);
        r.skip_item().expect("scanner-accepted item skips");
        assert_eq!(r.position(), end);
    }
});
