#![no_main]

use libfuzzer_sys::fuzz_target;

use fastcbor::{put_value, read_value, DecodeLimits};

fuzz_target!(|data: &[u8]| {
    let limits = DecodeLimits::for_bytes(data.len());
    let Ok((value, _)) = read_value(data, &limits) else {
        return;
    };

    // Re-emission is definite-length and minimal-width; it must parse back
    // to the same tree.
    let mut buf = Vec::new();
    if put_value(&mut buf, &value).is_ok() {
        let relimits = DecodeLimits::for_bytes(buf.len());
        let (again, rest) = read_value(&buf, &relimits).expect("re-emitted value parses");
        assert!(rest.is_empty());
        // NaN floats are the one non-reflexive case.
        if !contains_nan(&value) {
            assert_eq!(again, value);
        }
    }
});

fn contains_nan(v: &fastcbor::Value) -> bool {
    match v {
        fastcbor::Value::Float(f) => f.is_nan(),
        fastcbor::Value::Array(items) => items.iter().any(contains_nan),
        fastcbor::Value::Map(entries) => entries
            .iter()
            .any(|(k, val)| contains_nan(k) || contains_nan(val)),
        fastcbor::Value::Tag(_, inner) => contains_nan(inner),
        _ => false,
    }
}
