use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use fastcbor::{
    interop, put_duration, put_null, put_option, put_tag, put_text, put_text_array, put_text_map,
    put_time_epoch, put_time_rfc3339, put_u64, read_text_array, read_text_map, ErrorCode,
    SafeReader,
};

#[test]
fn text_array_roundtrip() {
    let items = vec!["alpha".to_owned(), "beta".to_owned(), String::new()];
    let mut buf = Vec::new();
    put_text_array(&mut buf, &items).unwrap();
    assert_eq!(buf[0], 0x83);

    let mut r = SafeReader::new(&buf);
    assert_eq!(read_text_array(&mut r).unwrap(), items);
    assert!(r.is_empty());
}

#[test]
fn text_map_roundtrip() {
    let mut m = BTreeMap::new();
    m.insert("k".to_owned(), "v".to_owned());
    m.insert("longer".to_owned(), "entry".to_owned());

    let mut buf = Vec::new();
    put_text_map(
        &mut buf,
        m.len(),
        m.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    )
    .unwrap();
    assert_eq!(buf[0], 0xa2);

    let mut r = SafeReader::new(&buf);
    assert_eq!(read_text_map(&mut r).unwrap(), m);
}

#[test]
fn option_helper_writes_null_or_value() {
    let mut buf = Vec::new();
    put_option(&mut buf, None::<&u64>, |v, buf| {
        put_u64(buf, *v);
        Ok(())
    })
    .unwrap();
    assert_eq!(buf, [0xf6]);

    buf.clear();
    put_option(&mut buf, Some(&9u64), |v, buf| {
        put_u64(buf, *v);
        Ok(())
    })
    .unwrap();
    assert_eq!(buf, [0x09]);
}

#[test]
fn epoch_time_roundtrip() {
    let t = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let mut buf = Vec::new();
    put_time_epoch(&mut buf, &t);
    assert_eq!(buf[0], 0xc1);

    let mut r = SafeReader::new(&buf);
    assert_eq!(r.time().unwrap(), t);
}

#[test]
fn rfc3339_time_roundtrip() {
    let t = Utc.timestamp_opt(1_700_000_000, 500_000_000).unwrap();
    let mut buf = Vec::new();
    put_time_rfc3339(&mut buf, &t);
    assert_eq!(buf[0], 0xc0);

    let mut r = SafeReader::new(&buf);
    assert_eq!(r.time().unwrap(), t);
}

#[test]
fn float_epoch_accepted() {
    // Tag 1 with a float payload.
    let mut buf = Vec::new();
    put_tag(&mut buf, 1);
    fastcbor::put_f64(&mut buf, 1_700_000_000.5);

    let mut r = SafeReader::new(&buf);
    let t = r.time().unwrap();
    assert_eq!(t.timestamp(), 1_700_000_000);
    assert_eq!(t.timestamp_subsec_nanos(), 500_000_000);
}

#[test]
fn time_rejects_other_tags() {
    let mut buf = Vec::new();
    put_tag(&mut buf, 2);
    put_u64(&mut buf, 0);
    let mut r = SafeReader::new(&buf);
    assert_eq!(r.time().unwrap_err().code, ErrorCode::TypeMismatch);
}

#[test]
fn time_rejects_garbage_text() {
    let mut buf = Vec::new();
    put_tag(&mut buf, 0);
    put_text(&mut buf, "not a timestamp");
    let mut r = SafeReader::new(&buf);
    assert_eq!(r.time().unwrap_err().code, ErrorCode::InvalidTime);
}

#[test]
fn duration_roundtrip() {
    let d = Duration::new(3, 250_000_000);
    let mut buf = Vec::new();
    put_duration(&mut buf, &d).unwrap();

    let mut r = SafeReader::new(&buf);
    assert_eq!(r.duration().unwrap(), d);
}

#[test]
fn oversized_duration_overflows() {
    let d = Duration::from_secs(u64::MAX);
    let mut buf = Vec::new();
    assert_eq!(
        put_duration(&mut buf, &d).unwrap_err().code,
        ErrorCode::IntegerOverflow
    );
    assert!(buf.is_empty());
}

#[test]
fn duration_wants_tag_1000() {
    let mut buf = Vec::new();
    put_tag(&mut buf, 999);
    put_u64(&mut buf, 5);
    let mut r = SafeReader::new(&buf);
    assert_eq!(r.duration().unwrap_err().code, ErrorCode::TypeMismatch);
}

#[test]
fn wrapper_table_is_bidirectional() {
    for tag in [0, 1, 4, 5, 21, 22, 23, 24, 32, 33, 34, 35, 36, 37, 55799] {
        let key = interop::wrapper_key(tag).unwrap();
        assert_eq!(interop::wrapper_tag(key), Some(tag));
    }
    assert_eq!(interop::wrapper_key(1000), None);
    assert_eq!(interop::wrapper_tag("$nope"), None);
    assert_eq!(interop::wrapper_key(interop::TAG_URI), Some("$uri"));
}

#[test]
fn self_describe_prefix() {
    let mut buf = Vec::new();
    interop::put_self_describe(&mut buf);
    put_null(&mut buf);
    assert_eq!(buf, [0xd9, 0xd9, 0xf7, 0xf6]);
}
