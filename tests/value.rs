use std::collections::BTreeMap;

use fastcbor::{
    put_dynamic, put_value, read_dynamic, read_value, DecodeLimits, ErrorCode, Value,
};

fn roundtrip(v: &Value) -> Value {
    let mut buf = Vec::new();
    put_value(&mut buf, v).unwrap();
    let (out, rest) = read_value(&buf, &DecodeLimits::default()).unwrap();
    assert!(rest.is_empty());
    out
}

#[test]
fn scalar_roundtrips() {
    for v in [
        Value::Unsigned(0),
        Value::Unsigned(u64::MAX),
        Value::Negative(0),
        Value::Negative(499),
        Value::Bool(true),
        Value::Null,
        Value::Undefined,
        Value::Float(1.5),
        Value::Text("hé".to_owned()),
        Value::Bytes(vec![0, 1, 2]),
    ] {
        assert_eq!(roundtrip(&v), v);
    }
}

#[test]
fn container_roundtrips() {
    let v = Value::Map(vec![
        (Value::Text("a".to_owned()), Value::Unsigned(1)),
        (
            Value::Text("b".to_owned()),
            Value::Array(vec![Value::Null, Value::Tag(32, Box::new(Value::Text("u".to_owned())))]),
        ),
    ]);
    assert_eq!(roundtrip(&v), v);
}

#[test]
fn insertion_order_is_preserved() {
    let v = Value::Map(vec![
        (Value::Text("zz".to_owned()), Value::Unsigned(1)),
        (Value::Text("a".to_owned()), Value::Unsigned(2)),
    ]);
    let mut buf = Vec::new();
    put_value(&mut buf, &v).unwrap();
    // "zz" first, exactly as inserted.
    assert_eq!(&buf[..4], &[0xa2, 0x62, b'z', b'z']);
}

#[test]
fn indefinite_items_are_materialized() {
    // Indefinite text in two chunks.
    let bytes = [0x7f, 0x62, b'h', b'i', 0x61, b'!', 0xff];
    let (v, rest) = read_value(&bytes, &DecodeLimits::default()).unwrap();
    assert!(rest.is_empty());
    assert_eq!(v, Value::Text("hi!".to_owned()));

    // Indefinite bytes.
    let bytes = [0x5f, 0x41, 0x01, 0x42, 0x02, 0x03, 0xff];
    let (v, _) = read_value(&bytes, &DecodeLimits::default()).unwrap();
    assert_eq!(v, Value::Bytes(vec![1, 2, 3]));

    // Indefinite array and map.
    let bytes = [0x9f, 0x01, 0xbf, 0x61, b'k', 0x02, 0xff, 0xff];
    let (v, _) = read_value(&bytes, &DecodeLimits::default()).unwrap();
    assert_eq!(
        v,
        Value::Array(vec![
            Value::Unsigned(1),
            Value::Map(vec![(Value::Text("k".to_owned()), Value::Unsigned(2))]),
        ])
    );
}

#[test]
fn reemission_of_indefinite_input_is_definite() {
    let bytes = [0x9f, 0x01, 0x02, 0xff];
    let (v, _) = read_value(&bytes, &DecodeLimits::default()).unwrap();
    let mut buf = Vec::new();
    put_value(&mut buf, &v).unwrap();
    assert_eq!(buf, [0x82, 0x01, 0x02]);
}

#[test]
fn read_value_returns_remainder() {
    let bytes = [0x01, 0x02, 0x03];
    let (v, rest) = read_value(&bytes, &DecodeLimits::default()).unwrap();
    assert_eq!(v, Value::Unsigned(1));
    assert_eq!(rest, &[0x02, 0x03]);
}

#[test]
fn read_value_validates() {
    assert_eq!(
        read_value(&[0x62, 0xff, 0xfe], &DecodeLimits::default())
            .unwrap_err()
            .code,
        ErrorCode::Utf8Invalid
    );
    assert_eq!(
        read_value(&[0x1c], &DecodeLimits::default()).unwrap_err().code,
        ErrorCode::ReservedAdditionalInfo
    );
}

#[test]
fn dynamic_trait_roundtrips() {
    let mut m: BTreeMap<String, Vec<u64>> = BTreeMap::new();
    m.insert("xs".to_owned(), vec![1, 2, 3]);
    m.insert("ys".to_owned(), vec![]);

    let mut buf = Vec::new();
    put_dynamic(&mut buf, &m).unwrap();
    let (out, rest): (BTreeMap<String, Vec<u64>>, _) =
        read_dynamic(&buf, &DecodeLimits::default()).unwrap();
    assert!(rest.is_empty());
    assert_eq!(out, m);

    let opt: Option<i64> = None;
    let mut buf = Vec::new();
    put_dynamic(&mut buf, &opt).unwrap();
    assert_eq!(buf, [0xf6]);
    let (out, _): (Option<i64>, _) = read_dynamic(&buf, &DecodeLimits::default()).unwrap();
    assert_eq!(out, None);
}

#[test]
fn dynamic_trait_reports_mismatch() {
    let mut buf = Vec::new();
    put_dynamic(&mut buf, &"text".to_owned()).unwrap();
    let err = read_dynamic::<u64>(&buf, &DecodeLimits::default()).unwrap_err();
    assert_eq!(err.code, ErrorCode::TypeMismatch);
}
