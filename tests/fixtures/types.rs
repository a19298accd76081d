//! Fixture record types for the generated-code tests.
//!
//! `types_cbor.rs` next to this file is the checked-in generator output for
//! these types; the generator's own tests also run against this source.

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use core::time::Duration;
use fastcbor::CborRecord;

#[derive(CborRecord, Clone, Debug, Default, PartialEq)]
pub struct Sig {
    pub s: u64,
}

#[derive(CborRecord, Clone, Debug, Default, PartialEq)]
pub struct Pair<'a> {
    #[cbor(omit_empty)]
    pub a: u64,
    #[cbor(omit_empty)]
    pub b: Cow<'a, str>,
}

#[derive(CborRecord, Clone, Debug, Default, PartialEq)]
pub struct Pending {
    pub nonce: u64,
    pub payload: Vec<u8>,
}

#[derive(CborRecord, Clone, Debug, Default, PartialEq)]
pub struct Stamp {
    pub at: DateTime<Utc>,
    pub took: Duration,
}

#[derive(CborRecord, Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    pub height: u64,
    #[cbor(rename = "who")]
    pub owner: String,
    #[cbor(omit_empty)]
    pub memo: String,
    pub flag: bool,
    pub score: f64,
    pub tags: Vec<String>,
    pub txs: Vec<Sig>,
    pub pending: BTreeMap<u64, Option<Box<Pending>>>,
    pub counts: BTreeMap<u32, u64>,
    pub labels: BTreeMap<String, String>,
    pub parent: Option<Box<Ledger>>,
    #[cbor(skip)]
    pub cached: u32,
}
