//! # fastcbor
//!
//! An allocation-lean CBOR (RFC 8949) codec runtime paired with a
//! source-level code generator (`fastcbor-gen`) that emits type-specialized
//! encode/decode routines for user record types.
//!
//! ## Design principles
//!
//! - **Primitives over abstraction.** The runtime is a flat surface of
//!   append operations over a caller-owned `Vec<u8>` and read operations over
//!   a borrowing [`Reader`] cursor. Generated code calls these directly; there
//!   is no trait dispatch on the hot path.
//! - **Safety modes are code paths, not flags.** [`SafeReader`] and
//!   [`TrustedReader`] are separate monomorphizations. Safe decoding runs the
//!   [`well_formed_item`] scanner once (validating structure and UTF-8), then
//!   re-parses structurally without re-validating. Trusted decoding skips
//!   validation entirely and may alias text into the input buffer; the borrow
//!   makes the input outlive the decoded record.
//! - **Definite-length emission.** Encoders only produce definite-length,
//!   minimal-width items. Indefinite-length input is recognized by the
//!   scanner, by [`Reader::skip_item`], and by the dynamic [`read_value`]
//!   walker.
//!
//! ## Layers
//!
//! - Primitives: [`put_u64`] and friends, [`Reader`].
//! - Composite helpers: [`put_text_array`], [`put_text_map`], time and
//!   duration tags.
//! - Dynamic fallback: [`Value`], [`put_value`], [`read_value`] — used by
//!   dynamic callers and the JSON interop layer, never by generated code.
//!
//! ## Trusted mode contract
//!
//! The trusted decoder performs no UTF-8 validation. Callers must only hand
//! it buffers produced by a well-behaved encoder (their own, or one whose
//! output was checked earlier). Decoded text may borrow from the input; the
//! lifetime system enforces that the buffer outlives every decoded record.
//!
//! ## Feature flags
//!
//! - `simdutf8`: SIMD-accelerated UTF-8 validation where supported.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod encode;
mod error;
mod helpers;
pub mod interop;
mod limits;
mod reader;
mod scan;
mod time;
pub(crate) mod utf8;
mod value;
mod wire;

pub use crate::encode::{
    check_len, put_array_header, put_bool, put_bytes, put_f16, put_f32, put_f64, put_f64_short,
    put_i64, put_map_header, put_neg_u64, put_null, put_tag, put_text, put_u64, put_undefined,
};
pub use crate::error::{CborError, ErrorCode};
pub use crate::helpers::{put_option, put_text_array, put_text_map, read_text_array, read_text_map};
pub use crate::limits::{DecodeLimits, DEFAULT_MAX_CONTAINER_LEN, DEFAULT_MAX_DEPTH};
pub use crate::reader::{Reader, SafeReader, TrustedReader};
pub use crate::scan::well_formed_item;
pub use crate::time::{put_duration, put_time_epoch, put_time_rfc3339};
pub use crate::value::{put_dynamic, put_value, read_dynamic, read_value, DynamicCbor, Value};

pub use fastcbor_derive::CborRecord;
