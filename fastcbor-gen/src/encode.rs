//! Encode-plan emission.
//!
//! Each field gets exactly one plan: a single expression for scalar-like
//! shapes (the scaffold writes the key), or a block for container shapes
//! (the block writes its own key). Omit-empty fields are wrapped in their
//! zero-predicate guard, and the map header count is computed in a first
//! pass before the header is written.

use proc_macro2::TokenStream;
use quote::quote;

use crate::plan::{FieldPlan, TypePlan};
use crate::shape::{IntKind, Shape, TextKind};

/// The "field is not empty" condition for omit-empty guards.
fn zero_guard(f: &FieldPlan) -> TokenStream {
    let id = &f.ident;
    match &f.shape {
        Shape::Bool => quote!(self.#id),
        Shape::Int(_) => quote!(self.#id != 0),
        Shape::Float32 | Shape::Float64 => quote!(self.#id != 0.0),
        Shape::Duration => quote!(!self.#id.is_zero()),
        Shape::RecordPtr { .. } => quote!(self.#id.is_some()),
        Shape::Text(_)
        | Shape::Bytes
        | Shape::TextVec
        | Shape::RecordVec { .. }
        | Shape::IntIntMap { .. }
        | Shape::IntRecordMap { .. }
        | Shape::TextTextMap => quote!(!self.#id.is_empty()),
        Shape::Time | Shape::Record { .. } | Shape::Dynamic => {
            unreachable!("omit_empty rejected during planning")
        }
    }
}

/// Append an integer expression, widening to the wire type.
fn int_put(kind: IntKind, value: TokenStream) -> TokenStream {
    if kind.is_signed() {
        if kind.is_widest() {
            quote!(::fastcbor::put_i64(buf, #value);)
        } else {
            quote!(::fastcbor::put_i64(buf, i64::from(#value));)
        }
    } else if kind.is_widest() {
        quote!(::fastcbor::put_u64(buf, #value);)
    } else {
        quote!(::fastcbor::put_u64(buf, u64::from(#value));)
    }
}

/// The key-and-value statements for one field. Expression plans are preceded
/// by the scaffold's key write; block plans emit the key themselves.
#[allow(clippy::too_many_lines)]
fn field_stmts(f: &FieldPlan) -> TokenStream {
    let id = &f.ident;
    let key = &f.key;
    let put_key = quote!(::fastcbor::put_text(buf, #key););

    if f.shape.is_block() {
        return match &f.shape {
            Shape::RecordVec {
                elem: _,
                boxed: _,
                nullable,
            } => {
                let elem_stmt = if *nullable {
                    quote! {
                        match item {
                            Some(elem) => elem.marshal_cbor(buf)?,
                            None => ::fastcbor::put_null(buf),
                        }
                    }
                } else {
                    quote!(item.marshal_cbor(buf)?;)
                };
                quote! {
                    #put_key
                    let n = ::fastcbor::check_len(self.#id.len(), buf.len())?;
                    ::fastcbor::put_array_header(buf, n);
                    for item in &self.#id {
                        #elem_stmt
                    }
                }
            }
            Shape::IntIntMap { key: k, value: v } => {
                let put_k = int_put(*k, quote!(*k));
                let put_v = int_put(*v, quote!(*val));
                quote! {
                    #put_key
                    let n = ::fastcbor::check_len(self.#id.len(), buf.len())?;
                    ::fastcbor::put_map_header(buf, n);
                    for (k, val) in &self.#id {
                        #put_k
                        #put_v
                    }
                }
            }
            Shape::IntRecordMap { key: k, elem: _ } => {
                let put_k = int_put(*k, quote!(*k));
                quote! {
                    #put_key
                    let n = ::fastcbor::check_len(self.#id.len(), buf.len())?;
                    ::fastcbor::put_map_header(buf, n);
                    for (k, val) in &self.#id {
                        #put_k
                        match val {
                            Some(elem) => elem.marshal_cbor(buf)?,
                            None => ::fastcbor::put_null(buf),
                        }
                    }
                }
            }
            Shape::TextTextMap => quote! {
                #put_key
                let n = ::fastcbor::check_len(self.#id.len(), buf.len())?;
                ::fastcbor::put_map_header(buf, n);
                for (k, val) in &self.#id {
                    ::fastcbor::put_text(buf, k);
                    ::fastcbor::put_text(buf, val);
                }
            },
            _ => unreachable!("is_block covers exactly the block shapes"),
        };
    }

    let expr = match &f.shape {
        Shape::Bool => quote!(::fastcbor::put_bool(buf, self.#id);),
        Shape::Int(kind) => int_put(*kind, quote!(self.#id)),
        Shape::Float32 => quote!(::fastcbor::put_f32(buf, self.#id);),
        Shape::Float64 => quote!(::fastcbor::put_f64(buf, self.#id);),
        Shape::Text(TextKind::Owned) => quote!(::fastcbor::put_text(buf, &self.#id);),
        Shape::Text(TextKind::CowStr) => quote!(::fastcbor::put_text(buf, self.#id.as_ref());),
        Shape::Bytes => quote!(::fastcbor::put_bytes(buf, &self.#id);),
        Shape::Time => quote!(::fastcbor::put_time_epoch(buf, &self.#id);),
        Shape::Duration => quote!(::fastcbor::put_duration(buf, &self.#id)?;),
        Shape::TextVec => quote!(::fastcbor::put_text_array(buf, &self.#id)?;),
        Shape::Record { .. } => quote!(self.#id.marshal_cbor(buf)?;),
        Shape::RecordPtr { nullable: false, .. } => quote!(self.#id.marshal_cbor(buf)?;),
        Shape::RecordPtr { nullable: true, .. } => quote! {
            match &self.#id {
                Some(elem) => elem.marshal_cbor(buf)?,
                None => ::fastcbor::put_null(buf),
            }
        },
        Shape::Dynamic => quote!(::fastcbor::put_dynamic(buf, &self.#id)?;),
        _ => unreachable!("block shapes handled above"),
    };

    quote! {
        #put_key
        #expr
    }
}

/// Emit the `marshal_cbor` routine for one type plan.
pub(crate) fn marshal_fn(plan: &TypePlan) -> TokenStream {
    let base = u32::try_from(plan.fields.iter().filter(|f| !f.omit_empty).count())
        .expect("field count fits u32");

    let bumps: Vec<TokenStream> = plan
        .fields
        .iter()
        .filter(|f| f.omit_empty)
        .map(|f| {
            let guard = zero_guard(f);
            quote! {
                if #guard {
                    len += 1;
                }
            }
        })
        .collect();

    let len_decl = if bumps.is_empty() {
        quote!(let len: u32 = #base;)
    } else {
        quote! {
            let mut len: u32 = #base;
            #(#bumps)*
        }
    };

    let body: Vec<TokenStream> = plan
        .fields
        .iter()
        .map(|f| {
            let stmts = field_stmts(f);
            if f.omit_empty {
                let guard = zero_guard(f);
                quote! {
                    if #guard {
                        #stmts
                    }
                }
            } else {
                stmts
            }
        })
        .collect();

    quote! {
        /// Append `self` to `buf` as a CBOR map.
        pub fn marshal_cbor(&self, buf: &mut Vec<u8>) -> Result<(), ::fastcbor::CborError> {
            #len_decl
            ::fastcbor::put_map_header(buf, len);
            #(#body)*
            Ok(())
        }
    }
}
