//! Marker derive for `fastcbor` record types.
//!
//! `#[derive(CborRecord)]` emits no code. It registers the `#[cbor(...)]`
//! helper attribute so annotated sources compile before generation, and it
//! validates the attribute grammar at compile time; the encode/decode
//! routines themselves are written next to the source by `fastcbor-gen`.

#![deny(clippy::all)]
#![deny(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::Span;
use syn::{parse_macro_input, spanned::Spanned, Attribute, Data, DeriveInput, Fields, LitStr};

#[derive(Default)]
struct FieldAttr {
    rename: Option<LitStr>,
    omit_empty: bool,
    skip: bool,
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttr> {
    let mut out = FieldAttr::default();
    for attr in attrs {
        if !attr.path().is_ident("cbor") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if out.skip {
                    return Err(meta.error("duplicate `cbor(skip)`"));
                }
                out.skip = true;
                return Ok(());
            }
            if meta.path.is_ident("omit_empty") {
                if out.omit_empty {
                    return Err(meta.error("duplicate `cbor(omit_empty)`"));
                }
                out.omit_empty = true;
                return Ok(());
            }
            if meta.path.is_ident("rename") {
                if out.rename.is_some() {
                    return Err(meta.error("duplicate `cbor(rename=...)`"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                out.rename = Some(lit);
                return Ok(());
            }
            Err(meta.error(
                "unsupported `cbor(...)` field attribute (allowed: rename, omit_empty, skip)",
            ))
        })?;
    }

    if out.skip && (out.rename.is_some() || out.omit_empty) {
        return Err(syn::Error::new(
            Span::call_site(),
            "`cbor(skip)` cannot be combined with `rename` or `omit_empty`",
        ));
    }

    Ok(out)
}

fn validate(input: &DeriveInput) -> syn::Result<()> {
    for attr in &input.attrs {
        if attr.path().is_ident("cbor") {
            return Err(syn::Error::new(
                attr.span(),
                "`#[cbor(...)]` is only supported on fields",
            ));
        }
    }

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "CborRecord only supports structs with named fields",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            input.ident.span(),
            "CborRecord only supports structs with named fields",
        ));
    };

    for field in &fields.named {
        parse_field_attrs(&field.attrs)?;
    }
    Ok(())
}

/// Mark a record for the `fastcbor-gen` source generator.
///
/// Records must also implement `Default`; generated decoders populate a
/// zero-initialized value.
#[proc_macro_derive(CborRecord, attributes(cbor))]
pub fn derive_cbor_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match validate(&input) {
        Ok(()) => TokenStream::new(),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}
