//! Decode-plan emission.
//!
//! Every type gets two entry points and two chaining bodies. `decode_safe`
//! runs the well-formedness scanner once and re-parses the verified prefix
//! with a `TrustedReader` (no UTF-8 revalidation); `decode_trusted` parses
//! directly and may alias text into the input. The bodies (`read_safe`,
//! `read_trusted`) are the per-mode match arms over wire keys, used when one
//! record chains into another.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::plan::{FieldPlan, TypePlan};
use crate::shape::{Shape, TextKind};

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Safe,
    Trusted,
}

impl Mode {
    fn read_fn(self) -> proc_macro2::Ident {
        match self {
            Self::Safe => format_ident!("read_safe"),
            Self::Trusted => format_ident!("read_trusted"),
        }
    }
}

/// One `"key" => { ... }` match arm for a field in the given mode.
#[allow(clippy::too_many_lines)]
fn field_arm(f: &FieldPlan, mode: Mode) -> TokenStream {
    let id = &f.ident;
    let key = &f.key;
    let read_fn = mode.read_fn();

    let body = match &f.shape {
        Shape::Bool => quote!(v.#id = r.bool()?;),
        Shape::Int(kind) => {
            let m = kind.read_method();
            quote!(v.#id = r.#m()?;)
        }
        Shape::Float32 => quote!(v.#id = r.f64()? as f32;),
        Shape::Float64 => quote!(v.#id = r.f64()?;),
        Shape::Text(TextKind::Owned) => quote!(v.#id = r.str()?.to_owned();),
        Shape::Text(TextKind::CowStr) => match mode {
            Mode::Safe => quote!(v.#id = ::std::borrow::Cow::Owned(r.str()?.to_owned());),
            Mode::Trusted => quote!(v.#id = ::std::borrow::Cow::Borrowed(r.str()?);),
        },
        Shape::Bytes => quote!(v.#id = r.bytes()?.to_vec();),
        Shape::Time => quote!(v.#id = r.time()?;),
        Shape::Duration => quote!(v.#id = r.duration()?;),
        Shape::TextVec => quote!(v.#id = ::fastcbor::read_text_array(r)?;),
        Shape::RecordVec {
            elem,
            boxed,
            nullable,
        } => {
            let push = if *nullable {
                quote! {
                    if r.peek_null() {
                        r.null()?;
                        v.#id.push(None);
                    } else {
                        v.#id.push(Some(Box::new(#elem::#read_fn(r)?)));
                    }
                }
            } else if *boxed {
                quote!(v.#id.push(Box::new(#elem::#read_fn(r)?));)
            } else {
                quote!(v.#id.push(#elem::#read_fn(r)?);)
            };
            quote! {
                let n = r.array_header()?;
                v.#id = Vec::with_capacity(n.min(64));
                for _ in 0..n {
                    #push
                }
            }
        }
        Shape::IntIntMap { key: k, value } => {
            let km = k.read_method();
            let vm = value.read_method();
            quote! {
                let n = r.map_header()?;
                v.#id = Default::default();
                for _ in 0..n {
                    let k = r.#km()?;
                    let val = r.#vm()?;
                    v.#id.insert(k, val);
                }
            }
        }
        Shape::IntRecordMap { key: k, elem } => {
            let km = k.read_method();
            quote! {
                let n = r.map_header()?;
                v.#id = Default::default();
                for _ in 0..n {
                    let k = r.#km()?;
                    if r.peek_null() {
                        r.null()?;
                        v.#id.insert(k, None);
                    } else {
                        v.#id.insert(k, Some(Box::new(#elem::#read_fn(r)?)));
                    }
                }
            }
        }
        Shape::TextTextMap => quote! {
            let n = r.map_header()?;
            v.#id = Default::default();
            for _ in 0..n {
                let k = r.str()?.to_owned();
                let val = r.str()?.to_owned();
                v.#id.insert(k, val);
            }
        },
        Shape::Record { path } => quote!(v.#id = #path::#read_fn(r)?;),
        Shape::RecordPtr {
            elem,
            nullable: false,
        } => quote!(v.#id = Box::new(#elem::#read_fn(r)?);),
        Shape::RecordPtr {
            elem,
            nullable: true,
        } => quote! {
            if r.peek_null() {
                r.null()?;
                v.#id = None;
            } else {
                v.#id = Some(Box::new(#elem::#read_fn(r)?));
            }
        },
        Shape::Dynamic => quote!(v.#id = r.dynamic()?;),
    };

    quote! {
        #key => {
            #body
        }
    }
}

/// Emit the four decode routines for one type plan.
pub(crate) fn decode_fns(plan: &TypePlan) -> TokenStream {
    let name = &plan.ident;

    let safe_arms: Vec<TokenStream> = plan
        .fields
        .iter()
        .map(|f| field_arm(f, Mode::Safe))
        .collect();
    let trusted_arms: Vec<TokenStream> = plan
        .fields
        .iter()
        .map(|f| field_arm(f, Mode::Trusted))
        .collect();

    // Lifetime-bearing types decode to the 'static instantiation in safe
    // mode (all text owned) and borrow the input in trusted mode.
    let (safe_ty, init, trusted_reader, trusted_input, trusted_rest) =
        if let Some(lt) = &plan.lifetime {
            (
                quote!(#name<'static>),
                quote!(<#name<'static>>::default()),
                quote!(::fastcbor::TrustedReader<#lt>),
                quote!(&#lt [u8]),
                quote!(&#lt [u8]),
            )
        } else {
            (
                quote!(Self),
                quote!(Self::default()),
                quote!(::fastcbor::TrustedReader<'_>),
                quote!(&[u8]),
                quote!(&[u8]),
            )
        };

    quote! {
        /// Decode one record from `input` with full validation, returning the
        /// remainder. Text is copied into owned storage.
        pub fn decode_safe(input: &[u8]) -> Result<(#safe_ty, &[u8]), ::fastcbor::CborError> {
            let end = ::fastcbor::well_formed_item(input, &::fastcbor::DecodeLimits::default())?;
            let mut r = ::fastcbor::TrustedReader::new(&input[..end]);
            let v = Self::read_safe(&mut r)?;
            Ok((v, &input[end..]))
        }

        /// Decode a map body in safe mode. The bytes must already have passed
        /// the well-formedness check.
        pub fn read_safe(r: &mut ::fastcbor::TrustedReader<'_>) -> Result<#safe_ty, ::fastcbor::CborError> {
            let mut v = #init;
            let n = r.map_header()?;
            for _ in 0..n {
                match r.str()? {
                    #(#safe_arms)*
                    _ => r.skip_item()?,
                }
            }
            Ok(v)
        }

        /// Decode one record without validation, returning the remainder.
        /// Text may alias `input`; the caller keeps `input` immutable and
        /// alive for as long as the record.
        pub fn decode_trusted(input: #trusted_input) -> Result<(Self, #trusted_rest), ::fastcbor::CborError> {
            let mut r = ::fastcbor::TrustedReader::new(input);
            let v = Self::read_trusted(&mut r)?;
            Ok((v, r.rest()))
        }

        /// Decode a map body in trusted mode.
        pub fn read_trusted(r: &mut #trusted_reader) -> Result<Self, ::fastcbor::CborError> {
            let mut v = Self::default();
            let n = r.map_header()?;
            for _ in 0..n {
                match r.str()? {
                    #(#trusted_arms)*
                    _ => r.skip_item()?,
                }
            }
            Ok(v)
        }
    }
}
