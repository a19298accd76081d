//! Field-plan construction.
//!
//! A [`TypePlan`] is the per-type analysis result: one ordered descriptor per
//! surviving field, carrying the wire key, the omit-empty flag, and the
//! resolved shape that selects the emit and decode templates. Plans live for
//! one generator invocation; the emitted source is the only artifact that
//! survives.

use proc_macro2::Ident;
use syn::{spanned::Spanned, Fields, GenericParam, ItemStruct, Lifetime};

use crate::attrs::parse_field_attrs;
use crate::shape::{resolve, Shape};

pub(crate) struct FieldPlan {
    pub(crate) ident: Ident,
    pub(crate) key: String,
    pub(crate) omit_empty: bool,
    pub(crate) shape: Shape,
}

pub(crate) struct TypePlan {
    pub(crate) ident: Ident,
    /// The struct's single declared lifetime, when it borrows text.
    pub(crate) lifetime: Option<Lifetime>,
    pub(crate) fields: Vec<FieldPlan>,
}

const fn supports_omit_empty(shape: &Shape) -> bool {
    match shape {
        Shape::Bool
        | Shape::Int(_)
        | Shape::Float32
        | Shape::Float64
        | Shape::Text(_)
        | Shape::Bytes
        | Shape::Duration
        | Shape::TextVec
        | Shape::RecordVec { .. }
        | Shape::IntIntMap { .. }
        | Shape::IntRecordMap { .. }
        | Shape::TextTextMap => true,
        Shape::RecordPtr { nullable, .. } => *nullable,
        Shape::Time | Shape::Record { .. } | Shape::Dynamic => false,
    }
}

/// Analyze one marked struct into its field plan.
///
/// `strict` turns the dynamic fallback into an error instead of a diagnostic.
pub(crate) fn build_plan(item: &ItemStruct, strict: bool) -> syn::Result<TypePlan> {
    let mut lifetime: Option<Lifetime> = None;
    for param in &item.generics.params {
        match param {
            GenericParam::Lifetime(lt) => {
                if lifetime.is_some() {
                    return Err(syn::Error::new(
                        lt.span(),
                        "record types support at most one lifetime parameter",
                    ));
                }
                lifetime = Some(lt.lifetime.clone());
            }
            _ => {
                return Err(syn::Error::new(
                    param.span(),
                    "record types cannot be generic over types or consts",
                ));
            }
        }
    }

    let Fields::Named(named) = &item.fields else {
        return Err(syn::Error::new(
            item.ident.span(),
            "record types must have named fields",
        ));
    };

    let mut fields = Vec::new();
    for field in &named.named {
        let attr = parse_field_attrs(&field.attrs)?;
        if attr.skip {
            continue;
        }

        let ident = field.ident.clone().expect("named field");
        let key = attr.rename.unwrap_or_else(|| ident.to_string());
        let shape = resolve(&field.ty);

        if matches!(shape, Shape::Dynamic) {
            if strict {
                return Err(syn::Error::new(
                    field.ty.span(),
                    format!("field `{ident}` has no specialized shape (strict mode)"),
                ));
            }
            log::warn!(
                "{}.{ident}: unrecognized shape, falling back to the dynamic path",
                item.ident
            );
        }

        if attr.omit_empty && !supports_omit_empty(&shape) {
            return Err(syn::Error::new(
                field.span(),
                format!("field `{ident}` has no zero predicate for `cbor(omit_empty)`"),
            ));
        }

        fields.push(FieldPlan {
            ident,
            key,
            omit_empty: attr.omit_empty,
            shape,
        });
    }

    log::debug!("planned {} with {} field(s)", item.ident, fields.len());

    Ok(TypePlan {
        ident: item.ident.clone(),
        lifetime,
        fields,
    })
}
