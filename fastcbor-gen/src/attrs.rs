use syn::{Attribute, LitStr};

/// Parsed `#[cbor(...)]` field attributes.
#[derive(Default, Clone)]
pub(crate) struct FieldAttr {
    pub(crate) rename: Option<String>,
    pub(crate) omit_empty: bool,
    pub(crate) skip: bool,
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttr> {
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
                out.rename = Some(lit.value());
                return Ok(());
            }
            Err(meta.error(
                "unsupported `cbor(...)` field attribute (allowed: rename, omit_empty, skip)",
            ))
        })?;
    }
    Ok(out)
}

/// Returns `true` when the item carries `#[derive(..., CborRecord, ...)]`.
pub(crate) fn derives_cbor_record(attrs: &[Attribute]) -> bool {
    let mut found = false;
    for attr in attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if meta
                .path
                .segments
                .last()
                .is_some_and(|seg| seg.ident == "CborRecord")
            {
                found = true;
            }
            Ok(())
        });
    }
    found
}
