//! Source-level code generator for `fastcbor`.
//!
//! The generator reads Rust source, finds `pub struct`s marked with
//! `#[derive(CborRecord)]`, derives a per-type field plan, and writes a
//! sibling `<stem>_cbor.rs` file containing type-specialized
//! `marshal_cbor` / `decode_safe` / `decode_trusted` routines that call only
//! the runtime's primitive and helper surface.
//!
//! Generated files import their types with `use super::<stem>::*;`, so mount
//! both files as sibling modules:
//!
//! ```text
//! mod types;
//! mod types_cbor;
//! ```
//!
//! In directory mode every non-test source file that is not itself generator
//! output is processed; explicit output paths are a file-mode-only option.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod attrs;
mod decode;
mod encode;
mod error;
mod plan;
mod shape;

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::quote;

pub use crate::error::GenError;

use crate::attrs::derives_cbor_record;
use crate::plan::{build_plan, TypePlan};

/// Generator options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Fail on field shapes outside the specialized set instead of falling
    /// back to the dynamic path.
    pub strict: bool,
}

fn emit_impl(plan: &TypePlan) -> TokenStream {
    let name = &plan.ident;
    let marshal = encode::marshal_fn(plan);
    let decodes = decode::decode_fns(plan);
    match &plan.lifetime {
        Some(lt) => quote! {
            impl<#lt> #name<#lt> {
                #marshal
                #decodes
            }
        },
        None => quote! {
            impl #name {
                #marshal
                #decodes
            }
        },
    }
}

/// Render generated source for one input, or `None` when it contains no
/// marked record types.
///
/// `module_name` is the sibling module the output imports its types from
/// (the input's file stem).
///
/// # Errors
///
/// Returns the parse or analysis error with its span.
pub fn render_source(
    source: &str,
    module_name: &str,
    opts: &Options,
) -> syn::Result<Option<String>> {
    let file = syn::parse_file(source)?;
    let module: syn::Ident = syn::parse_str(module_name)?;

    let mut impls = Vec::new();
    for item in &file.items {
        let syn::Item::Struct(item) = item else {
            continue;
        };
        if !derives_cbor_record(&item.attrs) {
            continue;
        }
        let plan = build_plan(item, opts.strict)?;
        impls.push(emit_impl(&plan));
    }

    if impls.is_empty() {
        return Ok(None);
    }

    let tokens = quote! {
        use super::#module::*;

        #(#impls)*
    };
    let file: syn::File = syn::parse2(tokens).expect("emitted tokens always parse");
    Ok(Some(prettyplease::unparse(&file)))
}

/// The default output path: the input with a `_cbor` suffix before the
/// extension.
#[must_use]
pub fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_cbor.rs"))
}

fn file_stem(path: &Path) -> Result<String, GenError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if syn::parse_str::<syn::Ident>(&stem).is_err() {
        return Err(GenError::BadModuleName {
            path: path.to_path_buf(),
            stem,
        });
    }
    Ok(stem)
}

fn render_file(input: &Path, opts: &Options) -> Result<Option<String>, GenError> {
    let stem = file_stem(input)?;
    let source = fs::read_to_string(input).map_err(|source| GenError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let rendered =
        render_source(&source, &stem, opts).map_err(|source| GenError::Parse {
            path: input.to_path_buf(),
            source,
        })?;
    let Some(body) = rendered else {
        log::debug!("{}: no record types, skipping", input.display());
        return Ok(None);
    };

    let src_name = input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Some(format!(
        "// @generated by fastcbor-gen. DO NOT EDIT.\n// Source: {src_name}\n\n{body}"
    )))
}

fn write_output(path: &Path, contents: &str) -> Result<(), GenError> {
    fs::write(path, contents).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Generate for a single input file, returning the output path when a file
/// was written.
///
/// # Errors
///
/// Any I/O, parse, or analysis error; nothing is written on failure.
pub fn generate_file(
    input: &Path,
    output: Option<&Path>,
    opts: &Options,
) -> Result<Option<PathBuf>, GenError> {
    let Some(contents) = render_file(input, opts)? else {
        return Ok(None);
    };
    let out = output.map_or_else(|| default_output(input), Path::to_path_buf);
    write_output(&out, &contents)?;
    log::info!("{} -> {}", input.display(), out.display());
    Ok(Some(out))
}

/// Returns `true` for files the directory walk must skip: generator outputs
/// and test sources.
fn skip_in_directory(path: &Path) -> bool {
    if path.extension().map_or(true, |e| e != "rs") {
        return true;
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if stem.ends_with("_cbor") || stem.ends_with("_test") {
        return true;
    }
    path.components()
        .any(|c| c.as_os_str() == "tests" || c.as_os_str() == "benches")
}

/// Generate for a file or directory input, dispatching on the path kind.
///
/// An explicit `output` is a file-mode-only option; combining it with a
/// directory input is rejected before anything is read.
///
/// # Errors
///
/// `OutputWithDirectory`, or any error from the underlying mode.
pub fn generate(
    input: &Path,
    output: Option<&Path>,
    opts: &Options,
) -> Result<Vec<PathBuf>, GenError> {
    if input.is_dir() {
        if output.is_some() {
            return Err(GenError::OutputWithDirectory);
        }
        generate_dir(input, opts)
    } else {
        Ok(generate_file(input, output, opts)?.into_iter().collect())
    }
}

/// Generate for every eligible source file under `dir`.
///
/// All outputs are rendered before any file is written, so a failing type
/// leaves the tree untouched.
///
/// # Errors
///
/// The first I/O, parse, or analysis error encountered.
pub fn generate_dir(dir: &Path, opts: &Options) -> Result<Vec<PathBuf>, GenError> {
    let mut pending: Vec<(PathBuf, String)> = Vec::new();

    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| GenError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() || skip_in_directory(entry.path()) {
            continue;
        }
        if let Some(contents) = render_file(entry.path(), opts)? {
            pending.push((default_output(entry.path()), contents));
        }
    }

    let mut written = Vec::with_capacity(pending.len());
    for (out, contents) in pending {
        write_output(&out, &contents)?;
        log::info!("wrote {}", out.display());
        written.push(out);
    }
    Ok(written)
}
