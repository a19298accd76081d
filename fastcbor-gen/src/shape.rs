//! Nominal field-type resolution.
//!
//! Each field's declared type is matched against the closed set of shapes
//! the emitter specializes. Anything unrecognized resolves to
//! [`Shape::Dynamic`], the reflection-style fallback.

use proc_macro2::Ident;
use quote::format_ident;
use syn::{GenericArgument, Path, PathArguments, Type};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl IntKind {
    pub(crate) fn from_ident(name: &str) -> Option<Self> {
        Some(match name {
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            _ => return None,
        })
    }

    pub(crate) const fn is_signed(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Widest kind of the same signedness; direct, no `From` conversion.
    pub(crate) const fn is_widest(self) -> bool {
        matches!(self, Self::U64 | Self::I64)
    }

    /// The matching range-checked read method on `Reader`.
    pub(crate) fn read_method(self) -> Ident {
        let name = match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
        };
        format_ident!("{name}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextKind {
    /// `String`: owned in both decode modes.
    Owned,
    /// `Cow<'a, str>`: owned in safe mode, aliased in trusted mode.
    CowStr,
}

#[derive(Clone, Debug)]
pub(crate) enum Shape {
    Bool,
    Int(IntKind),
    Float32,
    Float64,
    Text(TextKind),
    Bytes,
    Time,
    Duration,
    TextVec,
    /// `Vec<T>`, `Vec<Box<T>>`, or `Vec<Option<Box<T>>>` of a record type.
    RecordVec {
        elem: Path,
        boxed: bool,
        nullable: bool,
    },
    /// Map with integer keys and integer values.
    IntIntMap {
        key: IntKind,
        value: IntKind,
    },
    /// Map with integer keys and `Option<Box<T>>` record values.
    IntRecordMap {
        key: IntKind,
        elem: Path,
    },
    /// Map of `String` to `String`.
    TextTextMap,
    /// Another record by value.
    Record {
        path: Path,
    },
    /// Owning pointer: `Box<T>` (never null) or `Option<Box<T>>`.
    RecordPtr {
        elem: Path,
        nullable: bool,
    },
    /// Unrecognized shape; encode/decode through the dynamic tree.
    Dynamic,
}

impl Shape {
    /// Shapes whose encode plan is a block that writes its own key.
    pub(crate) const fn is_block(&self) -> bool {
        matches!(
            self,
            Self::RecordVec { .. }
                | Self::IntIntMap { .. }
                | Self::IntRecordMap { .. }
                | Self::TextTextMap
        )
    }
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    let Type::Path(tp) = ty else { return None };
    if tp.qself.is_some() {
        return None;
    }
    tp.path.segments.last()
}

fn single_type_arg(seg: &syn::PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });
    let first = types.next()?;
    if types.next().is_some() {
        return None;
    }
    Some(first)
}

fn two_type_args(seg: &syn::PathSegment) -> Option<(&Type, &Type)> {
    let PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    });
    let k = types.next()?;
    let v = types.next()?;
    if types.next().is_some() {
        return None;
    }
    Some((k, v))
}

fn type_is_ident(ty: &Type, name: &str) -> bool {
    last_segment(ty).is_some_and(|seg| seg.ident == name)
}

/// The field type as a callable path: generic arguments stripped so the
/// emitter can chain `Ty::read_safe(r)` regardless of lifetimes.
fn callee_path(ty: &Type) -> Option<Path> {
    let Type::Path(tp) = ty else { return None };
    if tp.qself.is_some() {
        return None;
    }
    let mut path = tp.path.clone();
    for seg in &mut path.segments {
        seg.arguments = PathArguments::None;
    }
    Some(path)
}

/// `Box<T>` for a record `T`, yielding the callee path.
fn boxed_record(ty: &Type) -> Option<Path> {
    let seg = last_segment(ty)?;
    if seg.ident != "Box" {
        return None;
    }
    let inner = single_type_arg(seg)?;
    if resolve_record(inner) {
        callee_path(inner)
    } else {
        None
    }
}

/// `Option<Box<T>>` for a record `T`, yielding the callee path.
fn optional_boxed_record(ty: &Type) -> Option<Path> {
    let seg = last_segment(ty)?;
    if seg.ident != "Option" {
        return None;
    }
    boxed_record(single_type_arg(seg)?)
}

/// A nominal type we treat as another generated record: any plain path that
/// resolves to none of the recognized primitives or containers. Name
/// resolution is by identifier; the referent's routines are found at compile
/// time of the generated output.
fn resolve_record(ty: &Type) -> bool {
    let Some(seg) = last_segment(ty) else {
        return false;
    };
    let name = seg.ident.to_string();
    if IntKind::from_ident(&name).is_some() {
        return false;
    }
    !matches!(
        name.as_str(),
        "bool"
            | "f32"
            | "f64"
            | "String"
            | "str"
            | "Cow"
            | "Vec"
            | "Box"
            | "Option"
            | "BTreeMap"
            | "HashMap"
            | "DateTime"
            | "Duration"
            | "usize"
            | "isize"
            | "u128"
            | "i128"
            | "char"
    )
}

fn int_kind(ty: &Type) -> Option<IntKind> {
    let seg = last_segment(ty)?;
    if seg.arguments != PathArguments::None {
        return None;
    }
    IntKind::from_ident(&seg.ident.to_string())
}

/// Resolve a declared field type into its shape. Never fails; the fallback
/// shape is [`Shape::Dynamic`].
#[allow(clippy::too_many_lines)]
pub(crate) fn resolve(ty: &Type) -> Shape {
    if let Some(kind) = int_kind(ty) {
        return Shape::Int(kind);
    }

    let Some(seg) = last_segment(ty) else {
        return Shape::Dynamic;
    };

    match seg.ident.to_string().as_str() {
        "bool" => Shape::Bool,
        "f32" => Shape::Float32,
        "f64" => Shape::Float64,
        "String" => Shape::Text(TextKind::Owned),
        "Cow" => {
            let PathArguments::AngleBracketed(args) = &seg.arguments else {
                return Shape::Dynamic;
            };
            let is_str = args.args.iter().any(|arg| {
                matches!(arg, GenericArgument::Type(inner) if type_is_ident(inner, "str"))
            });
            if is_str {
                Shape::Text(TextKind::CowStr)
            } else {
                Shape::Dynamic
            }
        }
        "DateTime" => Shape::Time,
        "Duration" => Shape::Duration,
        "Vec" => {
            let Some(inner) = single_type_arg(seg) else {
                return Shape::Dynamic;
            };
            if type_is_ident(inner, "u8") {
                return Shape::Bytes;
            }
            if type_is_ident(inner, "String") {
                return Shape::TextVec;
            }
            if let Some(elem) = optional_boxed_record(inner) {
                return Shape::RecordVec {
                    elem,
                    boxed: true,
                    nullable: true,
                };
            }
            if let Some(elem) = boxed_record(inner) {
                return Shape::RecordVec {
                    elem,
                    boxed: true,
                    nullable: false,
                };
            }
            if resolve_record(inner) {
                if let Some(elem) = callee_path(inner) {
                    return Shape::RecordVec {
                        elem,
                        boxed: false,
                        nullable: false,
                    };
                }
            }
            Shape::Dynamic
        }
        "Box" => boxed_record(ty).map_or(Shape::Dynamic, |elem| Shape::RecordPtr {
            elem,
            nullable: false,
        }),
        "Option" => optional_boxed_record(ty).map_or(Shape::Dynamic, |elem| Shape::RecordPtr {
            elem,
            nullable: true,
        }),
        "BTreeMap" | "HashMap" => {
            let Some((k, v)) = two_type_args(seg) else {
                return Shape::Dynamic;
            };
            if let Some(key) = int_kind(k) {
                if let Some(value) = int_kind(v) {
                    return Shape::IntIntMap { key, value };
                }
                if let Some(elem) = optional_boxed_record(v) {
                    return Shape::IntRecordMap { key, elem };
                }
                return Shape::Dynamic;
            }
            if type_is_ident(k, "String") && type_is_ident(v, "String") {
                return Shape::TextTextMap;
            }
            Shape::Dynamic
        }
        _ => {
            if resolve_record(ty) {
                if let Some(path) = callee_path(ty) {
                    return Shape::Record { path };
                }
            }
            Shape::Dynamic
        }
    }
}
