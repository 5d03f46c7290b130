//! Syntactic slot classification.
//!
//! Each field or payload slot is classified by shallow inspection of its
//! outermost declared type. The checks tolerate fully qualified paths by
//! matching only the final segment, the same technique used for wrapper
//! detection elsewhere in this workspace; they are not recursive beyond the
//! single level the generators care about.

use syn::{GenericArgument, PathArguments, Type, TypeParamBound};

/// Bit width of a float slot, selecting the runtime hashing helper.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum FloatWidth {
    F32,
    F64,
}

/// Classification of the value inside a `Cell` or `RefCell`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum CellInner {
    Plain,
    Float(FloatWidth),
}

/// How a slot participates in generated comparison and hashing.
///
/// - `Plain` slots use their own `PartialEq`/`Hash`.
/// - `Float` slots compare with `PartialEq` but hash through the
///   bit-normalising helpers, since Rust floats do not implement `Hash`.
/// - `Cell` and `RefCell` slots compare and hash the contained value, not
///   the cell.
/// - `Callable` slots are never comparable and contribute nothing to the
///   hash.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum SlotKind {
    Plain,
    Float(FloatWidth),
    Cell(CellInner),
    RefCell(CellInner),
    Callable,
}

/// Classifies a declared type into its [`SlotKind`].
pub(crate) fn classify(ty: &Type) -> SlotKind {
    let ty = unwrap_group(ty);
    match ty {
        Type::BareFn(_) => SlotKind::Callable,
        Type::Path(path) => classify_path(path),
        _ => SlotKind::Plain,
    }
}

/// Strips grouping and parenthesis nodes inserted by macro expansion.
fn unwrap_group(mut ty: &Type) -> &Type {
    loop {
        match ty {
            Type::Group(g) => ty = &g.elem,
            Type::Paren(p) => ty = &p.elem,
            _ => return ty,
        }
    }
}

fn classify_path(path: &syn::TypePath) -> SlotKind {
    if path.path.is_ident("f32") {
        return SlotKind::Float(FloatWidth::F32);
    }
    if path.path.is_ident("f64") {
        return SlotKind::Float(FloatWidth::F64);
    }
    let Some(last) = path.path.segments.last() else {
        return SlotKind::Plain;
    };
    if last.ident == "Cell" {
        return SlotKind::Cell(cell_inner(last));
    }
    if last.ident == "RefCell" {
        return SlotKind::RefCell(cell_inner(last));
    }
    if last.ident == "Box" || last.ident == "Rc" || last.ident == "Arc" {
        if first_type_argument(&last.arguments).is_some_and(is_callable) {
            return SlotKind::Callable;
        }
    }
    SlotKind::Plain
}

/// Extract the first type argument from a `PathArguments` container.
fn first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    angle_args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}

fn cell_inner(seg: &syn::PathSegment) -> CellInner {
    match first_type_argument(&seg.arguments).map(unwrap_group) {
        Some(Type::Path(p)) if p.path.is_ident("f32") => CellInner::Float(FloatWidth::F32),
        Some(Type::Path(p)) if p.path.is_ident("f64") => CellInner::Float(FloatWidth::F64),
        _ => CellInner::Plain,
    }
}

/// Recognises bare `fn` pointers and `dyn Fn*` trait objects.
fn is_callable(ty: &Type) -> bool {
    match unwrap_group(ty) {
        Type::BareFn(_) => true,
        Type::TraitObject(obj) => obj.bounds.iter().any(is_fn_bound),
        _ => false,
    }
}

fn is_fn_bound(bound: &TypeParamBound) -> bool {
    let TypeParamBound::Trait(t) = bound else {
        return false;
    };
    t.path.segments.last().is_some_and(|seg| {
        matches!(seg.ident.to_string().as_str(), "Fn" | "FnMut" | "FnOnce")
    })
}
