//! Shape collection: the ordered member and variant view of a declaration.
//!
//! Every generator rebuilds this view from the syntax tree it receives, in
//! declaration order, so equality and hash always iterate the same sequence.
//! Declarations that are neither product nor sum types fail here and the
//! caller never attempts derivation.

use syn::{Data, DeriveInput};

use super::type_utils::{SlotKind, classify};
use super::parse_field_attrs;

/// Closed view of a declaration: product (struct) or sum (enum).
pub(crate) enum Shape {
    Product(Vec<Member>),
    Sum(Vec<VariantShape>),
}

/// One stored member of a product type.
pub(crate) struct Member {
    pub access: MemberAccess,
    pub kind: SlotKind,
    pub skipped: bool,
}

/// How a member is reached on `self`: by name or by position.
pub(crate) enum MemberAccess {
    Named(syn::Ident),
    Positional(syn::Index),
}

impl quote::ToTokens for MemberAccess {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        match self {
            Self::Named(ident) => ident.to_tokens(tokens),
            Self::Positional(index) => index.to_tokens(tokens),
        }
    }
}

/// One variant of a sum type, with its zero-based declaration index.
///
/// The index doubles as the hashing discriminant; it is never derived from
/// the variant name or a user-assigned discriminant value.
pub(crate) struct VariantShape {
    pub ident: syn::Ident,
    pub index: usize,
    pub fields: VariantFields,
}

/// Payload layout of a variant.
pub(crate) enum VariantFields {
    Unit,
    Tuple(Vec<Slot>),
    Named(Vec<Slot>),
}

/// One payload slot, labelled for braced variants and positional otherwise.
pub(crate) struct Slot {
    pub label: Option<syn::Ident>,
    pub index: usize,
    pub kind: SlotKind,
    pub skipped: bool,
}

/// Builds the shape view for a derive input.
///
/// Unions are the one declaration kind `syn` hands a derive that is neither
/// a product nor a sum type; they are rejected with a diagnostic at the
/// `union` keyword.
pub(crate) fn collect(input: &DeriveInput) -> syn::Result<Shape> {
    match &input.data {
        Data::Struct(data) => Ok(Shape::Product(collect_members(&data.fields)?)),
        Data::Enum(data) => Ok(Shape::Sum(collect_variants(data)?)),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "unsupported declaration kind: expected a struct or enum, found a union",
        )),
    }
}

/// Collects the ordered member list of a struct.
///
/// Unit structs yield an empty list. Tuple struct members are addressed by
/// position.
pub(crate) fn collect_members(fields: &syn::Fields) -> syn::Result<Vec<Member>> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let attrs = parse_field_attrs(&field.attrs)?;
            let access = field.ident.clone().map_or_else(
                || MemberAccess::Positional(syn::Index::from(index)),
                MemberAccess::Named,
            );
            Ok(Member {
                access,
                kind: classify(&field.ty),
                skipped: attrs.skip,
            })
        })
        .collect()
}

fn collect_variants(data: &syn::DataEnum) -> syn::Result<Vec<VariantShape>> {
    data.variants
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            Ok(VariantShape {
                ident: variant.ident.clone(),
                index,
                fields: collect_variant_fields(&variant.fields)?,
            })
        })
        .collect()
}

fn collect_variant_fields(fields: &syn::Fields) -> syn::Result<VariantFields> {
    let slots = fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let attrs = parse_field_attrs(&field.attrs)?;
            Ok(Slot {
                label: field.ident.clone(),
                index,
                kind: classify(&field.ty),
                skipped: attrs.skip,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(match fields {
        syn::Fields::Unit => VariantFields::Unit,
        syn::Fields::Unnamed(_) => VariantFields::Tuple(slots),
        syn::Fields::Named(_) => VariantFields::Named(slots),
    })
}
