//! Identity synthesis.
//!
//! Rewrites the annotated declaration so it carries a stable per-instance
//! identifier and an `Identifiable` implementation. An existing field named
//! `id` is honoured untouched; otherwise one is appended whose type comes
//! from the fixed `id_type` table and whose `Default` draws a fresh value
//! from the process random source, making identifier assignment a visible
//! step in the constructor.
//!
//! When the struct also derives `StructuralEq` or `StructuralHash`, the
//! injected field is annotated `#[structural(skip)]`: identity must not
//! leak into structural comparison, which is computed purely from the
//! declared value fields.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;

use crate::derive::crate_path;
use crate::derive::parse::{IdKind, IdentifyOpts};

/// Expands the `#[identify]` attribute macro.
pub(crate) fn expand(opts: &IdentifyOpts, item: syn::Item) -> syn::Result<TokenStream> {
    match item {
        syn::Item::Struct(item) => expand_struct(opts, item),
        syn::Item::Enum(item) => expand_enum(opts, &item),
        other => Err(syn::Error::new_spanned(
            &other,
            "unsupported declaration kind: #[identify] applies only to struct and enum declarations",
        )),
    }
}

fn expand_struct(opts: &IdentifyOpts, mut item: syn::ItemStruct) -> syn::Result<TokenStream> {
    let root = crate_path::resolve(opts.crate_path.as_ref());
    let id_ty = match existing_id_type(&item.fields) {
        Some(ty) => ty,
        None => {
            let ty = injected_id_type(opts, &root);
            inject_id_field(&mut item, &ty)?;
            ty
        }
    };
    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    Ok(quote! {
        #item

        #[automatically_derived]
        impl #impl_generics #root::Identifiable for #ident #ty_generics #where_clause {
            type Id = #id_ty;

            fn id(&self) -> &Self::Id {
                &self.id
            }
        }
    })
}

fn expand_enum(opts: &IdentifyOpts, item: &syn::ItemEnum) -> syn::Result<TokenStream> {
    if let Some(variant) = item
        .variants
        .iter()
        .find(|v| !matches!(v.fields, syn::Fields::Unit))
    {
        return Err(syn::Error::new_spanned(
            variant,
            "cannot synthesise identity for enums with payload-carrying variants; \
             the identity of a payload-free enum is the value itself",
        ));
    }
    if opts.kind.is_some() || opts.optional {
        return Err(syn::Error::new_spanned(
            &item.ident,
            "`id_type` and `optional` do not apply to enum declarations",
        ));
    }
    let root = crate_path::resolve(opts.crate_path.as_ref());
    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    Ok(quote! {
        #item

        #[automatically_derived]
        impl #impl_generics #root::Identifiable for #ident #ty_generics #where_clause {
            type Id = Self;

            fn id(&self) -> &Self::Id {
                self
            }
        }
    })
}

/// Returns the declared type of an existing member literally named `id`.
fn existing_id_type(fields: &syn::Fields) -> Option<syn::Type> {
    fields
        .iter()
        .find(|f| f.ident.as_ref().is_some_and(|ident| ident == "id"))
        .map(|f| f.ty.clone())
}

/// Selects the injected field type from the fixed identifier-kind table.
fn injected_id_type(opts: &IdentifyOpts, root: &TokenStream) -> syn::Type {
    let base: syn::Type = match opts.kind.unwrap_or(IdKind::String) {
        IdKind::String => syn::parse_quote!(#root::StringId),
        IdKind::Integer => syn::parse_quote!(#root::IntId),
        IdKind::Double => syn::parse_quote!(#root::FloatId),
        IdKind::Boolean => syn::parse_quote!(#root::BoolId),
        IdKind::Token => syn::parse_quote!(#root::Token),
    };
    if opts.optional {
        syn::parse_quote!(::core::option::Option<#base>)
    } else {
        base
    }
}

fn inject_id_field(item: &mut syn::ItemStruct, ty: &syn::Type) -> syn::Result<()> {
    let vis = item.vis.clone();
    let skip = derives_structural(&item.attrs).then(|| quote! { #[structural(skip)] });
    let syn::Fields::Named(fields) = &mut item.fields else {
        return Err(syn::Error::new_spanned(
            &item.ident,
            "cannot synthesise an `id` member for tuple or unit structs; \
             declare a named `id` field instead",
        ));
    };
    let field = syn::Field::parse_named.parse2(quote! { #skip #vis id: #ty })?;
    fields.named.push(field);
    Ok(())
}

/// Detects a `StructuralEq`/`StructuralHash` derive on the same item so the
/// injected field can opt out of their member lists.
fn derives_structural(attrs: &[syn::Attribute]) -> bool {
    let mut found = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        // A malformed derive list is the compiler's diagnostic to raise.
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.segments.last().is_some_and(|seg| {
                matches!(
                    seg.ident.to_string().as_str(),
                    "StructuralEq" | "StructuralHash"
                )
            }) {
                found = true;
            }
            Ok(())
        });
    }
    found
}
